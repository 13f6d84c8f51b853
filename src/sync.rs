//! Keeps a view in step with the remote students collection.
//!
//! Every mutation is sent, awaited, and followed by a full refresh. Local
//! state is never patched; the view is always a fresh projection of whatever
//! the server returned last. Two clients working on the same collection race,
//! and the last refresh to complete wins.

use tracing::debug;

use crate::client::StudentsApi;
use crate::error::Result;
use crate::render::{render, StudentTable};
use crate::types::StudentFields;

/// Sink that a refresh replaces wholesale.
pub trait View {
    fn replace(&mut self, table: StudentTable);
}

pub struct ListSyncClient<A, V> {
    api: A,
    view: V,
}

impl<A: StudentsApi, V: View> ListSyncClient<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Re-fetch the collection and replace the view with it.
    pub async fn refresh(&mut self) -> Result<()> {
        let students = self.api.list().await?;
        let table = render(&students);
        debug!(rows = table.rows.len(), "replacing view");
        self.view.replace(table);
        Ok(())
    }

    pub async fn create(&mut self, fields: &StudentFields) -> Result<()> {
        self.api.create(fields).await?;
        self.refresh().await
    }

    pub async fn update(&mut self, id: i64, fields: &StudentFields) -> Result<()> {
        self.api.update(id, fields).await?;
        self.refresh().await
    }

    pub async fn remove(&mut self, id: i64) -> Result<()> {
        self.api.delete(id).await?;
        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::StudentsError;
    use crate::types::{FieldValue, Student};

    /// In-memory stand-in for the backend, storing values the way it does.
    #[derive(Default)]
    struct FakeApi {
        students: Mutex<Vec<Student>>,
        next_id: Mutex<i64>,
        calls: Mutex<Vec<String>>,
        reject_writes: bool,
        offline: bool,
    }

    impl FakeApi {
        fn with(students: Vec<Student>) -> Self {
            let next_id = students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
            Self {
                students: Mutex::new(students),
                next_id: Mutex::new(next_id),
                ..Self::default()
            }
        }

        fn record(&self, call: String) -> Result<()> {
            self.calls.lock().unwrap().push(call);
            if self.offline {
                return Err(StudentsError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )));
            }
            Ok(())
        }

        fn stored(id: i64, fields: &StudentFields) -> Student {
            let age = match fields.age.parse::<i64>() {
                Ok(n) => FieldValue::Integer(n),
                Err(_) => FieldValue::Text(fields.age.clone()),
            };
            Student {
                id,
                name: fields.name.clone(),
                age: Some(age),
                grade: Some(FieldValue::Text(fields.grade.clone())),
                email: Some(fields.email.clone()),
            }
        }
    }

    impl StudentsApi for FakeApi {
        async fn list(&self) -> Result<Vec<Student>> {
            self.record("GET".to_string())?;
            Ok(self.students.lock().unwrap().clone())
        }

        async fn create(&self, fields: &StudentFields) -> Result<()> {
            self.record("POST".to_string())?;
            if self.reject_writes {
                return Ok(());
            }
            let mut next_id = self.next_id.lock().unwrap();
            self.students
                .lock()
                .unwrap()
                .push(Self::stored(*next_id, fields));
            *next_id += 1;
            Ok(())
        }

        async fn update(&self, id: i64, fields: &StudentFields) -> Result<()> {
            self.record(format!("PUT {id}"))?;
            if self.reject_writes {
                return Ok(());
            }
            for student in self.students.lock().unwrap().iter_mut() {
                if student.id == id {
                    *student = Self::stored(id, fields);
                }
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.record(format!("DELETE {id}"))?;
            if self.reject_writes {
                return Ok(());
            }
            self.students.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingView {
        tables: Vec<StudentTable>,
    }

    impl RecordingView {
        fn last(&self) -> &StudentTable {
            self.tables.last().unwrap()
        }
    }

    impl View for RecordingView {
        fn replace(&mut self, table: StudentTable) {
            self.tables.push(table);
        }
    }

    fn ana() -> Student {
        Student {
            id: 1,
            name: "Ana".to_string(),
            age: Some(FieldValue::Integer(20)),
            grade: Some(FieldValue::from("A")),
            email: Some("a@x.com".to_string()),
        }
    }

    fn bo_fields() -> StudentFields {
        StudentFields {
            name: "Bo".to_string(),
            age: "21".to_string(),
            grade: "B".to_string(),
            email: "b@x.com".to_string(),
        }
    }

    fn sync_with(api: FakeApi) -> ListSyncClient<FakeApi, RecordingView> {
        ListSyncClient::new(api, RecordingView::default())
    }

    fn calls(sync: &ListSyncClient<FakeApi, RecordingView>) -> Vec<String> {
        sync.api.calls.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn test_refresh_renders_collection() {
        let mut sync = sync_with(FakeApi::with(vec![ana()]));
        sync.refresh().await.unwrap();

        let table = sync.view.last();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].id, 1);
        assert_eq!(table.rows[0].name, "Ana");
        assert_eq!(table.rows[0].delete.0, 1);
    }

    #[tokio::test]
    async fn test_refresh_replaces_whole_view() {
        let mut sync = sync_with(FakeApi::with(vec![ana()]));
        sync.refresh().await.unwrap();
        sync.api.students.lock().unwrap().clear();
        sync.refresh().await.unwrap();

        assert_eq!(sync.view.tables.len(), 2);
        assert!(sync.view.last().rows.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_refresh_appends_record() {
        let mut sync = sync_with(FakeApi::with(vec![ana()]));
        sync.create(&bo_fields()).await.unwrap();

        assert_eq!(calls(&sync), vec!["POST", "GET"]);

        let table = sync.view.last();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].name, "Ana");

        let row = &table.rows[1];
        assert_ne!(row.id, 1);
        assert_eq!(row.name, "Bo");
        assert_eq!(row.age, "21");
        assert_eq!(row.grade, "B");
        assert_eq!(row.email, "b@x.com");
    }

    #[tokio::test]
    async fn test_rejected_create_still_refreshes() {
        let api = FakeApi {
            reject_writes: true,
            ..FakeApi::with(vec![ana()])
        };
        let mut sync = sync_with(api);
        sync.create(&bo_fields()).await.unwrap();

        assert_eq!(calls(&sync), vec!["POST", "GET"]);
        assert_eq!(sync.view.last().rows.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_then_refresh_drops_record() {
        let mut sync = sync_with(FakeApi::with(vec![ana()]));
        sync.create(&bo_fields()).await.unwrap();
        sync.remove(1).await.unwrap();

        let table = sync.view.last();
        assert_eq!(table.rows.len(), 1);
        assert!(table.rows.iter().all(|r| r.id != 1));
    }

    #[tokio::test]
    async fn test_remove_nonexistent_keeps_count() {
        let mut sync = sync_with(FakeApi::with(vec![ana()]));
        sync.refresh().await.unwrap();
        sync.remove(99).await.unwrap();

        assert_eq!(calls(&sync), vec!["GET", "DELETE 99", "GET"]);
        assert_eq!(sync.view.last().rows.len(), 1);
    }

    #[tokio::test]
    async fn test_update_then_refresh_shows_new_values() {
        let mut sync = sync_with(FakeApi::with(vec![ana()]));
        sync.create(&bo_fields()).await.unwrap();

        let fields = StudentFields {
            name: "Ana Maria".to_string(),
            age: "22".to_string(),
            grade: "A+".to_string(),
            email: "am@x.com".to_string(),
        };
        sync.update(1, &fields).await.unwrap();

        let table = sync.view.last();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].id, 1);
        assert_eq!(table.rows[0].name, "Ana Maria");
        assert_eq!(table.rows[0].age, "22");
        assert_eq!(table.rows[1].name, "Bo");
    }

    #[tokio::test]
    async fn test_transport_failure_skips_refresh() {
        let api = FakeApi {
            offline: true,
            ..FakeApi::with(vec![ana()])
        };
        let mut sync = sync_with(api);

        let err = sync.remove(1).await.unwrap_err();
        assert!(matches!(err, StudentsError::Io(_)));
        assert_eq!(calls(&sync), vec!["DELETE 1"]);
        assert!(sync.view.tables.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_failure_leaves_view_untouched() {
        let mut sync = sync_with(FakeApi::with(vec![ana()]));
        sync.refresh().await.unwrap();
        sync.api.offline = true;

        assert!(sync.refresh().await.is_err());
        assert_eq!(sync.view.tables.len(), 1);
        assert_eq!(sync.view.last().rows.len(), 1);
    }
}
