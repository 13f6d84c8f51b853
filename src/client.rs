#![allow(async_fn_in_trait)]

use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::error::{Result, StudentsError};
use crate::types::{Student, StudentFields};

/// The REST surface of the students collection.
///
/// Mutations only fail on transport errors. Their status and body are not
/// inspected; callers learn the outcome from the next `list`.
pub trait StudentsApi {
    async fn list(&self) -> Result<Vec<Student>>;

    async fn create(&self, fields: &StudentFields) -> Result<()>;

    async fn update(&self, id: i64, fields: &StudentFields) -> Result<()>;

    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct StudentsClient {
    http: Client,
    collection: Url,
}

impl StudentsClient {
    pub fn new(collection: Url) -> Self {
        Self {
            http: Client::new(),
            collection,
        }
    }

    /// `<collection>/<id>`, regardless of a trailing slash on the collection.
    pub fn member_url(&self, id: i64) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| StudentsError::NotACollection(self.collection.to_string()))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    /// The service root, i.e. the collection URL without its last segment.
    pub fn service_root(&self) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| StudentsError::NotACollection(self.collection.to_string()))?
            .pop_if_empty()
            .pop();
        url.set_query(None);
        Ok(url)
    }

    /// Fetch the liveness text the service serves at its root.
    pub async fn health(&self) -> Result<String> {
        let url = self.service_root()?;
        debug!(method = "GET", %url, "sending request");

        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }

    // Mutation responses are not acted on, only traced.
    fn log_ignored(method: &str, url: &Url, response: &Response) {
        debug!(
            method,
            %url,
            status = response.status().as_u16(),
            "response ignored"
        );
    }
}

impl StudentsApi for StudentsClient {
    async fn list(&self) -> Result<Vec<Student>> {
        debug!(method = "GET", url = %self.collection, "sending request");

        let response = self.http.get(self.collection.clone()).send().await?;
        let response = check_status(response).await?;
        let body = response.text().await?;

        let students: Vec<Student> = serde_json::from_str(&body)?;
        debug!(count = students.len(), "fetched students");
        Ok(students)
    }

    async fn create(&self, fields: &StudentFields) -> Result<()> {
        debug!(method = "POST", url = %self.collection, "sending request");

        let response = self
            .http
            .post(self.collection.clone())
            .header("Content-Type", "application/json")
            .json(fields)
            .send()
            .await?;

        Self::log_ignored("POST", &self.collection, &response);
        Ok(())
    }

    async fn update(&self, id: i64, fields: &StudentFields) -> Result<()> {
        let url = self.member_url(id)?;
        debug!(method = "PUT", %url, "sending request");

        let response = self
            .http
            .put(url.clone())
            .header("Content-Type", "application/json")
            .json(fields)
            .send()
            .await?;

        Self::log_ignored("PUT", &url, &response);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = self.member_url(id)?;
        debug!(method = "DELETE", %url, "sending request");

        let response = self.http.delete(url.clone()).send().await?;

        Self::log_ignored("DELETE", &url, &response);
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    Err(StudentsError::ApiError {
        status: response.status().as_u16(),
        message: response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string()),
    })
}
