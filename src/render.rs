//! Pure projection of a student collection into table rows.

use std::fmt;

use tabled::Tabled;

use crate::types::Student;

/// Delete control for one row, carrying that row's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAction(pub i64);

impl fmt::Display for DeleteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "students delete {}", self.0)
    }
}

#[derive(Tabled, Debug, Clone, PartialEq)]
pub struct StudentRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Age")]
    pub age: String,
    #[tabled(rename = "Grade")]
    pub grade: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Delete")]
    pub delete: DeleteAction,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            age: or_null(student.age.as_ref()),
            grade: or_null(student.grade.as_ref()),
            email: or_null(student.email.as_ref()),
            delete: DeleteAction(student.id),
        }
    }
}

/// A fully rendered view: rows for display plus the records they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentTable {
    pub rows: Vec<StudentRow>,
    pub records: Vec<Student>,
}

/// One row per student, in the order given.
pub fn render(students: &[Student]) -> StudentTable {
    StudentTable {
        rows: students.iter().map(StudentRow::from).collect(),
        records: students.to_vec(),
    }
}

fn or_null<T: fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "null".to_string(), ToString::to_string)
}
