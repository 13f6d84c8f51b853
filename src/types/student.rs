use serde::{Deserialize, Serialize};

use super::FieldValue;

/// A student record as returned by the collection endpoint.
///
/// `id` is assigned by the server and never produced or changed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: Option<FieldValue>,
    pub grade: Option<FieldValue>,
    pub email: Option<String>,
}
