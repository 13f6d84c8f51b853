use serde::Serialize;

/// The four user-supplied fields of a student, sent as-is.
///
/// Values stay strings: no coercion or validation happens client-side, the
/// server decides what to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentFields {
    pub name: String,
    pub age: String,
    pub grade: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_exactly_four_string_fields() {
        let fields = StudentFields {
            name: "Bo".to_string(),
            age: "21".to_string(),
            grade: "B".to_string(),
            email: "b@x.com".to_string(),
        };
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Bo",
                "age": "21",
                "grade": "B",
                "email": "b@x.com"
            })
        );
    }
}
