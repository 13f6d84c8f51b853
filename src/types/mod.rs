mod fields;
mod student;
mod value;

pub use fields::StudentFields;
pub use student::Student;
pub use value::FieldValue;
