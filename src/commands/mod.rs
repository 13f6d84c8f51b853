pub mod health;
pub mod init;
pub mod students;
