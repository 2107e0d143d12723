pub mod common;
pub mod health;
pub mod prompt;
pub mod suggestion;
