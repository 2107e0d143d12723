pub mod health;
pub mod prompt;
pub mod server;
pub mod suggestion;
