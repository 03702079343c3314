pub mod content;
pub mod token;
pub mod user;
