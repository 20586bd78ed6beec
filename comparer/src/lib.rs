pub mod catalog;
pub mod console;
pub mod messages;
pub mod search;
pub mod services;
