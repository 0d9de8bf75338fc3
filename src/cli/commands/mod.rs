pub mod contact;
pub mod list;
pub mod server;
pub mod user;
