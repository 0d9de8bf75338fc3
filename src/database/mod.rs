pub mod manager;
pub mod models;
pub mod repository;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::PgStore;
pub use store::AddressBookStore;
