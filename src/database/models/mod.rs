pub mod contact;
pub mod contact_list;
pub mod user;

pub use contact::{Contact, NewContact};
pub use contact_list::ContactList;
pub use user::User;
