// handlers/public/mod.rs - Account endpoints reachable without a token

pub mod register;
pub mod token;

pub use register::register_post;
pub use token::token_post;
