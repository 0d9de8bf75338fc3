// handlers/mod.rs - HTTP handlers grouped by authentication tier
//
// Public (no auth) → Protected (bearer token resolved by the router middleware)

pub mod protected;
pub mod public;
pub mod system;
pub mod validate;
