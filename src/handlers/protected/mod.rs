// handlers/protected/mod.rs - Handlers behind `jwt_auth_middleware`
//
// Every handler here receives the caller as `Extension<AuthUser>`; the router
// never dispatches to them without one.

pub mod contact;
pub mod contact_list;
pub mod membership;
