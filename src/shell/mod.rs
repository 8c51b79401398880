// Composition root for the ticket provider.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete repository implementations.
// - Wire repositories into services and services into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
