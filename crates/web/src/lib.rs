//! EASI marketing site server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! page rendering) so integration tests and the binary entrypoint can both
//! access them.

pub mod components;
pub mod config;
pub mod error;
pub mod handlers;
pub mod layout;
pub mod pages;
pub mod router;
pub mod routes;
pub mod state;
