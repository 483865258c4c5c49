//! Domain types and pure logic for the EASI marketing site.
//!
//! Nothing in this crate performs I/O. The contact relay, the completion
//! client and the HTTP layer all build on the types defined here.

pub mod chat;
pub mod contact;
pub mod error;
pub mod html;
pub mod sitemap;
