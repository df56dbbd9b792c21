//! The client-side core of the ledger playground.
//!
//! The playground lists what a user created on the ledger through cursor paginated queries
//! ([`cursor`], [`pager`]) and drives every remote capability through stores ([`store`]) that reshape
//! failures into something the UI can render.

pub mod config;
pub mod connector;
pub mod cursor;
pub mod entity;
pub mod error;
pub mod explorer;
pub mod host;
pub mod pager;
pub mod schema;
pub mod store;
