//! Shelf API library.
//!
//! A thin REST facade over a single `PostgreSQL` table of products.
//! The crate is split into the usual layers:
//!
//! - [`config`] - Environment-based configuration
//! - [`db`] - Connection pool and the product repository
//! - [`models`] - Domain types (`Product`, `ProductId`, request shapes)
//! - [`routes`] - axum router and request handlers
//! - [`error`] - `ApiError` and its JSON response encoding
//! - [`state`] - Shared application state
//!
//! The binary in `main.rs` wires these together and serves connections.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
