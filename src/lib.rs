//! Greetly - a minimal two-service greeting demo
//!
//! Two processes share this library:
//! - the backend, which answers a fixed greeting on one JSON route
//! - the frontend, which serves a one-button page and proxies that
//!   button's request to the backend
//!
//! Configuration, logging, and error types are shared between the two.

pub mod backend;
pub mod config;
pub mod error;
pub mod frontend;

pub use error::{Error, Result};
