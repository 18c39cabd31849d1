//! HTTP surface of the playlist server.

pub mod client;
pub mod error;
pub mod models;

pub use client::*;
pub use error::*;
pub use models::*;
