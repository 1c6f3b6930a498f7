//! Core types and the aggregation pipeline for vantage-dash
//!
//! This crate holds the data model shared by the vendor client, the service
//! layer and the HTTP presentation layer. It has no knowledge of transport
//! or rendering.

mod aggregate;
pub mod constants;
mod dates;
pub mod env_config;
mod error;
mod json_utils;
mod observer;
mod review;
mod secret;
mod session;
mod skill;
mod transaction;

pub use aggregate::*;
pub use dates::*;
pub use error::*;
pub use json_utils::*;
pub use observer::*;
pub use review::*;
pub use secret::*;
pub use session::*;
pub use skill::*;
pub use transaction::*;
