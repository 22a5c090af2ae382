//! # banchan-api
//!
//! Tag search request handling for banchan.
//!
//! A request flows through [`validate`] → [`banchan_core::build_query`] →
//! the injected [`banchan_core::TagStore`] → [`response`]. [`handler`] ties
//! the steps together; [`http`] serves the same handler over axum.

pub mod config;
pub mod gateway;
pub mod handler;
pub mod http;
pub mod response;
pub mod telemetry;
pub mod validate;

pub use gateway::{GatewayRequest, GatewayResponse};
pub use handler::search_tags;
