//! Database module
//!
//! This module handles database connections, repositories and the
//! [`DataGateway`] seam the rest of the application reads and writes through.

pub mod connection;
pub mod gateway;
pub mod repositories;

pub use connection::*;
pub use gateway::{DataGateway, GatewayError, GatewayResult, PgGateway};
