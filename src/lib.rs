//! The Forum API - backend service for The Forum application.

pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
