// Library exports for folio-server
// This lets the integration tests build and drive the router directly

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;
