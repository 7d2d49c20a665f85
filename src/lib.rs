//! backend-ping: a tiny HTTP backend a frontend can probe for reachability.
//!
//! Serves `GET /test` with a fixed plaintext body. Everything else is a 404.

pub mod config;
pub mod http;
pub mod logging;
pub mod routes;
