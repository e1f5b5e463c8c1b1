//! HTTP API: server, routing, and request/response mapping for the sweet shop ledger.

pub mod app;
pub mod config;
