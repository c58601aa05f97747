//! Server-only code: config parsing and the client for the remote book service

pub mod api;
pub mod config;
