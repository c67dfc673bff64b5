//! Configuration and payload models

pub mod config;
pub mod models;
