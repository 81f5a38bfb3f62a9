//! Core Meridian library (API client, session model, config, logging).

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
