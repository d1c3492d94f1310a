//! Data models for the legacy controller API.

pub mod api_response;
pub mod auth;
pub mod record;
