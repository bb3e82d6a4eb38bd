//! # API Layer
//!
//! Inbound interfaces. Only the REST surface for the analytics endpoints
//! lives here; the marketplace CRUD resources are served elsewhere.

pub mod rest;
