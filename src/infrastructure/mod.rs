//! # Infrastructure Layer
//!
//! Adapters for external systems. Currently this is the persistence
//! facade; the analytics engine itself performs no other I/O.

pub mod persistence;
