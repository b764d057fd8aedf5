//! taskwire core library
//!
//! Shared building blocks for the coordinator service and the polling agent:
//! the task domain model, the coordinator's HTTP surface, and the agent
//! runtime.

pub mod agent;
pub mod api;
pub mod config;
pub mod domain;
