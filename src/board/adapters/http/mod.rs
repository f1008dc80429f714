//! HTTP adapters for the remote task service.

pub mod models;
mod service;

pub use service::HttpTaskService;
