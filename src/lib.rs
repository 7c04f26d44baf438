pub mod common;
pub mod config;
pub mod router;
pub mod service;
pub mod store;
pub mod translation;
