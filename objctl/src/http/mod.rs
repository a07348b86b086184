//! HTTP transport and object store resources

pub mod client;
pub mod objects;
