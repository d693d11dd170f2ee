//! Access to the remote components registry
//!
//! - [`client`]: the synchronous `RegistryClient` trait consumed by the facade
//! - [`dto`]: wire representations returned by the registry
//! - [`http`]: `reqwest`-based client implementation
//! - [`mapper`]: DTO to domain model translation

pub mod client;
pub mod dto;
pub mod http;
pub mod mapper;

pub use client::RegistryClient;
pub use http::HttpRegistryClient;
