#![allow(dead_code)]

pub mod registry;

pub use registry::{FakeRegistryClient, create_test_service, timestamp};
