// Library exports for integration tests and the app binary

pub mod api;
pub mod components;
pub mod config;
pub mod runtime;
pub mod sync;
