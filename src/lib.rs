// lib.rs - Library exports for integration tests

pub mod artifact;
pub mod bootstrap;
pub mod chain;
pub mod config;
pub mod deploy;
pub mod error;
