//! Configuration loading and file schema

pub mod file_config;
pub mod loader;
