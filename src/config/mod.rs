//! Configuration module for Plugwire

pub mod constants;
pub mod project;

pub use project::{AndroidSettings, PluginSettings, ProjectConfig};
