//! Plugwire wires installed hybrid-app plugins into a platform's native build tree.
//!
//! The pipeline entry point is [`commands::update_platform`]; everything it talks to
//! outside the build tree goes through [`toolchain::Toolchain`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod debug;
pub mod error;
pub mod gradle;
pub mod placement;
pub mod plugin;
pub mod template;
pub mod toolchain;
pub mod ui;
pub mod utils;

pub use error::{PlugwireError, Result};
