//! Collaborators the update pipeline depends on but does not own
//!
//! Discovery, dependency installation, JS hooks, manifest merging and version checks
//! live behind [`Toolchain`] so the pipeline can run against the real project layout
//! or a test double.

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::plugin::{Platform, PluginDescriptor};
use std::path::PathBuf;

pub mod node;

pub use node::NodeToolchain;

pub trait Toolchain {
    /// Resolved plugin set of the project
    fn load_plugins(&self, config: &ProjectConfig) -> Result<Vec<PluginDescriptor>>;

    /// Location of the platform runtime Gradle project, if installed
    fn resolve_runtime(&self, config: &ProjectConfig, package: &str) -> Option<PathBuf>;

    /// Install plugin-declared native dependencies; `true` asks for a reload
    fn install_dependencies(
        &self,
        config: &ProjectConfig,
        plugins: &[PluginDescriptor],
        platform: Platform,
    ) -> Result<bool>;

    /// Run bridge plugins' JS-side hooks
    fn handle_bridge_scripts(
        &self,
        plugins: &[&PluginDescriptor],
        config: &ProjectConfig,
        platform: Platform,
    ) -> Result<()>;

    /// Merge bridge plugins' manifest fragments into the host app manifest
    fn merge_manifest_fragments(
        &self,
        plugins: &[&PluginDescriptor],
        config: &ProjectConfig,
        platform: Platform,
    ) -> Result<()>;

    /// Advisory version mismatches; never fatal
    fn check_versions(&self, config: &ProjectConfig, platform: Platform) -> Result<Vec<String>>;
}
