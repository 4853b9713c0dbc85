//! Gradle build-file generation
//!
//! Every file produced here is regenerated in full on each run, except the bridge
//! workspace `build.gradle`, whose two marker regions are spliced in place.

use crate::plugin::element::{frameworks, preferences};
use crate::plugin::{FrameworkKind, Platform, PluginDescriptor, Preference};
use crate::utils::PathResolver;
use std::path::Path;

pub mod dependencies;
pub mod settings;
pub mod splice;
pub mod variables;
pub mod workspace;

pub use dependencies::render_app_build;
pub use settings::render_settings;
pub use variables::{read_override_file, resolve_variables};

/// Gradle project name for a plugin id: scope marker and path separators removed
pub fn gradle_project_name(id: &str) -> String {
    id.replace('@', "").replace('/', "-")
}

/// Lines contributed by bridge plugins' `<framework>` and `<preference>` elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkLines {
    /// `    implementation "<coordinate>"`, unresolved
    pub dependencies: Vec<String>,
    /// `apply from: "<plugin path>/<script>"`
    pub applies: Vec<String>,
    pub preferences: Vec<Preference>,
}

impl FrameworkLines {
    /// Dependency block text with preference placeholders resolved against `override_text`
    pub fn resolved_dependencies(&self, override_text: &str) -> String {
        resolve_variables(override_text, &self.preferences, &self.dependencies.join("\n"))
    }
}

/// Fold bridge plugins into dependency, apply and preference sequences.
///
/// Script paths are written relative to `base_dir`, which differs between the app
/// build file and the workspace build file.
pub fn collect_framework_lines(
    plugins: &[&PluginDescriptor],
    platform: Platform,
    base_dir: &Path,
) -> FrameworkLines {
    plugins
        .iter()
        .fold(FrameworkLines::default(), |mut lines, plugin| {
            let plugin_path = PathResolver::relative_unix(base_dir, &plugin.root_path);

            for framework in frameworks(plugin, platform) {
                match framework {
                    FrameworkKind::ScriptInclude { src } => lines
                        .applies
                        .push(format!("apply from: \"{plugin_path}/{src}\"")),
                    FrameworkKind::Library { coordinate } => lines
                        .dependencies
                        .push(format!("    implementation \"{coordinate}\"")),
                    FrameworkKind::Ignored => {}
                }
            }

            lines.preferences.extend(preferences(plugin, platform));
            lines
        })
}
