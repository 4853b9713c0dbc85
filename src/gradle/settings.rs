//! Top-level project inclusion file (`capacitor.settings.gradle`)

use crate::config::constants::{GENERATED_HEADER, RUNTIME_PROJECT_NAME};
use crate::gradle::gradle_project_name;
use crate::plugin::{Platform, PluginDescriptor};
use crate::utils::PathResolver;
use std::path::Path;

/// Render the inclusion file: the runtime project, then one block per native plugin.
///
/// All project directories are relative to `settings_dir`.
pub fn render_settings(
    settings_dir: &Path,
    runtime_dir: &Path,
    native_plugins: &[&PluginDescriptor],
    platform: Platform,
) -> String {
    let runtime_path = PathResolver::relative_unix(settings_dir, runtime_dir);

    let mut out = format!(
        "{GENERATED_HEADER}\n\
         include ':{RUNTIME_PROJECT_NAME}'\n\
         project(':{RUNTIME_PROJECT_NAME}').projectDir = new File('{runtime_path}')\n"
    );

    for plugin in native_plugins {
        let name = gradle_project_name(&plugin.id);
        let plugin_path = PathResolver::relative_unix(settings_dir, &plugin.root_path);
        let subdir = plugin
            .native_subdir(platform)
            .unwrap_or_else(|| platform.as_str().to_string());

        out.push_str(&format!(
            "\ninclude ':{name}'\n\
             project(':{name}').projectDir = new File('{plugin_path}/{subdir}')\n"
        ));
    }

    out
}
