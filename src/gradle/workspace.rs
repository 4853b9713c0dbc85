//! Bridge plugin workspace build files

use crate::config::constants::{GENERATED_HEADER, WORKSPACE_BUILD_FILE, WORKSPACE_VARIABLES_FILE};
use crate::debug_println;
use crate::error::{PlugwireError, Result};
use crate::gradle::collect_framework_lines;
use crate::gradle::splice::{replace_region, DEPENDENCIES_REGION, EXTENSIONS_REGION};
use crate::plugin::{Platform, PluginDescriptor};
use crate::utils::fs::write_file;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Splice bridge dependency and script lines into `<workspace>/build.gradle`.
///
/// Script paths are relative to the workspace itself. The file must already exist
/// with both marker regions.
pub fn splice_workspace_build(
    workspace_dir: &Path,
    bridge_plugins: &[&PluginDescriptor],
    platform: Platform,
    override_text: &str,
) -> Result<PathBuf> {
    let build_path = workspace_dir.join(WORKSPACE_BUILD_FILE);
    let display = build_path.display().to_string();

    let template = fs::read_to_string(&build_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PlugwireError::template_missing(display.clone()),
        _ => PlugwireError::Io(e),
    })?;

    let lines = collect_framework_lines(bridge_plugins, platform, workspace_dir);
    let dependencies = lines.resolved_dependencies(override_text);

    let mut extensions = vec![format!("apply from: \"{WORKSPACE_VARIABLES_FILE}\"")];
    extensions.extend(lines.applies.iter().cloned());

    let spliced = replace_region(&template, DEPENDENCIES_REGION, &dependencies)
        .and_then(|text| replace_region(&text, EXTENSIONS_REGION, &extensions.join("\n")))
        .map_err(|e| PlugwireError::malformed_template(display.clone(), e.marker()))?;

    write_file(&build_path, &spliced)?;
    debug_println!(
        "Spliced {} dependencies and {} scripts into {}",
        lines.dependencies.len(),
        lines.applies.len(),
        display
    );

    Ok(build_path)
}

/// Workspace variables file: minimum SDK and the post-build extension list
pub fn render_workspace_variables(min_sdk_version: u32) -> String {
    format!(
        "{GENERATED_HEADER}\n\
         ext {{\n  \
         cdvMinSdkVersion = project.hasProperty('minSdkVersion') ? rootProject.ext.minSdkVersion : {min_sdk_version}\n  \
         // Plugin gradle extensions can append to this to have code run at the end.\n  \
         cdvPluginPostBuildExtras = []\n\
         }}"
    )
}

pub fn write_workspace_variables(workspace_dir: &Path, min_sdk_version: u32) -> Result<PathBuf> {
    let path = workspace_dir.join(WORKSPACE_VARIABLES_FILE);
    write_file(&path, &render_workspace_variables(min_sdk_version))?;
    Ok(path)
}
