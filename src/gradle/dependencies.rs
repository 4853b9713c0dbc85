//! App-level dependency declaration file (`app/capacitor.build.gradle`)

use crate::config::constants::{GENERATED_HEADER, WORKSPACE_VARIABLES_FILE};
use crate::gradle::gradle_project_name;
use crate::plugin::PluginDescriptor;

pub struct AppBuildInputs<'a> {
    pub native_plugins: &'a [&'a PluginDescriptor],
    /// Bridge dependency lines, placeholders already resolved
    pub bridge_dependencies: &'a str,
    pub applies: &'a [String],
    pub java_version: &'a str,
    pub plugins_folder_name: &'a str,
}

pub fn render_app_build(inputs: &AppBuildInputs<'_>) -> String {
    let project_lines = inputs
        .native_plugins
        .iter()
        .map(|p| format!("    implementation project(':{}')", gradle_project_name(&p.id)))
        .collect::<Vec<_>>()
        .join("\n");
    let apply_lines = inputs.applies.join("\n");
    let java = inputs.java_version;
    let folder = inputs.plugins_folder_name;
    let bridge = inputs.bridge_dependencies;

    format!(
        r#"{GENERATED_HEADER}

android {{
  compileOptions {{
      sourceCompatibility JavaVersion.{java}
      targetCompatibility JavaVersion.{java}
  }}
}}

apply from: "../{folder}/{WORKSPACE_VARIABLES_FILE}"
dependencies {{
{project_lines}
{bridge}
}}
{apply_lines}

if (hasProperty('postBuildExtras')) {{
  postBuildExtras()
}}
"#
    )
}
