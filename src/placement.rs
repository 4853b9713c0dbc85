//! File placement for bridge plugins
//!
//! Maps each `<source-file>`, `<resource-file>` and `<lib-file>` declared by a bridge
//! plugin to a destination inside the workspace's `src/main` tree, then copies it.

use crate::debug_println;
use crate::error::{PlugwireError, Result};
use crate::plugin::element::{platform_elements, Element, LIB_FILE, RESOURCE_FILE, SOURCE_FILE};
use crate::plugin::{Platform, PluginDescriptor};
use crate::utils::fs::copy_file;
use crate::utils::PathResolver;
use std::path::{Path, PathBuf};

/// `target-dir` prefix that is implied by the workspace main path
const MAIN_SOURCE_PREFIX: &str = "app/src/main/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    pub plugin: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// `<workspace>/src/main`
pub fn workspace_main_dir(workspace_dir: &Path) -> PathBuf {
    workspace_dir.join("src").join("main")
}

/// Rewrite a source file `target-dir` to its location under the main path
pub fn rewrite_source_target(target_dir: &str, file_name: &str) -> String {
    let base = match PathResolver::extension(file_name) {
        Some("aidl") => "aidl/",
        _ => "java/",
    };
    target_dir
        .replacen(MAIN_SOURCE_PREFIX, "", 1)
        .replacen("src/", base, 1)
}

/// Declared attribute that must stay inside the directory it is resolved against
fn contained_attr(
    plugin: &PluginDescriptor,
    element: &Element,
    element_name: &str,
    key: &str,
) -> Result<String> {
    let value = element.require(&plugin.id, element_name, key)?;
    PathResolver::contained(value).ok_or_else(|| {
        PlugwireError::malformed_plugin(
            &plugin.id,
            format!("<{element_name}> {key} '{value}' points outside its directory"),
        )
    })
}

/// Copy operations for one bridge plugin, in declaration order.
///
/// Declared paths are rebased under the plugin root and the workspace main path, so
/// an absolute path never escapes either.
pub fn plan_copies(
    plugin: &PluginDescriptor,
    platform: Platform,
    workspace_dir: &Path,
) -> Result<Vec<CopyOperation>> {
    let main_dir = workspace_main_dir(workspace_dir);
    let libs_dir = main_dir.join("libs");
    let mut ops = Vec::new();

    let mut push = |src: &str, destination: PathBuf| {
        ops.push(CopyOperation {
            plugin: plugin.id.clone(),
            source: plugin.root_path.join(src),
            destination,
        });
    };

    for element in platform_elements(plugin, platform, SOURCE_FILE) {
        let src = contained_attr(plugin, element, SOURCE_FILE, "src")?;
        let target_dir = contained_attr(plugin, element, SOURCE_FILE, "target-dir")?;
        let file_name = PathResolver::last_segment(&src);
        let target = rewrite_source_target(&target_dir, file_name);
        push(&src, main_dir.join(target).join(file_name));
    }

    for element in platform_elements(plugin, platform, RESOURCE_FILE) {
        let src = contained_attr(plugin, element, RESOURCE_FILE, "src")?;
        let target = contained_attr(plugin, element, RESOURCE_FILE, "target")?;

        if PathResolver::extension(&src) == Some("aar") {
            push(&src, libs_dir.join(PathResolver::last_segment(&target)));
        } else if !target.is_empty() {
            push(&src, main_dir.join(&target));
        } else {
            debug_println!("Skipping {} from {}: target is '.'", src, plugin.id);
        }
    }

    for element in platform_elements(plugin, platform, LIB_FILE) {
        let src = contained_attr(plugin, element, LIB_FILE, "src")?;
        push(&src, libs_dir.join(PathResolver::last_segment(&src)));
    }

    Ok(ops)
}

/// Run copy operations; the first failure aborts with the plugin and source path
pub fn execute(ops: &[CopyOperation]) -> Result<usize> {
    for op in ops {
        debug_println!(
            "{}: {} -> {}",
            op.plugin,
            op.source.display(),
            op.destination.display()
        );
        copy_file(&op.source, &op.destination).map_err(|source| PlugwireError::PluginFile {
            plugin: op.plugin.clone(),
            path: op.source.display().to_string(),
            source,
        })?;
    }
    Ok(ops.len())
}

/// Plan and copy native files for every bridge plugin
pub fn place_plugin_files(
    plugins: &[&PluginDescriptor],
    platform: Platform,
    workspace_dir: &Path,
) -> Result<usize> {
    let mut copied = 0;
    for plugin in plugins {
        let ops = plan_copies(plugin, platform, workspace_dir)?;
        copied += execute(&ops)?;
    }
    Ok(copied)
}
