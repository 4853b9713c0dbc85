//! Pristine bridge plugin workspace shipped with Plugwire

use crate::config::constants::WORKSPACE_BUILD_FILE;
use crate::debug_println;
use crate::error::{PlugwireError, Result};
use crate::utils::fs::{copy_dir, remove_dir_if_exists, write_file};
use std::fs;
use std::path::Path;

pub const WORKSPACE_BUILD_GRADLE: &str =
    include_str!("../templates/capacitor-cordova-android-plugins/build.gradle");

pub const WORKSPACE_ANDROID_MANIFEST: &str =
    include_str!("../templates/capacitor-cordova-android-plugins/src/main/AndroidManifest.xml");

/// Directories the workspace build expects even when no bridge plugin fills them
const WORKSPACE_DIRS: &[&str] = &["src/main/java", "src/main/res", "src/main/libs"];

/// Clear `workspace_dir` and reseed it from `template_dir`, or from the bundled template
pub fn seed_workspace(workspace_dir: &Path, template_dir: Option<&Path>) -> Result<()> {
    remove_dir_if_exists(workspace_dir)?;

    match template_dir {
        Some(template_dir) => {
            if !template_dir.is_dir() {
                return Err(PlugwireError::template_missing(
                    template_dir.display().to_string(),
                ));
            }
            let copied = copy_dir(template_dir, workspace_dir)?;
            debug_println!(
                "Seeded workspace from {} ({} files)",
                template_dir.display(),
                copied
            );
        }
        None => {
            write_file(&workspace_dir.join(WORKSPACE_BUILD_FILE), WORKSPACE_BUILD_GRADLE)?;
            write_file(
                &workspace_dir.join("src/main/AndroidManifest.xml"),
                WORKSPACE_ANDROID_MANIFEST,
            )?;
            for dir in WORKSPACE_DIRS {
                fs::create_dir_all(workspace_dir.join(dir))?;
            }
            debug_println!("Seeded workspace from bundled template");
        }
    }

    Ok(())
}
