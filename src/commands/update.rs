use crate::config::constants::{APP_BUILD_FILE, RUNTIME_SUBDIR, SETTINGS_FILE};
use crate::config::ProjectConfig;
use crate::error::{PlugwireError, Result};
use crate::gradle::dependencies::AppBuildInputs;
use crate::gradle::workspace::{splice_workspace_build, write_workspace_variables};
use crate::gradle::{collect_framework_lines, read_override_file, render_app_build, render_settings};
use crate::placement::place_plugin_files;
use crate::plugin::classify::classify_with;
use crate::plugin::{Platform, PluginDescriptor};
use crate::template::seed_workspace;
use crate::toolchain::{NodeToolchain, Toolchain};
use crate::ui::{self, PluginListKind};
use crate::utils::fs::write_file;
use crate::utils::PathResolver;
use crate::{debug_println, warn_println};
use std::path::{Path, PathBuf};

/// Outcome of one update run
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub platform: Platform,
    pub native_core: usize,
    pub bridge_compatible: usize,
    pub incompatible: usize,
    pub copied_files: usize,
    pub written_files: Vec<PathBuf>,
    pub advisories: Vec<String>,
}

/// Handle `plugwire update`
pub fn handle_update_command(
    path: &Option<String>,
    positional_path: &Option<String>,
    platform: Platform,
) -> Result<()> {
    let project_path = PathResolver::resolve_input_path(positional_path.clone(), path.clone());
    let root = Path::new(&project_path);
    if !root.is_dir() {
        return Err(PlugwireError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Project directory not found: {project_path}"),
        )));
    }

    let config = ProjectConfig::load(&PathResolver::absolute(root))?;
    ui::print_update_info(&project_path, platform);

    let report = update_platform(&config, platform, &NodeToolchain::new())?;
    ui::print_update_summary(&report);
    Ok(())
}

/// Regenerate every plugin-derived artifact of the platform build tree
pub fn update_platform(
    config: &ProjectConfig,
    platform: Platform,
    toolchain: &dyn Toolchain,
) -> Result<UpdateReport> {
    if platform != Platform::Android {
        return Err(PlugwireError::UnsupportedPlatform {
            platform: platform.to_string(),
        });
    }

    let plugins: Vec<PluginDescriptor> = load_settled_plugins(config, platform, toolchain)?
        .into_iter()
        .filter(|plugin| {
            let targets = plugin.targets(platform);
            if !targets {
                debug_println!("{} has nothing for {}, skipping", plugin.id, platform);
            }
            targets
        })
        .collect();
    let classes = classify_with(&plugins, platform, &config.bridge_compat_version());
    debug_println!(
        "Classified {} plugins: {} native, {} bridge, {} incompatible",
        classes.total(),
        classes.native_core.len(),
        classes.bridge_compatible.len(),
        classes.incompatible.len()
    );

    ui::print_plugins(&classes.native_core, platform, PluginListKind::Native);

    let workspace_dir = config.plugins_workspace_dir();
    let template_dir = config
        .android
        .plugins_template_dir
        .as_ref()
        .map(|dir| config.root_dir.join(dir));
    seed_workspace(&workspace_dir, template_dir.as_deref())?;

    let copied_files = if classes.bridge_compatible.is_empty() {
        0
    } else {
        place_plugin_files(&classes.bridge_compatible, platform, &workspace_dir)?
    };

    toolchain.handle_bridge_scripts(&classes.bridge_compatible, config, platform)?;

    let mut written_files =
        write_gradle_files(config, platform, toolchain, &classes.native_core, &classes.bridge_compatible)?;

    let override_text = read_override_file(&config.override_variables_file())?;
    written_files.push(splice_workspace_build(
        &workspace_dir,
        &classes.bridge_compatible,
        platform,
        &override_text,
    )?);
    written_files.push(write_workspace_variables(
        &workspace_dir,
        config.android.min_sdk_version,
    )?);

    toolchain.merge_manifest_fragments(&classes.bridge_compatible, config, platform)?;

    ui::print_plugins(&classes.incompatible, platform, PluginListKind::Incompatible);

    let advisories = match toolchain.check_versions(config, platform) {
        Ok(advisories) => advisories,
        Err(e) => {
            warn_println!("Version check failed: {}", e);
            Vec::new()
        }
    };
    for advisory in &advisories {
        warn_println!("{}", advisory);
    }

    Ok(UpdateReport {
        platform,
        native_core: classes.native_core.len(),
        bridge_compatible: classes.bridge_compatible.len(),
        incompatible: classes.incompatible.len(),
        copied_files,
        written_files,
        advisories,
    })
}

/// Load plugins, reloading after each install pass that reports new dependencies
fn load_settled_plugins(
    config: &ProjectConfig,
    platform: Platform,
    toolchain: &dyn Toolchain,
) -> Result<Vec<PluginDescriptor>> {
    ui::print_status(&format!("Updating {platform} plugins"));
    let mut plugins = toolchain.load_plugins(config)?;
    let max_passes = config.android.max_install_passes;
    let mut passes = 0;

    while toolchain.install_dependencies(config, &plugins, platform)? {
        passes += 1;
        if passes > max_passes {
            return Err(PlugwireError::InstallDidNotConverge { passes: max_passes });
        }
        debug_println!("Dependencies installed, reloading plugins (pass {})", passes);
        plugins = toolchain.load_plugins(config)?;
    }

    Ok(plugins)
}

/// Write the settings inclusion file and the app dependency file
fn write_gradle_files(
    config: &ProjectConfig,
    platform: Platform,
    toolchain: &dyn Toolchain,
    native_plugins: &[&PluginDescriptor],
    bridge_plugins: &[&PluginDescriptor],
) -> Result<Vec<PathBuf>> {
    let package = &config.android.runtime_package;
    let runtime_dir = toolchain
        .resolve_runtime(config, package)
        .ok_or_else(|| PlugwireError::RuntimeNotFound {
            package: package.clone(),
            expected: format!("node_modules/{package}/{RUNTIME_SUBDIR}"),
        })?;

    let settings_dir = config.android_dir();
    let app_dir = config.app_dir();

    let settings = render_settings(&settings_dir, &runtime_dir, native_plugins, platform);

    let override_text = read_override_file(&config.override_variables_file())?;
    let lines = collect_framework_lines(bridge_plugins, platform, &app_dir);
    let bridge_dependencies = lines.resolved_dependencies(&override_text);
    let app_build = render_app_build(&AppBuildInputs {
        native_plugins,
        bridge_dependencies: &bridge_dependencies,
        applies: &lines.applies,
        java_version: &config.android.java_version,
        plugins_folder_name: &config.android.plugins_folder_name,
    });

    let settings_path = settings_dir.join(SETTINGS_FILE);
    let app_build_path = app_dir.join(APP_BUILD_FILE);
    write_file(&settings_path, &settings)?;
    write_file(&app_build_path, &app_build)?;

    Ok(vec![settings_path, app_build_path])
}
