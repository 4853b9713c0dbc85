//! Default toolchain for projects laid out as an npm package

use crate::config::constants::RUNTIME_SUBDIR;
use crate::config::ProjectConfig;
use crate::debug_println;
use crate::error::{PlugwireError, Result};
use crate::plugin::{Platform, PluginDescriptor};
use crate::toolchain::Toolchain;
use crate::utils::PathResolver;
use semver::Version;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy)]
pub struct NodeToolchain;

impl NodeToolchain {
    pub fn new() -> Self {
        Self
    }

    /// Find `node_modules/<package>` in the project root or any ancestor
    pub fn find_package(root_dir: &Path, package: &str) -> Option<PathBuf> {
        PathResolver::absolute(root_dir)
            .ancestors()
            .map(|dir| dir.join("node_modules").join(package))
            .find(|candidate| candidate.is_dir())
    }

    /// `version` field of an installed package's `package.json`
    pub fn package_version(root_dir: &Path, package: &str) -> Option<Version> {
        let manifest = Self::find_package(root_dir, package)?.join("package.json");
        let content = fs::read_to_string(&manifest).ok()?;
        let json: serde_json::Value = serde_json::from_str(&content).ok()?;
        let version = json.get("version")?.as_str()?;
        Version::parse(version).ok()
    }

    fn parse_plugin_set(path: &Path, content: &str) -> Result<Vec<PluginDescriptor>> {
        serde_json::from_str(content)
            .map_err(|e| PlugwireError::plugin_manifest(path.display().to_string(), e.to_string()))
    }

    /// Absolute roots, plus the nested `<platform>/<id>` layout older core plugins used
    fn normalize(config: &ProjectConfig, mut plugin: PluginDescriptor) -> PluginDescriptor {
        if plugin.root_path.is_relative() {
            plugin.root_path = config.root_dir.join(&plugin.root_path);
        }
        plugin.root_path = PathResolver::absolute(&plugin.root_path);

        for (platform, marker) in plugin.native.iter_mut() {
            let subdir = marker
                .src
                .clone()
                .unwrap_or_else(|| platform.as_str().to_string());
            if plugin.root_path.join(&subdir).join(&plugin.id).is_dir() {
                let nested = format!("{}/{}", platform.as_str(), plugin.id);
                debug_println!("{} uses nested layout {}", plugin.id, nested);
                marker.src = Some(nested);
            }
        }

        plugin
    }
}

impl Toolchain for NodeToolchain {
    fn load_plugins(&self, config: &ProjectConfig) -> Result<Vec<PluginDescriptor>> {
        let path = config.plugins_manifest_path();
        if !path.exists() {
            debug_println!("No plugin set at {}, assuming no plugins", path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let plugins = Self::parse_plugin_set(&path, &content)?;
        debug_println!("Loaded {} plugins from {}", plugins.len(), path.display());

        Ok(plugins
            .into_iter()
            .map(|plugin| Self::normalize(config, plugin))
            .collect())
    }

    fn resolve_runtime(&self, config: &ProjectConfig, package: &str) -> Option<PathBuf> {
        Self::find_package(&config.root_dir, package)
            .map(|dir| dir.join(RUNTIME_SUBDIR))
            .filter(|dir| dir.is_dir())
    }

    fn install_dependencies(
        &self,
        _config: &ProjectConfig,
        _plugins: &[PluginDescriptor],
        _platform: Platform,
    ) -> Result<bool> {
        Ok(false)
    }

    fn handle_bridge_scripts(
        &self,
        plugins: &[&PluginDescriptor],
        _config: &ProjectConfig,
        platform: Platform,
    ) -> Result<()> {
        debug_println!(
            "No JS hooks to run for {} bridge plugins on {}",
            plugins.len(),
            platform
        );
        Ok(())
    }

    fn merge_manifest_fragments(
        &self,
        plugins: &[&PluginDescriptor],
        _config: &ProjectConfig,
        platform: Platform,
    ) -> Result<()> {
        debug_println!(
            "Manifest merge skipped for {} bridge plugins on {}",
            plugins.len(),
            platform
        );
        Ok(())
    }

    fn check_versions(&self, config: &ProjectConfig, platform: Platform) -> Result<Vec<String>> {
        let core_package = &config.android.core_package;
        let platform_package = &config.android.runtime_package;

        let (Some(core), Some(native)) = (
            Self::package_version(&config.root_dir, core_package),
            Self::package_version(&config.root_dir, platform_package),
        ) else {
            debug_println!("Skipping {} version check, versions unavailable", platform);
            return Ok(Vec::new());
        };

        if core.major != native.major || core.minor != native.minor {
            return Ok(vec![format!(
                "{core_package}@{core} version doesn't match {platform_package}@{native} version.\n\
                 Consider updating to a matching version, e.g. w/ npm install {core_package}@{native}"
            )]);
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_package(root: &Path, name: &str, version: &str) -> PathBuf {
        let dir = root.join("node_modules").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("package.json"),
            format!(r#"{{ "name": "{name}", "version": "{version}" }}"#),
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_resolve_runtime_walks_up() {
        let dir = tempdir().unwrap();
        let runtime = write_package(dir.path(), "@capacitor/android", "5.0.0").join("capacitor");
        fs::create_dir_all(&runtime).unwrap();

        let app = dir.path().join("apps/mobile");
        fs::create_dir_all(&app).unwrap();
        let config = ProjectConfig::for_root(&app);

        let found = NodeToolchain.resolve_runtime(&config, "@capacitor/android").unwrap();
        assert_eq!(found, PathResolver::absolute(&runtime));
        assert!(NodeToolchain.resolve_runtime(&config, "@capacitor/ios").is_none());
    }

    #[test]
    fn test_check_versions() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::for_root(dir.path());
        assert!(NodeToolchain.check_versions(&config, Platform::Android).unwrap().is_empty());

        write_package(dir.path(), "@capacitor/core", "5.2.0");
        write_package(dir.path(), "@capacitor/android", "5.2.3");
        assert!(NodeToolchain.check_versions(&config, Platform::Android).unwrap().is_empty());

        write_package(dir.path(), "@capacitor/android", "5.4.0");
        let advisories = NodeToolchain.check_versions(&config, Platform::Android).unwrap();
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].contains("npm install @capacitor/core@5.4.0"));
    }

    #[test]
    fn test_load_plugins() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::for_root(dir.path());
        assert!(NodeToolchain.load_plugins(&config).unwrap().is_empty());

        let nested = dir.path().join("node_modules/legacy-core/android/legacy-core");
        fs::create_dir_all(&nested).unwrap();

        fs::write(
            config.plugins_manifest_path(),
            r#"[
                { "id": "@acme/foo", "rootPath": "node_modules/@acme/foo", "native": { "android": {} } },
                { "id": "legacy-core", "rootPath": "node_modules/legacy-core", "native": { "android": {} } }
            ]"#,
        )
        .unwrap();

        let plugins = NodeToolchain.load_plugins(&config).unwrap();
        assert_eq!(plugins.len(), 2);
        assert!(plugins[0].root_path.is_absolute());
        assert_eq!(plugins[0].native_subdir(Platform::Android).as_deref(), Some("android"));
        assert_eq!(
            plugins[1].native_subdir(Platform::Android).as_deref(),
            Some("android/legacy-core")
        );

        fs::write(config.plugins_manifest_path(), "{ not json").unwrap();
        assert!(matches!(
            NodeToolchain.load_plugins(&config),
            Err(PlugwireError::PluginManifest { .. })
        ));
    }
}
