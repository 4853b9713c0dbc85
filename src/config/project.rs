//! Project configuration loaded from `plugwire.toml`

use crate::config::constants::*;
use crate::debug_println;
use crate::error::{PlugwireError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Application root; set from the CLI path, never read from the file
    #[serde(skip)]
    pub root_dir: PathBuf,
    pub android: AndroidSettings,
    pub plugins: PluginSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidSettings {
    /// Android project directory, relative to the app root
    pub path: String,
    pub min_sdk_version: u32,
    pub java_version: String,
    /// Bridge plugin workspace folder inside the Android project
    pub plugins_folder_name: String,
    /// Pristine workspace template; the bundled one is used when unset
    pub plugins_template_dir: Option<PathBuf>,
    pub runtime_package: String,
    pub core_package: String,
    /// Bridge engine version that `cordova-android` engine requirements are checked against
    pub bridge_compat_version: String,
    pub max_install_passes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Resolved plugin set written by discovery, relative to the app root
    pub manifest: String,
}

impl Default for AndroidSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_ANDROID_DIR.to_string(),
            min_sdk_version: DEFAULT_MIN_SDK_VERSION,
            java_version: DEFAULT_JAVA_VERSION.to_string(),
            plugins_folder_name: DEFAULT_PLUGINS_FOLDER.to_string(),
            plugins_template_dir: None,
            runtime_package: DEFAULT_RUNTIME_PACKAGE.to_string(),
            core_package: DEFAULT_CORE_PACKAGE.to_string(),
            bridge_compat_version: DEFAULT_BRIDGE_COMPAT_VERSION.to_string(),
            max_install_passes: DEFAULT_MAX_INSTALL_PASSES,
        }
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_PLUGINS_MANIFEST.to_string(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            android: AndroidSettings::default(),
            plugins: PluginSettings::default(),
        }
    }
}

impl ProjectConfig {
    /// Default configuration rooted at `root_dir`
    pub fn for_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Path of the configuration file for a project root
    pub fn config_path(root_dir: &Path) -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        root_dir.join(CONFIG_FILE)
    }

    /// Load `plugwire.toml`, falling back to defaults when it does not exist
    pub fn load(root_dir: &Path) -> Result<Self> {
        let config_path = Self::config_path(root_dir);

        if !config_path.exists() {
            debug_println!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Self::for_root(root_dir).validate();
        }

        if config_path.is_dir() {
            return Err(PlugwireError::config(
                config_path.display().to_string(),
                "path is a directory, not a file",
            ));
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config = Self::from_toml(&content)
            .map_err(|e| PlugwireError::config(config_path.display().to_string(), e))?;
        config.root_dir = root_dir.to_path_buf();

        debug_println!("Loaded config from {}", config_path.display());
        config.validate()
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("failed to parse TOML: {e}"))
    }

    fn validate(self) -> Result<Self> {
        let path = Self::config_path(&self.root_dir).display().to_string();

        let folder = Path::new(&self.android.plugins_folder_name);
        if self.android.plugins_folder_name.trim().is_empty()
            || !matches!(
                folder.components().collect::<Vec<_>>().as_slice(),
                [Component::Normal(_)]
            )
        {
            return Err(PlugwireError::config(
                path,
                format!(
                    "android.plugins_folder_name '{}' must be a single directory name",
                    self.android.plugins_folder_name
                ),
            ));
        }

        if self.android.max_install_passes == 0 {
            return Err(PlugwireError::config(
                path,
                "android.max_install_passes must be at least 1",
            ));
        }

        if semver::Version::parse(&self.android.bridge_compat_version).is_err() {
            return Err(PlugwireError::config(
                path,
                format!(
                    "android.bridge_compat_version '{}' is not a valid version",
                    self.android.bridge_compat_version
                ),
            ));
        }

        Ok(self)
    }

    pub fn bridge_compat_version(&self) -> semver::Version {
        semver::Version::parse(&self.android.bridge_compat_version)
            .unwrap_or_else(|_| semver::Version::new(0, 0, 0))
    }

    /// `<root>/android`
    pub fn android_dir(&self) -> PathBuf {
        self.root_dir.join(&self.android.path)
    }

    /// `<root>/android/app`
    pub fn app_dir(&self) -> PathBuf {
        self.android_dir().join("app")
    }

    /// Bridge plugin workspace, fully owned and regenerated on every run
    pub fn plugins_workspace_dir(&self) -> PathBuf {
        self.android_dir().join(&self.android.plugins_folder_name)
    }

    /// Host-level Gradle variables that suppress preference defaults
    pub fn override_variables_file(&self) -> PathBuf {
        self.android_dir().join(OVERRIDE_VARIABLES_FILE)
    }

    pub fn plugins_manifest_path(&self) -> PathBuf {
        self.root_dir.join(&self.plugins.manifest)
    }
}
