use thiserror::Error;

/// The main error type for Plugwire operations
#[derive(Error, Debug)]
pub enum PlugwireError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform runtime package could not be located
    #[error("Unable to find {expected}. Are you sure {package} is installed?")]
    RuntimeNotFound { package: String, expected: String },

    /// Bridge workspace build file is absent
    #[error("Workspace template file not found: {path}")]
    TemplateMissing { path: String },

    /// A splice marker is missing or out of order
    #[error("Malformed template {path}: marker '{marker}' not found where expected")]
    MalformedTemplate { path: String, marker: String },

    /// A plugin-declared file could not be copied
    #[error("Failed to copy {path} for plugin {plugin}")]
    PluginFile {
        plugin: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Plugin declares something the planner cannot act on
    #[error("Malformed plugin {plugin}: {reason}")]
    MalformedPlugin { plugin: String, reason: String },

    /// Project configuration errors
    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: String, reason: String },

    /// Resolved plugin set or package manifest could not be parsed
    #[error("Invalid plugin manifest {path}: {reason}")]
    PluginManifest { path: String, reason: String },

    /// Dependency installation kept asking for another pass
    #[error("Plugin dependency installation did not settle after {passes} passes")]
    InstallDidNotConverge { passes: usize },

    /// Platform has no generator
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },
}

/// Result type alias for Plugwire operations
pub type Result<T> = std::result::Result<T, PlugwireError>;

impl PlugwireError {
    pub fn template_missing(path: impl Into<String>) -> Self {
        Self::TemplateMissing { path: path.into() }
    }

    pub fn malformed_template(path: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            path: path.into(),
            marker: marker.into(),
        }
    }

    pub fn malformed_plugin(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPlugin {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }

    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn plugin_manifest(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PluginManifest {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Errors in the project setup rather than in a plugin.
    ///
    /// They can surface after some build files were already rewritten, so the tree
    /// is only consistent again after a successful rerun.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PlugwireError::RuntimeNotFound { .. } | PlugwireError::TemplateMissing { .. }
        )
    }

    /// Get suggested actions for the error
    pub fn suggestions(&self) -> Vec<String> {
        let mut suggestions = match self {
            PlugwireError::RuntimeNotFound { package, .. } => vec![
                format!("Install it with: npm install {package}"),
                "This package is required to build the Android project".to_string(),
            ],
            PlugwireError::TemplateMissing { .. } | PlugwireError::MalformedTemplate { .. } => {
                vec![
                    "Check android.plugins_template_dir in plugwire.toml".to_string(),
                    "Remove it to fall back to the bundled template".to_string(),
                ]
            }
            PlugwireError::PluginFile { plugin, .. } => vec![format!(
                "Reinstall {plugin}, its package looks incomplete"
            )],
            PlugwireError::InstallDidNotConverge { .. } => {
                vec!["Raise android.max_install_passes or install the plugins manually".to_string()]
            }
            _ => vec![],
        };

        if self.is_fatal() {
            suggestions.push(RERUN_HINT.to_string());
        }
        suggestions
    }
}

const RERUN_HINT: &str =
    "Generated files may be partly updated; run plugwire update again once this is fixed";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_not_found_is_fatal() {
        let err = PlugwireError::RuntimeNotFound {
            package: "@capacitor/android".to_string(),
            expected: "node_modules/@capacitor/android/capacitor".to_string(),
        };
        assert!(err.is_fatal());
        assert!(err.to_string().contains("@capacitor/android is installed?"));
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn test_plugin_file_keeps_source() {
        use std::error::Error;

        let err = PlugwireError::PluginFile {
            plugin: "cordova-plugin-foo".to_string(),
            path: "src/android/Foo.java".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!err.is_fatal());
        assert!(!err.suggestions().iter().any(|s| s == RERUN_HINT));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("cordova-plugin-foo"));
    }

    #[test]
    fn test_fatal_errors_ask_for_rerun() {
        let err = PlugwireError::template_missing("android/capacitor-cordova-android-plugins/build.gradle");
        assert!(err.is_fatal());
        assert_eq!(err.suggestions().last().map(String::as_str), Some(RERUN_HINT));
    }
}
