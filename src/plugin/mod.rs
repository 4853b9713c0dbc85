//! Plugin descriptor model for Plugwire
//!
//! A descriptor is the resolved, read-only view of one installed plugin: where it lives,
//! whether it ships a first-party native integration, and the platform-scoped elements
//! declared by its legacy manifest. Descriptors are produced by the discovery step and
//! never mutated here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub mod classify;
pub mod element;

pub use classify::{classify, integration_type, Classification};
pub use element::{Element, FrameworkKind, Preference};

/// Target platform of a build tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(format!("Unknown platform '{other}'. Valid platforms: android, ios")),
        }
    }
}

/// How a plugin gets wired into a platform build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationType {
    /// First-party plugin that ships its own Gradle subproject
    NativeCore,
    /// Legacy manifest plugin translated into the bridge workspace
    BridgeCompatible,
    /// Nothing usable for the platform
    Incompatible,
}

/// First-party integration marker for one platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NativeMarker {
    /// Platform subdirectory inside the plugin root (defaults to the platform name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

/// Engine requirement declared by a legacy manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConstraint {
    pub name: String,
    pub version: String,
}

/// Ordered, named element lists declared for one platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformConfig {
    elements: BTreeMap<String, Vec<Element>>,
}

impl PlatformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements with the given name, in declaration order
    pub fn elements(&self, name: &str) -> &[Element] {
        self.elements.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append an element under `name`
    pub fn push(&mut self, name: impl Into<String>, element: Element) {
        self.elements.entry(name.into()).or_default().push(element);
    }

    pub fn with(mut self, name: impl Into<String>, element: Element) -> Self {
        self.push(name, element);
        self
    }
}

/// Resolved plugin descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Package identifier, possibly scoped (e.g. "@acme/foo")
    pub id: String,
    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Installed package version
    #[serde(default)]
    pub version: String,
    /// Absolute location of the plugin package
    pub root_path: PathBuf,
    /// First-party integration markers per platform
    #[serde(default)]
    pub native: BTreeMap<Platform, NativeMarker>,
    /// Legacy manifest config per platform
    #[serde(default)]
    pub platforms: BTreeMap<Platform, PlatformConfig>,
    /// Legacy manifest engine requirements
    #[serde(default)]
    pub engines: Vec<EngineConstraint>,
    /// Whether a legacy manifest was found at all
    #[serde(default)]
    pub has_legacy_manifest: bool,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            name: None,
            version: String::new(),
            root_path: root_path.into(),
            native: BTreeMap::new(),
            platforms: BTreeMap::new(),
            engines: Vec::new(),
            has_legacy_manifest: false,
        }
    }

    /// Mark the plugin as a first-party native plugin for `platform`
    pub fn with_native(mut self, platform: Platform, src: Option<&str>) -> Self {
        self.native.insert(
            platform,
            NativeMarker {
                src: src.map(str::to_string),
            },
        );
        self
    }

    /// Attach legacy manifest config for `platform`
    pub fn with_platform(mut self, platform: Platform, config: PlatformConfig) -> Self {
        self.has_legacy_manifest = true;
        self.platforms.insert(platform, config);
        self
    }

    pub fn with_engine(mut self, name: &str, version: &str) -> Self {
        self.has_legacy_manifest = true;
        self.engines.push(EngineConstraint {
            name: name.to_string(),
            version: version.to_string(),
        });
        self
    }

    pub fn native_marker(&self, platform: Platform) -> Option<&NativeMarker> {
        self.native.get(&platform)
    }

    pub fn platform_config(&self, platform: Platform) -> Option<&PlatformConfig> {
        self.platforms.get(&platform)
    }

    /// Platform subdirectory of a native plugin, relative to its root
    pub fn native_subdir(&self, platform: Platform) -> Option<String> {
        self.native_marker(platform).map(|marker| {
            marker
                .src
                .clone()
                .unwrap_or_else(|| platform.as_str().to_string())
        })
    }

    /// Whether the plugin ships anything for `platform`: a native marker or a legacy manifest
    pub fn targets(&self, platform: Platform) -> bool {
        self.native_marker(platform).is_some()
            || self.has_legacy_manifest
            || !self.platforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("Android".parse::<Platform>().unwrap(), Platform::Android);
        assert!("windows".parse::<Platform>().is_err());
    }

    #[test]
    fn test_targets_needs_marker_or_legacy_manifest() {
        let bare = PluginDescriptor::new("left-pad", "/p/left-pad");
        assert!(!bare.targets(Platform::Android));

        let ios_only = PluginDescriptor::new("@acme/ios", "/p/ios").with_native(Platform::Ios, None);
        assert!(!ios_only.targets(Platform::Android));
        assert!(ios_only.targets(Platform::Ios));

        let mut manifest_only = PluginDescriptor::new("cordova-plugin-x", "/p/x");
        manifest_only.has_legacy_manifest = true;
        assert!(manifest_only.targets(Platform::Android));

        let bridge = PluginDescriptor::new("cordova-plugin-y", "/p/y")
            .with_platform(Platform::Android, PlatformConfig::new());
        assert!(bridge.targets(Platform::Android));
    }

    #[test]
    fn test_native_subdir_defaults_to_platform_name() {
        let plugin = PluginDescriptor::new("@acme/foo", "/p/foo").with_native(Platform::Android, None);
        assert_eq!(plugin.native_subdir(Platform::Android).as_deref(), Some("android"));
        assert_eq!(plugin.native_subdir(Platform::Ios), None);

        let custom = PluginDescriptor::new("@acme/bar", "/p/bar")
            .with_native(Platform::Android, Some("native/android"));
        assert_eq!(
            custom.native_subdir(Platform::Android).as_deref(),
            Some("native/android")
        );
    }

    #[test]
    fn test_descriptor_from_json() {
        let json = r#"{
            "id": "cordova-plugin-device",
            "version": "2.1.0",
            "rootPath": "/app/node_modules/cordova-plugin-device",
            "hasLegacyManifest": true,
            "engines": [{ "name": "cordova-android", "version": ">=9.0.0" }],
            "platforms": {
                "android": {
                    "source-file": [
                        { "src": "src/android/Device.java", "target-dir": "src/org/apache/cordova/device" }
                    ],
                    "framework": [{ "src": "androidx.core:core:1.6.0" }]
                }
            }
        }"#;

        let plugin: PluginDescriptor = serde_json::from_str(json).unwrap();
        let android = plugin.platform_config(Platform::Android).unwrap();
        assert_eq!(android.elements("source-file").len(), 1);
        assert_eq!(
            android.elements("framework")[0].get("src"),
            Some("androidx.core:core:1.6.0")
        );
        assert!(android.elements("lib-file").is_empty());
        assert!(plugin.native.is_empty());
        assert_eq!(plugin.engines[0].name, "cordova-android");
    }
}
