//! Typed views over platform-scoped manifest elements

use crate::error::{PlugwireError, Result};
use crate::plugin::{Platform, PluginDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SOURCE_FILE: &str = "source-file";
pub const RESOURCE_FILE: &str = "resource-file";
pub const LIB_FILE: &str = "lib-file";
pub const FRAMEWORK: &str = "framework";
pub const PREFERENCE: &str = "preference";

/// One manifest element: an attribute bag read lazily at the point of use
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element {
    attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Attribute value parsed as a manifest boolean
    pub fn is_true(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Attribute that must be present for `plugin` to be usable
    pub fn require(&self, plugin: &str, element: &str, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            PlugwireError::malformed_plugin(
                plugin,
                format!("<{element}> is missing the '{key}' attribute"),
            )
        })
    }
}

/// What a `<framework>` element asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkKind {
    /// Gradle script shipped inside the plugin, applied with `apply from:`
    ScriptInclude { src: String },
    /// Library coordinate declared verbatim as an implementation dependency
    Library { coordinate: String },
    /// Any other attribute combination
    Ignored,
}

impl FrameworkKind {
    pub fn from_element(element: &Element) -> Self {
        let src = match element.get("src") {
            Some(src) => src.to_string(),
            None => return FrameworkKind::Ignored,
        };

        if element.is_true("custom") && element.get("type") == Some("gradleReference") {
            FrameworkKind::ScriptInclude { src }
        } else if !element.has("type") && !element.has("custom") {
            FrameworkKind::Library { coordinate: src }
        } else {
            FrameworkKind::Ignored
        }
    }
}

/// A substitution variable with its fallback value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub name: String,
    pub default: String,
}

impl Preference {
    pub fn from_element(element: &Element) -> Option<Self> {
        let name = element.get("name")?;
        Some(Self {
            name: name.to_string(),
            default: element.get("default").unwrap_or_default().to_string(),
        })
    }
}

/// Elements named `element_name` under the plugin's `platform` config; empty when absent
pub fn platform_elements<'a>(
    plugin: &'a PluginDescriptor,
    platform: Platform,
    element_name: &str,
) -> &'a [Element] {
    plugin
        .platform_config(platform)
        .map(|config| config.elements(element_name))
        .unwrap_or(&[])
}

pub fn frameworks(plugin: &PluginDescriptor, platform: Platform) -> Vec<FrameworkKind> {
    platform_elements(plugin, platform, FRAMEWORK)
        .iter()
        .map(FrameworkKind::from_element)
        .collect()
}

/// Preferences in declaration order; elements without a name are skipped
pub fn preferences(plugin: &PluginDescriptor, platform: Platform) -> Vec<Preference> {
    platform_elements(plugin, platform, PREFERENCE)
        .iter()
        .filter_map(Preference::from_element)
        .collect()
}
