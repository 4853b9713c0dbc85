//! Partition a plugin set by how each plugin integrates with a platform

use crate::config::constants::{
    BRIDGE_ENGINE_NAME, DEFAULT_BRIDGE_COMPAT_VERSION, INCOMPATIBLE_ANDROID_PLUGINS,
};
use crate::debug_println;
use crate::plugin::{IntegrationType, Platform, PluginDescriptor};
use semver::{Version, VersionReq};

/// Disjoint, input-ordered partition of a plugin set
#[derive(Debug, Default)]
pub struct Classification<'a> {
    pub native_core: Vec<&'a PluginDescriptor>,
    pub bridge_compatible: Vec<&'a PluginDescriptor>,
    pub incompatible: Vec<&'a PluginDescriptor>,
}

impl Classification<'_> {
    /// Number of plugins across all three categories
    pub fn total(&self) -> usize {
        self.native_core.len() + self.bridge_compatible.len() + self.incompatible.len()
    }
}

/// Classify against the bundled bridge compatibility version
pub fn classify(plugins: &[PluginDescriptor], platform: Platform) -> Classification<'_> {
    let compat = Version::parse(DEFAULT_BRIDGE_COMPAT_VERSION)
        .unwrap_or_else(|_| Version::new(0, 0, 0));
    classify_with(plugins, platform, &compat)
}

pub fn classify_with<'a>(
    plugins: &'a [PluginDescriptor],
    platform: Platform,
    bridge_compat: &Version,
) -> Classification<'a> {
    let mut result = Classification::default();

    for plugin in plugins {
        match integration_type(plugin, platform, bridge_compat) {
            IntegrationType::NativeCore => result.native_core.push(plugin),
            IntegrationType::BridgeCompatible => result.bridge_compatible.push(plugin),
            IntegrationType::Incompatible => result.incompatible.push(plugin),
        }
    }

    result
}

/// Integration type of a single plugin; depends only on the descriptor and platform
pub fn integration_type(
    plugin: &PluginDescriptor,
    platform: Platform,
    bridge_compat: &Version,
) -> IntegrationType {
    if plugin.native_marker(platform).is_some() {
        return IntegrationType::NativeCore;
    }

    if plugin.platform_config(platform).is_none() {
        return IntegrationType::Incompatible;
    }

    if platform == Platform::Android && INCOMPATIBLE_ANDROID_PLUGINS.contains(&plugin.id.as_str())
    {
        debug_println!("{} is on the known-incompatible list", plugin.id);
        return IntegrationType::Incompatible;
    }

    if !engines_satisfied(plugin, bridge_compat) {
        return IntegrationType::Incompatible;
    }

    IntegrationType::BridgeCompatible
}

fn engines_satisfied(plugin: &PluginDescriptor, bridge_compat: &Version) -> bool {
    plugin
        .engines
        .iter()
        .filter(|engine| engine.name == BRIDGE_ENGINE_NAME)
        .all(|engine| match VersionReq::parse(&engine.version) {
            Ok(req) => {
                let ok = req.matches(bridge_compat);
                if !ok {
                    debug_println!(
                        "{} requires {} {}, bridge provides {}",
                        plugin.id,
                        engine.name,
                        engine.version,
                        bridge_compat
                    );
                }
                ok
            }
            Err(e) => {
                debug_println!(
                    "Ignoring unparseable engine requirement '{}' on {}: {}",
                    engine.version,
                    plugin.id,
                    e
                );
                true
            }
        })
}
