use crate::commands::UpdateReport;
use crate::plugin::{Platform, PluginDescriptor};

/// Which listing `print_plugins` renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginListKind {
    Native,
    Incompatible,
}

/// Print a status message
pub fn print_status(message: &str) {
    println!("\n⏳ {}", message);
}

/// Print the update banner
pub fn print_update_info(project_path: &str, platform: Platform) {
    println!("\n\x1b[1;34m╭\x1b[0m");
    println!("  🔌 \x1b[1;36mPlugwire Update\x1b[0m\n");
    println!(
        "  📂 \x1b[1;34mProject Path:\x1b[0m \x1b[1;33m{}\x1b[0m",
        project_path
    );
    println!(
        "  📱 \x1b[1;34mPlatform:\x1b[0m \x1b[1;32m{}\x1b[0m",
        platform
    );
    println!("\x1b[1;34m╰\x1b[0m");
}

/// List plugins of one category; nothing is printed for an empty list
pub fn print_plugins(plugins: &[&PluginDescriptor], platform: Platform, kind: PluginListKind) {
    if plugins.is_empty() {
        return;
    }

    let plural = if plugins.len() == 1 { "" } else { "s" };
    match kind {
        PluginListKind::Native => println!(
            "\n  🔌 \x1b[1;36mFound {} Capacitor plugin{} for {}:\x1b[0m",
            plugins.len(),
            plural,
            platform
        ),
        PluginListKind::Incompatible => println!(
            "\n  ⚠️  \x1b[1;33mFound {} incompatible Cordova plugin{} for {}, skipped install:\x1b[0m",
            plugins.len(),
            plural,
            platform
        ),
    }

    for plugin in plugins {
        println!("     \x1b[1;37m• {}\x1b[0m", plugin_label(plugin));
    }
}

/// `id@version`, or the bare id when the version is unknown
fn plugin_label(plugin: &PluginDescriptor) -> String {
    if plugin.version.is_empty() {
        plugin.id.clone()
    } else {
        format!("{}@{}", plugin.id, plugin.version)
    }
}

/// Print the outcome of an update run
pub fn print_update_summary(report: &UpdateReport) {
    println!("\n\x1b[1;34m╭\x1b[0m");
    println!("  ✅ \x1b[1;36m{} Plugins Updated\x1b[0m\n", capitalize(report.platform.as_str()));
    println!(
        "  📦 \x1b[1;34mNative:\x1b[0m \x1b[1;32m{}\x1b[0m   \x1b[1;34mBridge:\x1b[0m \x1b[1;32m{}\x1b[0m   \x1b[1;34mIncompatible:\x1b[0m \x1b[1;33m{}\x1b[0m",
        report.native_core, report.bridge_compatible, report.incompatible
    );
    println!(
        "  📄 \x1b[1;34mBridge Files Copied:\x1b[0m \x1b[1;32m{}\x1b[0m",
        report.copied_files
    );
    if !report.written_files.is_empty() {
        println!("  📝 \x1b[1;34mGenerated:\x1b[0m");
        for file in &report.written_files {
            println!("     \x1b[1;37m• {}\x1b[0m", file.display());
        }
    }
    println!("\x1b[1;34m╰\x1b[0m");
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
