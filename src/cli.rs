use crate::plugin::Platform;
use clap::{Parser, Subcommand};

/// Plugwire - native plugin wiring for hybrid Android projects 🔌
#[derive(Parser, Debug)]
#[command(
    name = "plugwire",
    author,
    version = get_version_string(),
    about = "Wire native and Cordova plugins into an Android Gradle project",
    long_about = "Plugwire regenerates the Gradle settings, dependency and bridge workspace files of a hybrid app's Android project from its installed plugins."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug output (also enabled by PLUGWIRE_DEBUG=1)
    #[arg(long, global = true, help = "Enable debug output")]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate plugin build files for a platform
    #[command(aliases = ["sync", "u"])]
    Update {
        /// Path to the app root
        #[arg(
            short = 'p',
            long,
            value_hint = clap::ValueHint::DirPath,
            help = "App root directory"
        )]
        path: Option<String>,

        /// App root path (positional argument)
        #[arg(index = 1, value_hint = clap::ValueHint::DirPath)]
        positional_path: Option<String>,

        /// Target platform
        #[arg(long, default_value = "android", help = "Platform to update")]
        platform: Platform,
    },
}

fn get_version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn get_args() -> Args {
    if std::env::args().any(|arg| arg == "-V" || arg == "--version") {
        print_styled_version();
        std::process::exit(0);
    }

    Args::parse()
}

/// Print styled version output
fn print_styled_version() {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    println!(
        "\n\x1b[1;34m╭\x1b[0m\n\
         \x1b[1;34m│\x1b[0m  🔌 \x1b[1;36m{} v{}\x1b[0m\n\
         \x1b[1;34m│\x1b[0m  \x1b[0;90mNative plugin wiring for hybrid Android projects\x1b[0m\n\
         \x1b[1;34m╰\x1b[0m\n",
        name, version
    );
}
