use plugwire::cli::{get_args, Commands};
use plugwire::commands;
use plugwire::error_println;
use plugwire::debug::{enable_debug, enable_debug_from_env};
use std::error::Error;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("\n🔥 Plugwire encountered an unexpected error:");
        eprintln!("{panic_info}");
        eprintln!("\n💡 This is likely a bug. Please report it with your command,");
        eprintln!("   plugwire.toml and this error message.");
    }));

    let args = get_args();

    enable_debug_from_env();
    if args.debug {
        enable_debug();
    }

    let result = match &args.command {
        Commands::Update {
            path,
            positional_path,
            platform,
        } => commands::handle_update_command(path, positional_path, *platform),
    };

    if let Err(e) = result {
        let mut error_source: &dyn Error = &e;
        error_println!("{error_source}");

        while let Some(source) = error_source.source() {
            eprintln!("   Caused by: {source}");
            error_source = source;
        }

        for suggestion in e.suggestions() {
            eprintln!("💡 {suggestion}");
        }

        std::process::exit(1);
    }
}
