// Access-code manager - CLI entry point
//
// ```console
// $ cargo build --release
// $ ./target/release/passio-access-codes validate DEMO2025
// $ ./target/release/passio-access-codes generate "Acme Corp" --days 14
// ```

use anyhow::Context;
use clap::Parser;
use passio_access_codes::clock::SystemClock;
use passio_access_codes::codes::AccessCodeManager;
use passio_access_codes::logging::LoggingConfig;
use passio_access_codes::store::JsonFileStore;
use passio_access_codes::types::{CliArgs, Command, SeedConfig};
use std::process;
use tracing::info;

fn main() {
    let args = CliArgs::parse();

    // Handle flags that don't require full initialization
    if args.print_seed {
        match SeedConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default seed configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::init_quiet()
    };
    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let seed = match &args.seed {
        Some(path) => SeedConfig::from_file(path)
            .with_context(|| format!("failed to load seed configuration from {}", path))?,
        None => SeedConfig::default(),
    };

    let store = JsonFileStore::new(&args.store);
    let mut manager = AccessCodeManager::with_seed(seed, store, SystemClock);
    info!("Manager ready (store: {})", args.store);

    let command = args.command.unwrap_or(Command::Stats);
    match command {
        Command::Validate { code } => {
            let result = manager.validate(&code);
            println!("{}", result.message);
            if let Some(days) = result.days_remaining {
                println!("Days remaining: {}", days);
            }
            if let Some(entry) = &result.code {
                println!("Redirect target: {}", entry.redirect_target);
            }
            if !result.valid {
                process::exit(2);
            }
        }
        Command::Generate { name, days } => {
            let generated = manager.generate(&name, days);
            println!("Code: {}", generated.code);
            println!("Grantee: {}", generated.entry.name);
            println!("Expires: {}", generated.expiration_date);
        }
        Command::Extend { code, days } => {
            if manager.extend(&code, days) {
                println!("Extended {} by {} day(s)", code.to_uppercase(), days);
            } else {
                println!("Code not found or permanent; nothing changed");
            }
        }
        Command::Stats => {
            let stats = manager.statistics();
            println!("Admin codes:    {}", stats.total_admins);
            println!("Client codes:   {}", stats.total_clients);
            println!("  active:       {}", stats.active_clients);
            println!("  warning:      {}", stats.warning_clients);
            println!("  expired:      {}", stats.expired_clients);
        }
        Command::List => {
            for annotated in manager.list_all() {
                let days = annotated
                    .days_remaining
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "∞".to_string());
                println!(
                    "{:<16} {:<8} {:<10} {:>4}  {}",
                    annotated.entry.code,
                    annotated.status,
                    annotated.entry.created,
                    days,
                    annotated.entry.name
                );
            }
        }
        Command::Log { code, success, details } => {
            let entry = manager.log_access(&code, success, &details);
            println!(
                "Logged {} attempt for {} ({})",
                if entry.success { "successful" } else { "failed" },
                entry.resolved_name,
                entry.kind_label()
            );
        }
    }

    Ok(())
}
