// src/main.rs

use applist::cli::{Cli, Commands};
use applist::commands::{cmd_add, cmd_gui, cmd_show, resolve_db_path};
use applist::Result;
use clap::{CommandFactory, Parser};

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Add {
            device,
            package_manager,
            util,
            db_path,
        } => cmd_add(&device, &package_manager, util, &resolve_db_path(db_path)),
        Commands::Show { distinct, db_path } => cmd_show(distinct, &resolve_db_path(db_path)),
        Commands::Gui { distinct, db_path } => cmd_gui(distinct, &resolve_db_path(db_path)),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
