// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .help("Path to the database file (default: ~/applist.db)")
}

fn build_cli() -> Command {
    Command::new("applist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track which applications are installed on which devices")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Record installed applications for a device")
                .arg(
                    Arg::new("device")
                        .required(true)
                        .help("Name of the device the applications are installed on"),
                )
                .arg(
                    Arg::new("package_manager")
                        .required(true)
                        .help("Package manager to pull applications from (flatpak or pacman)"),
                )
                .arg(
                    Arg::new("util")
                        .long("util")
                        .value_parser(["pacman", "paru", "yay"])
                        .default_value("paru")
                        .help("Pacman-family binary to invoke for the query"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show all recorded applications")
                .arg(
                    Arg::new("distinct")
                        .long("distinct")
                        .action(clap::ArgAction::SetTrue)
                        .help("Only show applications installed on exactly one device"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("gui")
                .about("Open the desktop list view")
                .arg(
                    Arg::new("distinct")
                        .long("distinct")
                        .action(clap::ArgAction::SetTrue)
                        .help("Start with the distinct filter enabled"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell to generate completions for"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("applist.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
