use clap::Parser;

use gala::cli::{commands, Cli};

fn main() {
    if let Err(e) = commands::run(Cli::parse()) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
