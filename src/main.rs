//! sfdprobe - Inspect the SFDP tables of SPI flash chips
//!
//! Reads the Serial Flash Discoverable Parameters of a chip through a
//! programmer and prints the table directory, raw bytes, single DWORDs or
//! named parameters.

mod cli;
mod commands;
mod programmers;

use clap::Parser;
use cli::{Cli, Commands};
use sfdprobe_core::flash::Flash;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG still overrides -v
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let master = programmers::open_programmer(&cli.programmer)?;
    log::info!(
        "Using {} (max {} bytes per read)",
        cli.programmer,
        master.config().max_read_len
    );
    let flash = Flash::new(master);

    let result = match cli.command {
        Commands::Dump => commands::run_dump(&flash),
        Commands::Read { offset, length } => commands::run_read(&flash, offset, length),
        Commands::Dword { table, dword } => commands::run_dword(&flash, table, dword),
        Commands::Param { name } => commands::run_param(&flash, &name),
        Commands::ListParams => {
            commands::list_params();
            Ok(())
        }
    };

    let transfers = flash.master().transfers().len();
    log::debug!("{} SPI transfer(s) issued", transfers);

    result
}
