//! Command implementations and dispatch.

pub mod batch;
pub mod check;
pub mod config;
pub mod init;
pub mod parse;
pub mod search;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, verbose: u8) -> ExitCode {
    let ctx = match command {
        Commands::Init(_) => CommandContext::load_cwd_only(verbose),
        _ => CommandContext::load(verbose),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match command {
        Commands::Search(cmd) => search::run(&ctx, &cmd),
        Commands::Batch(cmd) => batch::run(&ctx, &cmd),
        Commands::Parse(cmd) => parse::run(&ctx, &cmd),
        Commands::Init(cmd) => init::run(&ctx, &cmd),
        Commands::Config => config::run(&ctx),
        Commands::Check => check::run(&ctx),
    }
}
