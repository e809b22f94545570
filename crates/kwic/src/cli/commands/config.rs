//! Implementation of `kwic config`.

use std::process::ExitCode;

use kwic_config::{discover_config_files, is_global_config};

use crate::cli::{context::CommandContext, output::dim};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    for path in discover_config_files(&ctx.cwd) {
        let scope = if is_global_config(&path) {
            " (global)"
        } else {
            ""
        };
        println!("{}", dim(&format!("# from {}{scope}", path.display())));
    }
    print!("{}", ctx.config.settings_to_toml());
    ExitCode::SUCCESS
}
