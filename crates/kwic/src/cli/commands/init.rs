//! Implementation of `kwic init`.

use std::{fs, path::Path, process::ExitCode};

use kwic_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};

use crate::cli::{args::InitCommand, context::CommandContext, output::output_config_written};

/// Writes a commented `.kwic.toml` template.
///
/// Running in the home directory writes the global file even without `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let global_path = global_config_path();
    let in_home = global_path.as_deref().and_then(Path::parent) == Some(ctx.cwd.as_path());

    let (path, template) = if cmd.global || in_home {
        let Some(path) = global_path else {
            eprintln!("error: home directory is unknown");
            return ExitCode::FAILURE;
        };
        (path, global_template())
    } else {
        (ctx.cwd.join(CONFIG_FILENAME), local_template())
    };

    if path.exists() && !cmd.force {
        eprintln!(
            "error: {} already exists; use --force to overwrite",
            path.display()
        );
        return ExitCode::FAILURE;
    }

    match fs::write(&path, &template) {
        Ok(()) => {
            output_config_written(&path, &template);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write {}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}
