// bluesy: console code page output and CLI helpers
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Echo | Encoding | List | Lines | Options | Configs | Version
//! ```

use std::io::Write;
use std::process::ExitCode;

use bluesy::cli::global::GlobalOptions;
use bluesy::cli::{self, Command};
use bluesy::cmd::config::{run_configs_command, run_options_command};
use bluesy::cmd::echo::run_echo_command;
use bluesy::cmd::encoding::run_encoding_command;
use bluesy::cmd::lines::run_lines_command;
use bluesy::cmd::list::run_list_command;
use bluesy::config::{Config, ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use bluesy::console::ConsoleFormatter;
use bluesy::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let formatter = ConsoleFormatter::new(config.console_settings());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(anyhow::Error::from)
        }
        Some(Command::Echo(args)) => run_echo_command(args, &formatter, &mut out),
        Some(Command::Encoding(args)) => run_encoding_command(args, &formatter, &mut out),
        Some(Command::List(args)) => run_list_command(args, &formatter, &mut out),
        Some(Command::Lines(args)) => run_lines_command(args, &formatter, &mut out),
        Some(Command::Options) => run_options_command(config, &formatter, &mut out),
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files(), &formatter, &mut out)
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    let result = result.and_then(|()| out.flush().map_err(anyhow::Error::from));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> bluesy::error::Result<Config> {
    let config = build_config_loader(global)
        .with_overrides(&global.to_config_overrides())?
        .build()?;
    Ok(config)
}
