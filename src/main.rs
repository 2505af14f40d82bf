mod cli;
mod config;
mod convert;
mod document;
mod error;
mod fix_paths;
mod paths;
mod provider;
mod types;

use crate::error::QaError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const OUTPUT_EXISTS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, QaError> {
    match cli.command {
        cli::Commands::FixPaths(cmd) => {
            fix_paths::fix_file(&cmd.file, &cmd.base)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Convert(cmd) => {
            document::ensure_writable(&cmd.out_file, cmd.force)?;
            let cwd = std::env::current_dir().map_err(|source| QaError::File {
                path: ".".into(),
                source,
            })?;
            let loaded = config::load_config(&cwd)?;
            let scanner = loaded.scanner();

            let options = convert::ConvertOptions {
                base_dir: cmd.base,
                git_repo_url: cmd.git,
                command_line: std::env::args_os()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join(" "),
                scanner_name: scanner.name,
                conversion_tool: loaded.conversion().tool_name,
            };
            let version = provider::scanner::CommandVersionProvider::new(scanner.version_command);
            let git = provider::git_meta::GitCli::new(&cwd);

            convert::convert_file(
                &cmd.in_file,
                &cmd.out_file,
                cmd.force,
                &options,
                &version,
                &git,
            )?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    info!(version = env!("CARGO_PKG_VERSION"), "sarif-qa starting");

    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
