//! Routegraph - weighted road network analysis CLI
//!
//! Answers shortest-path, breadth-first level, and connected component
//! queries over a labeled undirected graph.

mod cli;
mod commands;
mod dataset;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use commands::dispatch::CommandContext;
use routegraph_core::config::GlobalConfig;
use routegraph_core::error::{ExitCode as RouteExitCode, RouteError};
use routegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let route_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        RouteError::UsageError(err.to_string())
                    }
                    _ => RouteError::Other(err.to_string()),
                };

                eprintln!("{}", route_error.to_json());
                return ExitCode::from(route_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = GlobalConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable global config");
        GlobalConfig::default()
    });

    let ctx = CommandContext::new(&cli, &config, start);
    let result = commands::dispatch::run(&ctx);

    match result {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if ctx.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    args_request_json(env::args().skip(1))
}

/// Whether `--format json` appears in the arguments, matched like the
/// format parser does (ASCII case-insensitive)
fn args_request_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg
            .strip_prefix("--format=")
            .is_some_and(|v| v.eq_ignore_ascii_case("json"))
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_args_request_json() {
        assert!(args_request_json(args(&["--format", "json", "nodes"])));
        assert!(args_request_json(args(&["nodes", "--format", "JSON"])));
        assert!(args_request_json(args(&["--format=Json", "bfs", "0"])));
        assert!(!args_request_json(args(&["--format", "records", "nodes"])));
        assert!(!args_request_json(args(&["--format"])));
        assert!(!args_request_json(args(&["json"])));
    }
}
