//! Taskpad — todo CLI application.
//!
//! Wires an in-memory store into the task service, dispatches the parsed
//! subcommand, prints the result, and exits with the command's status code.
//! Invoking without a subcommand prints help.
//!
//! ```bash
//! taskpad add "Buy milk" "Semi-skimmed, two pints"
//! taskpad list
//! taskpad complete <id>
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use mockable::DefaultClock;

use taskpad::cli::{self, Cli};
use taskpad::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

fn main() -> ExitCode {
    let args = Cli::parse();

    // Logging goes to stderr; stdout is reserved for command output.
    init_logging();

    let Some(command) = args.command else {
        return print_help();
    };

    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskService::new(repository, Arc::new(DefaultClock));

    let output = cli::execute(&service, command);
    emit(&output.text);
    ExitCode::from(output.exit_code)
}

/// Initialises the tracing subscriber with `RUST_LOG` or a `warn` default.
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[expect(clippy::print_stdout, reason = "stdout is the CLI output channel")]
fn emit(text: &str) {
    println!("{text}");
}

fn print_help() -> ExitCode {
    let mut command = Cli::command();
    if command.print_help().is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
