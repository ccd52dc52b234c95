//! End-to-end tests for the command dispatcher.
//!
//! Drives the CLI surface exactly as the binary does — parse, dispatch,
//! inspect text and exit code — against one long-lived service instance.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use clap::Parser;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskpad::cli::{Cli, Command, CommandOutput, execute};
use taskpad::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Parses an argv-style invocation and dispatches it.
fn run(service: &TestService, args: &[&str]) -> CommandOutput {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("arguments parse");
    let command = cli.command.expect("subcommand present");
    execute(service, command)
}

fn run_expecting_success(service: &TestService, args: &[&str]) -> String {
    let output = run(service, args);
    assert_eq!(output.exit_code, 0, "unexpected failure: {}", output.text);
    output.text
}

#[rstest]
fn full_task_lifecycle_through_the_cli(service: TestService) {
    // Add a task with no description.
    let added = run_expecting_success(&service, &["taskpad", "add", "Buy milk"]);
    let id = added
        .strip_prefix("Task added successfully with ID: ")
        .expect("success message prefix")
        .to_owned();

    // The listing shows one TODO row with an empty description cell.
    let listing = run_expecting_success(&service, &["taskpad", "list"]);
    let row = listing.lines().nth(2).expect("one task row");
    assert!(row.starts_with(&id));
    assert!(row.contains("TODO"));
    assert!(row.contains("Buy milk"));
    assert!(!row.contains("DONE"));

    // Completing flips the badge to DONE.
    let completed = run_expecting_success(&service, &["taskpad", "complete", &id]);
    assert_eq!(completed, format!("Task {id} marked as complete"));
    let listing = run_expecting_success(&service, &["taskpad", "list"]);
    assert!(listing.contains("DONE"));
    assert!(!listing.contains("TODO "));

    // Deleting empties the store again.
    let deleted = run_expecting_success(&service, &["taskpad", "delete", &id]);
    assert_eq!(deleted, format!("Task {id} deleted successfully"));
    let listing = run_expecting_success(&service, &["taskpad", "list"]);
    assert_eq!(listing, "No tasks found.");
}

#[rstest]
fn adding_with_an_empty_title_exits_nonzero(service: TestService) {
    let output = run(&service, &["taskpad", "add", ""]);

    assert_eq!(output.exit_code, 1);
    assert_eq!(output.text, "Error: Task title cannot be empty");
}

#[rstest]
fn updating_with_an_empty_title_is_rejected(service: TestService) {
    let added = run_expecting_success(&service, &["taskpad", "add", "Keep me"]);
    let id = added
        .strip_prefix("Task added successfully with ID: ")
        .expect("success message prefix")
        .to_owned();

    let output = run(&service, &["taskpad", "update", &id, ""]);

    assert_eq!(output.exit_code, 1);
    assert_eq!(output.text, "Error: Task title cannot be empty");

    // The stored title is untouched.
    let listing = run_expecting_success(&service, &["taskpad", "list"]);
    assert!(listing.contains("Keep me"));
}

#[rstest]
fn update_merges_fields_across_invocations(service: TestService) {
    let added = run_expecting_success(
        &service,
        &["taskpad", "add", "Old title", "Old description"],
    );
    let id = added
        .strip_prefix("Task added successfully with ID: ")
        .expect("success message prefix")
        .to_owned();

    run_expecting_success(&service, &["taskpad", "update", &id, "New title"]);

    let listing = run_expecting_success(&service, &["taskpad", "list"]);
    assert!(listing.contains("New title"));
    assert!(listing.contains("Old description"));
}

#[rstest]
fn operations_on_unknown_tasks_exit_nonzero(service: TestService) {
    let id = "00000000-0000-4000-8000-000000000000";

    for args in [
        vec!["taskpad", "update", id, "title"],
        vec!["taskpad", "delete", id],
        vec!["taskpad", "complete", id],
        vec!["taskpad", "incomplete", id],
    ] {
        let output = run(&service, &args);
        assert_eq!(output.exit_code, 1);
        assert_eq!(output.text, format!("Error: Task with ID {id} not found"));
    }
}

#[rstest]
fn parsed_invocations_carry_only_their_required_fields() {
    let cli = Cli::try_parse_from(["taskpad", "delete", "some-id"]).expect("arguments parse");
    assert_eq!(
        cli.command,
        Some(Command::Delete {
            id: "some-id".to_owned(),
        })
    );
}
