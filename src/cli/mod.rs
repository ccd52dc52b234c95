//! Command-line surface for Taskpad.
//!
//! Parses invocations into a tagged [`Command`] variant per subcommand,
//! dispatches each variant against the task service, and renders responses
//! as human-readable text. Every execution produces a [`CommandOutput`]
//! carrying the process exit code and the text destined for stdout, which
//! keeps the dispatcher fully testable without capturing process output.

mod render;


use clap::{Parser, Subcommand};
use mockable::Clock;

use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskRequest},
};

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "taskpad", about = "Todo CLI Application")]
pub struct Cli {
    /// Subcommand to run; prints help when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One variant per supported invocation, each carrying only its required
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// Title of the task
        title: String,
        /// Description of the task (optional)
        description: Option<String>,
    },
    /// List all tasks
    List,
    /// Update an existing task
    Update {
        /// ID of the task to update
        id: String,
        /// New title of the task (optional)
        title: Option<String>,
        /// New description of the task (optional)
        description: Option<String>,
    },
    /// Delete a task
    Delete {
        /// ID of the task to delete
        id: String,
    },
    /// Mark a task as complete
    Complete {
        /// ID of the task to mark complete
        id: String,
    },
    /// Mark a task as incomplete
    Incomplete {
        /// ID of the task to mark incomplete
        id: String,
    },
}

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code: 0 on success, 1 on validation or not-found
    /// failures.
    pub exit_code: u8,
    /// Text destined for stdout.
    pub text: String,
}

impl CommandOutput {
    fn success(text: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            text: text.into(),
        }
    }

    fn not_found(id: &str) -> Self {
        Self::failure(format!("Error: Task with ID {id} not found"))
    }
}

/// Dispatches a parsed command against the task service.
#[must_use]
pub fn execute<R, C>(service: &TaskService<R, C>, command: Command) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    match command {
        Command::Add { title, description } => handle_add(service, title, description),
        Command::List => handle_list(service),
        Command::Update {
            id,
            title,
            description,
        } => handle_update(service, &id, title, description),
        Command::Delete { id } => handle_delete(service, &id),
        Command::Complete { id } => handle_complete(service, &id),
        Command::Incomplete { id } => handle_incomplete(service, &id),
    }
}

fn handle_add<R, C>(
    service: &TaskService<R, C>,
    title: String,
    description: Option<String>,
) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let mut request = CreateTaskRequest::new(title);
    if let Some(description) = description {
        request = request.with_description(description);
    }
    match service.add_task(request) {
        Ok(task) => {
            CommandOutput::success(format!("Task added successfully with ID: {}", task.id()))
        }
        Err(err) => CommandOutput::failure(format!("Error: {err}")),
    }
}

fn handle_list<R, C>(service: &TaskService<R, C>) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    match service.list_tasks() {
        Ok(tasks) if tasks.is_empty() => CommandOutput::success("No tasks found."),
        Ok(tasks) => CommandOutput::success(render::table(&tasks)),
        Err(err) => CommandOutput::failure(format!("Error: {err}")),
    }
}

fn handle_update<R, C>(
    service: &TaskService<R, C>,
    id: &str,
    title: Option<String>,
    description: Option<String>,
) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Ok(task_id) = TaskId::try_from(id) else {
        return CommandOutput::not_found(id);
    };
    let mut request = UpdateTaskRequest::new(task_id);
    if let Some(title) = title {
        request = request.with_title(title);
    }
    if let Some(description) = description {
        request = request.with_description(description);
    }
    match service.update_task(request) {
        Ok(Some(_)) => CommandOutput::success(format!("Task {id} updated successfully")),
        Ok(None) => CommandOutput::not_found(id),
        Err(err) => CommandOutput::failure(format!("Error: {err}")),
    }
}

fn handle_delete<R, C>(service: &TaskService<R, C>, id: &str) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Ok(task_id) = TaskId::try_from(id) else {
        return CommandOutput::not_found(id);
    };
    match service.delete_task(task_id) {
        Ok(true) => CommandOutput::success(format!("Task {id} deleted successfully")),
        Ok(false) => CommandOutput::not_found(id),
        Err(err) => CommandOutput::failure(format!("Error: {err}")),
    }
}

fn handle_complete<R, C>(service: &TaskService<R, C>, id: &str) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    mark(service, id, "complete", TaskService::mark_task_complete)
}

fn handle_incomplete<R, C>(service: &TaskService<R, C>, id: &str) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    mark(service, id, "incomplete", TaskService::mark_task_incomplete)
}

/// Shared handler for the two status-transition commands.
fn mark<R, C>(
    service: &TaskService<R, C>,
    id: &str,
    target: &str,
    apply: impl Fn(
        &TaskService<R, C>,
        TaskId,
    ) -> Result<Option<crate::task::domain::Task>, TaskServiceError>,
) -> CommandOutput
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Ok(task_id) = TaskId::try_from(id) else {
        return CommandOutput::not_found(id);
    };
    match apply(service, task_id) {
        Ok(Some(_)) => CommandOutput::success(format!("Task {id} marked as {target}")),
        Ok(None) => CommandOutput::not_found(id),
        Err(err) => CommandOutput::failure(format!("Error: {err}")),
    }
}
