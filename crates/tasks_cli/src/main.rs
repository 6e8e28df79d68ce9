use clap::Parser;
use tasks_cli::cli::{Cli, Command};
use tasks_cli::logging;
use tasks_cli::output::Output;
use tasks_core::error::AppError;
use tasks_core::storage::json_store::{self, TaskStore};
use tasks_core::task_api;

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn run_command(command: Command, output: &Output) -> Result<(), AppError> {
    let path = json_store::store_path()?;
    let mut store = TaskStore::load(&path)?;

    match command {
        Command::Add { title } => {
            let task = task_api::add_task(&mut store, &title)?;
            println!("{}", output.added(&task)?);
        }
        Command::List { all } => {
            let tasks = task_api::list_tasks(&store, all);
            println!("{}", output.listed(&tasks)?);
        }
        Command::Complete { id } => {
            let task = task_api::complete_task(&mut store, &id)?;
            println!("{}", output.completed(&id, task.as_ref())?);
        }
        Command::Delete { id } => {
            let task = task_api::delete_task(&mut store, &id)?;
            println!("{}", output.deleted(&id, task.as_ref())?);
        }
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    logging::init(cli.verbose);
    let output = Output::from_cli(&cli);

    if let Err(err) = run_command(cli.command, &output) {
        tracing::debug!(code = err.code(), "command failed");
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
