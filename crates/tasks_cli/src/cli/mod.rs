use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "A simple CLI task manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// When to color human-readable output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: tasks add "Buy milk"
    Add { title: String },
    /// List tasks
    ///
    /// Example: tasks list
    /// Example: tasks list --all
    List {
        /// Show all tasks including completed ones
        #[arg(short, long)]
        all: bool,
    },
    /// Mark a task as completed
    ///
    /// Example: tasks complete 3f6c2a9e-0d1b-4f4e-9a57-2c1d7b0e8f11
    Complete { id: String },
    /// Delete a task
    ///
    /// Example: tasks delete 3f6c2a9e-0d1b-4f4e-9a57-2c1d7b0e8f11
    Delete { id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}
