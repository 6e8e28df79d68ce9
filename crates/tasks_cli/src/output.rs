use crate::cli::{Cli, ColorChoice};
use std::io::IsTerminal;
use tasks_core::error::AppError;
use tasks_core::model::Task;

pub const NO_TASKS: &str = "No tasks found";
pub const TASK_NOT_FOUND: &str = "Task not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            success: "",
            warning: "",
            error: "",
            muted: "",
            reset: "",
        }
    }

    pub fn ansi() -> Self {
        Self {
            success: "\x1b[32m",
            warning: "\x1b[33m",
            error: "\x1b[31m",
            muted: "\x1b[90m",
            reset: "\x1b[0m",
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", color, text, self.reset)
        }
    }
}

pub fn palette_for(choice: ColorChoice, is_terminal: bool) -> Palette {
    match choice {
        ColorChoice::Always => Palette::ansi(),
        ColorChoice::Never => Palette::plain(),
        ColorChoice::Auto if is_terminal => Palette::ansi(),
        ColorChoice::Auto => Palette::plain(),
    }
}

/// Renders command results either as status lines or as JSON.
#[derive(Debug, Clone)]
pub struct Output {
    pub json: bool,
    pub palette: Palette,
}

impl Output {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            palette: palette_for(cli.color, std::io::stdout().is_terminal()),
        }
    }

    pub fn added(&self, task: &Task) -> Result<String, AppError> {
        if self.json {
            return task_json(task);
        }
        Ok(self
            .palette
            .paint(self.palette.success, "✓ Task added successfully"))
    }

    pub fn listed(&self, tasks: &[&Task]) -> Result<String, AppError> {
        if self.json {
            return serde_json::to_string(tasks)
                .map_err(|err| AppError::invalid_data(err.to_string()));
        }
        if tasks.is_empty() {
            return Ok(self.palette.paint(self.palette.warning, NO_TASKS));
        }

        let lines: Vec<String> = tasks.iter().map(|task| self.task_line(task)).collect();
        Ok(lines.join("\n"))
    }

    pub fn completed(&self, id: &str, task: Option<&Task>) -> Result<String, AppError> {
        match task {
            Some(task) if self.json => task_json(task),
            Some(_) => Ok(self
                .palette
                .paint(self.palette.success, "✓ Task marked as completed")),
            None => Ok(self.not_found(id)),
        }
    }

    pub fn deleted(&self, id: &str, task: Option<&Task>) -> Result<String, AppError> {
        match task {
            Some(task) if self.json => task_json(task),
            Some(_) => Ok(self
                .palette
                .paint(self.palette.success, "✓ Task deleted successfully")),
            None => Ok(self.not_found(id)),
        }
    }

    fn not_found(&self, id: &str) -> String {
        if self.json {
            serde_json::json!({ "status": "not_found", "id": id }).to_string()
        } else {
            self.palette.paint(self.palette.error, TASK_NOT_FOUND)
        }
    }

    fn task_line(&self, task: &Task) -> String {
        let (marker, title) = if task.completed {
            (
                self.palette.paint(self.palette.success, "✓"),
                self.palette.paint(self.palette.muted, &task.title),
            )
        } else {
            (
                self.palette.paint(self.palette.warning, "○"),
                task.title.clone(),
            )
        };
        format!("{} {} ({})", marker, title, task.id)
    }
}

fn task_json(task: &Task) -> Result<String, AppError> {
    serde_json::to_string(task).map_err(|err| AppError::invalid_data(err.to_string()))
}
