//! Text Rendering
//!
//! Turns a board into terminal output.

use std::fmt::Write;

use crate::board::{BoardView, TaskBoard, EMPTY_MESSAGE, LOADING_MESSAGE};
use crate::task::Task;

/// Output format for rendered boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected table or json)", other)),
        }
    }
}

/// Render the board in the requested format
pub fn render(board: &TaskBoard, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(board),
        OutputFormat::Json => render_json(board),
    }
}

/// Human-readable list area, one task per line
pub fn render_table(board: &TaskBoard) -> String {
    match board.view() {
        BoardView::Loading => LOADING_MESSAGE.to_string(),
        BoardView::Failed(err) => err.to_string(),
        BoardView::Empty => EMPTY_MESSAGE.to_string(),
        BoardView::Tasks(tasks) => {
            let width = tasks
                .iter()
                .map(|t| t.id.to_string().len())
                .max()
                .unwrap_or(1);
            let mut out = String::new();
            for task in tasks {
                let _ = writeln!(out, "{}", task_line(task, width));
            }
            out.truncate(out.trim_end().len());
            out
        }
    }
}

/// Visible tasks as a JSON array (same shape as the API)
pub fn render_json(board: &TaskBoard) -> String {
    serde_json::to_string_pretty(&board.visible()).unwrap_or_else(|_| "[]".to_string())
}

fn task_line(task: &Task, id_width: usize) -> String {
    let mark = if task.status { "[x]" } else { "[ ]" };
    format!("{} {:>width$}  {}", mark, task.id, task.text, width = id_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{NewTask, TaskId};

    fn board() -> TaskBoard {
        let mut done = NewTask::at("Buy milk", 100).with_id(TaskId(1));
        done.status = true;
        TaskBoard::from(vec![done, NewTask::at("Walk dog", 200).with_id(TaskId(12))])
    }

    #[test]
    fn test_table_lists_newest_first() {
        let out = render_table(&board());
        assert_eq!(out, "[ ] 12  Walk dog\n[x]  1  Buy milk");
    }

    #[test]
    fn test_table_messages() {
        let mut b = TaskBoard::new();
        assert_eq!(render_table(&b), "No tasks yet. Add one!");

        b.begin_load();
        assert_eq!(render_table(&b), "Loading...");

        b.finish_load(Err("Failed to fetch tasks"));
        assert_eq!(render_table(&b), "Error fetching tasks: Failed to fetch tasks");
    }

    #[test]
    fn test_json_uses_wire_names() {
        let mut b = board();
        b.set_search_term("milk");
        let value: serde_json::Value = serde_json::from_str(&render_json(&b)).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["createdAt"], 100);
        assert_eq!(value[0]["status"], true);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
