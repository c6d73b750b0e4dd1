//! Interactive Shell
//!
//! Line-oriented session over one board: every command is applied through
//! the sequential driver and the board is re-rendered afterwards.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::board::{sync, TaskBoard};
use crate::client::TaskApi;
use crate::render::{render, OutputFormat};
use crate::task::TaskId;

const HELP: &str = "\
Commands:
  add <text>      add a task
  toggle <id>     mark a task complete / incomplete
  delete <id>     delete a task
  search [term]   filter the list (no term clears the filter)
  list            show the list
  reload          fetch the list again
  help            show this help
  quit            leave the shell";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Search(String),
    List,
    Reload,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "add" | "a" => {
                if rest.is_empty() {
                    return Err("usage: add <text>".to_string());
                }
                ShellCommand::Add(rest.to_string())
            }
            "toggle" | "t" | "done" => ShellCommand::Toggle(parse_id(rest, "toggle")?),
            "delete" | "del" | "rm" => ShellCommand::Delete(parse_id(rest, "delete")?),
            "search" | "s" | "find" => ShellCommand::Search(rest.to_string()),
            "list" | "ls" => ShellCommand::List,
            "reload" | "r" => ShellCommand::Reload,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{}' (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

fn parse_id(arg: &str, command: &str) -> Result<TaskId, String> {
    arg.parse()
        .map_err(|_| format!("usage: {} <id> (got '{}')", command, arg))
}

/// Run the shell until `quit` or end of input
pub async fn run_shell<A, R, W>(
    board: &mut TaskBoard,
    api: &A,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> io::Result<()>
where
    A: TaskApi + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output
        .write_all(b"My To-Do List (type 'help' for commands)\n")
        .await?;
    let result = sync::load(board, api).await;
    show(board, &mut output, format, result).await?;

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                output.write_all(format!("{}\n", msg).as_bytes()).await?;
                continue;
            }
        };

        tracing::debug!(?command, "Shell command");
        let result = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                output.write_all(format!("{}\n", HELP).as_bytes()).await?;
                continue;
            }
            ShellCommand::List => Ok(()),
            ShellCommand::Search(term) => {
                board.set_search_term(term);
                Ok(())
            }
            ShellCommand::Reload => sync::load(board, api).await,
            ShellCommand::Add(text) => sync::add(board, api, &text).await,
            ShellCommand::Toggle(id) => sync::toggle(board, api, id).await,
            ShellCommand::Delete(id) => sync::delete(board, api, id).await,
        };
        show(board, &mut output, format, result).await?;
    }

    output.flush().await
}

/// Print the failure (if any) on its own line, then the list
async fn show<W: AsyncWrite + Unpin>(
    board: &mut TaskBoard,
    output: &mut W,
    format: OutputFormat,
    result: sync::SyncResult,
) -> io::Result<()> {
    if let Err(err) = result {
        output.write_all(format!("{}\n", err).as_bytes()).await?;
        board.dismiss_error();
    }
    output
        .write_all(format!("{}\n", render(board, format)).as_bytes())
        .await
}
