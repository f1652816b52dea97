use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;
use terminal_size::{Height, terminal_size};

use crate::domain::AppError;
use crate::ports::Pager;

/// Prints short text directly and pipes long text through `less -R`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPager;

/// Whether `contents` has more lines than the terminal has rows.
fn exceeds_screen(contents: &str, rows: Option<u16>) -> bool {
    match rows {
        Some(rows) => contents.matches('\n').count() > usize::from(rows),
        None => false,
    }
}

impl TerminalPager {
    fn page(contents: &str) -> Result<(), AppError> {
        debug!("$ less -R");
        let mut child = Command::new("less")
            .arg("-R")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::ExternalToolError { tool: "less".into(), error: e.to_string() })?;
        if let Some(mut stdin) = child.stdin.take() {
            // quitting less early closes the pipe
            match stdin.write_all(contents.as_bytes()) {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(AppError::ExternalToolError {
                tool: "less".into(),
                error: format!("exited with {}", status),
            });
        }
        Ok(())
    }
}

impl Pager for TerminalPager {
    fn show(&self, contents: &str) -> Result<(), AppError> {
        let rows = terminal_size().map(|(_, Height(h))| h);
        if exceeds_screen(contents, rows) {
            Self::page(contents)
        } else {
            println!("{}", contents);
            Ok(())
        }
    }
}
