use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::domain::AppError;
use crate::ports::UrlOpener;

const UNIX_LAUNCHERS: &[&str] =
    &["xdg-open", "cygstart", "x-www-browser", "firefox", "opera", "mozilla", "netscape"];

/// Opens URLs with the platform's browser launcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

/// Program and leading arguments used to open a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Launcher {
    program: PathBuf,
    args: Vec<String>,
}

fn launcher_for(os: &str, lookup: impl Fn(&str) -> Option<PathBuf>) -> Option<Launcher> {
    match os {
        "macos" => Some(Launcher { program: "open".into(), args: Vec::new() }),
        "windows" => Some(Launcher {
            program: "cmd".into(),
            args: vec!["/C".into(), "start".into(), String::new()],
        }),
        _ => UNIX_LAUNCHERS
            .iter()
            .find_map(|name| lookup(name))
            .map(|program| Launcher { program, args: Vec::new() }),
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), AppError> {
        let launcher = launcher_for(std::env::consts::OS, |name| which::which(name).ok())
            .ok_or_else(|| AppError::ExternalToolError {
                tool: "browser".into(),
                error: format!("no browser launcher found (tried {})", UNIX_LAUNCHERS.join(", ")),
            })?;
        debug!("$ {} {} {}", launcher.program.display(), launcher.args.join(" "), url);

        let status = Command::new(&launcher.program)
            .args(&launcher.args)
            .arg(url)
            .status()
            .map_err(|e| AppError::ExternalToolError {
                tool: launcher.program.display().to_string(),
                error: e.to_string(),
            })?;
        if !status.success() {
            return Err(AppError::ExternalToolError {
                tool: launcher.program.display().to_string(),
                error: format!("exited with {}", status),
            });
        }
        Ok(())
    }
}
