//! # System Link Opener
//!
//! Hands URLs to the desktop's opener program. Fire-and-forget: the child
//! is reaped on the tokio runtime and any failure only reaches the log.

use log::{info, warn};
use std::process::Stdio;

use crate::core::links::LinkOpener;

pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    /// `command` is a whitespace-separated program and arguments; the URL
    /// is appended. `None` picks the platform default.
    pub fn new(command: Option<&str>) -> Self {
        let (program, args) = command
            .and_then(split_command)
            .unwrap_or_else(platform_default);
        info!("Link opener: {} {:?}", program, args);
        Self { program, args }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

fn platform_default() -> (String, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open".to_string(), Vec::new())
    } else if cfg!(target_os = "windows") {
        (
            "cmd".to_string(),
            vec!["/C".to_string(), "start".to_string(), String::new()],
        )
    } else {
        ("xdg-open".to_string(), Vec::new())
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) {
        // Reaping the child needs a runtime; without one, let it run detached.
        if tokio::runtime::Handle::try_current().is_err() {
            if let Err(e) = std::process::Command::new(&self.program)
                .args(&self.args)
                .arg(url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                warn!("Failed to launch {} for {}: {}", self.program, url, e);
            }
            return;
        }

        let spawned = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to launch {} for {}: {}", self.program, url, e);
                return;
            }
        };

        let program = self.program.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    warn!("{} exited with {} for {}", program, status, url);
                }
                Ok(_) => {}
                Err(e) => warn!("Failed waiting on {} for {}: {}", program, url, e),
            }
        });
    }
}
