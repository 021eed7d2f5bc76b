//! System clipboard implementation of the core `Clipboard` contract.
//!
//! There is no clipboard API call here; the URL is piped into whichever
//! platform clipboard tool is installed (`pbcopy`, `wl-copy`, `xclip`,
//! `xsel`, `clip`). Tools are tried in order and a tool that is not installed
//! is skipped.

use std::io::Write;
use std::process::{Command, Stdio};

use snapbucket_core::contract::{BoxError, Clipboard};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install wl-copy, xclip, or xsel.")]
    NoToolAvailable,

    #[error("{tool} failed: {reason}")]
    ToolFailed { tool: String, reason: String },
}

/// An external command that reads clipboard text from stdin.
#[derive(Debug, Clone)]
pub struct CopyTool {
    pub program: String,
    pub args: Vec<String>,
}

impl CopyTool {
    pub fn new(program: &str, args: &[&str]) -> Self {
        CopyTool {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Pipes `text` into the tool. `Ok(false)` means the tool is not installed.
    fn try_copy(&self, text: &str) -> Result<bool, ClipboardError> {
        let failed = |reason: String| ClipboardError::ToolFailed {
            tool: self.program.clone(),
            reason,
        };

        let mut child = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(failed(e.to_string())),
        };

        // stdin is dropped after the write so the tool sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Reap the child even when the write failed.
        let status = child.wait().map_err(|e| failed(e.to_string()))?;
        written.map_err(|e| failed(e.to_string()))?;
        if status.success() {
            Ok(true)
        } else {
            Err(failed(format!("exited with {status}")))
        }
    }
}

/// Clipboard tools for the current platform, in priority order.
pub fn platform_tools() -> Vec<CopyTool> {
    if cfg!(target_os = "macos") {
        vec![CopyTool::new("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        vec![CopyTool::new("clip", &[])]
    } else {
        vec![
            CopyTool::new("wl-copy", &[]),
            CopyTool::new("xclip", &["-selection", "clipboard"]),
            CopyTool::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

pub struct SystemClipboard {
    tools: Vec<CopyTool>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<CopyTool>) -> Self {
        Self { tools }
    }

    pub fn copy(&self, text: &str) -> Result<&CopyTool, ClipboardError> {
        let mut last_error = None;
        for tool in &self.tools {
            match tool.try_copy(text) {
                Ok(true) => {
                    tracing::debug!(tool = %tool.program, "Copied text to clipboard");
                    return Ok(tool);
                }
                Ok(false) => {
                    tracing::debug!(tool = %tool.program, "Clipboard tool not installed, skipping");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Clipboard tool failed, trying next tool");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), BoxError> {
        self.copy(text).map(|_| ()).map_err(|e| Box::new(e) as BoxError)
    }
}
