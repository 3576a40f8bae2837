use crate::utils::error::{AppError, AppResult};
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;
use std::process::Command;

/// Copy text to the system clipboard.
///
/// The platform clipboard command is the primary path; when it is missing or
/// fails, fall back to the OSC 52 escape sequence, which asks the terminal
/// emulator itself to set the clipboard. Only when both fail does the caller
/// see a `ClipboardError`.
pub fn copy_to_clipboard(text: &str) -> AppResult<()> {
    if copy_with_system_command(text).is_ok() {
        return Ok(());
    }

    copy_with_osc52(text).map_err(|e| AppError::Clipboard(e.to_string()))
}

fn copy_with_system_command(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to_command(text, "pbcopy", &[])?;
    }

    #[cfg(target_os = "linux")]
    {
        if pipe_to_command(text, "xclip", &["-selection", "clipboard"]).is_err() {
            pipe_to_command(text, "xsel", &["--clipboard", "--input"])?;
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to_command(text, "clip", &[])?;
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        return Err(anyhow::anyhow!("No clipboard command on this platform"));
    }

    Ok(())
}

fn pipe_to_command(text: &str, program: &str, args: &[&str]) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {}", program))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", program))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;

    if !status.success() {
        return Err(anyhow::anyhow!("{} exited with {}", program, status));
    }

    Ok(())
}

fn copy_with_osc52(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))
        .context("Failed to write OSC 52 sequence")?;
    stdout.flush().context("Failed to flush OSC 52 sequence")?;
    Ok(())
}
