//! Audio playback via the platform's default player.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Plays an audio file with the system player, blocking until it exits.
///
/// Uses `afplay` on macOS, `aplay` on Linux and `cmd /C start` on
/// Windows.
pub fn play_file(path: &Path) -> Result<()> {
    let mut command = player_command(path)?;
    let status = command
        .status()
        .with_context(|| format!("Failed to launch audio player for {}", path.display()))?;

    if !status.success() {
        bail!("audio player exited with {status}");
    }
    Ok(())
}

fn player_command(path: &Path) -> Result<Command> {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("afplay");
        cmd.arg(path);
        Ok(cmd)
    } else if cfg!(target_os = "linux") {
        let mut cmd = Command::new("aplay");
        cmd.arg(path);
        Ok(cmd)
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg("start").arg("/wait").arg("").arg(path);
        Ok(cmd)
    } else {
        bail!(
            "no audio player available on this platform; file saved to {}",
            path.display()
        )
    }
}
