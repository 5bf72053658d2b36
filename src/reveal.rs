//! Desktop "reveal in file browser" side action
//!
//! Behind a trait so the entry layer can be tested without launching
//! anything. Failures never affect the conversion result.

use std::path::Path;
use std::process::Command;

use crate::error::RevealError;

pub(crate) trait Revealer {
    fn reveal(&self, path: &Path) -> Result<(), RevealError>;
}

/// Spawns the platform file browser pointed at the produced post.
pub(crate) struct SystemRevealer;

impl Revealer for SystemRevealer {
    fn reveal(&self, path: &Path) -> Result<(), RevealError> {
        let status = reveal_command(path)
            .status()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RevealError::NotFound
                } else {
                    RevealError::Spawn(e)
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RevealError::Status(status))
        }
    }
}

#[cfg(target_os = "macos")]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg("-R").arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("explorer");
    cmd.arg(format!("/select,{}", path.display()));
    cmd
}

// xdg-open has no select-file mode; open the containing directory instead
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn reveal_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path.parent().unwrap_or_else(|| Path::new(".")));
    cmd
}
