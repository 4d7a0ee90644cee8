//! Environment provisioner
//!
//! External collaborator boundary: the core only needs "create an isolated
//! environment at path P using interpreter X" and observes success/failure.
//! Callers treat failure as a soft error once the file tree is on disk.

use crate::error::ProvisionError;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Create a Python virtual environment at `venv_path` using `python`.
///
/// Probes `python -m virtualenv --version` first so a missing tool surfaces
/// as [`ProvisionError::ToolMissing`] with remediation instructions rather
/// than an opaque exit status.
pub fn create_virtualenv(venv_path: &Path, python: &str) -> Result<(), ProvisionError> {
    let probe = Command::new(python)
        .args(["-m", "virtualenv", "--version"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if !probe.success() {
        return Err(ProvisionError::ToolMissing(python.to_string()));
    }

    debug!(path = %venv_path.display(), interpreter = python, "creating virtualenv");
    let output = Command::new(python)
        .arg("-m")
        .arg("virtualenv")
        .arg(venv_path)
        .output()?;
    if !output.status.success() {
        warn!(
            status = %output.status,
            stderr = %String::from_utf8_lossy(&output.stderr),
            "virtualenv failed"
        );
        return Err(ProvisionError::Failed(output.status));
    }
    Ok(())
}
