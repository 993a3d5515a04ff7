//! `generator uninstall` command.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::context::ServiceContext;
use crate::error::GeneratorError;

/// Question asked before anything is removed.
pub const CONFIRMATION: &str = "Are you sure you want to uninstall the generator CLI?";

/// Execute the `uninstall` command against `install_dir`.
///
/// Requires elevated privilege and an affirmative confirmation. A missing
/// install path is not an error; there is simply nothing to remove.
///
/// # Errors
///
/// Returns an error if privilege is missing, the operator declines, the
/// answer cannot be read, removal fails, or writing to `out` fails.
pub fn run(
    ctx: &ServiceContext,
    install_dir: &Path,
    out: &mut dyn Write,
) -> Result<(), GeneratorError> {
    if !ctx.privileges.is_elevated() {
        return Err(GeneratorError::NotPrivileged);
    }

    if !ctx.prompt.confirm(CONFIRMATION).map_err(GeneratorError::Prompt)? {
        return Err(GeneratorError::Aborted);
    }

    if ctx.fs.exists(install_dir) {
        ctx.fs.remove_all(install_dir).map_err(|source| GeneratorError::Remove {
            path: install_dir.to_path_buf(),
            source,
        })?;
        info!(path = %install_dir.display(), "removed installed copy");
        writeln!(out, "Removed binary: {}", install_dir.display())?;
    } else {
        info!(path = %install_dir.display(), "nothing installed at path");
    }

    writeln!(out, "Uninstallation complete.")?;
    Ok(())
}
