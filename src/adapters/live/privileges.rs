//! Live privilege check using `is-root`.

use crate::ports::privileges::Privileges;

/// Live privilege check against the current process.
pub struct LivePrivileges;

impl Privileges for LivePrivileges {
    fn is_elevated(&self) -> bool {
        is_root::is_root()
    }
}
