//! Fixed privilege answer.

use crate::ports::privileges::Privileges;

/// Privilege check with a predetermined answer.
pub struct FixedPrivileges(pub bool);

impl Privileges for FixedPrivileges {
    fn is_elevated(&self) -> bool {
        self.0
    }
}
