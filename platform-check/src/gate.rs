//! ARM64 tool gate: whether the drone executor is available, whether the
//! ARM64-specific tools get registered, and whether a call to one proceeds.
//!
//! Each check is evaluated on its own and depends on the architecture alone.

use tracing::debug;

use crate::platform::is_arm64;

/// Outcome of a single gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Denied,
}

impl Verdict {
    fn from_bool(allowed: bool) -> Self {
        if allowed {
            Verdict::Allowed
        } else {
            Verdict::Denied
        }
    }
}

/// Whether the drone executor tool should be available on this platform.
pub fn availability(arch: &str) -> Verdict {
    let allowed = is_arm64(arch);
    debug!("Availability gate: arch={arch}, allowed={allowed}");
    Verdict::from_bool(allowed)
}

/// Whether startup registers the ARM64-specific tools.
pub fn registration(arch: &str) -> Verdict {
    let allowed = is_arm64(arch);
    debug!("Registration gate: arch={arch}, allowed={allowed}");
    Verdict::from_bool(allowed)
}

/// Whether an invocation of an ARM64-specific tool may proceed.
pub fn invocation(arch: &str) -> Verdict {
    let denied = !is_arm64(arch);
    debug!("Invocation gate: arch={arch}, denied={denied}");
    Verdict::from_bool(!denied)
}
