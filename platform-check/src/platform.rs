//! Platform detection for the tool gate
//!
//! Reports the architecture this binary was built for, spelled the way the
//! tool server spells it (`arm64`, `amd64`, `386`, ...).

use std::env::consts::ARCH;
use tracing::debug;

/// Identifier the gate compares against
pub const ARM64: &str = "arm64";

/// Detected platform information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub arch: String,
}

impl Platform {
    pub fn new(arch: impl Into<String>) -> Self {
        Self { arch: arch.into() }
    }

    pub fn is_arm64(&self) -> bool {
        is_arm64(&self.arch)
    }
}

/// Detect the running architecture
pub fn detect() -> Platform {
    let platform = Platform::new(to_goarch(ARCH, cfg!(target_endian = "little")));
    debug!(
        "Architecture: {} (target: {ARCH}, arm64: {})",
        platform.arch,
        platform.is_arm64()
    );
    platform
}

/// Exact match on `arm64`; `detect` already maps `aarch64` onto it.
pub fn is_arm64(arch: &str) -> bool {
    arch == ARM64
}

/// Map a Rust target architecture name onto the tool server's vocabulary.
/// Names with no known mapping pass through unchanged.
fn to_goarch(rust_arch: &str, little_endian: bool) -> String {
    let arch = match (rust_arch, little_endian) {
        ("aarch64", _) => "arm64",
        ("x86_64", _) => "amd64",
        ("x86", _) => "386",
        ("arm", _) => "arm",
        ("riscv64", _) => "riscv64",
        ("powerpc64", true) => "ppc64le",
        ("powerpc64", false) => "ppc64",
        ("s390x", _) => "s390x",
        ("mips", true) => "mipsle",
        ("mips", false) => "mips",
        ("mips64", true) => "mips64le",
        ("mips64", false) => "mips64",
        ("loongarch64", _) => "loong64",
        ("wasm32", _) => "wasm",
        (other, _) => other,
    };
    arch.to_string()
}
