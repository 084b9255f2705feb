//! Size classification and human-readable rendering

use std::process::Command;

/// Inclusive upper bounds of the first ten size buckets; anything larger is bucket 10.
pub const SIZE_THRESHOLDS: [u64; 10] = [
    1024,   // 1kB
    2048,   // 2kB
    3072,   // 3kB
    5120,   // 5kB
    10240,  // 10kB
    20480,  // 20kB
    40960,  // 40kB
    102400, // 100kB
    262144, // 256kB
    524288, // 512kB
];

/// Index into an 11-step size ramp. Non-decreasing in `size`.
pub fn size_bucket(size: u64) -> usize {
    SIZE_THRESHOLDS
        .iter()
        .position(|threshold| size <= *threshold)
        .unwrap_or(SIZE_THRESHOLDS.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitBase {
    /// Powers of 1024
    #[default]
    Iec,
    /// Powers of 1000
    Si,
}

/// Renders a byte count for humans. Implementations never fail: they fall back to the
/// decimal count.
pub trait SizeFormatter {
    fn format(&self, bytes: u64, base: UnitBase) -> String;
}

/// Delegates to coreutils `numfmt`.
#[derive(Debug, Clone, Default)]
pub struct Numfmt;

impl SizeFormatter for Numfmt {
    fn format(&self, bytes: u64, base: UnitBase) -> String {
        let raw = bytes.to_string();
        let flag = match base {
            UnitBase::Iec => "--to=iec",
            UnitBase::Si => "--to=si",
        };

        match Command::new("numfmt").arg(flag).arg(&raw).output() {
            Ok(output) if output.status.success() => {
                let formatted = String::from_utf8_lossy(&output.stdout)
                    .trim_matches([' ', '\n', '\r'])
                    .to_string();
                if formatted.is_empty() { raw } else { formatted }
            }
            Ok(output) => {
                log::debug!("numfmt exited with {}, keeping {raw}", output.status);
                raw
            }
            Err(err) => {
                log::debug!("numfmt unavailable ({err}), keeping {raw}");
                raw
            }
        }
    }
}
