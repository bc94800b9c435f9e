//! Cooperative driver.
//!
//! Owns the whole run: deploy the sentinel, build the VM around its
//! telemetry, resume the step sequence one instruction at a time, tear the
//! sentinel down, hand the finished VM back. The short sleep between
//! resumptions gives the patrol thread scheduling room while staying three
//! orders of magnitude under every trip threshold, so a legitimate run
//! never poisons itself.
//!
//! The driver surfaces no errors — the machines fold every failure into
//! arithmetic or flags.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::sentinel::{Sentinel, SentinelProfile, Telemetry};
use crate::vm::Tick;

/// Resumption pacing used by the alpha binary.
pub const ALPHA_PACE: Duration = Duration::from_micros(10);
/// Resumption pacing used by the beta and gamma binaries.
pub const TIGHT_PACE: Duration = Duration::from_micros(1);

/// Drive a VM from construction to completion under sentinel watch.
///
/// Returns the finished VM together with the number of resumptions, which
/// is always the number of executed instructions plus the final resumption
/// that observes completion.
pub fn conduct<V, F>(profile: SentinelProfile, pace: Duration, build: F) -> (V, usize)
where
    V: Iterator<Item = Tick>,
    F: FnOnce(Arc<Telemetry>) -> V,
{
    let sentinel = Sentinel::deploy(profile);
    let mut vm = build(sentinel.telemetry());

    let mut resumptions = 0usize;
    loop {
        resumptions += 1;
        match vm.next() {
            Some(_) => thread::sleep(pace),
            None => break,
        }
    }

    sentinel.stop();
    (vm, resumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::alpha::AlphaVm;
    use crate::vm::beta::BetaVm;

    #[test]
    fn test_resumptions_is_instructions_plus_one() {
        let (vm, resumptions) =
            conduct(SentinelProfile::ALPHA, Duration::ZERO, |t| AlphaVm::new("A", t));
        assert!(vm.succeeded());
        // 6 instructions, then one resumption that sees completion.
        assert_eq!(resumptions, 7);
    }

    #[test]
    fn test_conduct_tears_down_cleanly_on_failure_path() {
        let (vm, resumptions) = conduct(SentinelProfile::BETA, Duration::ZERO, |t| {
            BetaVm::new("x", b"secret".to_vec(), t)
        });
        // Wrong-length key: one unsatisfiable assert executed, then the
        // completing resumption runs the failure epilogue.
        assert_eq!(resumptions, 2);
        assert!(vm.output().is_some());
    }

    #[test]
    fn test_paced_run_does_not_trip() {
        let (vm, _) = conduct(SentinelProfile::ALPHA, Duration::from_micros(10), |t| {
            AlphaVm::new("A", t)
        });
        assert!(!vm.tripped());
    }
}
