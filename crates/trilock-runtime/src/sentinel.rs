//! Tamper sentinel — the timing watchdog running beside the interpreter.
//!
//! Instead of aborting when the interpreter stalls (which would hand a
//! reverser a clean signal), the sentinel stores a non-zero *venom* word
//! that the interpreters silently fold into their arithmetic. A debugger
//! single-stepping the VM stretches the gap between heartbeats past the
//! threshold; the run keeps going and simply computes the wrong thing.
//!
//! Shared state is three atomics with relaxed ordering. Relaxed is enough:
//! venom is monotonic (never cleared within a run), so a stale read is
//! merely a slightly-late poisoning, never an un-poisoning.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Nanoseconds on the monotonic clock, measured from a process-wide epoch.
/// 0 is reserved for "no heartbeat yet".
fn monotonic_nanos() -> u64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

/// Per-variant watchdog tuning.
#[derive(Debug, Clone, Copy)]
pub struct SentinelProfile {
    /// How often the patrol thread wakes up.
    pub poll: Duration,
    /// Maximum tolerated gap between heartbeats.
    pub threshold: Duration,
    /// Non-zero word stored on breach.
    pub venom: u64,
}

impl SentinelProfile {
    pub const ALPHA: SentinelProfile = SentinelProfile {
        poll: Duration::from_millis(100),
        threshold: Duration::from_millis(100),
        venom: 0x1337,
    };

    pub const BETA: SentinelProfile = SentinelProfile {
        poll: Duration::from_millis(100),
        threshold: Duration::from_millis(500),
        venom: 0xDEAD_BEEF_CAFE_BABE,
    };

    pub const GAMMA: SentinelProfile = SentinelProfile {
        poll: Duration::from_millis(50),
        threshold: Duration::from_millis(200),
        venom: 0xFF,
    };
}

/// The telemetry triple shared between the interpreter and the patrol
/// thread.
#[derive(Debug)]
pub struct Telemetry {
    last_tick: AtomicU64,
    venom: AtomicU64,
    active: AtomicBool,
}

impl Telemetry {
    pub fn new() -> Self {
        // Pin the epoch now so every later heartbeat is non-zero.
        monotonic_nanos();
        Telemetry {
            last_tick: AtomicU64::new(0),
            venom: AtomicU64::new(0),
            active: AtomicBool::new(true),
        }
    }

    /// Record "the interpreter is alive right now".
    #[inline(always)]
    pub fn heartbeat(&self) {
        self.last_tick.store(monotonic_nanos(), Ordering::Relaxed);
    }

    /// Current venom word; 0 means the run is clean so far.
    #[inline(always)]
    pub fn venom(&self) -> u64 {
        self.venom.load(Ordering::Relaxed)
    }

    /// Store a venom word. Monotonic by construction: callers only ever
    /// pass non-zero constants and nothing clears the cell within a run.
    #[inline(always)]
    pub fn envenom(&self, venom: u64) {
        debug_assert!(venom != 0, "venom word must be non-zero");
        self.venom.store(venom, Ordering::Relaxed);
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn deactivate(&self) {
        self.active.store(false, Ordering::Relaxed);
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard owning the patrol thread. Dropping it (or calling [`stop`]) clears
/// the run flag and joins, so the thread is released on every exit path —
/// normal completion, early break, or panic.
///
/// [`stop`]: Sentinel::stop
#[derive(Debug)]
pub struct Sentinel {
    telemetry: Arc<Telemetry>,
    patrol: Option<JoinHandle<()>>,
}

impl Sentinel {
    /// Start patrolling with the given profile.
    pub fn deploy(profile: SentinelProfile) -> Self {
        let telemetry = Arc::new(Telemetry::new());
        let shared = Arc::clone(&telemetry);
        let threshold_ns = profile.threshold.as_nanos() as u64;

        let patrol = thread::spawn(move || {
            while shared.is_active() {
                thread::sleep(profile.poll);
                let last = shared.last_tick.load(Ordering::Relaxed);
                if last != 0 && monotonic_nanos().saturating_sub(last) > threshold_ns {
                    shared.envenom(profile.venom);
                }
            }
        });

        Sentinel { telemetry, patrol: Some(patrol) }
    }

    /// Handle to the shared telemetry, for wiring into a VM.
    pub fn telemetry(&self) -> Arc<Telemetry> {
        Arc::clone(&self.telemetry)
    }

    /// Stop patrolling and join the thread.
    pub fn stop(mut self) {
        self.halt_patrol();
    }

    fn halt_patrol(&mut self) {
        self.telemetry.deactivate();
        if let Some(handle) = self.patrol.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Sentinel {
    fn drop(&mut self) {
        self.halt_patrol();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tight profile so the timing tests stay fast. The threshold leaves
    // enough slack that a busy CI scheduler cannot false-trip a clean run.
    const FAST: SentinelProfile = SentinelProfile {
        poll: Duration::from_millis(5),
        threshold: Duration::from_millis(50),
        venom: 0x1337,
    };

    #[test]
    fn test_clean_run_stays_unpoisoned() {
        let sentinel = Sentinel::deploy(FAST);
        let telemetry = sentinel.telemetry();
        for _ in 0..20 {
            telemetry.heartbeat();
            thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(telemetry.venom(), 0);
        sentinel.stop();
    }

    #[test]
    fn test_no_heartbeat_means_no_poison() {
        // last_tick == 0 disarms the check entirely.
        let sentinel = Sentinel::deploy(FAST);
        thread::sleep(Duration::from_millis(60));
        assert_eq!(sentinel.telemetry().venom(), 0);
    }

    #[test]
    fn test_stale_heartbeat_trips() {
        let sentinel = Sentinel::deploy(FAST);
        let telemetry = sentinel.telemetry();
        telemetry.heartbeat();
        thread::sleep(Duration::from_millis(150));
        assert_eq!(telemetry.venom(), FAST.venom);
    }

    #[test]
    fn test_venom_is_monotonic() {
        let sentinel = Sentinel::deploy(FAST);
        let telemetry = sentinel.telemetry();
        telemetry.heartbeat();
        thread::sleep(Duration::from_millis(150));
        assert_eq!(telemetry.venom(), FAST.venom);
        // Fresh heartbeats never rescind the verdict.
        for _ in 0..10 {
            telemetry.heartbeat();
            thread::sleep(Duration::from_millis(2));
            assert_eq!(telemetry.venom(), FAST.venom);
        }
    }

    #[test]
    fn test_stop_joins_patrol() {
        let sentinel = Sentinel::deploy(FAST);
        sentinel.stop();
        // Dropping after stop must not double-join or hang.
    }

    #[test]
    fn test_profiles_are_sane() {
        for profile in [SentinelProfile::ALPHA, SentinelProfile::BETA, SentinelProfile::GAMMA] {
            assert!(profile.venom != 0);
            assert!(profile.poll <= profile.threshold);
        }
    }
}
