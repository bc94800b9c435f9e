//! Cross-crate property tests: the quantified invariants the whole design
//! leans on, exercised over fuzzed corpora.

use std::sync::Arc;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use trilock::chaos::ChaosEngine;
use trilock::driver::conduct;
use trilock::forge::forge_challenge;
use trilock::isa::gamma::{NUM_REGS, STEP_LIMIT};
use trilock::sentinel::{SentinelProfile, Telemetry};
use trilock::vm::alpha::AlphaVm;
use trilock::vm::beta::BetaVm;
use trilock::vm::gamma::GammaVm;

fn random_key(rng: &mut ChaCha20Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen_range('!'..='~')).collect()
}

// P1: two independent engines with the same seed emit identical streams.
#[test]
fn test_chaos_determinism() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..32 {
        let key = random_key(&mut rng, 40);
        let mut a = ChaosEngine::from_key(&key);
        let mut b = ChaosEngine::from_key(&key);
        for _ in 0..1024 {
            assert_eq!(a.next_byte(), b.next_byte());
        }
    }
}

// P2: the online VM consumes the chaos stream exactly as the generator did
// when producing the code it is executing.
#[test]
fn test_generator_vm_alignment() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..16 {
        let key = random_key(&mut rng, 24);
        let forged = forge_challenge(&key, b"alignment probe");

        let mut generator_chaos = ChaosEngine::from_key(&key);
        for _ in 0..NUM_REGS + 3 * STEP_LIMIT {
            generator_chaos.next_byte();
        }

        let mut vm = GammaVm::new(&key, forged.code, forged.cipher, Arc::new(Telemetry::new()));
        while vm.next().is_some() {}

        assert_eq!(vm.chaos_draws(), generator_chaos.drawn());
        assert_eq!(vm.output(), Some(&b"alignment probe"[..]));
    }
}

// P3: once the venom word goes non-zero, the interpreter never observes it
// return to zero.
#[test]
fn test_monotonic_venom() {
    let telemetry = Arc::new(Telemetry::new());
    let forged = forge_challenge("monotone", b"xxxxxxxx");
    let mut vm = GammaVm::new("monotone", forged.code, forged.cipher, Arc::clone(&telemetry));

    let mut seen_nonzero = false;
    for step in 0..STEP_LIMIT {
        if step == 40 {
            telemetry.envenom(0xFF);
        }
        assert!(vm.next().is_some());
        let venom = telemetry.venom();
        if seen_nonzero {
            assert_ne!(venom, 0, "venom must never revert to zero");
        }
        seen_nonzero |= venom != 0;
    }
    assert!(seen_nonzero);
}

// P4 / P5: every machine completes on fuzzed keys of every length without
// faulting, including keys shorter than the highest index read.
#[test]
fn test_total_dispatch_and_oob_safety() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    for _ in 0..64 {
        let key = random_key(&mut rng, 12);

        let mut alpha = AlphaVm::new(&key, Arc::new(Telemetry::new()));
        while alpha.next().is_some() {}

        let mut beta = BetaVm::new(&key, b"secret text".to_vec(), Arc::new(Telemetry::new()));
        while beta.next().is_some() {}
        assert!(beta.output().is_some());

        let code: Vec<u8> = (0..rng.gen_range(1..512)).map(|_| rng.gen()).collect();
        let mut gamma = GammaVm::new(&key, code, vec![0u8; 9], Arc::new(Telemetry::new()));
        while gamma.next().is_some() {}
        assert!(gamma.output().is_some());
    }
}

// P6: driver resumptions = executed instructions + 1, for all variants.
#[test]
fn test_cooperation_count() {
    let (_, resumptions) =
        conduct(SentinelProfile::ALPHA, Duration::ZERO, |t| AlphaVm::new("A", t));
    assert_eq!(resumptions, 6 + 1);

    let (_, resumptions) = conduct(SentinelProfile::BETA, Duration::ZERO, |t| {
        BetaVm::new("BET@", b"s".to_vec(), t)
    });
    assert_eq!(resumptions, 17 + 1);

    let forged = forge_challenge("p6", b"p6");
    let (_, resumptions) = conduct(SentinelProfile::GAMMA, Duration::ZERO, |t| {
        GammaVm::new("p6", forged.code.clone(), forged.cipher.clone(), t)
    });
    assert_eq!(resumptions, STEP_LIMIT + 1);
}
