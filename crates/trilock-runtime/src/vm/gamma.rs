//! Gamma interpreter.
//!
//! Nothing in the embedded code is meaningful on its own: each opcode byte
//! is XORed against the keyed chaos stream (and the sentinel's venom) at
//! fetch time, and operand registers are drawn live from the same stream.
//! A wrong key therefore doesn't fail a check — it decodes a different
//! program. The run always lasts exactly `STEP_LIMIT` steps; the terminal
//! register file is the decryption key for the embedded ciphertext.
//!
//! The draw order per step — opcode mask, math sub-op iff `Math`, then the
//! two operand indices — is mirrored byte-for-byte by `trilock_core::forge`.

use std::sync::Arc;

use trilock_core::chaos::ChaosEngine;
use trilock_core::isa::gamma::{GammaOp, MathOp, JMP_MASK, NUM_REGS, STEP_LIMIT};

use crate::sentinel::Telemetry;
use crate::vm::Tick;

pub struct GammaVm {
    regs: [u64; NUM_REGS],
    chaos: ChaosEngine,
    code: Vec<u8>,
    cipher: Vec<u8>,
    pc: usize,
    steps: usize,
    output: Option<Vec<u8>>,
    telemetry: Arc<Telemetry>,
}

impl GammaVm {
    pub fn new(key: &str, code: Vec<u8>, cipher: Vec<u8>, telemetry: Arc<Telemetry>) -> Self {
        let mut chaos = ChaosEngine::from_key(key);
        let mut regs = [0u64; NUM_REGS];
        for r in &mut regs {
            *r = chaos.next_byte() as u64;
        }
        GammaVm {
            regs,
            chaos,
            code,
            cipher,
            pc: 0,
            steps: 0,
            output: None,
            telemetry,
        }
    }

    /// Decrypted output; `None` until the run completes.
    pub fn output(&self) -> Option<&[u8]> {
        self.output.as_deref()
    }

    pub fn registers(&self) -> &[u64; NUM_REGS] {
        &self.regs
    }

    /// Chaos draws made so far, for alignment checks against the forge.
    pub fn chaos_draws(&self) -> u64 {
        self.chaos.drawn()
    }

    fn epilogue(&mut self) {
        let out = self
            .cipher
            .iter()
            .enumerate()
            .map(|(i, &c)| c ^ (self.regs[i % NUM_REGS] as u8))
            .collect();
        self.output = Some(out);
    }
}

impl Iterator for GammaVm {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.output.is_some() {
            return None;
        }
        if self.steps >= STEP_LIMIT {
            self.epilogue();
            return None;
        }

        self.telemetry.heartbeat();

        // Fetch: the code ring is indexed modulo its length, so even wild
        // jumps stay in bounds.
        let raw = if self.code.is_empty() {
            0
        } else {
            self.code[self.pc % self.code.len()]
        };
        let mask = self.chaos.next_byte();
        let venom = self.telemetry.venom() as u8;
        let op = raw ^ mask ^ venom;

        let inst = GammaOp::decode(op, &mut self.chaos);
        let a = (self.chaos.next_byte() as usize) % NUM_REGS;
        let b = (self.chaos.next_byte() as usize) % NUM_REGS;

        let fetched_at = self.pc;
        match inst {
            GammaOp::Math(MathOp::Add) => {
                self.regs[a] = self.regs[a].wrapping_add(self.regs[b]);
            }
            GammaOp::Math(MathOp::Sub) => {
                self.regs[a] = self.regs[a].wrapping_sub(self.regs[b]);
            }
            GammaOp::Math(MathOp::Xor) => {
                self.regs[a] ^= self.regs[b];
            }
            GammaOp::Math(MathOp::Mul) => {
                self.regs[a] = self.regs[a].wrapping_mul(self.regs[b] | 1);
            }
            GammaOp::Mov => {
                self.regs[a] = self.regs[b];
            }
            GammaOp::Jmp => {
                self.pc += (self.regs[a] & JMP_MASK) as usize;
            }
            GammaOp::Sys => {
                self.regs[0] = self.regs[0].rotate_left(3);
            }
        }

        self.pc += 1;
        self.steps += 1;
        Some(Tick { pc: fetched_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trilock_core::forge::forge_challenge;

    const PLAINTEXT: &[u8] = b"Congratulations! The Gamma core is dissolved.";

    fn run(key: &str, code: Vec<u8>, cipher: Vec<u8>) -> GammaVm {
        let mut vm = GammaVm::new(key, code, cipher, Arc::new(Telemetry::new()));
        while vm.next().is_some() {}
        vm
    }

    #[test]
    fn test_matched_key_dissolves_the_core() {
        let forged = forge_challenge("unit test key", PLAINTEXT);
        let vm = run("unit test key", forged.code, forged.cipher);
        assert_eq!(vm.output(), Some(PLAINTEXT));
    }

    #[test]
    fn test_mismatched_key_garbles() {
        let forged = forge_challenge("the real key", PLAINTEXT);
        let vm = run("not the key", forged.code, forged.cipher);
        let out = vm.output().unwrap();
        assert_eq!(out.len(), PLAINTEXT.len());
        assert_ne!(out, PLAINTEXT);
    }

    #[test]
    fn test_draw_alignment_with_forge() {
        // The generator and the interpreter must consume the chaos stream
        // draw-for-draw: 16 register seeds + 3 per (all-Mov) step.
        let forged = forge_challenge("aligned", PLAINTEXT);
        let vm = run("aligned", forged.code, forged.cipher);
        assert_eq!(vm.chaos_draws(), (NUM_REGS + 3 * STEP_LIMIT) as u64);
    }

    #[test]
    fn test_run_is_exactly_step_limit_steps() {
        let forged = forge_challenge("steps", PLAINTEXT);
        let mut vm = GammaVm::new("steps", forged.code, forged.cipher, Arc::new(Telemetry::new()));
        assert_eq!(vm.by_ref().count(), STEP_LIMIT);
        assert!(vm.output().is_some());
    }

    #[test]
    fn test_arbitrary_code_blob_never_faults() {
        // Any byte soup decodes to *some* instruction sequence (P4): all
        // four opcode classes and every math sub-op are total.
        let code: Vec<u8> = (0..=255).collect();
        let vm = run("fuzz", code, vec![0xAB; 7]);
        assert_eq!(vm.output().unwrap().len(), 7);
    }

    #[test]
    fn test_empty_code_reads_zero_bytes() {
        let vm = run("empty", Vec::new(), vec![0x55; 3]);
        assert!(vm.output().is_some());
    }

    #[test]
    fn test_venom_decodes_a_different_program() {
        let forged = forge_challenge("poisoned run", PLAINTEXT);
        let telemetry = Arc::new(Telemetry::new());
        let mut vm = GammaVm::new(
            "poisoned run",
            forged.code,
            forged.cipher,
            Arc::clone(&telemetry),
        );
        telemetry.envenom(0xFF);
        while vm.next().is_some() {}
        assert_ne!(vm.output().unwrap(), PLAINTEXT);
    }

    #[test]
    fn test_fuzzed_blobs_and_keys_never_fault() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha20Rng;

        let mut rng = ChaCha20Rng::seed_from_u64(0xB10B);
        for _ in 0..32 {
            let key: String = (0..rng.gen_range(0..16))
                .map(|_| rng.gen_range('!'..='~'))
                .collect();
            let code: Vec<u8> = (0..rng.gen_range(1..600)).map(|_| rng.gen()).collect();
            let cipher: Vec<u8> = (0..rng.gen_range(0..80)).map(|_| rng.gen()).collect();
            let cipher_len = cipher.len();
            let vm = run(&key, code, cipher);
            assert_eq!(vm.output().unwrap().len(), cipher_len);
        }
    }

    #[test]
    fn test_empty_key_still_runs() {
        let forged = forge_challenge("", PLAINTEXT);
        let vm = run("", forged.code, forged.cipher);
        assert_eq!(vm.output(), Some(PLAINTEXT));
    }
}
