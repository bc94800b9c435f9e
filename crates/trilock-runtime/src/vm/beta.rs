//! Beta interpreter.
//!
//! Control flow is the weapon here: `AssertEq` redirects the program
//! counter to an out-of-range sentinel instead of raising anything, and
//! the epilogue always decrypts the secret — with a mask derived from
//! `R0`, which only the correct path leaves at `0x84`. There is no success
//! flag; a wrong key or a poisoned run shows up as garble.

use std::sync::Arc;

use trilock_core::isa::beta::{BetaOp, FAIL_REG0, FAIL_SENTINEL, NUM_REGS};

use crate::sentinel::Telemetry;
use crate::vm::{input_byte, Tick};

/// XOR of this against `R0 & 0xFF` yields the per-byte decryption mask;
/// the correct path makes the mask 0.
const EPILOGUE_KEY: u8 = 0x84;

pub struct BetaVm {
    regs: [u64; NUM_REGS],
    program: Vec<BetaOp>,
    input: Vec<u8>,
    secret: Vec<u8>,
    pc: usize,
    output: Option<Vec<u8>>,
    telemetry: Arc<Telemetry>,
}

impl BetaVm {
    /// `secret` is the already-unveiled plaintext revealed by a correct run.
    pub fn new(key: &str, secret: Vec<u8>, telemetry: Arc<Telemetry>) -> Self {
        BetaVm {
            regs: [0; NUM_REGS],
            program: trilock_core::isa::beta::program_for(key.as_bytes()),
            input: key.as_bytes().to_vec(),
            secret,
            pc: 0,
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

    /// Runs exactly once, on the completing `next()` call.
    fn epilogue(&mut self) {
        let mask = (self.regs[0] & 0xFF) as u8 ^ EPILOGUE_KEY;
        self.output = Some(self.secret.iter().map(|&b| b ^ mask).collect());
    }
}

impl Iterator for BetaVm {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.output.is_some() {
            return None;
        }
        if self.pc >= FAIL_SENTINEL {
            // Wrong path taken: plant a garbage key, decrypt anyway.
            self.regs[0] = FAIL_REG0;
            self.epilogue();
            return None;
        }
        if self.pc >= self.program.len() {
            self.epilogue();
            return None;
        }

        self.telemetry.heartbeat();
        let noise = self.telemetry.venom();

        let fetched_at = self.pc;
        match self.program[self.pc] {
            BetaOp::LoadByte { reg, idx } => {
                self.regs[reg] = input_byte(&self.input, idx) ^ noise;
            }
            BetaOp::Add { r1, r2 } => {
                self.regs[r1] = self.regs[r1].wrapping_add(self.regs[r2]);
            }
            BetaOp::Xor { r1, r2 } => {
                self.regs[r1] ^= self.regs[r2];
            }
            BetaOp::RotateLeft { reg, shift } => {
                debug_assert!(shift > 0 && shift < 64, "builder contract: shift in (0, 64)");
                self.regs[reg] = self.regs[reg].rotate_left(shift);
            }
            BetaOp::AssertEq { reg, value, fail_jump } => {
                if self.regs[reg] != value {
                    // The redirect replaces the normal advance.
                    self.pc = fail_jump;
                    return Some(Tick { pc: fetched_at });
                }
            }
        }

        self.pc += 1;
        Some(Tick { pc: fetched_at })
    }
}
