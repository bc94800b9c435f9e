//! Offline generator for the gamma challenge.
//!
//! Forging works by simulating the online machine with every opcode pinned
//! to `Mov`: for each step the generator emits the raw byte that will
//! decrypt to `MOV_OPCODE` under the victim's chaos stream, replays the two
//! operand draws the interpreter will make, and applies the move to a
//! simulated register file. After the full run the desired plaintext is
//! XORed against the terminal registers to produce the ciphertext.
//!
//! The single most fragile property here is chaos-stream alignment: the
//! generator and the interpreter must make the same number of draws at the
//! same positions. `Mov` draws nothing beyond the opcode mask and the two
//! operand indices, which is exactly why it is the opcode of choice.

use crate::chaos::ChaosEngine;
use crate::isa::gamma::{MOV_OPCODE, NUM_REGS, STEP_LIMIT};

/// A `(code, cipher)` pair ready to embed in a challenge binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgedChallenge {
    /// Encrypted instruction stream, one byte per step.
    pub code: Vec<u8>,
    /// Plaintext XORed with the terminal register file (cycling mod 16).
    pub cipher: Vec<u8>,
}

/// Forge the embedded data for a challenge that accepts `key` and reveals
/// `plaintext`.
pub fn forge_challenge(key: &str, plaintext: &[u8]) -> ForgedChallenge {
    let mut chaos = ChaosEngine::from_key(key);

    // Mirror the interpreter's construction: 16 draws seed the registers.
    let mut regs = [0u64; NUM_REGS];
    for r in &mut regs {
        *r = chaos.next_byte() as u64;
    }

    let mut code = Vec::with_capacity(STEP_LIMIT);
    for _ in 0..STEP_LIMIT {
        // The interpreter computes `op = raw ^ mask`, so emitting
        // `MOV_OPCODE ^ mask` pins the decoded opcode to Mov.
        let mask = chaos.next_byte();
        code.push(MOV_OPCODE ^ mask);

        // Replay the interpreter's operand draws, in its order.
        let dst = (chaos.next_byte() as usize) % NUM_REGS;
        let src = (chaos.next_byte() as usize) % NUM_REGS;
        regs[dst] = regs[src];
    }

    let cipher = plaintext
        .iter()
        .enumerate()
        .map(|(i, &p)| p ^ (regs[i % NUM_REGS] as u8))
        .collect();

    ForgedChallenge { code, cipher }
}
