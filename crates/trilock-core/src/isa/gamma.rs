//! Gamma instruction set: opcodes decoded live from the chaos stream.
//!
//! Gamma instructions carry no operands. Every operand index is drawn from
//! the chaos engine at dispatch time, which is why the offline generator
//! must mirror the draw order exactly — see `forge`.

use crate::chaos::ChaosEngine;

/// Number of general-purpose registers in the gamma machine.
pub const NUM_REGS: usize = 16;

/// A gamma run executes exactly this many steps, counted by the step
/// counter rather than the program counter.
pub const STEP_LIMIT: usize = 256;

/// Mask applied to the register value consumed by `Jmp`: forward hops of
/// at most 31 slots, so a wild register never escapes the code ring.
pub const JMP_MASK: u64 = 0x1F;

/// The decoded opcode value the generator forces every step to:
/// `0x01 % 4 == 1` selects `Mov`, the one instruction whose effect on the
/// register file is predictable in closed form.
pub const MOV_OPCODE: u8 = 0x01;

/// Arithmetic sub-operation selected by an extra chaos draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Add,
    Sub,
    Xor,
    /// The source operand is OR'd with 1 so a zero register cannot wipe
    /// the destination.
    Mul,
}

impl MathOp {
    fn from_byte(b: u8) -> Self {
        match b % 4 {
            0 => MathOp::Add,
            1 => MathOp::Sub,
            2 => MathOp::Xor,
            _ => MathOp::Mul,
        }
    }
}

/// Gamma instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GammaOp {
    /// `regs[a] op= regs[b]`
    Math(MathOp),
    /// `regs[a] = regs[b]`
    Mov,
    /// `pc += regs[a] & JMP_MASK` — a data-dependent forward hop
    Jmp,
    /// `regs[0] = regs[0].rotate_left(3)`
    Sys,
}

impl GammaOp {
    /// Map a decrypted opcode byte to an instruction.
    ///
    /// Draw order matters: `Math` consumes one extra chaos draw for its
    /// sub-operation, before the caller draws the two operand indices.
    pub fn decode(op: u8, chaos: &mut ChaosEngine) -> Self {
        match op % 4 {
            0 => GammaOp::Math(MathOp::from_byte(chaos.next_byte())),
            1 => GammaOp::Mov,
            2 => GammaOp::Jmp,
            _ => GammaOp::Sys,
        }
    }
}
