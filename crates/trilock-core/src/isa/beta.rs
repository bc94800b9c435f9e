//! Beta instruction set and the key-dependent program builder.

/// Number of general-purpose registers in the beta machine.
pub const NUM_REGS: usize = 8;

/// Sentinel program counter: any jump here means "wrong path taken".
/// It is far beyond every real program, so the interpreter treats reaching
/// it as entry into the failure epilogue rather than an error.
pub const FAIL_SENTINEL: usize = 999;

/// Register value planted by the failure epilogue before decryption, so a
/// wrong path still decrypts — to garbage.
pub const FAIL_REG0: u64 = 0xDEAD;

/// The accepted key length. Anything else gets an unsatisfiable assertion
/// prepended to its program.
pub const KEY_LEN: usize = 4;

/// Beta instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetaOp {
    /// Rd = key byte at `idx` (zero when out of range), XORed with the
    /// sentinel's venom word
    LoadByte { reg: usize, idx: usize },
    /// R1 += R2 (wrapping)
    Add { r1: usize, r2: usize },
    /// R1 ^= R2
    Xor { r1: usize, r2: usize },
    /// R1 = R1 rotated left by `shift`. The builder only emits shifts in
    /// (0, 64); anything else is a programmer error.
    RotateLeft { reg: usize, shift: u32 },
    /// On `Rd != value`, redirect the program counter to `fail_jump`
    /// instead of advancing. The sole early-exit mechanism.
    AssertEq { reg: usize, value: u64, fail_jump: usize },
}

/// Build the beta program for a given key.
///
/// A key of the wrong length earns an unsatisfiable opening assertion that
/// routes straight to the sentinel; the staged per-character checks follow
/// either way so the program shape leaks nothing about where it failed.
pub fn program_for(key: &[u8]) -> Vec<BetaOp> {
    let mut code = Vec::with_capacity(20);

    if key.len() != KEY_LEN {
        code.push(BetaOp::AssertEq { reg: 0, value: 0xDEAD_BEEF, fail_jump: FAIL_SENTINEL });
    }

    // 'B': R0 = 0x42 + 0x42 = 0x84
    code.push(BetaOp::LoadByte { reg: 0, idx: 0 });
    code.push(BetaOp::Add { r1: 0, r2: 0 });
    code.push(BetaOp::AssertEq { reg: 0, value: 0x84, fail_jump: FAIL_SENTINEL });

    // 'E': R1 = 0x45 ^ 0x84 = 0xC1
    code.push(BetaOp::LoadByte { reg: 1, idx: 1 });
    code.push(BetaOp::Xor { r1: 1, r2: 0 });
    code.push(BetaOp::AssertEq { reg: 1, value: 0xC1, fail_jump: FAIL_SENTINEL });

    // 'T': R2 = (0x54 + 0xC1) rol 4 = 0x1150
    code.push(BetaOp::LoadByte { reg: 2, idx: 2 });
    code.push(BetaOp::Add { r1: 2, r2: 1 });
    code.push(BetaOp::RotateLeft { reg: 2, shift: 4 });
    code.push(BetaOp::AssertEq { reg: 2, value: 0x1150, fail_jump: FAIL_SENTINEL });

    // '@': R3 = 0x40 ^ 0x1150 ^ 0x84 = 0x1194
    code.push(BetaOp::LoadByte { reg: 3, idx: 3 });
    code.push(BetaOp::Xor { r1: 3, r2: 2 });
    code.push(BetaOp::Xor { r1: 3, r2: 0 });
    code.push(BetaOp::AssertEq { reg: 3, value: 0x1194, fail_jump: FAIL_SENTINEL });

    // Scramble R0 through an intermediate state, then restore it to 0x84 —
    // the value the epilogue's decryption mask is built from.
    code.push(BetaOp::Xor { r1: 0, r2: 3 });
    code.push(BetaOp::AssertEq { reg: 0, value: 0x1110, fail_jump: FAIL_SENTINEL });
    code.push(BetaOp::Xor { r1: 0, r2: 3 });

    code
}
