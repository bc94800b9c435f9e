//! The chaos engine — a keyed deterministic PRNG.
//!
//! The engine is what entangles the user's key with everything else: it
//! decrypts gamma opcodes, selects operand registers, and seeds the initial
//! register file. The offline generator re-plays the exact same stream, so
//! the implementation here is a wire format, not an implementation detail.
//! It must never be swapped for a library RNG.

/// FNV-1a 64 offset basis.
const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

/// FNV-1a 64 prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Keyed deterministic byte stream: FNV-1a 64 seeding, xorshift64 stepping.
///
/// Two engines constructed from the same seed emit identical streams; the
/// `drawn` counter makes draw-count alignment between the online VM and the
/// offline generator directly checkable.
#[derive(Debug, Clone)]
pub struct ChaosEngine {
    state: u64,
    drawn: u64,
}

impl ChaosEngine {
    /// Seed from a user key string.
    pub fn from_key(key: &str) -> Self {
        Self::from_bytes(key.as_bytes())
    }

    /// Seed from raw bytes: FNV-1a 64 over the seed material.
    pub fn from_bytes(seed: &[u8]) -> Self {
        let mut state = FNV_OFFSET_BASIS;
        for &b in seed {
            state ^= b as u64;
            state = state.wrapping_mul(FNV_PRIME);
        }
        ChaosEngine { state, drawn: 0 }
    }

    /// Advance the xorshift64 state and return the low 8 bits.
    pub fn next_byte(&mut self) -> u8 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        self.drawn += 1;
        (x & 0xFF) as u8
    }

    /// Total number of draws made so far.
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}
