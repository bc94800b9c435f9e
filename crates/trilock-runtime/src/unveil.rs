//! Runtime string unveiling.
//!
//! Called from code generated by the `veiled!` macro. The masking pass is
//! duplicated from `trilock_core::veil` rather than imported, and kept
//! `#[inline(always)]`, so the unveiling has no single callsite an analyst
//! can breakpoint once and own. MUST stay in sync with
//! `trilock_core::veil::unveil`.

/// Unveil a concealed banner/outcome string.
#[inline(always)]
pub fn unveil_str(cipher: &[u8], key: u8, step: u8) -> String {
    let bytes: Vec<u8> = cipher
        .iter()
        .enumerate()
        .map(|(i, &b)| b ^ key ^ (i % step as usize) as u8)
        .collect();
    // The plaintext was a Rust string literal; anything else decodes lossily
    // rather than panicking.
    String::from_utf8_lossy(&bytes).into_owned()
}
