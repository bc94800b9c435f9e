//! Proc macros for the trilock crackme family.

use proc_macro::TokenStream;

mod veiled;

/// Conceal a string literal at compile time.
///
/// `veiled!("text", key, step)` stores `text` XOR-masked with the given
/// per-variant parameters and expands to an expression that unveils it at
/// runtime through `trilock_runtime::unveil`. The calling crate must
/// therefore depend on `trilock-runtime`.
///
/// ```ignore
/// println!("{}", veiled!("Enter Key: ", 0x55, 3));
/// ```
#[proc_macro]
pub fn veiled(input: TokenStream) -> TokenStream {
    veiled::generate(input.into()).into()
}
