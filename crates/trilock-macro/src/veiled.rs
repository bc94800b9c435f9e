//! Implementation of the `veiled!()` proc macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{LitInt, LitStr, Token};

use trilock_core::veil;

struct VeiledInput {
    text: LitStr,
    key: LitInt,
    step: LitInt,
}

impl Parse for VeiledInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let text = input.parse()?;
        input.parse::<Token![,]>()?;
        let key = input.parse()?;
        input.parse::<Token![,]>()?;
        let step = input.parse()?;
        Ok(VeiledInput { text, key, step })
    }
}

/// Generate code that unveils a compile-time-concealed string at runtime.
pub fn generate(input: TokenStream) -> TokenStream {
    let VeiledInput { text, key, step } = match syn::parse2(input) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    let key_val: u8 = match key.base10_parse() {
        Ok(v) => v,
        Err(err) => return err.to_compile_error(),
    };
    let step_val: u8 = match step.base10_parse() {
        Ok(v) => v,
        Err(err) => return err.to_compile_error(),
    };
    if step_val == 0 {
        return syn::Error::new(step.span(), "veil step must be non-zero").to_compile_error();
    }

    let plaintext = text.value();
    let cipher = veil::conceal(plaintext.as_bytes(), key_val, step_val);

    // Verify the roundtrip at expansion time.
    assert_eq!(
        veil::unveil(&cipher, key_val, step_val),
        plaintext.as_bytes(),
        "BUG: veil/unveil roundtrip failed"
    );

    let cipher_len = cipher.len();
    let cipher_bytes = &cipher;

    quote! {
        {
            static __TRILOCK_VEILED: [u8; #cipher_len] = [#(#cipher_bytes),*];
            ::trilock_runtime::unveil::unveil_str(&__TRILOCK_VEILED, #key, #step)
        }
    }
}
