//! Gamma — the final challenge.
//!
//! The embedded code blob only decodes into the intended all-`Mov` program
//! under the chaos stream of the release key; any other key runs a
//! different 256-step program and decrypts the ciphertext with the wrong
//! register file. Keys may contain spaces, so the whole line is the key.
//! Strings are veiled with the gamma parameters (0xAA, step 13).

use std::io;

use trilock_cli::{payload, prompt_line};
use trilock_macro::veiled;
use trilock_runtime::driver::{conduct, TIGHT_PACE};
use trilock_runtime::sentinel::SentinelProfile;
use trilock_runtime::vm::gamma::GammaVm;

fn main() -> io::Result<()> {
    println!("\n{}", veiled!("=== GAMMA SECURITY LAYER ===", 0xAA, 13));

    let key = prompt_line(&veiled!("Input Authorization Key: ", 0xAA, 13))?;

    let (vm, _) = conduct(SentinelProfile::GAMMA, TIGHT_PACE, |telemetry| {
        GammaVm::new(
            &key,
            payload::ENCRYPTED_CODE.to_vec(),
            payload::SECRET_CIPHER.to_vec(),
            telemetry,
        )
    });

    let output = String::from_utf8_lossy(vm.output().unwrap_or(&[])).into_owned();
    println!(
        "{}{}{}",
        veiled!("System Output: [ ", 0xAA, 13),
        output,
        veiled!(" ]", 0xAA, 13)
    );

    Ok(())
}
