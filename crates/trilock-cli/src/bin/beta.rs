//! Beta — the second challenge.
//!
//! No success flag anywhere: the secret is always decrypted, and only the
//! correct four-character key leaves `R0` holding the value that makes the
//! decryption mask zero. Strings are veiled with the beta parameters
//! (0x33, step 7).

use std::io;

use trilock_cli::prompt_token;
use trilock_macro::veiled;
use trilock_runtime::driver::{conduct, TIGHT_PACE};
use trilock_runtime::sentinel::SentinelProfile;
use trilock_runtime::vm::beta::BetaVm;

fn main() -> io::Result<()> {
    println!("{}", veiled!("--- BETA LOCK SYSTEM ---", 0x33, 7));

    let key = prompt_token(&veiled!("Authenticate: ", 0x33, 7))?;

    let secret = veiled!("Access Granted! Welcome to the BETA sector.", 0x33, 7);
    let (vm, _) = conduct(SentinelProfile::BETA, TIGHT_PACE, |telemetry| {
        BetaVm::new(&key, secret.into_bytes(), telemetry)
    });

    let response = String::from_utf8_lossy(vm.output().unwrap_or(&[])).into_owned();
    println!("{}{}", veiled!("System Response: ", 0x33, 7), response);

    Ok(())
}
