//! Alpha — the entry challenge.
//!
//! Single check over the first key byte, stretched across the VM so no one
//! instruction gives the game away. Banner and outcome strings are veiled
//! with the alpha parameters (0x55, step 3).

use std::io;

use trilock_cli::prompt_token;
use trilock_macro::veiled;
use trilock_runtime::driver::{conduct, ALPHA_PACE};
use trilock_runtime::sentinel::SentinelProfile;
use trilock_runtime::vm::alpha::AlphaVm;

fn main() -> io::Result<()> {
    println!("{}", veiled!("################################", 0x55, 3));
    println!("{}", veiled!("#   TOP TIER CRACKME v1.0      #", 0x55, 3));
    println!("{}", veiled!("################################", 0x55, 3));

    let key = prompt_token(&veiled!("Enter Key: ", 0x55, 3))?;
    if key.is_empty() {
        return Ok(());
    }

    let (vm, _) = conduct(SentinelProfile::ALPHA, ALPHA_PACE, |telemetry| {
        AlphaVm::new(&key, telemetry)
    });

    if vm.succeeded() {
        println!("\n{}", veiled!("[+] ACCESS GRANTED. Welcome, Master.", 0x55, 3));
    } else {
        println!("\n{}", veiled!("[-] ACCESS DENIED. The system is locked.", 0x55, 3));
    }

    Ok(())
}
