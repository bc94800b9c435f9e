//! Offline companion generator for the gamma challenge.
//!
//! Forges the `(encrypted_code, secret_cipher)` pair for a chosen key and
//! plaintext, and prints it as Rust source ready to paste over
//! `trilock-cli/src/payload.rs`. Nothing here is veiled — this tool never
//! ships to challengers.

use std::io;

use clap::Parser;

use trilock_cli::prompt_line;
use trilock_core::forge::forge_challenge;

/// Fallback key, kept from the original tooling so an absent-minded run
/// still produces a working (if trivially guessable) challenge.
const DEFAULT_KEY: &str = "1234";

#[derive(Parser, Debug)]
#[command(name = "gamma-keygen", version, about = "Forge embedded data for the gamma challenge")]
struct Cli {
    /// Key the finished challenge should accept (prompted on stdin when omitted)
    #[arg(short, long)]
    key: Option<String>,

    /// Plaintext revealed by a correct run
    #[arg(
        short,
        long,
        default_value = "Congratulations! The Gamma core is dissolved."
    )]
    plaintext: String,
}

fn print_array(name: &str, data: &[u8]) {
    println!("pub const {}: [u8; {}] = [", name, data.len());
    for chunk in data.chunks(12) {
        let row: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X},")).collect();
        println!("    {}", row.join(" "));
    }
    println!("];");
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut key = match cli.key {
        Some(key) => key,
        None => prompt_line("Enter the password you want to use as the VALID KEY: ")?,
    };
    if key.is_empty() {
        key = DEFAULT_KEY.to_string();
    }

    let forged = forge_challenge(&key, cli.plaintext.as_bytes());

    println!("// ==== paste over crates/trilock-cli/src/payload.rs ====");
    print_array("ENCRYPTED_CODE", &forged.code);
    println!();
    print_array("SECRET_CIPHER", &forged.cipher);
    println!("// =======================================================");

    Ok(())
}
