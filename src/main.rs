use clap::Parser;

use nthash::ntlm_hash;

/// Compute the NTLM (NT) hash of a password.
///
/// Prints the MD4 digest of the UTF-16LE encoded password as 32 uppercase
/// hex characters.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Plaintext password to hash
    password: String,
}

fn main() {
    let cli = Cli::parse();
    println!("{}", ntlm_hash(&cli.password));
}
