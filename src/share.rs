//! Report share links.
//!
//! Links are random and never stored, e.g. `https://reports.local/share/Qm7x2KpA`.

use rand::RngExt;

pub const SHARE_BASE: &str = "https://reports.local/share/";
const TOKEN_LEN: usize = 8;
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";

/// Generate a fresh share link for the current report.
pub fn generate_link() -> String {
    let mut rng = rand::rng();
    let token: String = (0..TOKEN_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}{}", SHARE_BASE, token)
}
