//! NTLM password hashing (the NT one-way function, NTOWF).
//!
//! As documented in section 3.3 of the [MS-NLMP specification]
//! (https://winprotocoldoc.blob.core.windows.net/productionwindowsarchives/MS-NLMP/[MS-NLMP].pdf),
//! the NT hash of a password is the MD4 digest of its UTF-16LE encoding.
//! This crate computes it and renders it the way password tooling expects:
//! 32 uppercase hex characters.
//!
//! This is a legacy-compatibility hash, not a security primitive; nothing
//! here is constant-time and nothing needs to be.
use byteorder::{ByteOrder, LittleEndian};

mod md4;

pub use md4::Md4;

/// Encodes a string as UTF-16, little-endian byte order, no BOM.
///
/// Characters outside the basic multilingual plane become surrogate pairs,
/// exactly as `str::encode_utf16` produces them. Unpaired surrogates cannot
/// occur in a `&str`, so every input has a well-defined encoding.
pub fn utf16le_bytes(s: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 * s.len());
    let mut unit = [0u8; 2];
    for chr in s.encode_utf16() {
        LittleEndian::write_u16(&mut unit, chr);
        buf.extend_from_slice(&unit);
    }
    buf
}

/// Computes the NTLM hash of a password as a 32-character uppercase hex string.
///
/// ```
/// assert_eq!(nthash::ntlm_hash("password"), "8846F7EAEE8FB117AD06BDD830B7586C");
/// ```
pub fn ntlm_hash(password: &str) -> String {
    hex::encode_upper(Md4::digest(&utf16le_bytes(password)))
}

#[cfg(test)]
mod tests {
    use super::{ntlm_hash, utf16le_bytes};

    #[test]
    fn test_ntlm_known_vectors() {
        assert_eq!(ntlm_hash("password"), "8846F7EAEE8FB117AD06BDD830B7586C");
        // UTF-16LE of the empty string is empty, so this is MD4("")
        assert_eq!(ntlm_hash(""), "31D6CFE0D16AE931B73C59D7E0C089C0");
    }

    #[test]
    fn test_ntlm_case_sensitive() {
        assert_ne!(ntlm_hash("password"), ntlm_hash("Password"));
    }

    #[test]
    fn test_utf16le_encoding() {
        assert_eq!(utf16le_bytes(""), Vec::<u8>::new());
        assert_eq!(utf16le_bytes("ab"), vec![0x61, 0x00, 0x62, 0x00]);
        // U+00FC fits in one unit, U+1F600 needs a surrogate pair
        assert_eq!(utf16le_bytes("\u{fc}"), vec![0xfc, 0x00]);
        assert_eq!(utf16le_bytes("\u{1f600}"), vec![0x3d, 0xd8, 0x00, 0xde]);
    }

    #[test]
    fn test_hash_shape() {
        for pw in &["", "a", "hunter2", "pässwörd", "\u{1f600}"] {
            let hash = ntlm_hash(pw);
            assert_eq!(hash.len(), 32);
            assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }
}
