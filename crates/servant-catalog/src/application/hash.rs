use std::path::Path;

use servant_catalog_core::CatalogConfig;
use sha2::{Digest, Sha256};

use crate::infrastructure::file_io;
use crate::CatalogError;

pub(crate) fn sha256_file(path: &Path) -> Result<String, CatalogError> {
    let bytes = file_io::read_bytes(path)?;
    Ok(sha256_hex(&bytes))
}

/// Stable across runs: the image table is ordered and tiers keep their order.
pub(crate) fn catalog_fingerprint(config: &CatalogConfig) -> Result<String, CatalogError> {
    let bytes = serde_json::to_vec(config)?;
    Ok(sha256_hex(&bytes))
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest: [u8; 32] = hasher.finalize().into();
    let mut out = String::with_capacity(64);

    for byte in digest {
        out.push(hex_digit(byte >> 4));
        out.push(hex_digit(byte & 0x0f));
    }

    out
}

fn hex_digit(value: u8) -> char {
    match value {
        0..=9 => (b'0' + value) as char,
        _ => (b'a' + (value - 10)) as char,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
