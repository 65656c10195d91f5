//! # Revision Identifiers (`common::rsid`)
//!
//! File: cli/src/common/rsid.rs
//!
//! Word tags tracked changes with a revision-save ID (RSID): eight uppercase hex
//! digits. `docx-unpack` suggests a fresh one so edits made by hand or by scripts
//! can share a consistent identifier. The value is only printed; nothing is
//! written into the unpacked XML.
//!
//! Not cryptographically secure and not guaranteed unique.
//!
use rand::Rng;

/// Number of characters in an RSID.
pub const RSID_LEN: usize = 8;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// # Generate RSID (`generate_rsid`)
///
/// Produces a fresh revision-save ID for the unpack summary, drawing from the
/// thread-local RNG.
///
/// ## Returns
///
/// * `String` - Eight characters, each one of `0-9A-F`.
///
/// ## Errors
///
/// None. Two calls may return the same value.
pub fn generate_rsid() -> String {
    generate_rsid_with(&mut rand::thread_rng())
}

/// Generates an RSID from the given RNG. Each character is drawn uniformly
/// and independently from `0-9A-F`.
pub fn generate_rsid_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..RSID_LEN)
        .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
        .collect()
}

/// Returns `true` if `value` has the shape of an RSID.
#[cfg(test)]
pub(crate) fn is_rsid(value: &str) -> bool {
    value.len() == RSID_LEN && value.bytes().all(|b| HEX_DIGITS.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_rsid_shape() {
        for _ in 0..200 {
            let rsid = generate_rsid();
            assert_eq!(rsid.len(), 8);
            assert!(is_rsid(&rsid), "unexpected rsid {rsid}");
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = generate_rsid_with(&mut StdRng::seed_from_u64(42));
        let b = generate_rsid_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    /// Every digit shows up given enough draws.
    #[test]
    fn test_covers_full_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<char> = (0..500)
            .flat_map(|_| generate_rsid_with(&mut rng).chars().collect::<Vec<_>>())
            .collect();
        assert_eq!(seen.len(), 16);
        assert!(seen.iter().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_is_rsid() {
        assert!(is_rsid("00A1B2FF"));
        assert!(!is_rsid("00a1b2ff"));
        assert!(!is_rsid("00A1B2F"));
        assert!(!is_rsid("00A1B2FG"));
    }
}
