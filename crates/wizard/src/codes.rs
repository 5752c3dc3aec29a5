//! Placeholder barcode/EAN generation.
//!
//! Produces fixed-length random digit strings. These are stand-in codes:
//! uniform digits, leading zeros allowed, no check-digit computation, and no
//! uniqueness guarantee across calls or drafts. Real barcode issuance would
//! replace this module wholesale.

use rand::Rng;

/// Which identifier field a generated code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Barcode,
    Ean,
}

impl CodeKind {
    pub const fn digit_count(self) -> usize {
        match self {
            CodeKind::Barcode => 12,
            CodeKind::Ean => 13,
        }
    }
}

/// Generate a code from the given source of randomness. Deterministic under
/// a seeded RNG, which is what the tests use.
pub fn generate_code_with<R: Rng + ?Sized>(kind: CodeKind, rng: &mut R) -> String {
    (0..kind.digit_count())
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Generate a code from thread-local randomness.
pub fn generate_code(kind: CodeKind) -> String {
    generate_code_with(kind, &mut rand::thread_rng())
}
