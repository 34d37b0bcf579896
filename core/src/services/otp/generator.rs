//! Code generator implementations

use rand::{rngs::OsRng, Rng, RngCore};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use sm_shared::OtpStrategy;

use crate::domain::entities::pending_verification::CODE_LENGTH;
use crate::domain::value_objects::Principal;

const CODE_MODULUS: u64 = 1_000_000;
const WINDOW_LEN: usize = 6;
const WINDOW_STEP: usize = 5;

/// Produces six-digit, zero-padded numeric codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, principal: &Principal) -> String;
}

/// Derives the code from the current time, the username and a random
/// number in `[1000, 9999)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedCodeGenerator;

impl CodeGenerator for DerivedCodeGenerator {
    fn generate(&self, principal: &Principal) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        let random = OsRng.gen_range(1000..9999);

        derive_code(timestamp, &principal.username, random)
    }
}

/// Hex-window derivation.
///
/// The string `{timestamp}{identity}{random}` is hex encoded, then every
/// window of six hex digits starting at multiples of five (the last one may
/// be shorter) is parsed and summed modulo one million.
///
/// `timestamp` renders in shortest round-trip form and always carries a
/// fractional part, so `1700000000.0` stays `1700000000.0`.
pub fn derive_code(timestamp: f64, identity: &str, random: u32) -> String {
    let seed = format!("{:?}{}{}", timestamp, identity, random);
    let encoded = hex::encode(seed.as_bytes());

    let mut acc: u64 = 0;
    let mut idx = 0;
    while idx < encoded.len() {
        let end = (idx + WINDOW_LEN).min(encoded.len());
        // Hex digits only, parsing cannot fail.
        let value = u64::from_str_radix(&encoded[idx..end], 16).unwrap_or_default();
        acc = (acc + value) % CODE_MODULUS;
        idx += WINDOW_STEP;
    }

    format!("{:0width$}", acc, width = CODE_LENGTH)
}

/// Uniform code from the OS CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureCodeGenerator;

impl SecureCodeGenerator {
    pub fn generate_secure_code() -> String {
        let mut rng = OsRng;
        let mut bytes = [0u8; 4];
        rng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes);
        // Modulo bias is below 0.03% for a 32-bit source
        let code = u64::from(num) % CODE_MODULUS;
        format!("{:0width$}", code, width = CODE_LENGTH)
    }
}

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self, _principal: &Principal) -> String {
        Self::generate_secure_code()
    }
}

/// Generator for a configured strategy
pub fn generator_for(strategy: OtpStrategy) -> Arc<dyn CodeGenerator> {
    match strategy {
        OtpStrategy::Derived => Arc::new(DerivedCodeGenerator),
        OtpStrategy::Secure => Arc::new(SecureCodeGenerator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_six_digits(code: &str) -> bool {
        code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
    }

    #[test]
    fn test_derive_code_known_vectors() {
        assert_eq!(derive_code(1700000000.123456, "alice", 4242), "006266");
        assert_eq!(derive_code(1700000000.0, "admin@example.com", 1000), "793366");
        assert_eq!(derive_code(1712345678.9, "bob", 1234), "226376");
    }

    #[test]
    fn test_derive_code_short_input_uses_partial_window() {
        // hex "312e3539393938" has a trailing four-digit window
        assert_eq!(derive_code(1.5, "", 9998), "715008");
    }

    #[test]
    fn test_derived_generator_yields_six_digits() {
        let principal = Principal::new("alice");
        for _ in 0..200 {
            let code = DerivedCodeGenerator.generate(&principal);
            assert!(is_six_digits(&code), "bad code {}", code);
        }
    }

    #[test]
    fn test_secure_generator_yields_six_digits() {
        let principal = Principal::new("alice");
        for _ in 0..200 {
            let code = SecureCodeGenerator.generate(&principal);
            assert!(is_six_digits(&code), "bad code {}", code);
        }
    }

    #[test]
    fn test_generator_for_strategy() {
        let principal = Principal::new("alice");
        assert!(is_six_digits(&generator_for(OtpStrategy::Derived).generate(&principal)));
        assert!(is_six_digits(&generator_for(OtpStrategy::Secure).generate(&principal)));
    }
}
