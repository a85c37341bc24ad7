//! The served public key.

pub const PUBLIC_KEY: &str = "Public key served by SomeJavaClass.getPublicKey";

pub fn public_key() -> &'static str {
    PUBLIC_KEY
}
