pub mod cache;
pub mod fingerprint;
