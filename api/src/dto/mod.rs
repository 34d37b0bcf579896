pub mod mfa;

pub use mfa::*;
