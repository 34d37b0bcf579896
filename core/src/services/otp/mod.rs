//! One-time code generation
//!
//! Two strategies are available, selected by [`OtpStrategy`]:
//! - `derived` reproduces the hex-window derivation existing deployments use
//! - `secure` draws the code uniformly from the OS CSPRNG

mod generator;

pub use generator::{
    derive_code, generator_for, CodeGenerator, DerivedCodeGenerator, SecureCodeGenerator,
};
pub use sm_shared::OtpStrategy;
