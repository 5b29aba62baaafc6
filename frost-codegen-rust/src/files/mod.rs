//! Files produced by the Rust backend.

pub use frost_core::GENERATED_HEADER;

mod generated_mod;
mod type_rs;

pub use generated_mod::GeneratedMod;
pub use type_rs::TypeRs;
