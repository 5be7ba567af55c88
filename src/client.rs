//! Unified client interface for astrocast.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::AstrocastClientBuilder;
pub use core::AstrocastClient;
