//! # zno-hal
//!
//! An ownership-transferring builder protocol and boundary-safety layer for
//! native BGV context libraries.
//!
//! A BGV context is described by a cyclotomic index `m`, a plaintext prime
//! `p` lifted to `p^r`, the size of the ciphertext modulus chain (`bits`),
//! the number of key-switching columns (`c`), optional structure of `Z_m^*`
//! (`gens`, `ords`, `mvec`) and a bootstrapping mode. The native library
//! stages these in a mutable builder and turns them into an immutable
//! context on finalize. This crate puts a safe host-side surface on that
//! protocol.
//!
//! ## Core Concepts
//!
//! **Ownership transfer:** a [`layouts::Builder`] is taken by value by every
//! configuration step and by finalize. A step hands back a fresh builder on
//! success and releases the consumed one on failure, so a staged builder is
//! never reachable from two places and never leaked.
//!
//! **Marshaling:** host sequences are copied into owned native sequences
//! ([`marshal::marshal_seq`]) and native optionals are read back as
//! `Option` ([`marshal::to_optional`]). Nothing crosses the boundary by
//! reference.
//!
//! **Error translation:** every call that can fail on the native side runs
//! inside [`error::guard`]. Native faults and panics are logged through
//! `tracing` and surface as [`error::Error::Generic`]. Checks done on the
//! host side report [`error::Error::Zero`] and [`error::Error::OutOfRange`].
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe, user-facing traits (e.g. [`api::BuilderSetParam`],
//!    [`api::BuilderFinalize`], [`api::ContextGetParam`]).
//! 2. **[`oep`]** -- Unsafe extension-point traits mirroring the API (e.g.
//!    [`oep::BuilderBuildImpl`]). Backend crates implement these.
//! 3. **[`delegates`]** -- Blanket `impl` glue connecting each [`api`] trait
//!    to the corresponding [`oep`] trait on [`layouts::Builder`] and
//!    [`layouts::Context`].
//!
//! ## Testing and Benchmarking
//!
//! The [`test_suite`] module provides backend-generic test functions, which
//! backend crates instantiate through [`backend_test_suite!`]. The
//! [`bench_suite`] module provides the matching Criterion harnesses.
//!
//! ## Safety Contract
//!
//! All [`oep`] traits are `unsafe` to implement. Implementors must uphold the
//! contract documented in [`doc::backend_safety`].

/// Safe, user-facing trait definitions for the builder protocol.
pub mod api;

/// Criterion-based benchmark harnesses, generic over any backend.
pub mod bench_suite;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits on
/// [`layouts::Builder`] and [`layouts::Context`].
///
/// This module contains no user-facing items; it only wires the safe API
/// layer to the unsafe backend implementations.
pub mod delegates;

/// Error values, the flat C error code and the boundary translator.
pub mod error;

/// Owning handles, parameter identifiers and native value layouts.
pub mod layouts;

/// Copies across the host/native boundary.
pub mod marshal;

/// Open Extension Points: `unsafe` traits that backend crates implement.
///
/// Each trait mirrors a corresponding [`api`] trait and carries the `Impl`
/// suffix. See [`doc::backend_safety`] for the safety contract.
pub mod oep;

/// Deterministic pseudorandom number generation based on ChaCha8.
pub mod source;

/// Fully generic, backend-parametric test functions.
///
/// Backend crates instantiate these via the [`backend_test_suite!`] macro.
pub mod test_suite;

/// Embedded safety contract documentation for backend implementors.
pub mod doc {
    /// Safety contract that all [`crate::oep`] trait implementations must uphold.
    #[doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/docs/backend_safety_contract.md"))]
    pub mod backend_safety {
        pub const _PLACEHOLDER: () = ();
    }
}

pub use error::{Error, ErrorKind, Result};
