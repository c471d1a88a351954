//! # zno-cpu-ref
//!
//! Pure-Rust reference backend for the [`zno_hal`] BGV builder protocol,
//! together with a C ABI over it.
//!
//! [`BgvRef`] stages parameters in a heap-allocated [`BgvRefBuilder`] and
//! checks them on finalize the way a native BGV library does: `p` must be
//! prime, `p^r` must fit in 63 bits, `gens` and `ords` must pair up, and
//! `mvec` must be a coprime factorization of `m`. Bootstrappable contexts
//! additionally need `mvec` and `gcd(p, m) = 1`. Unset scalars default to
//! `p = 2`, `r = 1`, `bits = 300` and `c = 3`.
//!
//! The finalized [`BgvRefContext`] also carries `phi(m)`, the order of `p`
//! in `Z_m^*` and the resulting slot count. The last two are absent when
//! `p` divides `m`.
//!
//! ```
//! use zno_cpu_ref::BgvRef;
//! use zno_hal::{
//!     api::{BuilderFinalize, BuilderNew, BuilderSetParam, ContextGetDerived, ContextGetParam},
//!     layouts::Builder,
//! };
//!
//! let context = Builder::<BgvRef>::new()
//!     .m(4095)
//!     .and_then(|b| b.p(2))
//!     .and_then(|b| b.bits(500))
//!     .and_then(|b| b.finalize())
//!     .unwrap();
//! assert_eq!(context.m(), Some(4095));
//! assert_eq!(context.nslots(), Some(144));
//! ```

mod arith;
mod backend;
mod builder;
mod context;
mod validate;

pub mod capi;

#[cfg(test)]
mod tests;

pub use builder::BgvRefBuilder;
pub use context::BgvRefContext;

/// Reference BGV backend.
pub struct BgvRef {}
