//! [`Backend`] and version hooks for [`BgvRef`](crate::BgvRef).
//!
//! Builder and context handles are plain heap allocations: they are leaked
//! into a `NonNull` when handed to the owning wrapper and reboxed when the
//! wrapper releases them.

use std::ptr::NonNull;

use zno_hal::{
    layouts::{Backend, NativeVersion},
    oep::VersionImpl,
};

use crate::{BgvRef, BgvRefBuilder, BgvRefContext};

impl Backend for BgvRef {
    type BuilderHandle = BgvRefBuilder;
    type ContextHandle = BgvRefContext;

    unsafe fn destroy_builder(handle: NonNull<Self::BuilderHandle>) {
        unsafe {
            drop(Box::from_raw(handle.as_ptr()));
        }
    }

    unsafe fn destroy_context(handle: NonNull<Self::ContextHandle>) {
        unsafe {
            drop(Box::from_raw(handle.as_ptr()));
        }
    }
}

unsafe impl VersionImpl<Self> for BgvRef {
    fn version_impl() -> NativeVersion {
        NativeVersion {
            major: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            minor: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
            patch: env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0),
        }
    }
}
