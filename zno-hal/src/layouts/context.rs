use std::{fmt, marker::PhantomData, mem::ManuallyDrop, ptr::NonNull};

use crate::layouts::Backend;

/// Sole owner of a finalized native context.
///
/// A context is immutable once built: it only exposes read-back accessors,
/// which makes it safe to share between threads. Dropping it releases the
/// native object.
pub struct Context<B: Backend> {
    ptr: NonNull<B::ContextHandle>,
    _marker: PhantomData<B>,
}

// The context object is `Send + Sync` and never mutated after finalize.
unsafe impl<B: Backend> Sync for Context<B> {}
unsafe impl<B: Backend> Send for Context<B> {}

impl<B: Backend> Context<B> {
    #[allow(clippy::missing_safety_doc)]
    #[inline]
    pub unsafe fn from_nonnull(ptr: NonNull<B::ContextHandle>) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Takes ownership of a raw context handle, `None` when `ptr` is null.
    /// SAFETY: a non-null `ptr` must have been produced by `B` and must not be owned elsewhere.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut B::ContextHandle) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| unsafe { Self::from_nonnull(ptr) })
    }

    /// Gives up ownership without releasing the native context.
    #[inline]
    pub fn into_raw(self) -> NonNull<B::ContextHandle> {
        ManuallyDrop::new(self).ptr
    }

    #[inline]
    pub fn as_ptr(&self) -> *const B::ContextHandle {
        self.ptr.as_ptr()
    }
}

impl<B: Backend> Drop for Context<B> {
    fn drop(&mut self) {
        unsafe { B::destroy_context(self.ptr) }
    }
}

impl<B: Backend> fmt::Debug for Context<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("handle", &self.ptr).finish()
    }
}
