use std::{fmt, marker::PhantomData, mem::ManuallyDrop, ptr::NonNull};

use crate::layouts::Backend;

/// Exclusive owner of a native staging object.
///
/// Every configuration step takes the builder by value and hands back a
/// fresh one, so a value that has been passed to a setter or to finalize
/// can no longer be named. Dropping a builder releases the staging object.
pub struct Builder<B: Backend> {
    ptr: NonNull<B::BuilderHandle>,
    _marker: PhantomData<B>,
}

// The staging object is `Send` and only ever touched through the single owner.
unsafe impl<B: Backend> Send for Builder<B> {}

impl<B: Backend> Builder<B> {
    #[allow(clippy::missing_safety_doc)]
    #[inline]
    pub unsafe fn from_nonnull(ptr: NonNull<B::BuilderHandle>) -> Self {
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Takes ownership of a raw staging handle, `None` when `ptr` is null.
    /// SAFETY: a non-null `ptr` must have been produced by `B` and must not be owned elsewhere.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut B::BuilderHandle) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| unsafe { Self::from_nonnull(ptr) })
    }

    /// Gives up ownership without releasing the staging object.
    #[inline]
    pub fn into_raw(self) -> NonNull<B::BuilderHandle> {
        ManuallyDrop::new(self).ptr
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut B::BuilderHandle {
        self.ptr.as_ptr()
    }
}

impl<B: Backend> Drop for Builder<B> {
    fn drop(&mut self) {
        unsafe { B::destroy_builder(self.ptr) }
    }
}

impl<B: Backend> fmt::Debug for Builder<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder").field("handle", &self.ptr).finish()
    }
}
