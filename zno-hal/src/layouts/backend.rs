use std::ptr::NonNull;

/// A native BGV library reachable through the [crate::oep] extension points.
///
/// A backend owns two kinds of native objects: the mutable staging object
/// behind a [crate::layouts::Builder] and the immutable object behind a
/// [crate::layouts::Context]. Both are released through the destructors
/// declared here, exactly once, by the owning wrapper.
#[allow(clippy::missing_safety_doc)]
pub trait Backend: Sized + Send + Sync + 'static {
    type BuilderHandle: Send + 'static;
    type ContextHandle: Send + Sync + 'static;
    unsafe fn destroy_builder(handle: NonNull<Self::BuilderHandle>);
    unsafe fn destroy_context(handle: NonNull<Self::ContextHandle>);
}
