use crate::layouts::{Backend, NativeVersion};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::api::LibraryVersion] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait VersionImpl<B: Backend> {
    fn version_impl() -> NativeVersion;
}
