//! C ABI over [`BgvRef`].
//!
//! Builders and contexts are passed around as opaque pointers. Every
//! builder step takes the pointer it is given and returns a new one: on
//! success the old pointer must not be used again, on failure the result
//! is null, the builder has been released and the reason is written to
//! `err` (when `err` is not null). Finalize consumes its builder in every
//! case. A null builder yields [`ErrorKind::InvalidState`].
//!
//! No panic unwinds out of these functions.

use std::{
    ffi::{CStr, CString, c_char},
    mem::ManuallyDrop,
    panic::{self, AssertUnwindSafe},
    ptr,
};

use once_cell::sync::Lazy;
use tracing::error;
use zno_hal::{
    api::{
        BuilderFinalize, BuilderNew, BuilderSetBootstrap, BuilderSetParam, BuilderSetSeq, ContextGetBootstrap, ContextGetDerived,
        ContextGetParam, ContextGetSeq, LibraryVersion,
    },
    error::{Error, ErrorKind, Result, Stage, panic_message},
    layouts::{Bootstrap, Builder, Context, Derived, Field, NativeOptional, Param, ParamSeq},
    marshal::borrow_raw_seq,
};

use crate::{BgvRef, BgvRefBuilder, BgvRefContext};

static VERSION: Lazy<CString> = Lazy::new(|| CString::new(BgvRef::library_version()).unwrap_or_default());

fn boundary<T>(fallback: T, call: impl FnOnce() -> T) -> T {
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| {
        error!(panic = panic_message(&*payload), "panic contained at the C boundary");
        fallback
    })
}

unsafe fn report(err: *mut ErrorKind, kind: ErrorKind) {
    if let Some(err) = unsafe { err.as_mut() } {
        *err = kind;
    }
}

unsafe fn step<F>(builder: *mut BgvRefBuilder, err: *mut ErrorKind, stage: Stage, apply: F) -> *mut BgvRefBuilder
where
    F: FnOnce(Builder<BgvRef>) -> Result<Builder<BgvRef>>,
{
    let outcome: Result<Builder<BgvRef>> = boundary(Err(Error::Generic(stage)), || {
        let builder: Builder<BgvRef> = unsafe { Builder::from_raw(builder) }.ok_or(Error::InvalidState)?;
        apply(builder)
    });
    unsafe { report(err, ErrorKind::from(&outcome)) };
    match outcome {
        Ok(builder) => builder.into_raw().as_ptr(),
        Err(_) => ptr::null_mut(),
    }
}

unsafe fn set_param(builder: *mut BgvRefBuilder, param: Param, value: i64, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { step(builder, err, Stage::Set(param.into()), |builder| builder.param(param, value)) }
}

unsafe fn set_seq(
    builder: *mut BgvRefBuilder,
    seq: ParamSeq,
    values: *const i64,
    len: usize,
    err: *mut ErrorKind,
) -> *mut BgvRefBuilder {
    unsafe {
        step(builder, err, Stage::Set(seq.into()), |builder| {
            let values: &[i64] = borrow_raw_seq(values, len).ok_or(Error::OutOfRange(seq.into()))?;
            builder.seq(seq, values)
        })
    }
}

/// Borrows a context owned by the caller without taking ownership of it.
unsafe fn with_context<T>(context: *const BgvRefContext, read: impl FnOnce(&Context<BgvRef>) -> T) -> Option<T> {
    let context: ManuallyDrop<Context<BgvRef>> = ManuallyDrop::new(unsafe { Context::from_raw(context.cast_mut()) }?);
    Some(read(&context))
}

unsafe fn write_out<T>(out: *mut T, value: Option<T>) -> ErrorKind {
    match (unsafe { out.as_mut() }, value) {
        (Some(out), Some(value)) => {
            *out = value;
            ErrorKind::None
        }
        _ => ErrorKind::InvalidState,
    }
}

unsafe fn get_param(context: *const BgvRefContext, param: Param, out: *mut NativeOptional<u32>) -> ErrorKind {
    boundary(ErrorKind::Generic, || unsafe {
        let value: Option<NativeOptional<u32>> = with_context(context, |context| context.param(param).into());
        write_out(out, value)
    })
}

unsafe fn get_derived(context: *const BgvRefContext, derived: Derived, out: *mut NativeOptional<u64>) -> ErrorKind {
    boundary(ErrorKind::Generic, || unsafe {
        let value: Option<NativeOptional<u64>> = with_context(context, |context| context.derived(derived).into());
        write_out(out, value)
    })
}

/// Copies a context sequence into a caller buffer of `cap` elements. The
/// required length is always written to `len`; a short buffer yields
/// [`ErrorKind::OutOfRange`] and nothing is copied.
unsafe fn get_seq(context: *const BgvRefContext, seq: ParamSeq, buf: *mut i64, cap: usize, len: *mut usize) -> ErrorKind {
    boundary(ErrorKind::Generic, || unsafe {
        let Some(values) = with_context(context, |context| context.seq(seq)) else {
            return ErrorKind::InvalidState;
        };
        let Some(len) = len.as_mut() else {
            return ErrorKind::InvalidState;
        };
        *len = values.len();
        if values.is_empty() {
            return ErrorKind::None;
        }
        if buf.is_null() || cap < values.len() {
            return ErrorKind::OutOfRange;
        }
        ptr::copy_nonoverlapping(values.as_ptr(), buf, values.len());
        ErrorKind::None
    })
}

/// Creates an empty builder. Release it with [`zno_builder_free`] unless it
/// is handed to [`zno_builder_finalize`].
#[unsafe(no_mangle)]
pub extern "C" fn zno_builder_new() -> *mut BgvRefBuilder {
    boundary(ptr::null_mut(), || Builder::<BgvRef>::new().into_raw().as_ptr())
}

/// # Safety
/// `builder` must be null or a live builder from this library. `err` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_m(builder: *mut BgvRefBuilder, m: i64, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { set_param(builder, Param::M, m, err) }
}

/// # Safety
/// See [`zno_builder_set_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_p(builder: *mut BgvRefBuilder, p: i64, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { set_param(builder, Param::P, p, err) }
}

/// # Safety
/// See [`zno_builder_set_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_r(builder: *mut BgvRefBuilder, r: i64, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { set_param(builder, Param::R, r, err) }
}

/// # Safety
/// See [`zno_builder_set_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_bits(builder: *mut BgvRefBuilder, bits: i64, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { set_param(builder, Param::Bits, bits, err) }
}

/// # Safety
/// See [`zno_builder_set_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_c(builder: *mut BgvRefBuilder, c: i64, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { set_param(builder, Param::C, c, err) }
}

/// Sequences are copied. A null `values` is accepted for `len == 0` and
/// reported as [`ErrorKind::OutOfRange`] otherwise.
///
/// # Safety
/// As [`zno_builder_set_m`]; a non-null `values` must be readable for `len` elements.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_gens(
    builder: *mut BgvRefBuilder,
    values: *const i64,
    len: usize,
    err: *mut ErrorKind,
) -> *mut BgvRefBuilder {
    unsafe { set_seq(builder, ParamSeq::Gens, values, len, err) }
}

/// # Safety
/// See [`zno_builder_set_gens`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_ords(
    builder: *mut BgvRefBuilder,
    values: *const i64,
    len: usize,
    err: *mut ErrorKind,
) -> *mut BgvRefBuilder {
    unsafe { set_seq(builder, ParamSeq::Ords, values, len, err) }
}

/// # Safety
/// See [`zno_builder_set_gens`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_mvec(
    builder: *mut BgvRefBuilder,
    values: *const i64,
    len: usize,
    err: *mut ErrorKind,
) -> *mut BgvRefBuilder {
    unsafe { set_seq(builder, ParamSeq::Mvec, values, len, err) }
}

/// # Safety
/// See [`zno_builder_set_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_bootstrappable(
    builder: *mut BgvRefBuilder,
    flag: bool,
    err: *mut ErrorKind,
) -> *mut BgvRefBuilder {
    unsafe {
        step(builder, err, Stage::Set(Field::Bootstrap), |builder| {
            builder.bootstrappable(flag)
        })
    }
}

/// # Safety
/// See [`zno_builder_set_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_thickboot(builder: *mut BgvRefBuilder, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { step(builder, err, Stage::Set(Field::Bootstrap), |builder| builder.thickboot()) }
}

/// # Safety
/// See [`zno_builder_set_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_set_thinboot(builder: *mut BgvRefBuilder, err: *mut ErrorKind) -> *mut BgvRefBuilder {
    unsafe { step(builder, err, Stage::Set(Field::Bootstrap), |builder| builder.thinboot()) }
}

/// Releases a builder that will not be finalized. Null is ignored.
///
/// # Safety
/// `builder` must be null or a live builder from this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_free(builder: *mut BgvRefBuilder) {
    boundary((), || drop(unsafe { Builder::<BgvRef>::from_raw(builder) }))
}

/// Consumes `builder` and writes the new context to `out`. On failure
/// `out` is set to null.
///
/// # Safety
/// `builder` must be null or a live builder from this library. `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_builder_finalize(builder: *mut BgvRefBuilder, out: *mut *mut BgvRefContext) -> ErrorKind {
    let outcome: Result<Context<BgvRef>> = boundary(Err(Error::Generic(Stage::Finalize)), || {
        let builder: Builder<BgvRef> = unsafe { Builder::from_raw(builder) }.ok_or(Error::InvalidState)?;
        if out.is_null() {
            return Err(Error::InvalidState);
        }
        builder.finalize()
    });
    let kind: ErrorKind = ErrorKind::from(&outcome);
    let context: *mut BgvRefContext = outcome.map_or(ptr::null_mut(), |context| context.into_raw().as_ptr());
    if let Some(out) = unsafe { out.as_mut() } {
        *out = context;
    }
    kind
}

/// # Safety
/// `context` must be null or a live context from this library. `out` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_m(context: *const BgvRefContext, out: *mut NativeOptional<u32>) -> ErrorKind {
    unsafe { get_param(context, Param::M, out) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_p(context: *const BgvRefContext, out: *mut NativeOptional<u32>) -> ErrorKind {
    unsafe { get_param(context, Param::P, out) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_r(context: *const BgvRefContext, out: *mut NativeOptional<u32>) -> ErrorKind {
    unsafe { get_param(context, Param::R, out) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_bits(context: *const BgvRefContext, out: *mut NativeOptional<u32>) -> ErrorKind {
    unsafe { get_param(context, Param::Bits, out) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_c(context: *const BgvRefContext, out: *mut NativeOptional<u32>) -> ErrorKind {
    unsafe { get_param(context, Param::C, out) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_phi_m(context: *const BgvRefContext, out: *mut NativeOptional<u64>) -> ErrorKind {
    unsafe { get_derived(context, Derived::PhiM, out) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_ord_p(context: *const BgvRefContext, out: *mut NativeOptional<u64>) -> ErrorKind {
    unsafe { get_derived(context, Derived::OrdP, out) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_nslots(context: *const BgvRefContext, out: *mut NativeOptional<u64>) -> ErrorKind {
    unsafe { get_derived(context, Derived::NSlots, out) }
}

/// # Safety
/// `context` must be null or a live context from this library. `len` must be null or writable,
/// a non-null `buf` must be writable for `cap` elements.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_gens(
    context: *const BgvRefContext,
    buf: *mut i64,
    cap: usize,
    len: *mut usize,
) -> ErrorKind {
    unsafe { get_seq(context, ParamSeq::Gens, buf, cap, len) }
}

/// # Safety
/// See [`zno_context_get_gens`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_ords(
    context: *const BgvRefContext,
    buf: *mut i64,
    cap: usize,
    len: *mut usize,
) -> ErrorKind {
    unsafe { get_seq(context, ParamSeq::Ords, buf, cap, len) }
}

/// # Safety
/// See [`zno_context_get_gens`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_mvec(
    context: *const BgvRefContext,
    buf: *mut i64,
    cap: usize,
    len: *mut usize,
) -> ErrorKind {
    unsafe { get_seq(context, ParamSeq::Mvec, buf, cap, len) }
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_get_bootstrap(context: *const BgvRefContext, out: *mut Bootstrap) -> ErrorKind {
    boundary(ErrorKind::Generic, || unsafe {
        let mode: Option<Bootstrap> = with_context(context, |context| context.bootstrap());
        write_out(out, mode)
    })
}

/// # Safety
/// See [`zno_context_get_m`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_is_bootstrappable(context: *const BgvRefContext, out: *mut bool) -> ErrorKind {
    boundary(ErrorKind::Generic, || unsafe {
        let flag: Option<bool> = with_context(context, |context| context.is_bootstrappable());
        write_out(out, flag)
    })
}

/// Releases a context. Null is ignored.
///
/// # Safety
/// `context` must be null or a live context from this library, not used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zno_context_free(context: *mut BgvRefContext) {
    boundary((), || drop(unsafe { Context::<BgvRef>::from_raw(context) }))
}

/// `"major.minor.patch"`, valid for the lifetime of the process.
#[unsafe(no_mangle)]
pub extern "C" fn zno_library_version() -> *const c_char {
    VERSION.as_ptr()
}

/// Static description of an error code, valid for the lifetime of the process.
#[unsafe(no_mangle)]
pub extern "C" fn zno_error_message(kind: i32) -> *const c_char {
    error_message(kind).as_ptr()
}

fn error_message(kind: i32) -> &'static CStr {
    match kind {
        k if k == ErrorKind::None as i32 => c"no error",
        k if k == ErrorKind::OutOfRange as i32 => c"value is outside its valid range",
        k if k == ErrorKind::Zero as i32 => c"value must be non-zero",
        k if k == ErrorKind::InvalidState as i32 => c"builder handle is null or already consumed",
        k if k == ErrorKind::Generic as i32 => c"native library error",
        _ => c"unknown error code",
    }
}
