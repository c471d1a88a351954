use std::{ffi::CStr, ptr};

use tracing_subscriber::EnvFilter;
use zno_cpu_ref::{BgvRef, BgvRefContext, capi::*};
use zno_hal::{
    ErrorKind,
    api::{ContextGetDerived, ContextGetParam, LibraryVersion},
    layouts::{Bootstrap, NativeOptional, Parameters},
    marshal::to_optional,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

unsafe fn build_4095(bootstrap_thin: bool) -> (ErrorKind, *mut BgvRefContext) {
    let mvec: [i64; 4] = [7, 5, 9, 13];
    let gens: [i64; 3] = [2341, 3277, 911];
    let ords: [i64; 3] = [6, 4, 6];
    let mut err: ErrorKind = ErrorKind::None;
    unsafe {
        let mut builder = zno_builder_new();
        builder = zno_builder_set_m(builder, 4095, &mut err);
        builder = zno_builder_set_p(builder, 2, &mut err);
        builder = zno_builder_set_r(builder, 1, &mut err);
        builder = zno_builder_set_bits(builder, 500, &mut err);
        builder = zno_builder_set_c(builder, 2, &mut err);
        builder = zno_builder_set_gens(builder, gens.as_ptr(), gens.len(), &mut err);
        builder = zno_builder_set_ords(builder, ords.as_ptr(), ords.len(), &mut err);
        builder = zno_builder_set_mvec(builder, mvec.as_ptr(), mvec.len(), &mut err);
        if bootstrap_thin {
            builder = zno_builder_set_thinboot(builder, &mut err);
        }
        assert_eq!(err, ErrorKind::None);
        assert!(!builder.is_null());
        let mut context: *mut BgvRefContext = ptr::null_mut();
        let kind: ErrorKind = zno_builder_finalize(builder, &mut context);
        (kind, context)
    }
}

#[test]
fn chain_finalize_and_read_back() {
    init_tracing();
    unsafe {
        let (kind, context) = build_4095(true);
        assert_eq!(kind, ErrorKind::None);
        assert!(!context.is_null());

        let mut m: NativeOptional<u32> = NativeOptional::absent();
        assert_eq!(zno_context_get_m(context, &mut m), ErrorKind::None);
        assert_eq!(to_optional(m), Some(4095));

        let mut bits: NativeOptional<u32> = NativeOptional::absent();
        assert_eq!(zno_context_get_bits(context, &mut bits), ErrorKind::None);
        assert_eq!(to_optional(bits), Some(500));

        let mut nslots: NativeOptional<u64> = NativeOptional::absent();
        assert_eq!(zno_context_get_nslots(context, &mut nslots), ErrorKind::None);
        assert_eq!(to_optional(nslots), Some(144));

        let mut mode: Bootstrap = Bootstrap::None;
        assert_eq!(zno_context_get_bootstrap(context, &mut mode), ErrorKind::None);
        assert_eq!(mode, Bootstrap::Thin);

        let mut flag: bool = false;
        assert_eq!(zno_context_is_bootstrappable(context, &mut flag), ErrorKind::None);
        assert!(flag);

        zno_context_free(context);
    }
}

#[test]
fn sequences_copy_into_caller_buffer() {
    init_tracing();
    unsafe {
        let (_, context) = build_4095(false);

        let mut len: usize = 0;
        let mut short: [i64; 2] = [0; 2];
        assert_eq!(
            zno_context_get_mvec(context, short.as_mut_ptr(), short.len(), &mut len),
            ErrorKind::OutOfRange
        );
        assert_eq!(len, 4);
        assert_eq!(short, [0, 0]);

        let mut mvec: [i64; 4] = [0; 4];
        assert_eq!(
            zno_context_get_mvec(context, mvec.as_mut_ptr(), mvec.len(), &mut len),
            ErrorKind::None
        );
        assert_eq!(mvec, [7, 5, 9, 13]);

        let mut ords: [i64; 8] = [0; 8];
        assert_eq!(
            zno_context_get_ords(context, ords.as_mut_ptr(), ords.len(), &mut len),
            ErrorKind::None
        );
        assert_eq!(&ords[..len], &[6, 4, 6]);

        zno_context_free(context);
    }
}

#[test]
fn host_side_rejections_release_builder() {
    init_tracing();
    unsafe {
        let mut err: ErrorKind = ErrorKind::None;
        assert!(zno_builder_set_m(zno_builder_new(), 0, &mut err).is_null());
        assert_eq!(err, ErrorKind::Zero);

        assert!(zno_builder_set_bits(zno_builder_new(), -300, &mut err).is_null());
        assert_eq!(err, ErrorKind::OutOfRange);

        assert!(zno_builder_set_c(zno_builder_new(), 1 << 40, &mut err).is_null());
        assert_eq!(err, ErrorKind::OutOfRange);

        assert!(zno_builder_set_gens(zno_builder_new(), ptr::null(), 3, &mut err).is_null());
        assert_eq!(err, ErrorKind::OutOfRange);

        let builder = zno_builder_set_mvec(zno_builder_new(), ptr::null(), 0, &mut err);
        assert_eq!(err, ErrorKind::None);
        zno_builder_free(builder);
    }
}

#[test]
fn null_handles_are_invalid_state() {
    init_tracing();
    unsafe {
        let mut err: ErrorKind = ErrorKind::None;
        assert!(zno_builder_set_p(ptr::null_mut(), 2, &mut err).is_null());
        assert_eq!(err, ErrorKind::InvalidState);

        assert!(zno_builder_set_thickboot(ptr::null_mut(), &mut err).is_null());
        assert_eq!(err, ErrorKind::InvalidState);

        for _ in 0..3 {
            let mut context: *mut BgvRefContext = ptr::dangling_mut();
            assert_eq!(zno_builder_finalize(ptr::null_mut(), &mut context), ErrorKind::InvalidState);
            assert!(context.is_null());
        }

        let mut m: NativeOptional<u32> = NativeOptional::absent();
        assert_eq!(zno_context_get_m(ptr::null(), &mut m), ErrorKind::InvalidState);
        assert!(!m.has_value());

        let mut len: usize = 0;
        assert_eq!(
            zno_context_get_gens(ptr::null(), ptr::null_mut(), 0, &mut len),
            ErrorKind::InvalidState
        );

        zno_builder_free(ptr::null_mut());
        zno_context_free(ptr::null_mut());
    }
}

#[test]
fn native_rejection_is_generic() {
    init_tracing();
    unsafe {
        let mut err: ErrorKind = ErrorKind::None;
        let mut builder = zno_builder_set_m(zno_builder_new(), 4096, &mut err);
        builder = zno_builder_set_p(builder, 9, &mut err);
        assert_eq!(err, ErrorKind::None);

        let mut context: *mut BgvRefContext = ptr::dangling_mut();
        assert_eq!(zno_builder_finalize(builder, &mut context), ErrorKind::Generic);
        assert!(context.is_null());
    }
}

#[test]
fn absent_derived_values() {
    init_tracing();
    unsafe {
        let mut err: ErrorKind = ErrorKind::None;
        let builder = zno_builder_set_m(zno_builder_new(), 4096, &mut err);
        let mut context: *mut BgvRefContext = ptr::null_mut();
        assert_eq!(zno_builder_finalize(builder, &mut context), ErrorKind::None);

        let mut phi_m: NativeOptional<u64> = NativeOptional::absent();
        let mut ord_p: NativeOptional<u64> = NativeOptional::present(1);
        assert_eq!(zno_context_get_phi_m(context, &mut phi_m), ErrorKind::None);
        assert_eq!(zno_context_get_ord_p(context, &mut ord_p), ErrorKind::None);
        assert_eq!(to_optional(phi_m), Some(2048));
        assert_eq!(to_optional(ord_p), None);

        zno_context_free(context);
    }
}

#[test]
fn version_and_messages() {
    let version: &CStr = unsafe { CStr::from_ptr(zno_library_version()) };
    assert_eq!(version.to_str().unwrap(), BgvRef::library_version());
    assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));

    let message: &CStr = unsafe { CStr::from_ptr(zno_error_message(ErrorKind::InvalidState as i32)) };
    assert_eq!(message.to_str().unwrap(), ErrorKind::InvalidState.description());
}

#[test]
fn parameters_from_json_value() {
    init_tracing();
    let params: Parameters = serde_json::from_value(serde_json::json!({
        "m": 31775,
        "p": 2,
        "bits": 600,
        "mvec": [41, 775],
        "bootstrap": "thick",
    }))
    .unwrap();
    let context = params.build::<BgvRef>().unwrap();
    assert_eq!(context.bits(), Some(600));
    assert_eq!(context.phi_m(), Some(24000));
    assert_eq!(context.nslots(), Some(1200));
    assert_eq!(Parameters::from_context(&context).bootstrap, Bootstrap::Thick);
}
