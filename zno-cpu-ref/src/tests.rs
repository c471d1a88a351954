use zno_hal::layouts::{Builder, Context};

use crate::BgvRef;

fn assert_send<T: Send>() {}
fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn handles_are_thread_safe() {
    assert_send::<Builder<BgvRef>>();
    assert_send_sync::<Context<BgvRef>>();
}

zno_hal::backend_test_suite!(
    mod bgv_ref,
    backend = crate::BgvRef,
    tests = {
        builder_round_trip => zno_hal::test_suite::builder::test_builder_round_trip,
        builder_native_defaults => zno_hal::test_suite::builder::test_builder_native_defaults,
        builder_zero_rejected => zno_hal::test_suite::builder::test_builder_zero_rejected,
        builder_out_of_range_rejected => zno_hal::test_suite::builder::test_builder_out_of_range_rejected,
        builder_sequences_round_trip => zno_hal::test_suite::builder::test_builder_sequences_round_trip,
        builder_empty_sequences_accepted => zno_hal::test_suite::builder::test_builder_empty_sequences_accepted,
        builder_mvec_determines_m => zno_hal::test_suite::builder::test_builder_mvec_determines_m,
        builder_native_rejection_is_generic => zno_hal::test_suite::builder::test_builder_native_rejection_is_generic,
        builder_huge_lifting_exponent_rejected => zno_hal::test_suite::builder::test_builder_huge_lifting_exponent_rejected,
        builder_bootstrap_last_write_wins => zno_hal::test_suite::builder::test_builder_bootstrap_last_write_wins,
        builder_bootstrap_requires_mvec => zno_hal::test_suite::builder::test_builder_bootstrap_requires_mvec,
        builder_random_round_trip => zno_hal::test_suite::builder::test_builder_random_round_trip,
        parameters_match_setters => zno_hal::test_suite::builder::test_parameters_match_setters,
        parameters_checked_like_setters => zno_hal::test_suite::builder::test_parameters_checked_like_setters,
        context_derived_coprime => zno_hal::test_suite::context::test_context_derived_coprime,
        context_derived_not_coprime => zno_hal::test_suite::context::test_context_derived_not_coprime,
        context_reads_are_stable => zno_hal::test_suite::context::test_context_reads_are_stable,
        context_shared_across_threads => zno_hal::test_suite::context::test_context_shared_across_threads,
        library_version_format => zno_hal::test_suite::context::test_library_version_format,
    }
);
