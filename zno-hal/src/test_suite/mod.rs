pub mod builder;
pub mod context;

/// Instantiates backend-generic test functions as `#[test]`s for one backend.
///
/// Each listed function is called with a `PhantomData` of the backend.
#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(::std::marker::PhantomData::<$backend>);
                }
            )+
        }
    };
}
