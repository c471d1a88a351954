use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use thiserror::Error;
use tracing::{error, warn};

use crate::layouts::{Field, NativeFault};

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a builder protocol step, as seen by host code.
///
/// The variant is the whole contract: native diagnostic text is logged at
/// the boundary and never carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A host value could not be represented in the field's native domain.
    #[error("{0} is outside its valid range")]
    OutOfRange(Field),
    /// Zero was supplied for a field that must be positive.
    #[error("{0} must be non-zero")]
    Zero(Field),
    /// The builder handle was null or already consumed.
    #[error("builder handle is null or already consumed")]
    InvalidState,
    /// The native library rejected the request.
    #[error("native library failed during {0}")]
    Generic(Stage),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OutOfRange(_) => ErrorKind::OutOfRange,
            Error::Zero(_) => ErrorKind::Zero,
            Error::InvalidState => ErrorKind::InvalidState,
            Error::Generic(_) => ErrorKind::Generic,
        }
    }
}

/// Protocol step during which a native failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Set(Field),
    Finalize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Set(field) => write!(f, "set {field}"),
            Stage::Finalize => f.write_str("finalize"),
        }
    }
}

/// Flat error code shared with C callers. `None` means success.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[default]
    None = 0,
    OutOfRange = 1,
    Zero = 2,
    InvalidState = 3,
    Generic = 4,
}

impl ErrorKind {
    pub fn is_ok(self) -> bool {
        self == ErrorKind::None
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::None => "no error",
            ErrorKind::OutOfRange => "value is outside its valid range",
            ErrorKind::Zero => "value must be non-zero",
            ErrorKind::InvalidState => "builder handle is null or already consumed",
            ErrorKind::Generic => "native library error",
        }
    }
}

impl<T> From<&Result<T>> for ErrorKind {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorKind::None,
            Err(err) => err.kind(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Runs a native call and translates anything it raises.
///
/// A returned [NativeFault] and a panic unwinding out of `call` both become
/// [Error::Generic] for `stage`. The native message is logged, not returned.
/// Nothing raised inside `call` propagates past this function.
pub fn guard<T, F>(stage: Stage, call: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, NativeFault>,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(fault)) => {
            warn!(%stage, class = %fault.class(), message = fault.message(), "native call failed");
            Err(Error::Generic(stage))
        }
        Err(payload) => {
            error!(%stage, panic = panic_message(&*payload), "native call panicked");
            Err(Error::Generic(stage))
        }
    }
}

/// Best-effort text of a caught panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::FaultClass;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Error::OutOfRange(Field::M).kind(), ErrorKind::OutOfRange);
        assert_eq!(Error::Zero(Field::Bits).kind(), ErrorKind::Zero);
        assert_eq!(Error::InvalidState.kind(), ErrorKind::InvalidState);
        assert_eq!(Error::Generic(Stage::Finalize).kind(), ErrorKind::Generic);
        assert_eq!(ErrorKind::None as i32, 0);
    }

    #[test]
    fn guard_passes_values_through() {
        assert_eq!(guard(Stage::Finalize, || Ok(7)), Ok(7));
    }

    #[test]
    fn guard_hides_native_message() {
        let err: Error = guard::<(), _>(Stage::Set(Field::Gens), || {
            Err(NativeFault::invalid_argument("generator 0 is not in Z_m^*"))
        })
        .unwrap_err();
        assert_eq!(err, Error::Generic(Stage::Set(Field::Gens)));
        assert!(!err.to_string().contains("generator"));
    }

    #[test]
    fn every_fault_class_is_generic() {
        for class in [
            FaultClass::InvalidArgument,
            FaultClass::OutOfRange,
            FaultClass::Logic,
            FaultClass::Runtime,
        ] {
            let outcome: Result<()> = guard(Stage::Finalize, || Err(NativeFault::new(class, "rejected")));
            assert_eq!(outcome, Err(Error::Generic(Stage::Finalize)), "{class}");
        }
    }

    #[test]
    fn guard_contains_panics() {
        let outcome: Result<u32> = guard(Stage::Finalize, || panic!("native abort"));
        assert_eq!(outcome, Err(Error::Generic(Stage::Finalize)));
    }

    #[test]
    fn result_reference_converts_to_kind() {
        let ok: Result<()> = Ok(());
        let zero: Result<()> = Err(Error::Zero(Field::C));
        assert!(ErrorKind::from(&ok).is_ok());
        assert_eq!(ErrorKind::from(&zero), ErrorKind::Zero);
    }
}
