use std::{fmt, marker::PhantomData, mem::MaybeUninit, ptr, slice};

/// Native optional: a presence flag next to a value slot.
///
/// The slot is only initialized when the flag is set. Values are read back
/// through [crate::marshal::to_optional].
#[repr(C)]
#[derive(Clone, Copy)]
pub struct NativeOptional<T: Copy> {
    has_value: bool,
    value: MaybeUninit<T>,
}

impl<T: Copy> NativeOptional<T> {
    pub const fn present(value: T) -> Self {
        Self {
            has_value: true,
            value: MaybeUninit::new(value),
        }
    }

    pub const fn absent() -> Self {
        Self {
            has_value: false,
            value: MaybeUninit::uninit(),
        }
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.has_value
    }

    /// SAFETY: caller must have checked [Self::has_value].
    #[inline]
    pub(crate) unsafe fn value_unchecked(&self) -> T {
        unsafe { self.value.assume_init() }
    }
}

impl<T: Copy> From<Option<T>> for NativeOptional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::present(value),
            None => Self::absent(),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for NativeOptional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_value {
            write!(f, "NativeOptional({:?})", unsafe { self.value_unchecked() })
        } else {
            f.write_str("NativeOptional(absent)")
        }
    }
}

/// Borrowed view of a native `i64` sequence.
///
/// The view is only valid while the object it was read from is alive,
/// which the lifetime enforces. Host code copies it out through
/// [crate::marshal::copy_native_seq] before the borrow ends.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct NativeSeq<'a> {
    ptr: *const i64,
    len: usize,
    _marker: PhantomData<&'a [i64]>,
}

impl<'a> NativeSeq<'a> {
    pub fn from_slice(values: &'a [i64]) -> Self {
        Self {
            ptr: values.as_ptr(),
            len: values.len(),
            _marker: PhantomData,
        }
    }

    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &'a [i64] {
        if self.ptr.is_null() || self.len == 0 {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }
}

impl fmt::Debug for NativeSeq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Category of a failure reported by the native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultClass {
    InvalidArgument,
    OutOfRange,
    Logic,
    Runtime,
}

impl fmt::Display for FaultClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FaultClass::InvalidArgument => "invalid argument",
            FaultClass::OutOfRange => "out of range",
            FaultClass::Logic => "logic error",
            FaultClass::Runtime => "runtime error",
        })
    }
}

/// A failure raised inside the native library.
///
/// Faults never leave the boundary layer: [crate::error::guard] logs them
/// and turns them into [crate::error::Error::Generic].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFault {
    class: FaultClass,
    message: String,
}

impl NativeFault {
    pub fn new(class: FaultClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(FaultClass::InvalidArgument, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(FaultClass::OutOfRange, message)
    }

    pub fn logic(message: impl Into<String>) -> Self {
        Self::new(FaultClass::Logic, message)
    }

    pub fn class(&self) -> FaultClass {
        self.class
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NativeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class, self.message)
    }
}

/// Version triple of the native library.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for NativeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
