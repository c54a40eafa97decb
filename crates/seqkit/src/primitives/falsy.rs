//! Falsiness of element values.
//!
//! `coalesce` drops "empty-equivalent" elements. Rust has no universal notion
//! of a falsy value, so element types opt in through [`Falsy`].
//!
//! ## Key concepts
//!
//! * `None`, `false`, numeric zero, `NaN` and empty strings/vectors are falsy.
//! * References and boxes delegate to the pointee.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

/// Values that can be "empty-equivalent".
pub trait Falsy {
    /// Returns `true` when the value counts as absent.
    fn is_falsy(&self) -> bool;
}

impl<T> Falsy for Option<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_none()
    }
}

impl Falsy for bool {
    #[inline]
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Falsy for str {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Falsy for Vec<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    #[inline]
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl<T: Falsy + ?Sized> Falsy for Box<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

macro_rules! impl_falsy_int {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_falsy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_falsy_float {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }
            }
        )*
    };
}

impl_falsy_float!(f32, f64);

/// Returns `true` when the sequence is absent or has no elements.
#[inline]
pub fn is_falsy_or_empty<T>(seq: Option<&[T]>) -> bool {
    seq.is_none_or(|s| s.is_empty())
}
