use crate::InvalidIndexError;

/// Values which can be interpreted as a position in a sequence.
///
/// Unsigned integers convert whenever they fit into a `usize`. Signed integers must not be
/// negative. Floats must be finite, non-negative and integral, so `2.0` is a valid index but
/// `2.5` is not.
pub trait IntoIndex {
    /// Converts `self` into a position, or reports why that is impossible.
    fn into_index(self) -> Result<usize, InvalidIndexError>;
}

macro_rules! unsigned_into_index {
    ($($t:ty),*) => {
        $(
            impl IntoIndex for $t {
                fn into_index(self) -> Result<usize, InvalidIndexError> {
                    usize::try_from(self).map_err(|_| InvalidIndexError::TooLarge)
                }
            }
        )*
    };
}

macro_rules! signed_into_index {
    ($($t:ty),*) => {
        $(
            impl IntoIndex for $t {
                fn into_index(self) -> Result<usize, InvalidIndexError> {
                    if self < 0 {
                        Err(InvalidIndexError::Negative)
                    } else {
                        usize::try_from(self).map_err(|_| InvalidIndexError::TooLarge)
                    }
                }
            }
        )*
    };
}

unsigned_into_index!(u8, u16, u32, u64, u128, usize);
signed_into_index!(i8, i16, i32, i64, i128, isize);

impl IntoIndex for f64 {
    fn into_index(self) -> Result<usize, InvalidIndexError> {
        if !self.is_finite() {
            Err(InvalidIndexError::NotFinite)
        } else if self < 0.0 {
            Err(InvalidIndexError::Negative)
        } else if self != (self as u128) as f64 {
            // Finite and non-negative, so the only way the cast round trip can differ is a
            // fractional part (or a value beyond u128, which is too large anyway).
            if self >= u128::MAX as f64 {
                Err(InvalidIndexError::TooLarge)
            } else {
                Err(InvalidIndexError::NotInteger)
            }
        } else {
            // `usize::MAX as f64` rounds up to a power of two, so compare as integers.
            usize::try_from(self as u128).map_err(|_| InvalidIndexError::TooLarge)
        }
    }
}

impl IntoIndex for f32 {
    fn into_index(self) -> Result<usize, InvalidIndexError> {
        f64::from(self).into_index()
    }
}
