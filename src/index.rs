//! Sentinel-based index trait for zero-cost optional handles.
//!
//! Uses a reserved sentinel value (e.g., `u32::MAX`) instead of `Option<Idx>`
//! to keep chain nodes a single word smaller and comparisons branch-free.

/// A copyable handle type with a sentinel "none" value.
///
/// Indices double as node identity: two handles compare equal iff they name
/// the same arena slot.
///
/// # Example
///
/// ```
/// use forward_chain::Index;
///
/// let idx: u32 = 5;
/// let none: u32 = u32::NONE;
///
/// assert!(idx.is_some());
/// assert!(none.is_none());
/// ```
pub trait Index: Copy + Eq {
    /// Sentinel value representing "no index" / null link.
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the index as a `usize`, for slot addressing.
    fn as_usize(self) -> usize;

    /// Creates an index from a `usize` slot number.
    fn from_usize(val: usize) -> Self;
}

macro_rules! impl_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }
            }
        )*
    };
}

impl_index_for_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_max() {
        assert_eq!(u32::NONE, u32::MAX);
        assert!(u32::NONE.is_none());
        assert!(!u32::NONE.is_some());
    }

    #[test]
    fn roundtrip_usize() {
        let idx = u16::from_usize(42);
        assert_eq!(idx.as_usize(), 42);
        assert!(idx.is_some());
    }
}
