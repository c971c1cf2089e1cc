//! Bounded value objects.
//!
//! Each type can only be constructed through `try_new`, which checks the
//! declared bound and names the offending field on failure. Once a value
//! exists it is known to be in range, so records built from these types
//! never re-check their fields.

use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use super::ConstraintViolation;

/// Text whose length in characters lies in `MIN..=MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BoundedText<const MIN: usize, const MAX: usize>(String);

impl<const MIN: usize, const MAX: usize> BoundedText<MIN, MAX> {
    /// Creates bounded text, returning a violation for `field` if the
    /// length is outside `MIN..=MAX`.
    pub fn try_new(
        field: &'static str,
        value: impl Into<String>,
    ) -> Result<Self, ConstraintViolation> {
        let value = value.into();
        let len = value.chars().count();
        if len < MIN {
            return Err(ConstraintViolation::too_short(field, MIN, len));
        }
        if len > MAX {
            return Err(ConstraintViolation::too_long(field, MAX, len));
        }
        Ok(Self(value))
    }

    /// Validates an optional value; `None` is always accepted.
    pub fn try_optional(
        field: &'static str,
        value: Option<String>,
    ) -> Result<Option<Self>, ConstraintViolation> {
        value.map(|v| Self::try_new(field, v)).transpose()
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the value, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<const MIN: usize, const MAX: usize> AsRef<str> for BoundedText<MIN, MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<const MIN: usize, const MAX: usize> fmt::Display for BoundedText<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An integer in the inclusive range `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BoundedInt<const MIN: i64, const MAX: i64>(i64);

impl<const MIN: i64, const MAX: i64> BoundedInt<MIN, MAX> {
    /// Creates a bounded integer, returning a violation for `field` if out of range.
    pub fn try_new(field: &'static str, value: i64) -> Result<Self, ConstraintViolation> {
        if !(MIN..=MAX).contains(&value) {
            return Err(ConstraintViolation::out_of_range(field, MIN, MAX, value));
        }
        Ok(Self(value))
    }

    /// Returns the value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl<const MIN: i64, const MAX: i64> fmt::Display for BoundedInt<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive bounds for a [`BoundedFloat`].
///
/// Floats cannot be const generic parameters, so each range is a marker type.
pub trait FloatRange {
    const MIN: f64;
    const MAX: f64;
}

/// A float in the inclusive range `R::MIN..=R::MAX`. NaN is never accepted.
pub struct BoundedFloat<R: FloatRange> {
    value: f64,
    range: PhantomData<R>,
}

impl<R: FloatRange> BoundedFloat<R> {
    /// Creates a bounded float, returning a violation for `field` if out of range.
    pub fn try_new(field: &'static str, value: f64) -> Result<Self, ConstraintViolation> {
        if !(R::MIN..=R::MAX).contains(&value) {
            return Err(ConstraintViolation::out_of_range(field, R::MIN, R::MAX, value));
        }
        Ok(Self {
            value,
            range: PhantomData,
        })
    }

    /// Returns the value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

// Manual impls so the marker type needs no derives of its own.
impl<R: FloatRange> Clone for BoundedFloat<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: FloatRange> Copy for BoundedFloat<R> {}

impl<R: FloatRange> PartialEq for BoundedFloat<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FloatRange> PartialOrd for BoundedFloat<R> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<R: FloatRange> fmt::Debug for BoundedFloat<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundedFloat").field(&self.value).finish()
    }
}

impl<R: FloatRange> fmt::Display for BoundedFloat<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<R: FloatRange> Serialize for BoundedFloat<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

/// An owned, ordered collection holding `MIN..=MAX` items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BoundedVec<T, const MIN: usize, const MAX: usize>(Vec<T>);

impl<T, const MIN: usize, const MAX: usize> BoundedVec<T, MIN, MAX> {
    /// Creates a bounded collection, returning a violation for `field` if the
    /// item count is outside `MIN..=MAX`.
    pub fn try_new(field: &'static str, items: Vec<T>) -> Result<Self, ConstraintViolation> {
        let count = items.len();
        if count < MIN {
            return Err(ConstraintViolation::new(
                field,
                super::ConstraintReason::TooFewItems { min: MIN, actual: count },
            ));
        }
        if count > MAX {
            return Err(ConstraintViolation::new(
                field,
                super::ConstraintReason::TooManyItems { max: MAX, actual: count },
            ));
        }
        Ok(Self(items))
    }

    /// Returns the items in order.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false once constructed with `MIN >= 1`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<'a, T, const MIN: usize, const MAX: usize> IntoIterator for &'a BoundedVec<T, MIN, MAX> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
