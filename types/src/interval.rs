//! Closed intervals over totally ordered values.
//!
//! An [`Interval`] guarantees `low <= high` by construction. It is an immutable
//! value type: every operation that would "change" an interval returns a new one.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which end of an interval a bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Low,
    High,
}

impl Endpoint {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Low => "low",
            Endpoint::High => "high",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("{0} bound cannot be absent")]
    MissingBound(Endpoint),
    #[error("low bound must be less than or equal to high bound")]
    Inverted,
    #[error("value cannot be absent")]
    MissingValue,
    #[error("ranges do not overlap")]
    Disjoint,
    #[error("collection cannot be null or empty")]
    EmptyCollection,
}

/// A closed interval `[low, high]`.
///
/// # Invariants
///
/// - `low <= high` under `T`'s total order
/// - Bounds never change after construction
///
/// Equality and hashing are defined on the `(low, high)` pair. Intervals are
/// not `Ord`; a derived `Ord::clamp` would shadow [`Interval::clamp`] on owned
/// receivers.
///
/// # Serde
///
/// Serializes as `{ "low": .., "high": .. }`. Deserialization goes through
/// [`Interval::from_bounds`], so a missing or inverted bound is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval<T> {
    low: T,
    high: T,
}

impl<T: Ord> Interval<T> {
    pub fn new(low: T, high: T) -> Result<Self, IntervalError> {
        if low > high {
            return Err(IntervalError::Inverted);
        }
        Ok(Self { low, high })
    }

    /// Build an interval from bounds that may be absent.
    ///
    /// Returns [`IntervalError::MissingBound`] naming the first absent bound,
    /// then validates ordering like [`Interval::new`].
    pub fn from_bounds(low: Option<T>, high: Option<T>) -> Result<Self, IntervalError> {
        let low = low.ok_or(IntervalError::MissingBound(Endpoint::Low))?;
        let high = high.ok_or(IntervalError::MissingBound(Endpoint::High))?;
        Self::new(low, high)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        &self.low <= value && value <= &self.high
    }

    /// Like [`Interval::contains`], but an absent value is never contained.
    #[must_use]
    pub fn contains_opt(&self, value: Option<&T>) -> bool {
        value.is_some_and(|value| self.contains(value))
    }

    /// Touching endpoints count as overlap: `[1, 10]` overlaps `[10, 20]`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.low <= other.high && self.high >= other.low
    }

    #[must_use]
    pub fn overlaps_opt(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self.overlaps(other))
    }
}

impl<T> Interval<T> {
    #[must_use]
    pub fn low(&self) -> &T {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &T {
        &self.high
    }

    #[must_use]
    pub fn into_bounds(self) -> (T, T) {
        (self.low, self.high)
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// The single-point interval `[value, value]`.
    #[must_use]
    pub fn point(value: T) -> Self {
        Self {
            low: value.clone(),
            high: value,
        }
    }

    /// The tightest interval contained in both `self` and `other`.
    pub fn intersect(&self, other: &Self) -> Result<Self, IntervalError> {
        if !self.overlaps(other) {
            return Err(IntervalError::Disjoint);
        }
        Ok(Self {
            low: (&self.low).max(&other.low).clone(),
            high: (&self.high).min(&other.high).clone(),
        })
    }

    /// The smallest interval containing both `self` and `other`.
    ///
    /// Succeeds for disjoint inputs too; the gap between them is included.
    #[must_use]
    pub fn span(&self, other: &Self) -> Self {
        Self {
            low: (&self.low).min(&other.low).clone(),
            high: (&self.high).max(&other.high).clone(),
        }
    }

    #[must_use]
    pub fn clamp(&self, value: T) -> T {
        if value < self.low {
            self.low.clone()
        } else if value > self.high {
            self.high.clone()
        } else {
            value
        }
    }

    pub fn clamp_opt(&self, value: Option<T>) -> Result<T, IntervalError> {
        value
            .map(|value| self.clamp(value))
            .ok_or(IntervalError::MissingValue)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

#[derive(Deserialize)]
struct RawInterval<T> {
    low: Option<T>,
    high: Option<T>,
}

impl<'de, T> Deserialize<'de> for Interval<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawInterval::<T>::deserialize(deserializer)?;
        Self::from_bounds(raw.low, raw.high).map_err(de::Error::custom)
    }
}

/// The greatest element of `items`.
///
/// Ties resolve to the first occurrence.
pub fn max<T, I>(items: I) -> Result<T, IntervalError>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .reduce(|best, item| if item > best { item } else { best })
        .ok_or(IntervalError::EmptyCollection)
}

/// The smallest interval containing every element of `items`.
///
/// Computed in a single pass. Ties for either bound resolve to the first occurrence.
pub fn cover<T, I>(items: I) -> Result<Interval<T>, IntervalError>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let mut items = items.into_iter();
    let first = items.next().ok_or(IntervalError::EmptyCollection)?;
    let (low, high) = items.fold((first.clone(), first), |(low, high), item| {
        if item < low {
            (item, high)
        } else if item > high {
            (low, item)
        } else {
            (low, high)
        }
    });
    Ok(Interval { low, high })
}
