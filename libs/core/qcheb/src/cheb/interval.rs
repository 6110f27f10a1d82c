use std::fmt::Display;

use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// Interval
// -----------------------------------------------------------------------------
/// Closed interval `[lower, upper]` with finite bounds and `lower < upper`.
///
/// The interval also defines the affine map onto the canonical Chebyshev domain `[-1, 1]`.
/// In serialized form, it is a pair `[lower, upper]`.
///
/// # Example
/// ```
/// use qcheb::cheb::Interval;
///
/// let itv = Interval::new(0.0, 4.0).unwrap();
/// assert_eq!(itv.to_canonical(&1.0), -0.5);
/// assert_eq!(itv.from_canonical(&0.0), 2.0);
///
/// assert!(Interval::new(1.0, 1.0).is_none());
/// assert!(Interval::new(0.0, f64::INFINITY).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

//
// construction
//
impl Default for Interval {
    /// The canonical domain `[-1, 1]`.
    #[inline]
    fn default() -> Self {
        Interval {
            lower: -1.0,
            upper: 1.0,
        }
    }
}

impl Interval {
    /// Returns [None] unless both bounds and the width are finite and `lower < upper`.
    #[inline]
    pub fn new(lower: f64, upper: f64) -> Option<Self> {
        let finite = lower.is_finite() && upper.is_finite() && (upper - lower).is_finite();
        if finite && lower < upper {
            Some(Interval { lower, upper })
        } else {
            None
        }
    }
}

//
// methods
//
impl Interval {
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.upper + self.lower)
    }

    /// Both ends are inclusive. `NaN` is never contained.
    #[inline]
    pub fn contains(&self, x: &f64) -> bool {
        self.lower <= *x && *x <= self.upper
    }

    /// Maps `x` in `[lower, upper]` to `[-1, 1]`, i.e. `2(x - lower)/(upper - lower) - 1`.
    #[inline]
    pub fn to_canonical(&self, x: &f64) -> f64 {
        2.0 * (x - self.lower) / self.width() - 1.0
    }

    /// Inverse of [Interval::to_canonical].
    #[inline]
    pub fn from_canonical(&self, t: &f64) -> f64 {
        t * self.width() / 2.0 + self.midpoint()
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

//
// ser/de
//
impl Serialize for Interval {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.lower, self.upper).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (lower, upper) = <(f64, f64)>::deserialize(deserializer)?;
        Self::new(lower, upper).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "Interval must have finite bounds and width with lower < upper. Given: [{lower}, {upper}]"
            ))
        })
    }
}

impl JsonSchema for Interval {
    fn schema_name() -> String {
        "Interval".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <(f64, f64)>::json_schema(gen)
    }
}
