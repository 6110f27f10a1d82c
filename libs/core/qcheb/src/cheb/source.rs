use std::{fmt::Debug, str::FromStr};

use serde::Deserialize;

use super::Error;
use crate::num::ElementaryFn;

// -----------------------------------------------------------------------------
// Source
// -----------------------------------------------------------------------------
/// What an approximant is built from.
///
/// Either a callable to be sampled at Chebyshev nodes,
/// or the expansion coefficients themselves.
///
/// A dynamic value (e.g. read from a JSON document) is turned into a source with [TryFrom]:
/// a string names an [ElementaryFn] and an array lists coefficients.
/// Anything else is rejected with [Error::InvalidArgumentType].
///
/// # Example
/// ```
/// use qcheb::{cheb::{Error, Source}, num::ElementaryFn};
///
/// let src = Source::try_from(serde_json::json!("sin")).unwrap();
/// assert!(matches!(src, Source::Elementary(ElementaryFn::Sin)));
///
/// let src = Source::try_from(serde_json::json!([0.5, 0.0, 0.5])).unwrap();
/// assert!(matches!(src, Source::Coefficients(c) if c == vec![0.5, 0.0, 0.5]));
///
/// let res = Source::try_from(serde_json::json!({ "f": "sin" }));
/// assert!(matches!(res, Err(Error::InvalidArgumentType { .. })));
/// ```
pub enum Source<'a> {
    Func(Box<dyn Fn(f64) -> f64 + Send + Sync + 'a>),
    Elementary(ElementaryFn),
    Coefficients(Vec<f64>),
}

impl<'a> Source<'a> {
    #[inline]
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'a,
    {
        Source::Func(Box::new(f))
    }
}

impl Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Func(_) => f.write_str("Func(..)"),
            Source::Elementary(func) => f.debug_tuple("Elementary").field(func).finish(),
            Source::Coefficients(c) => f.debug_tuple("Coefficients").field(c).finish(),
        }
    }
}

impl From<ElementaryFn> for Source<'_> {
    #[inline]
    fn from(f: ElementaryFn) -> Self {
        Source::Elementary(f)
    }
}

impl From<Vec<f64>> for Source<'_> {
    #[inline]
    fn from(coefficients: Vec<f64>) -> Self {
        Source::Coefficients(coefficients)
    }
}

impl From<&[f64]> for Source<'_> {
    #[inline]
    fn from(coefficients: &[f64]) -> Self {
        Source::Coefficients(coefficients.to_vec())
    }
}

impl TryFrom<serde_json::Value> for Source<'static> {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Error> {
        use serde_json::Value;

        match value {
            Value::String(name) => ElementaryFn::from_str(&name)
                .map(Source::Elementary)
                .map_err(|_| Error::InvalidArgumentType {
                    found: format!("unknown function name {name:?}"),
                }),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_f64().ok_or_else(|| Error::InvalidArgumentType {
                        found: format!("non-numeric sequence element {item}"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Source::Coefficients),
            Value::Null => Err(Error::InvalidArgumentType {
                found: "null".to_string(),
            }),
            Value::Bool(b) => Err(Error::InvalidArgumentType {
                found: format!("boolean {b}"),
            }),
            Value::Number(n) => Err(Error::InvalidArgumentType {
                found: format!("bare number {n}"),
            }),
            Value::Object(_) => Err(Error::InvalidArgumentType {
                found: "object".to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Source<'static> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Source::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!("exp"), ElementaryFn::Exp)]
    #[case(json!("square"), ElementaryFn::Square)]
    fn test_try_from_name(#[case] value: serde_json::Value, #[case] expected: ElementaryFn) {
        let tested = Source::try_from(value).unwrap();

        assert!(matches!(tested, Source::Elementary(f) if f == expected));
    }

    #[rstest]
    #[case(json!([1.0]), vec![1.0])]
    #[case(json!([1, -2, 3.5]), vec![1.0, -2.0, 3.5])]
    #[case(json!([]), vec![])]
    fn test_try_from_array(#[case] value: serde_json::Value, #[case] expected: Vec<f64>) {
        let tested = Source::try_from(value).unwrap();

        assert!(matches!(tested, Source::Coefficients(c) if c == expected));
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!(42))]
    #[case(json!("not callable or sequence"))]
    #[case(json!({"coefficients": [1.0]}))]
    #[case(json!([1.0, "two"]))]
    #[case(json!([[1.0]]))]
    fn test_try_from_invalid(#[case] value: serde_json::Value) {
        let res = Source::try_from(value);

        assert!(matches!(res, Err(Error::InvalidArgumentType { .. })));
    }

    #[test]
    fn test_deserialize() {
        let tested: Source = serde_json::from_value(json!("cos")).unwrap();
        assert!(matches!(tested, Source::Elementary(ElementaryFn::Cos)));

        let res = serde_json::from_value::<Source>(json!({}));
        let msg = res.unwrap_err().to_string();
        assert!(msg.contains("object"), "{msg}");
    }

    #[test]
    fn test_from() {
        let coeffs = [1.0, 2.0];

        assert!(matches!(Source::from(&coeffs[..]), Source::Coefficients(c) if c == coeffs));
        assert!(matches!(Source::from(coeffs.to_vec()), Source::Coefficients(c) if c == coeffs));
        assert!(matches!(
            Source::from(ElementaryFn::Log),
            Source::Elementary(ElementaryFn::Log)
        ));
        assert!(matches!(Source::func(|x| x + 1.0), Source::Func(_)));
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Source::func(f64::sin)), "Func(..)");
        assert_eq!(
            format!("{:?}", Source::from(vec![1.0])),
            "Coefficients([1.0])"
        );
    }
}
