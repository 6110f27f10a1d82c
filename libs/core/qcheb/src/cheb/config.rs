use super::{ChebApprox, Error, Interval, Source};

// -----------------------------------------------------------------------------
// ChebApproxConfig
// -----------------------------------------------------------------------------
/// Declarative description of an approximant.
///
/// `interval` defaults to `[-1, 1]` and `degree` to [ChebApprox::DEFAULT_DEGREE].
///
/// # Example
/// ```
/// use qcheb::cheb::ChebApproxConfig;
///
/// let config: ChebApproxConfig = serde_json::from_value(serde_json::json!({
///     "source": "sin",
///     "interval": [0.0, 3.0],
///     "degree": 8,
/// })).unwrap();
/// let approx = config.build().unwrap();
/// assert_eq!(approx.degree(), 8);
/// ```
#[derive(Debug, serde::Deserialize)]
pub struct ChebApproxConfig {
    /// Name of an elementary function, or coefficients.
    pub source: Source<'static>,

    #[serde(default)]
    pub interval: Interval,

    /// Ignored when `source` is a coefficient sequence.
    #[serde(default = "default_degree")]
    pub degree: usize,
}

fn default_degree() -> usize {
    ChebApprox::DEFAULT_DEGREE
}

impl ChebApproxConfig {
    #[inline]
    pub fn build(self) -> Result<ChebApprox, Error> {
        ChebApprox::construct(self.source, self.interval, self.degree)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults() {
        let config: ChebApproxConfig = serde_json::from_value(json!({ "source": "exp" })).unwrap();

        assert_eq!(config.interval, Interval::default());
        assert_eq!(config.degree, 10);

        let tested = config.build().unwrap();
        assert_eq!(tested.degree(), 10);
        assert_eq!(tested.interval(), &Interval::default());
    }

    #[test]
    fn test_coefficients_ignore_degree() {
        let config: ChebApproxConfig = serde_json::from_value(json!({
            "source": [1.0, 2.0],
            "interval": [0.0, 1.0],
            "degree": 7,
        }))
        .unwrap();

        let tested = config.build().unwrap();

        assert_eq!(tested.degree(), 1);
        assert_eq!(tested.coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn test_invalid_source() {
        let res = serde_json::from_value::<ChebApproxConfig>(json!({ "source": { "name": "sin" } }));

        assert!(res.is_err());
    }

    #[test]
    fn test_empty_coefficients() {
        let config: ChebApproxConfig = serde_json::from_value(json!({ "source": [] })).unwrap();

        let res = config.build();

        assert!(matches!(res, Err(Error::InvalidArgumentType { .. })));
    }
}
