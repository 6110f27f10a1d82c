use super::{Error, Interval};
use crate::num::Func1d;

// -----------------------------------------------------------------------------
// ChebBasis
// -----------------------------------------------------------------------------
/// `j`-th Chebyshev polynomial pulled back onto an interval,
/// i.e. `x -> T_j(2(x - a)/(b - a) - 1)` where `T_j(cos θ) = cos(jθ)`.
///
/// Each instance owns its own index and interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebBasis {
    index: usize,
    interval: Interval,
}

impl ChebBasis {
    #[inline]
    pub fn new(index: usize, interval: Interval) -> Self {
        ChebBasis { index, interval }
    }

    /// Basis functions `T_0, ..., T_degree` on the given interval.
    pub fn family(degree: usize, interval: Interval) -> Vec<Self> {
        (0..=degree).map(|j| ChebBasis::new(j, interval)).collect()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Evaluates without the domain check.
    ///
    /// The mapped argument is clamped onto `[-1, 1]` so that rounding at the interval ends
    /// does not turn into `NaN` through `acos`.
    #[inline]
    pub(crate) fn apply(&self, x: f64) -> f64 {
        let t = self.interval.to_canonical(&x).clamp(-1.0, 1.0);
        (self.index as f64 * t.acos()).cos()
    }
}

impl Func1d<f64> for ChebBasis {
    type Output = f64;
    type Error = Error;

    #[inline]
    fn eval(&self, x: &f64) -> Result<f64, Error> {
        if !self.interval.contains(x) {
            return Err(Error::Domain {
                x: *x,
                interval: self.interval,
            });
        }
        Ok(self.apply(*x))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // explicit polynomials on [-1, 1]
    fn t(j: usize, x: f64) -> f64 {
        match j {
            0 => 1.0,
            1 => x,
            2 => 2.0 * x * x - 1.0,
            3 => 4.0 * x * x * x - 3.0 * x,
            4 => 8.0 * x.powi(4) - 8.0 * x * x + 1.0,
            _ => unreachable!(),
        }
    }

    #[rstest]
    #[case(-1.0)]
    #[case(-0.6)]
    #[case(0.0)]
    #[case(0.25)]
    #[case(1.0)]
    fn test_eval_canonical(#[case] x: f64) {
        for basis in ChebBasis::family(4, Interval::default()) {
            let tested = basis.eval(&x).unwrap();

            approx::assert_abs_diff_eq!(tested, t(basis.index(), x), epsilon = 1e-12);
        }
    }

    #[rstest]
    #[case(0.0, -1.0)]
    #[case(1.5, 0.0)]
    #[case(2.25, 0.5)]
    #[case(3.0, 1.0)]
    fn test_eval_mapped(#[case] x: f64, #[case] mapped: f64) {
        let itv = Interval::new(0.0, 3.0).unwrap();
        for basis in ChebBasis::family(4, itv) {
            let tested = basis.eval(&x).unwrap();

            approx::assert_abs_diff_eq!(tested, t(basis.index(), mapped), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_family_captures_own_index() {
        let itv = Interval::new(1.0, 2.0).unwrap();
        let family = ChebBasis::family(5, itv);

        assert_eq!(family.len(), 6);
        for (j, basis) in family.iter().enumerate() {
            assert_eq!(basis.index(), j);
            assert_eq!(basis.interval(), &itv);
        }
        // T_j(1) = 1 and T_j(-1) = (-1)^j
        for basis in &family {
            let sign = if basis.index() % 2 == 0 { 1.0 } else { -1.0 };
            approx::assert_abs_diff_eq!(basis.eval(&2.0).unwrap(), 1.0, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(basis.eval(&1.0).unwrap(), sign, epsilon = 1e-12);
        }
    }

    #[rstest]
    #[case(-1.0000001)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_eval_out_of_domain(#[case] x: f64) {
        let basis = ChebBasis::new(2, Interval::default());

        let res = basis.eval(&x);

        assert!(matches!(res, Err(Error::Domain { .. })));
    }
}
