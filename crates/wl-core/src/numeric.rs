use crate::WlError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WlError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WlError::NonFinite { what, value: v })
    }
}

/// Arithmetic mean of a non-empty slice.
pub fn mean(values: &[Real]) -> Result<Real, WlError> {
    if values.is_empty() {
        return Err(WlError::InvalidArg {
            what: "mean of empty slice",
        });
    }
    let sum: Real = values.iter().sum();
    Ok(sum / values.len() as Real)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pooled_levels_compare_equal() {
        // Pouring 30 into four containers one way or another
        let poured = 10.0 / 4.0 + 20.0 / 4.0;
        let pooled = (5.0 + 5.0 + 10.0 + 10.0) / 4.0;
        assert!(nearly_equal(poured, pooled, Tolerances::default()));
        assert!(nearly_equal(0.1 + 0.2, 0.3, Tolerances::default()));
        assert!(!nearly_equal(7.5, 7.5 + 1e-6, Tolerances::default()));
    }

    #[test]
    fn overflowed_level_is_not_finite() {
        let level = Real::MAX * 0.6;
        let err = ensure_finite(level + level, "container level").unwrap_err();
        assert!(matches!(
            err,
            WlError::NonFinite {
                what: "container level",
                ..
            }
        ));
        assert_eq!(ensure_finite(level, "container level"), Ok(level));
    }

    #[test]
    fn mean_of_levels() {
        assert_eq!(mean(&[10.0, 0.0]).unwrap(), 5.0);
        assert_eq!(mean(&[5.0, 5.0, 10.0, 10.0]).unwrap(), 7.5);
        assert!(mean(&[]).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mean_times_len_is_sum(values in prop::collection::vec(0.0_f64..1.0e6_f64, 1..32)) {
            let m = mean(&values).unwrap();
            let sum: f64 = values.iter().sum();
            let tol = Tolerances { abs: 1e-6, rel: 1e-9 };
            prop_assert!(nearly_equal(m * values.len() as f64, sum, tol));
        }
    }
}
