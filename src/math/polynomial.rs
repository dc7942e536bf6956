use std::borrow::Cow;
use std::fmt;

use crate::sky_errors::SkyError;

/// Real polynomial with coefficients stored from the highest degree down.
///
/// `Polynomial::of(&[a_n, ..., a_1, a_0])` represents `a_n·xⁿ + … + a_1·x + a_0`.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Cow<'static, [f64]>,
}

impl Polynomial {
    /// Build a polynomial from coefficients in decreasing degree order.
    ///
    /// Return
    /// ----------
    /// * [`SkyError::EmptyPolynomial`] when `coefficients` is empty,
    ///   [`SkyError::ZeroLeadingCoefficient`] when the first coefficient is zero.
    pub fn of(coefficients: &[f64]) -> Result<Self, SkyError> {
        match coefficients.first() {
            None => Err(SkyError::EmptyPolynomial),
            Some(&lead) if lead == 0.0 => Err(SkyError::ZeroLeadingCoefficient),
            Some(_) => Ok(Self {
                coefficients: Cow::Owned(coefficients.to_vec()),
            }),
        }
    }

    /// Polynomial over a constant coefficient table whose leading term is known to be non-zero.
    pub(crate) const fn from_static(coefficients: &'static [f64]) -> Self {
        Self {
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate the polynomial at `x` with Horner's scheme.
    pub fn at(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let power = degree - i;
            if !first && c > 0.0 {
                write!(f, "+")?;
            }
            first = false;

            match (power, c) {
                (0, _) => write!(f, "{c}")?,
                (_, c) if c == 1.0 => {}
                (_, c) if c == -1.0 => write!(f, "-")?,
                _ => write!(f, "{c}")?,
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        Ok(())
    }
}
