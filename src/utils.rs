use conv::ValueInto;
use std::f64;

/// Shorthand for casting numbers.  Panics if out of range.
pub fn cast<T: ValueInto<U>, U>(x: T) -> U {
    x.value_into().expect("integer conversion failure")
}

/// Tolerance for comparing floating-point results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Toler {
    pub relerr: f64,
    pub abserr: f64,
}

/// `{ relerr: 1e-8, abserr: 1e-8 }`
impl Default for Toler {
    fn default() -> Self {
        Self {
            relerr: 1e-8,
            abserr: 1e-8,
        }
    }
}

impl Toler {
    /// Whether `x` and `y` agree to within either tolerance.
    pub fn is_eq(&self, x: f64, y: f64) -> bool {
        let diff = (x - y).abs();
        diff <= self.abserr || diff <= self.relerr * f64::max(x.abs(), y.abs())
    }
}
