//! Parity data type and phase factors.
use std::ops::Rem;
use num::{Complex, One, Zero};
use super::half::{self, HalfInt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    #[inline]
    pub fn of<T: Rem<Output = T> + Zero + One>(i: T) -> Self {
        if (i % (T::one() + T::one())).is_zero() {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Parity of an integral `HalfInt`.  Half-odd values have no parity.
    #[inline]
    pub fn of_half(j: HalfInt) -> Result<Self, half::Error> {
        j.try_get()
            .map(Parity::of)
            .map_err(half::Error::ComplexPhase)
    }

    #[inline]
    pub fn sign_f64(self) -> f64 {
        match self {
            Parity::Even => 1.0,
            Parity::Odd => -1.0,
        }
    }
}

/// Returns `(-1)^sum`, which must be an integer.
///
/// Bit 1 of the twice-value is set exactly when an integral `sum` is odd.
#[inline]
pub fn parity_sign(sum: HalfInt) -> Result<i32, half::Error> {
    if !sum.is_integer() {
        return Err(half::Error::ComplexPhase(sum));
    }
    Ok(1 - (sum.twice() & 2))
}

/// Returns `(-1)^sum`.
#[inline]
pub fn parity_sign_int(sum: i32) -> i32 {
    1 - 2 * (sum & 1)
}

/// Returns the complex phase `(-1)^sum = i^(2 sum)`.
///
/// Only `2 sum mod 4` matters: bit 0 of the twice-value selects the
/// imaginary axis and bit 1 the sign.
#[inline]
pub fn phase(sum: HalfInt) -> Complex<f64> {
    let im = sum.twice() & 1;
    let sign = 1 - (sum.twice() & 2);
    Complex::new(f64::from(sign * (1 - im)), f64::from(sign * im))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_half() {
        assert_eq!(Parity::of_half(HalfInt::from(3)), Ok(Parity::Odd));
        assert_eq!(Parity::of_half(HalfInt::from(-2)), Ok(Parity::Even));
        assert_eq!(Parity::of_half(HalfInt(3)),
                   Err(half::Error::ComplexPhase(HalfInt(3))));
    }

    #[test]
    fn test_parity_sign() {
        assert_eq!(parity_sign_int(-1), -1);
        assert_eq!(parity_sign(HalfInt(-2)), Ok(-1));
        assert_eq!(parity_sign(HalfInt(-2)), Ok(parity_sign_int(-1)));
        for n in -50 .. 50 {
            let expected = if n % 2 == 0 { 1 } else { -1 };
            assert_eq!(parity_sign_int(n), expected);
            assert_eq!(parity_sign(HalfInt::from(n)), Ok(expected));
            assert_eq!(Parity::of(n).sign_f64(), f64::from(expected));
        }
    }

    #[test]
    fn test_parity_sign_half_odd() {
        assert_eq!(parity_sign(HalfInt(1)),
                   Err(half::Error::ComplexPhase(HalfInt(1))));
        assert_eq!(parity_sign(HalfInt(-3)),
                   Err(half::Error::ComplexPhase(HalfInt(-3))));
    }

    #[test]
    fn test_phase() {
        assert_eq!(phase(HalfInt(0)), Complex::new(1.0, 0.0));
        assert_eq!(phase(HalfInt(1)), Complex::new(0.0, 1.0));
        assert_eq!(phase(HalfInt(2)), Complex::new(-1.0, 0.0));
        assert_eq!(phase(HalfInt(3)), Complex::new(0.0, -1.0));
        assert_eq!(phase(HalfInt(-1)), Complex::new(0.0, -1.0));
        assert_eq!(phase(HalfInt(-2)), Complex::new(-1.0, 0.0));
        for t in -40 .. 40 {
            let j = HalfInt(t);
            let z = phase(j);
            let theta = std::f64::consts::PI * j.to_f64();
            assert!((z.re - theta.cos()).abs() < 1e-12);
            assert!((z.im - theta.sin()).abs() < 1e-12);
            if let Ok(sign) = parity_sign(j) {
                assert_eq!(z, Complex::new(f64::from(sign), 0.0));
            }
            assert_eq!(phase(j + 2i32), phase(j));
        }
    }
}
