//! Coefficients in the Racah reduction formulas.
//!
//! Rose (equivalently Brink–Satchler) convention for reduced matrix
//! elements.  See Brink & Satchler, *Angular Momentum*, 2nd ed. (1968),
//! chapter V and appendix VI.
use super::ang_mom::allowed_triangle;
use super::half::{self, HalfInt};
use super::parity::Parity;
use super::wigner::{wigner_6j, wigner_9j};

quick_error! {
    /// Error type for reduction factors and reduced matrix elements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Error {
        TriangleDisallowed(j1: HalfInt, j2: HalfInt, j3: HalfInt) {
            display("triangle disallowed: ({}, {}, {})", j1, j2, j3)
        }
        /// A spectator angular momentum differs between bra and ket.
        Mismatch(bra: HalfInt, ket: HalfInt) {
            display("spectator mismatch: bra {} != ket {}", bra, ket)
        }
        Half(err: half::Error) {
            from()
            display("{}", err)
        }
    }
}

impl Error {
    /// Whether the error reflects a vanishing coefficient (a violated
    /// coupling rule) rather than a malformed calculation.
    pub fn is_selection_rule(&self) -> bool {
        match *self {
            Error::TriangleDisallowed(..) | Error::Mismatch(..) => true,
            Error::Half(_) => false,
        }
    }
}

/// What to do when a coupling rule is violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disallowed {
    /// Report `Error::TriangleDisallowed` or `Error::Mismatch`.
    Error,
    /// Substitute zero.
    Zero,
}

/// Selection-rule policy for reduction factors and RMEs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    pub on_disallowed: Disallowed,
}

/// `{ on_disallowed: Disallowed::Error }`
impl Default for Conf {
    fn default() -> Self {
        Self {
            on_disallowed: Disallowed::Error,
        }
    }
}

impl Conf {
    /// Apply the policy to the result of a reduction factor or RME.
    pub fn apply(&self, result: Result<f64, Error>) -> Result<f64, Error> {
        match result {
            Err(err) if err.is_selection_rule()
                && self.on_disallowed == Disallowed::Zero =>
            {
                debug!("substituting zero: {}", err);
                Ok(0.0)
            }
            r => r,
        }
    }
}

#[inline]
pub fn check_triangle(
    j1: HalfInt,
    j2: HalfInt,
    j3: HalfInt,
) -> Result<(), Error> {
    if allowed_triangle(j1, j2, j3) {
        Ok(())
    } else {
        Err(Error::TriangleDisallowed(j1, j2, j3))
    }
}

#[inline]
fn check_same(bra: HalfInt, ket: HalfInt) -> Result<(), Error> {
    if bra == ket {
        Ok(())
    } else {
        Err(Error::Mismatch(bra, ket))
    }
}

#[inline]
fn sign(sum: HalfInt) -> Result<f64, Error> {
    Ok(Parity::of_half(sum)?.sign_f64())
}

/// Single-system reduction for a tensor product `[A^J0a × B^J0b]^J0` with
/// intermediate state `Jpp`:
///
/// `(-)^(J0 − J' − J) Ĵ'' Ĵ0 {J' J J0; J0b J0a J''}`
pub fn reduction_factor_rose(
    jp: HalfInt, j: HalfInt, jpp: HalfInt,
    j0a: HalfInt, j0b: HalfInt, j0: HalfInt,
) -> Result<f64, Error> {
    check_triangle(j0a, j0b, j0)?;
    check_triangle(jp, j0, j)?;
    Ok(sign(j0 - jp - j)?
       * jpp.hat() * j0.hat()
       * wigner_6j(jp, j, j0, j0b, j0a, jpp))
}

/// Two-system reduction for an operator acting on system 1:
///
/// `⟨J1' J2; J'‖A_1^J0‖J1 J2; J⟩
///    = (-)^(J1' + J2 + J + J0) Ĵ1' Ĵ {J1' J' J2; J J1 J0} ⟨J1'‖A‖J1⟩`
///
/// `J2p` and `J2` must be equal.
pub fn reduction_factor_1_rose(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
    j0: HalfInt,
) -> Result<f64, Error> {
    check_same(j2p, j2)?;
    Ok(sign(j1p + j2 + j + j0)?
       * j1p.hat() * j.hat()
       * wigner_6j(j1p, jp, j2, j, j1, j0))
}

/// Two-system reduction for an operator acting on system 1, in the
/// Edmonds convention:
///
/// `(-)^(J1' + J2' + J + J0) Ĵ' Ĵ {J1' J' J2'; J J1 J0}`
///
/// Differs from `reduction_factor_1_rose` by the factor `Ĵ' / Ĵ1'`.
/// `J2p` and `J2` must be equal.
pub fn reduction_factor_first_system(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
    j0: HalfInt,
) -> Result<f64, Error> {
    check_same(j2p, j2)?;
    Ok(sign(j1p + j2p + j + j0)?
       * jp.hat() * j.hat()
       * wigner_6j(j1p, jp, j2p, j, j1, j0))
}

/// Two-system reduction for an operator acting on system 2:
///
/// `⟨J1 J2'; J'‖A_2^J0‖J1 J2; J⟩
///    = (-)^(J1 + J2 + J' + J0) Ĵ2' Ĵ {J' J2' J1; J2 J J0} ⟨J2'‖A‖J2⟩`
///
/// `J1p` and `J1` must be equal.
pub fn reduction_factor_2_rose(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
    j0: HalfInt,
) -> Result<f64, Error> {
    check_same(j1p, j1)?;
    Ok(sign(j1 + j2 + jp + j0)?
       * j2p.hat() * j.hat()
       * wigner_6j(jp, j2p, j1, j2, j, j0))
}

/// Two-system reduction for a scalar product `A_1^J0 · B_2^J0`.
pub fn reduction_factor_12_dot_rose(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
    j0: HalfInt,
) -> Result<f64, Error> {
    check_same(jp, j)?;
    Ok(sign(j2p + jp + j1)?
       * j1p.hat() * j2p.hat()
       * wigner_6j(j1p, j2p, jp, j2, j1, j0))
}

/// Two-system reduction for `[A_1^J0a × B_2^J0b]^J0`:
///
/// `Ĵ Ĵ0 Ĵ1' Ĵ2' {J' J J0; J1' J1 J0a; J2' J2 J0b}`
pub fn reduction_factor_12_rose(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
    j0a: HalfInt, j0b: HalfInt, j0: HalfInt,
) -> Result<f64, Error> {
    check_triangle(jp, j, j0)?;
    Ok(j0.hat() * j.hat() * j1p.hat() * j2p.hat()
       * wigner_9j(jp, j, j0, j1p, j1, j0a, j2p, j2, j0b))
}

/// Two-system reduction for `[A_2^J0a × B_1^J0b]^J0`, i.e. the first
/// factor acts on system 2:
///
/// `(-)^(J0a + J0b − J0) Ĵ Ĵ0 Ĵ1' Ĵ2' {J' J J0; J1' J1 J0b; J2' J2 J0a}`
pub fn reduction_factor_21_rose(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
    j0a: HalfInt, j0b: HalfInt, j0: HalfInt,
) -> Result<f64, Error> {
    check_triangle(jp, j, j0)?;
    Ok(sign(j0a + j0b - j0)?
       * j0.hat() * j.hat() * j1p.hat() * j2p.hat()
       * wigner_9j(jp, j, j0, j1p, j1, j0b, j2p, j2, j0a))
}
