//! Standard reduced matrix elements.
//!
//! All RMEs follow the Rose convention.  The operators here have integer
//! rank, so these are also in the Brink–Satchler convention.
use std::f64::consts;
use super::half::HalfInt;
use super::parity::{parity_sign, parity_sign_int, Parity};
use super::racah::{check_triangle, Error};
use super::wigner::{wigner_3j, wigner_6j};

pub const PI: f64 = consts::PI;
pub const SQRT_4PI: f64 = 3.544907701811032054596334966682290365595098912244;
pub const INV_SQRT_4PI: f64 = 0.282094791773878143474039725780386292922025314664;

const HALF: HalfInt = HalfInt(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Orbital,
    Spin,
    Total,
}

impl OperatorKind {
    #[inline]
    pub fn code(self) -> char {
        match self {
            OperatorKind::Orbital => 'l',
            OperatorKind::Spin => 's',
            OperatorKind::Total => 'j',
        }
    }

    #[inline]
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'l' => Some(OperatorKind::Orbital),
            's' => Some(OperatorKind::Spin),
            'j' => Some(OperatorKind::Total),
            _ => None,
        }
    }
}

/// RME of the spherical harmonic in Racah normalization,
/// `C_k = √(4π / (2 k + 1)) Y_k`, between orbital states.
///
/// Brink & Satchler (1993), app. VI, p. 153.
pub fn spherical_harmonic_c_rme(lp: i32, l: i32, k: i32) -> Result<f64, Error> {
    let (lp, l, k) = (HalfInt::from(lp), HalfInt::from(l), HalfInt::from(k));
    check_triangle(lp, k, l)?;
    Ok(l.hat()
       * f64::from(parity_sign_int(lp.trunc()))
       * wigner_3j(lp, k, l, HalfInt(0), HalfInt(0), HalfInt(0)))
}

/// RME of `C_k` between `lj`-coupled single-particle states.
pub fn lj_spherical_harmonic_c_rme(
    lp: i32, jp: HalfInt,
    l: i32, j: HalfInt,
    k: i32,
) -> Result<f64, Error> {
    check_triangle(HalfInt::from(lp), HALF, jp)?;
    check_triangle(HalfInt::from(l), HALF, j)?;
    if Parity::of(lp + l + k) == Parity::Odd {
        return Ok(0.0);
    }
    let k = HalfInt::from(k);
    Ok(j.hat()
       * f64::from(parity_sign(j + k - HALF)?)
       * wigner_3j(jp, j, k, HALF, -HALF, HalfInt(0)))
}

/// RME of the spherical harmonic `Y_k` between orbital states.
pub fn spherical_harmonic_y_rme(lp: i32, l: i32, k: i32) -> Result<f64, Error> {
    Ok(HalfInt::from(k).hat() * INV_SQRT_4PI
       * spherical_harmonic_c_rme(lp, l, k)?)
}

/// RME of `Y_k` between `lj`-coupled single-particle states.
pub fn lj_spherical_harmonic_y_rme(
    lp: i32, jp: HalfInt,
    l: i32, j: HalfInt,
    k: i32,
) -> Result<f64, Error> {
    Ok(HalfInt::from(k).hat() * INV_SQRT_4PI
       * lj_spherical_harmonic_c_rme(lp, jp, l, j, k)?)
}

/// `⟨J'‖J‖J⟩ = δ(J', J) √(J (J + 1))`
pub fn angular_momentum_j_rme(jp: HalfInt, j: HalfInt) -> f64 {
    if jp != j {
        return 0.0;
    }
    (j.to_f64() * (j + 1i32).to_f64()).sqrt()
}

fn check_jj_triangles(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
) -> Result<(), Error> {
    check_triangle(j1p, j2p, jp)?;
    check_triangle(j1, j2, j)?;
    check_triangle(jp, HalfInt::from(1), j)
}

/// RME of `J_1` between `jjJ`-coupled states.
///
/// Brink & Satchler (1993), app. VI, p. 152.
pub fn jj_angular_momentum_j1_rme(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
) -> Result<f64, Error> {
    check_jj_triangles(j1p, j2p, jp, j1, j2, j)?;
    if j1p != j1 || j2p != j2 {
        return Ok(0.0);
    }
    let norm = j1p.to_f64() * (j1p + 1i32).to_f64()
        * f64::from(j1p.twice() + 1) * f64::from(j.twice() + 1);
    Ok(f64::from(parity_sign(1i32 + j2p + j + j1p)?)
       * norm.sqrt()
       * wigner_6j(jp, j, HalfInt::from(1), j1, j1p, j2p))
}

/// RME of `J_2` between `jjJ`-coupled states.
///
/// Brink & Satchler (1993), app. VI, p. 152.
pub fn jj_angular_momentum_j2_rme(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
) -> Result<f64, Error> {
    check_jj_triangles(j1p, j2p, jp, j1, j2, j)?;
    if j1p != j1 || j2p != j2 {
        return Ok(0.0);
    }
    let norm = j2p.to_f64() * (j2p + 1i32).to_f64()
        * f64::from(j2p.twice() + 1) * f64::from(j.twice() + 1);
    Ok(f64::from(parity_sign(1i32 + j1p + jp + j2)?)
       * norm.sqrt()
       * wigner_6j(jp, j, HalfInt::from(1), j2, j2p, j1p))
}

/// RME of the total `J` between `jjJ`-coupled states.
pub fn jj_angular_momentum_j_rme(
    j1p: HalfInt, j2p: HalfInt, jp: HalfInt,
    j1: HalfInt, j2: HalfInt, j: HalfInt,
) -> Result<f64, Error> {
    check_jj_triangles(j1p, j2p, jp, j1, j2, j)?;
    if j1p != j1 || j2p != j2 {
        return Ok(0.0);
    }
    Ok(angular_momentum_j_rme(jp, j))
}
