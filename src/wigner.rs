//! Wigner coupling and recoupling symbols.
//!
//! Functions ending in `_twice` take integer twice-values `2 j`; the others
//! take `HalfInt` and delegate to them.  Arguments that violate a selection
//! rule yield zero, as do the symbols themselves.
//!
//! See, e.g., the appendix of de Shalit and Talmi for the formulas.
use fnv::FnvHashMap;
use wigner_symbols::{Wigner3jm, Wigner6j, Wigner9j};
use super::half::{self, HalfInt};

#[inline]
fn triad_twice(ta: i32, tb: i32, tc: i32) -> bool {
    ta >= 0 && tb >= 0
        && (ta - tb).abs() <= tc && tc <= ta + tb
        && (ta + tb + tc) % 2 == 0
}

#[inline]
fn projection_twice(tj: i32, tm: i32) -> bool {
    tm.abs() <= tj && (tj - tm) % 2 == 0
}

/// Returns `√(2 j + 1)` given `2 j`.
#[inline]
pub fn hat_twice(tj: i32) -> f64 {
    f64::from(tj + 1).sqrt()
}

/// Returns `(-1)^(s)` given `2 s`, which must be even.
#[inline]
pub fn parity_sign_twice(tsum: i32) -> Result<i32, half::Error> {
    super::parity::parity_sign(HalfInt(tsum))
}

pub fn wigner_3j_twice(
    tja: i32, tjb: i32, tjc: i32,
    tma: i32, tmb: i32, tmc: i32,
) -> f64 {
    if !triad_twice(tja, tjb, tjc)
        || !projection_twice(tja, tma)
        || !projection_twice(tjb, tmb)
        || !projection_twice(tjc, tmc)
        || tma + tmb + tmc != 0
    {
        return 0.0;
    }
    f64::from(Wigner3jm {
        tj1: tja,
        tm1: tma,
        tj2: tjb,
        tm2: tmb,
        tj3: tjc,
        tm3: tmc,
    }.value())
}

/// `⟨ja ma; jb mb|jc mc⟩ = ĵc (-1)^(ja − jb + mc) (ja jb jc; ma mb −mc)`
pub fn clebsch_gordan_twice(
    tja: i32, tma: i32,
    tjb: i32, tmb: i32,
    tjc: i32, tmc: i32,
) -> Result<f64, half::Error> {
    let w = wigner_3j_twice(tja, tjb, tjc, tma, tmb, -tmc);
    if w == 0.0 {
        return Ok(0.0);
    }
    Ok(hat_twice(tjc) * f64::from(parity_sign_twice(tja - tjb + tmc)?) * w)
}

pub fn wigner_6j_twice(
    tja: i32, tjb: i32, tjc: i32,
    tjd: i32, tje: i32, tjf: i32,
) -> f64 {
    if !triad_twice(tja, tjb, tjc)
        || !triad_twice(tja, tje, tjf)
        || !triad_twice(tjd, tjb, tjf)
        || !triad_twice(tjd, tje, tjc)
    {
        return 0.0;
    }
    f64::from(Wigner6j {
        tj1: tja,
        tj2: tjb,
        tj3: tjc,
        tj4: tjd,
        tj5: tje,
        tj6: tjf,
    }.value())
}

/// Unitary recoupling symbol for `(12)3 – 1(23)`, with arguments in the
/// row order of the 6j symbol: `(J1, J2, J12, J3, J, J23)`.
pub fn unitary_6j_twice(
    tja: i32, tjb: i32, tjc: i32,
    tjd: i32, tje: i32, tjf: i32,
) -> Result<f64, half::Error> {
    let w = wigner_6j_twice(tja, tjb, tjc, tjd, tje, tjf);
    if w == 0.0 {
        return Ok(0.0);
    }
    Ok(f64::from(parity_sign_twice(tja + tjb + tjd + tje)?)
       * hat_twice(tjc) * hat_twice(tjf) * w)
}

/// Unitary recoupling symbol for `(12)3 – (13)2` (Millener's Z), with
/// arguments in the row order of the 6j symbol: `(J1, J2, J12, J, J3, J13)`.
pub fn unitary_6j_z_twice(
    tja: i32, tjb: i32, tjc: i32,
    tjd: i32, tje: i32, tjf: i32,
) -> Result<f64, half::Error> {
    let w = wigner_6j_twice(tja, tjb, tjc, tjd, tje, tjf);
    if w == 0.0 {
        return Ok(0.0);
    }
    Ok(f64::from(parity_sign_twice(tjb + tje + tjc + tjf)?)
       * hat_twice(tjc) * hat_twice(tjf) * w)
}

pub fn wigner_9j_twice(
    tja: i32, tjb: i32, tjc: i32,
    tjd: i32, tje: i32, tjf: i32,
    tjg: i32, tjh: i32, tji: i32,
) -> f64 {
    if !triad_twice(tja, tjb, tjc)
        || !triad_twice(tjd, tje, tjf)
        || !triad_twice(tjg, tjh, tji)
        || !triad_twice(tja, tjd, tjg)
        || !triad_twice(tjb, tje, tjh)
        || !triad_twice(tjc, tjf, tji)
    {
        return 0.0;
    }
    f64::from(Wigner9j {
        tj1: tja,
        tj2: tjb,
        tj3: tjc,
        tj4: tjd,
        tj5: tje,
        tj6: tjf,
        tj7: tjg,
        tj8: tjh,
        tj9: tji,
    }.value())
}

/// `ĵc ĵf ĵg ĵh {9j}`
pub fn unitary_9j_twice(
    tja: i32, tjb: i32, tjc: i32,
    tjd: i32, tje: i32, tjf: i32,
    tjg: i32, tjh: i32, tji: i32,
) -> f64 {
    hat_twice(tjc) * hat_twice(tjf) * hat_twice(tjg) * hat_twice(tjh)
        * wigner_9j_twice(tja, tjb, tjc, tjd, tje, tjf, tjg, tjh, tji)
}

#[inline]
pub fn wigner_3j(
    ja: HalfInt, jb: HalfInt, jc: HalfInt,
    ma: HalfInt, mb: HalfInt, mc: HalfInt,
) -> f64 {
    wigner_3j_twice(
        ja.twice(), jb.twice(), jc.twice(),
        ma.twice(), mb.twice(), mc.twice(),
    )
}

#[inline]
pub fn clebsch_gordan(
    ja: HalfInt, ma: HalfInt,
    jb: HalfInt, mb: HalfInt,
    jc: HalfInt, mc: HalfInt,
) -> Result<f64, half::Error> {
    clebsch_gordan_twice(
        ja.twice(), ma.twice(),
        jb.twice(), mb.twice(),
        jc.twice(), mc.twice(),
    )
}

#[inline]
pub fn wigner_6j(
    ja: HalfInt, jb: HalfInt, jc: HalfInt,
    jd: HalfInt, je: HalfInt, jf: HalfInt,
) -> f64 {
    wigner_6j_twice(
        ja.twice(), jb.twice(), jc.twice(),
        jd.twice(), je.twice(), jf.twice(),
    )
}

#[inline]
pub fn unitary_6j(
    ja: HalfInt, jb: HalfInt, jc: HalfInt,
    jd: HalfInt, je: HalfInt, jf: HalfInt,
) -> Result<f64, half::Error> {
    unitary_6j_twice(
        ja.twice(), jb.twice(), jc.twice(),
        jd.twice(), je.twice(), jf.twice(),
    )
}

#[inline]
pub fn unitary_6j_z(
    ja: HalfInt, jb: HalfInt, jc: HalfInt,
    jd: HalfInt, je: HalfInt, jf: HalfInt,
) -> Result<f64, half::Error> {
    unitary_6j_z_twice(
        ja.twice(), jb.twice(), jc.twice(),
        jd.twice(), je.twice(), jf.twice(),
    )
}

#[inline]
pub fn wigner_9j(
    ja: HalfInt, jb: HalfInt, jc: HalfInt,
    jd: HalfInt, je: HalfInt, jf: HalfInt,
    jg: HalfInt, jh: HalfInt, ji: HalfInt,
) -> f64 {
    wigner_9j_twice(
        ja.twice(), jb.twice(), jc.twice(),
        jd.twice(), je.twice(), jf.twice(),
        jg.twice(), jh.twice(), ji.twice(),
    )
}

#[inline]
pub fn unitary_9j(
    ja: HalfInt, jb: HalfInt, jc: HalfInt,
    jd: HalfInt, je: HalfInt, jf: HalfInt,
    jg: HalfInt, jh: HalfInt, ji: HalfInt,
) -> f64 {
    unitary_9j_twice(
        ja.twice(), jb.twice(), jc.twice(),
        jd.twice(), je.twice(), jf.twice(),
        jg.twice(), jh.twice(), ji.twice(),
    )
}

/// Memoized 6j symbols, keyed by twice-values.
#[derive(Clone, Debug, Default)]
pub struct Wigner6jCtx(FnvHashMap<[i32; 6], f64>);

impl Wigner6jCtx {
    pub fn get_twice(&mut self, tj: [i32; 6]) -> f64 {
        *self.0.entry(tj).or_insert_with(|| {
            wigner_6j_twice(tj[0], tj[1], tj[2], tj[3], tj[4], tj[5])
        })
    }

    pub fn get(
        &mut self,
        ja: HalfInt, jb: HalfInt, jc: HalfInt,
        jd: HalfInt, je: HalfInt, jf: HalfInt,
    ) -> f64 {
        self.get_twice([
            ja.twice(), jb.twice(), jc.twice(),
            jd.twice(), je.twice(), jf.twice(),
        ])
    }

    /// Number of distinct symbols evaluated so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_rules() {
        // m's don't sum to zero
        assert_eq!(wigner_3j_twice(2, 2, 2, 2, 0, 0), 0.0);
        // |m| > j
        assert_eq!(wigner_3j_twice(2, 2, 0, 4, -4, 0), 0.0);
        // j − m not integral
        assert_eq!(wigner_3j_twice(2, 2, 0, 1, -1, 0), 0.0);
        // no triangle
        assert_eq!(wigner_6j_twice(2, 2, 8, 2, 2, 2), 0.0);
        assert_eq!(wigner_9j_twice(2, 2, 8, 2, 2, 2, 2, 2, 2), 0.0);
        assert_eq!(clebsch_gordan_twice(1, 1, 1, 1, 1, 1), Ok(0.0));
        assert_eq!(unitary_6j_twice(1, 1, 1, 1, 1, 1), Ok(0.0));
    }

    #[test]
    fn test_hat_parity_twice() {
        assert_eq!(hat_twice(3), 2.0);
        assert_eq!(parity_sign_twice(2), Ok(-1));
        assert_eq!(parity_sign_twice(-4), Ok(1));
        assert_eq!(parity_sign_twice(1),
                   Err(half::Error::ComplexPhase(HalfInt(1))));
    }

    #[test]
    fn test_trivial_symbols() {
        // (j j 0; m −m 0) = (−1)^(j − m) / ĵ
        let w = wigner_3j_twice(2, 2, 0, 2, -2, 0);
        assert!((w - 1.0 / 3f64.sqrt()).abs() < 1e-12);
        let cg = clebsch_gordan_twice(1, 1, 1, -1, 0, 0).unwrap();
        assert!((cg - 0.5f64.sqrt()).abs() < 1e-12);
        let cg = clebsch_gordan_twice(2, 2, 0, 0, 2, 2).unwrap();
        assert!((cg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ctx() {
        let mut ctx = Wigner6jCtx::default();
        assert!(ctx.is_empty());
        let j = |t| HalfInt(t);
        let w = ctx.get(j(4), j(5), j(9), j(10), j(5), j(7));
        assert_eq!(w, wigner_6j(j(4), j(5), j(9), j(10), j(5), j(7)));
        assert_eq!(ctx.get_twice([4, 5, 9, 10, 5, 7]), w);
        assert_eq!(ctx.len(), 1);
    }
}
