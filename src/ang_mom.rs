//! Angular momentum coupling.
use std::fmt;
use super::half::HalfInt;
use super::utils;

/// Inclusive range of angular momenta `lower, lower + 1, …, upper`.
///
/// Intersections may produce an inverted range (`lower > upper`), which is
/// treated as empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmRange {
    pub lower: HalfInt,
    pub upper: HalfInt,
}

impl fmt::Display for AmRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.lower, self.upper)
    }
}

impl From<(HalfInt, HalfInt)> for AmRange {
    #[inline]
    fn from((lower, upper): (HalfInt, HalfInt)) -> Self {
        AmRange::new(lower, upper)
    }
}

impl AmRange {
    #[inline]
    pub fn new(lower: HalfInt, upper: HalfInt) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    /// Number of values in the range.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            utils::cast((self.upper - self.lower).trunc() + 1)
        }
    }

    /// Whether `j` lies within the bounds and an integer step from `lower`.
    #[inline]
    pub fn contains(&self, j: HalfInt) -> bool {
        self.lower <= j && j <= self.upper && (j - self.lower).is_integer()
    }

    #[inline]
    pub fn iter(&self) -> AmRangeIter {
        AmRangeIter {
            next: self.lower,
            upper: self.upper,
        }
    }
}

impl IntoIterator for AmRange {
    type Item = HalfInt;
    type IntoIter = AmRangeIter;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an `AmRange` in unit steps.
#[derive(Clone, Debug)]
pub struct AmRangeIter {
    next: HalfInt,
    upper: HalfInt,
}

impl Iterator for AmRangeIter {
    type Item = HalfInt;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.upper {
            return None;
        }
        Some(self.next.post_inc())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = AmRange::new(self.next, self.upper).len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for AmRangeIter {}

/// Dimension `2 j + 1` of the multiplet.
#[inline]
pub fn dim(j: HalfInt) -> i32 {
    j.twice() + 1
}

/// Dimension `2 j + 1` for an ordinary integer `j` (not a twice-value).
#[inline]
pub fn dim_int(j: i32) -> i32 {
    2 * j + 1
}

/// Test whether the three angular momenta close a triangle, i.e.
/// `|j1 − j2| ≤ j3 ≤ j1 + j2` and `j1 + j2 + j3` is an integer.
#[inline]
pub fn allowed_triangle(j1: HalfInt, j2: HalfInt, j3: HalfInt) -> bool {
    j1.tri_range(j2).lower <= j3
        && j3 <= j1 + j2
        && (j1 + j2 + j3).is_integer()
}

/// Angular momenta that `j1` and `j2` can couple to, in ascending order.
///
/// Both arguments should be nonnegative.
pub fn product_angular_momenta(j1: HalfInt, j2: HalfInt) -> Vec<HalfInt> {
    let range = product_angular_momentum_range(j1, j2);
    let mut result = Vec::with_capacity(range.len());
    result.extend(range);
    result
}

/// Range `(|j1 − j2|, j1 + j2)` allowed by the triangle inequality.
#[inline]
pub fn product_angular_momentum_range(j1: HalfInt, j2: HalfInt) -> AmRange {
    j1.tri_range(j2)
}

/// Lower bound is the max of lower bounds, upper bound is the min of upper
/// bounds.  Check `is_empty` on the result.
#[inline]
pub fn range_intersection(r1: AmRange, r2: AmRange) -> AmRange {
    AmRange {
        lower: r1.lower.max(r2.lower),
        upper: r1.upper.min(r2.upper),
    }
}

/// Intersection of an arbitrary number of ranges.  Returns `None` only if
/// there are no ranges at all.
pub fn range_intersection_all<I>(ranges: I) -> Option<AmRange>
    where I: IntoIterator<Item = AmRange>
{
    let mut ranges = ranges.into_iter();
    let first = ranges.next()?;
    Some(ranges.fold(first, range_intersection))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lower: i32, upper: i32) -> AmRange {
        AmRange::new(HalfInt::from(lower), HalfInt::from(upper))
    }

    #[test]
    fn test_dim() {
        assert_eq!(dim(HalfInt(3)), 4);
        assert_eq!(dim(HalfInt::from(2)), 5);
        assert_eq!(dim(HalfInt(0)), 1);
        assert_eq!(dim_int(2), 5);
        assert_eq!(dim_int(0), 1);
    }

    #[test]
    fn test_allowed_triangle() {
        let one = HalfInt::from(1);
        let two = HalfInt::from(2);
        assert!(allowed_triangle(one, two, two));
        assert!(!allowed_triangle(one, HalfInt(0), two));
        // triangle holds, but the sum is half-odd
        assert!(!allowed_triangle(one, two, HalfInt(3)));
        assert!(allowed_triangle(one, HalfInt(3), HalfInt(3)));
        assert!(allowed_triangle(HalfInt(1), HalfInt(1), HalfInt(0)));
        assert!(!allowed_triangle(HalfInt(1), HalfInt(1), HalfInt(1)));
        assert!(!allowed_triangle(one, one, HalfInt::from(3)));
    }

    #[test]
    fn test_allowed_triangle_matches_range() {
        for tj1 in 0 .. 8 {
            for tj2 in 0 .. 8 {
                let (j1, j2) = (HalfInt(tj1), HalfInt(tj2));
                let range = product_angular_momentum_range(j1, j2);
                for tj3 in 0 .. 20 {
                    let j3 = HalfInt(tj3);
                    assert_eq!(allowed_triangle(j1, j2, j3),
                               range.contains(j3));
                }
            }
        }
    }

    #[test]
    fn test_product_angular_momenta() {
        assert_eq!(product_angular_momenta(HalfInt::from(2), HalfInt(3)),
                   vec![HalfInt(1), HalfInt(3), HalfInt(5), HalfInt(7)]);
        assert_eq!(product_angular_momenta(HalfInt(3), HalfInt::from(2)),
                   vec![HalfInt(1), HalfInt(3), HalfInt(5), HalfInt(7)]);
        assert_eq!(product_angular_momenta(HalfInt(0), HalfInt(0)),
                   vec![HalfInt(0)]);
        for tj1 in 0 .. 10 {
            for tj2 in 0 .. 10 {
                let (j1, j2) = (HalfInt(tj1), HalfInt(tj2));
                let js = product_angular_momenta(j1, j2);
                let expected = (j1 + j2) - (j1 - j2).abs() + 1i32;
                assert_eq!(HalfInt::from(js.len() as i32), expected);
                assert!(js.iter().all(|&j| allowed_triangle(j1, j2, j)));
                let dims: i32 = js.iter().map(|&j| dim(j)).sum();
                assert_eq!(dims, dim(j1) * dim(j2));
            }
        }
    }

    #[test]
    fn test_product_range() {
        let r = product_angular_momentum_range(HalfInt::from(2), HalfInt(3));
        assert_eq!(r, AmRange::new(HalfInt(1), HalfInt(7)));
        assert_eq!(r.to_string(), "(1/2,7/2)");
        assert_eq!(r.len(), 4);
        assert_eq!(r.iter().len(), 4);
        assert_eq!(r.into_iter().collect::<Vec<_>>(),
                   product_angular_momenta(HalfInt::from(2), HalfInt(3)));
    }

    #[test]
    fn test_range_intersection() {
        let r12 = range_intersection(range(1, 5), range(3, 6));
        assert_eq!(r12, range(3, 5));
        assert_eq!(r12.to_string(), "(3,5)");
        let r123 = range_intersection_all(vec![range(1, 5), range(3, 6),
                                               range(4, 7)]);
        assert_eq!(r123, Some(range(4, 5)));
        let rx = range_intersection(range(1, 5), range(7, 9));
        assert_eq!(rx, range(7, 5));
        assert!(rx.is_empty());
        assert_eq!(rx.len(), 0);
        assert_eq!(rx.iter().next(), None);
        assert!(!r12.is_empty());
        assert_eq!(range_intersection_all(vec![range(2, 4)]),
                   Some(range(2, 4)));
        assert_eq!(range_intersection_all(Vec::new()), None);
    }

    #[test]
    fn test_range_intersection_order() {
        let rs = [range(1, 5), range(3, 6), range(4, 7), range(0, 9)];
        let forward = range_intersection_all(rs.iter().cloned());
        let backward = range_intersection_all(rs.iter().rev().cloned());
        assert_eq!(forward, backward);
        assert_eq!(range_intersection(rs[0], rs[1]),
                   range_intersection(rs[1], rs[0]));
    }

    #[test]
    fn test_multiplet() {
        let ms: Vec<_> = HalfInt(3).multiplet().into_iter().collect();
        assert_eq!(ms, vec![HalfInt(-3), HalfInt(-1), HalfInt(1), HalfInt(3)]);
        assert_eq!(ms.len() as i32, dim(HalfInt(3)));
    }
}
