//! Basis-point fixed-point arithmetic.
//! - a fraction is an integer count of basis points in [0, 10_000]
//! - `amount * bps / 10_000` is computed in u128 and floored (rounds toward the pool)
//! - results never exceed the input amount, so the narrowing back to u64 is lossless

use crate::constants::BPS_DENOMINATOR;
use crate::error::VestingError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BasisPoints(u16);

impl BasisPoints {
    pub const ZERO: BasisPoints = BasisPoints(0);
    pub const FULL: BasisPoints = BasisPoints(BPS_DENOMINATOR as u16);

    pub fn new(bps: u16) -> Result<Self, VestingError> {
        if bps as u64 > BPS_DENOMINATOR {
            return Err(VestingError::InvalidFraction);
        }
        Ok(Self(bps))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// floor(amount * self / 10_000)
    pub fn apply(self, amount: u64) -> Result<u64, VestingError> {
        let scaled = (amount as u128)
            .checked_mul(self.0 as u128)
            .ok_or(VestingError::MathOverflow)?
            / BPS_DENOMINATOR as u128;
        u64::try_from(scaled).map_err(|_| VestingError::MathOverflow)
    }
}

/// `min(a * b, cap)` without intermediate overflow.
pub fn mul_capped(a: u64, b: u64, cap: u64) -> u64 {
    let product = (a as u128) * (b as u128);
    product.min(cap as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_fraction_above_full() {
        assert!(BasisPoints::new(10_000).is_ok());
        assert!(matches!(
            BasisPoints::new(10_001),
            Err(VestingError::InvalidFraction)
        ));
    }

    #[test]
    fn apply_floors_toward_pool() {
        let sixteen = BasisPoints::new(1_600).unwrap();
        assert_eq!(sixteen.apply(1_000).unwrap(), 160);
        // 7% of 999 = 69.93 -> 69
        let seven = BasisPoints::new(700).unwrap();
        assert_eq!(seven.apply(999).unwrap(), 69);
        assert_eq!(BasisPoints::ZERO.apply(u64::MAX).unwrap(), 0);
    }

    #[test]
    fn apply_full_range_does_not_overflow() {
        assert_eq!(BasisPoints::FULL.apply(u64::MAX).unwrap(), u64::MAX);
        let half = BasisPoints::new(5_000).unwrap();
        assert_eq!(half.apply(u64::MAX).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn mul_capped_clamps_instead_of_wrapping() {
        assert_eq!(mul_capped(3, 70, 840), 210);
        assert_eq!(mul_capped(u64::MAX, u64::MAX, 500), 500);
    }
}
