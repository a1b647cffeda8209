//! Incentive builder and decimal scaling.
//!
//! Reward amounts arrive as human-readable decimal strings and leave as
//! `U256` values in the asset's smallest denomination. Scaling is exact:
//! non-zero digits beyond the asset's precision are an error, never a silent
//! truncation.
use alloy::primitives::{Address, U256};
use campaigns_shared::types::{DistributionStrategy, IncentiveDescriptor};

use crate::errors::BuilderError;

fn decimal_scale(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

/// Converts a human-readable decimal string into smallest-denomination units.
///
/// # Arguments
///
/// * `human` - Decimal string such as `"0.1"` or `"25"`.
/// * `decimals` - The asset's decimal precision.
///
/// # Returns
///
/// A `Result` holding the scaled `U256` value,
/// `BuilderError::PrecisionLoss` if non-zero fractional digits extend beyond
/// `decimals` (trailing zeros are fine), or `BuilderError::InvalidAmount`
/// for malformed input or overflow.
pub fn to_smallest_units(human: &str, decimals: u8) -> Result<U256, BuilderError> {
    let invalid = || BuilderError::InvalidAmount(human.to_string());

    let (integral, fraction) = match human.split_once('.') {
        Some((integral, fraction)) => (integral, fraction),
        None => (human, ""),
    };
    if integral.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !integral.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let precision = decimals as usize;
    let (kept, excess) = fraction.split_at(fraction.len().min(precision));
    if excess.chars().any(|c| c != '0') {
        return Err(BuilderError::PrecisionLoss {
            amount: human.to_string(),
            decimals,
        });
    }

    let integral_units = if integral.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(integral, 10)
            .map_err(|_| invalid())?
            .checked_mul(decimal_scale(decimals))
            .ok_or_else(invalid)?
    };

    let fraction_units = if kept.is_empty() {
        U256::ZERO
    } else {
        // "1" with 6 decimals of precision reads as 100_000, so pad the kept
        // digits out to the full precision before parsing.
        let mut padded = kept.to_string();
        padded.extend(std::iter::repeat('0').take(precision - kept.len()));
        U256::from_str_radix(&padded, 10).map_err(|_| invalid())?
    };

    integral_units.checked_add(fraction_units).ok_or_else(invalid)
}

/// Formats a smallest-denomination value back into a decimal string.
///
/// Trailing fractional zeros are trimmed, so formatting is the inverse of
/// [`to_smallest_units`] for canonical inputs.
pub fn format_units(value: U256, decimals: u8) -> String {
    let scale = decimal_scale(decimals);
    let integral = value / scale;
    let remainder = value % scale;

    if remainder.is_zero() {
        return integral.to_string();
    }

    let mut fraction = remainder.to_string();
    while fraction.len() < decimals as usize {
        fraction.insert(0, '0');
    }
    format!("{}.{}", integral, fraction.trim_end_matches('0'))
}

/// Builds the reward descriptor for a campaign.
///
/// # Arguments
///
/// * `asset` - ERC20 asset the reward is paid in.
/// * `decimals` - The asset's decimal precision.
/// * `human_amount` - Per-claim reward as a decimal string.
/// * `limit` - Maximum number of claims the incentive funds.
/// * `strategy` - Distribution strategy.
///
/// # Returns
///
/// A `Result` holding the `IncentiveDescriptor`, `BuilderError::ZeroReward`
/// if the scaled reward is zero, or `BuilderError::InvalidClaimLimit` if
/// `limit` is zero.
pub fn build_incentive(
    asset: Address,
    decimals: u8,
    human_amount: &str,
    limit: u64,
    strategy: DistributionStrategy,
) -> Result<IncentiveDescriptor, BuilderError> {
    let reward = to_smallest_units(human_amount, decimals)?;
    if reward.is_zero() {
        return Err(BuilderError::ZeroReward);
    }
    if limit == 0 {
        return Err(BuilderError::InvalidClaimLimit);
    }

    Ok(IncentiveDescriptor {
        asset,
        reward,
        limit: U256::from(limit),
        strategy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usdc() -> Address {
        Address::with_last_byte(0x13)
    }

    #[test]
    fn test_scaling_fractional_amount() {
        assert_eq!(to_smallest_units("0.1", 6).unwrap(), U256::from(100_000u64));
    }

    #[test]
    fn test_scaling_whole_amount() {
        assert_eq!(to_smallest_units("1", 6).unwrap(), U256::from(1_000_000u64));
        assert_eq!(to_smallest_units("25", 0).unwrap(), U256::from(25u64));
    }

    #[test]
    fn test_scaling_bare_fraction() {
        assert_eq!(to_smallest_units(".5", 6).unwrap(), U256::from(500_000u64));
    }

    #[test]
    fn test_round_trip_formatting() {
        for (human, decimals) in [("0.1", 6u8), ("1", 6), ("12.345", 6), ("0.000001", 6)] {
            let units = to_smallest_units(human, decimals).unwrap();
            assert_eq!(format_units(units, decimals), human);
        }
    }

    #[test]
    fn test_excess_precision_is_an_error() {
        assert!(matches!(
            to_smallest_units("0.1234567", 6),
            Err(BuilderError::PrecisionLoss { decimals: 6, .. })
        ));
    }

    #[test]
    fn test_trailing_zeros_lose_nothing() {
        assert_eq!(
            to_smallest_units("0.1000000", 6).unwrap(),
            U256::from(100_000u64)
        );
    }

    #[test]
    fn test_malformed_amounts_rejected() {
        for raw in ["", ".", "1..2", "1,5", "abc", "-1"] {
            assert!(matches!(
                to_smallest_units(raw, 6),
                Err(BuilderError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_build_incentive() {
        let incentive =
            build_incentive(usdc(), 6, "0.1", 1, DistributionStrategy::Pool).unwrap();
        assert_eq!(incentive.reward, U256::from(100_000u64));
        assert_eq!(incentive.limit, U256::from(1u64));
        assert_eq!(incentive.strategy, DistributionStrategy::Pool);
    }

    #[test]
    fn test_build_incentive_rejects_zero_reward() {
        assert!(matches!(
            build_incentive(usdc(), 6, "0", 1, DistributionStrategy::Pool),
            Err(BuilderError::ZeroReward)
        ));
    }

    #[test]
    fn test_build_incentive_rejects_zero_limit() {
        assert!(matches!(
            build_incentive(usdc(), 6, "0.1", 0, DistributionStrategy::Pool),
            Err(BuilderError::InvalidClaimLimit)
        ));
    }
}
