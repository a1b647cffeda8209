//! Protocol fee computation.
//!
//! Token amounts routinely exceed the 53-bit safe-integer range, so the fee
//! is computed with `U256` integer arithmetic only.
use alloy::primitives::U256;

/// The protocol's fixed fee in basis points (10%).
pub const PROTOCOL_FEE_BPS: u64 = 1_000;

/// Basis-point denominator.
const BPS_DENOMINATOR: u64 = 10_000;

/// Returns `amount` plus the protocol fee: `amount + floor(amount * fee_bps / 10_000)`.
///
/// # Arguments
///
/// * `amount` - Reward amount in the asset's smallest denomination.
/// * `fee_bps` - Fee in basis points.
///
/// # Returns
///
/// The fee-inclusive amount. Always `>= amount`, and equal to `amount` when
/// `fee_bps` is zero.
pub fn with_fee(amount: U256, fee_bps: u64) -> U256 {
    amount + amount * U256::from(fee_bps) / U256::from(BPS_DENOMINATOR)
}
