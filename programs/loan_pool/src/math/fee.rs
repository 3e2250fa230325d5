use anchor_lang::prelude::*;

use crate::constants::PERCENT_DENOMINATOR;
use crate::error::ErrorCode;

/// Fee taken on a deposit: floor(amount * fee_percent / 100).
pub fn fee_amount(amount: u64, fee_percent: u8) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_percent as u128)
        .ok_or(ErrorCode::ArithmeticError)?
        .checked_div(PERCENT_DENOMINATOR as u128)
        .ok_or(ErrorCode::ArithmeticError)?;
    u64::try_from(fee).map_err(|_| ErrorCode::ArithmeticError.into())
}

/// Split a gross deposit into (net principal, fee).
pub fn split_deposit(amount: u64, fee_percent: u8) -> Result<(u64, u64)> {
    let fee = fee_amount(amount, fee_percent)?;
    let net = amount.checked_sub(fee).ok_or(ErrorCode::ArithmeticError)?;
    Ok((net, fee))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fee_leaves_amount_whole() {
        assert_eq!(split_deposit(1_000, 0).unwrap(), (1_000, 0));
    }

    #[test]
    fn fee_rounds_down() {
        // 99 * 3 / 100 = 2.97 -> 2
        assert_eq!(split_deposit(99, 3).unwrap(), (97, 2));
    }

    #[test]
    fn full_fee_consumes_principal() {
        assert_eq!(split_deposit(500, 100).unwrap(), (0, 500));
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        let (net, fee) = split_deposit(u64::MAX, 100).unwrap();
        assert_eq!(net, 0);
        assert_eq!(fee, u64::MAX);
    }
}
