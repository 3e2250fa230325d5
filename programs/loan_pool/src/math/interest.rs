use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MONTHS_PER_YEAR, SECONDS_PER_MONTH};
use crate::error::ErrorCode;

/// Total simple interest owed over the full loan term:
/// principal * rate_bps * term_months / (12 * 10_000).
pub fn total_interest(
    principal: u64,
    interest_rate_bps: u64,
    loan_term_months: u64,
) -> Result<u64> {
    let numerator = (principal as u128)
        .checked_mul(interest_rate_bps as u128)
        .and_then(|v| v.checked_mul(loan_term_months as u128))
        .ok_or(ErrorCode::ArithmeticError)?;
    let interest = numerator
        .checked_div((MONTHS_PER_YEAR as u128) * (BPS_DENOMINATOR as u128))
        .ok_or(ErrorCode::ArithmeticError)?;
    u64::try_from(interest).map_err(|_| ErrorCode::ArithmeticError.into())
}

/// Maturity timestamp: start + term months of 30 days.
pub fn maturity_date(start_time: i64, loan_term_months: u64) -> Result<i64> {
    let term_seconds = i64::try_from(loan_term_months)
        .ok()
        .and_then(|m| m.checked_mul(SECONDS_PER_MONTH))
        .ok_or(ErrorCode::ArithmeticError)?;
    start_time
        .checked_add(term_seconds)
        .ok_or(ErrorCode::ArithmeticError.into())
}

/// Interest vested by `now` under a receipt's schedule: equal
/// installments, one per `payment_frequency` months, over
/// `loan_term_months`. Clamped at the term, so the full `total_interest`
/// is vested once the term has elapsed.
pub fn vested_interest(
    total_interest: u64,
    loan_term_months: u64,
    payment_frequency: u64,
    start_time: i64,
    now: i64,
) -> Result<u64> {
    require!(loan_term_months > 0, ErrorCode::InvalidLoanTerm);
    require!(payment_frequency > 0, ErrorCode::InvalidPaymentFrequency);

    let elapsed = now.saturating_sub(start_time);
    let months_elapsed =
        u64::try_from(elapsed / SECONDS_PER_MONTH).unwrap_or(0);

    if months_elapsed >= loan_term_months {
        return Ok(total_interest);
    }

    let total_periods = loan_term_months / payment_frequency;
    if total_periods == 0 {
        // Frequency longer than the term: nothing vests before maturity.
        return Ok(0);
    }

    let periods_elapsed = months_elapsed / payment_frequency;
    let per_period = total_interest / total_periods;
    periods_elapsed
        .checked_mul(per_period)
        .ok_or(ErrorCode::ArithmeticError.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_interest_over_a_year() {
        // 5% on 1_000 over 12 months
        assert_eq!(total_interest(1_000, 500, 12).unwrap(), 50);
    }

    #[test]
    fn total_interest_prorates_by_term() {
        // 5% annual on 1_000 over 8 months: 1000 * 500 * 8 / 120_000
        assert_eq!(total_interest(1_000, 500, 8).unwrap(), 33);
    }

    #[test]
    fn total_interest_zero_rate_is_zero() {
        assert_eq!(total_interest(1_000_000, 0, 24).unwrap(), 0);
    }

    #[test]
    fn maturity_is_term_months_after_start() {
        assert_eq!(maturity_date(0, 8).unwrap(), 8 * 2_592_000);
        assert_eq!(maturity_date(1_000, 1).unwrap(), 1_000 + 2_592_000);
    }

    #[test]
    fn maturity_overflow_is_rejected() {
        assert!(maturity_date(i64::MAX, 1).is_err());
    }

    #[test]
    fn vesting_releases_per_period() {
        // 16 over 8 months, monthly installments; 3 months in -> 6
        let now = 3 * SECONDS_PER_MONTH;
        assert_eq!(vested_interest(16, 8, 1, 0, now).unwrap(), 6);
    }

    #[test]
    fn vesting_with_multi_month_periods() {
        // 12 over 12 months, quarterly: 4 periods of 3; 7 months -> 2 periods
        let now = 7 * SECONDS_PER_MONTH;
        assert_eq!(vested_interest(12, 12, 3, 0, now).unwrap(), 6);
    }

    #[test]
    fn vesting_clamps_at_term() {
        let now = 20 * SECONDS_PER_MONTH;
        assert_eq!(vested_interest(16, 8, 1, 0, now).unwrap(), 16);
    }

    #[test]
    fn nothing_vests_before_start() {
        assert_eq!(vested_interest(16, 8, 1, 1_000_000, 0).unwrap(), 0);
    }

    #[test]
    fn frequency_longer_than_term_vests_only_at_maturity() {
        let mid_term = 5 * SECONDS_PER_MONTH;
        assert_eq!(vested_interest(16, 8, 12, 0, mid_term).unwrap(), 0);
        let past_term = 9 * SECONDS_PER_MONTH;
        assert_eq!(vested_interest(16, 8, 12, 0, past_term).unwrap(), 16);
    }

    #[test]
    fn invalid_schedule_is_rejected() {
        assert!(vested_interest(16, 0, 1, 0, 0).is_err());
        assert!(vested_interest(16, 8, 0, 0, 0).is_err());
    }
}
