//! # sextant-finance
//!
//! Interest and loan installment calculations.
//!
//! Three pure computations over f64: simple interest, annually compounded
//! interest, and the standard EMI (equated monthly installment) formula.
//! Rates are annual percentages, terms are in years.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use thiserror::Error;

/// Invalid input to a finance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// An input was NaN or infinite.
    #[error("inputs must be finite numbers")]
    NonFinite,
    /// An input was negative.
    #[error("inputs must not be negative")]
    Negative,
    /// Principal or term was zero where a positive value is required.
    #[error("principal and term must be positive")]
    NonPositive,
}

/// Interest plus the resulting total amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestBreakdown {
    /// Interest accrued over the term.
    pub interest: f64,
    /// Principal plus interest.
    pub total: f64,
}

/// Monthly installment breakdown for a loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiBreakdown {
    /// Fixed monthly payment.
    pub monthly_payment: f64,
    /// Total paid over the full term.
    pub total_payment: f64,
    /// Total paid minus the principal.
    pub total_interest: f64,
}

fn validate(inputs: &[f64]) -> Result<(), FinanceError> {
    if inputs.iter().any(|v| !v.is_finite()) {
        return Err(FinanceError::NonFinite);
    }
    if inputs.iter().any(|&v| v < 0.0) {
        return Err(FinanceError::Negative);
    }
    Ok(())
}

/// Simple interest: `P·R·T / 100`.
///
/// # Errors
///
/// Returns [`FinanceError`] for non-finite or negative inputs.
pub fn simple_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
) -> Result<InterestBreakdown, FinanceError> {
    validate(&[principal, annual_rate, years])?;
    let interest = principal * annual_rate * years / 100.0;
    Ok(InterestBreakdown {
        interest,
        total: principal + interest,
    })
}

/// Interest compounded once per year: `P·(1 + R/100)^T − P`.
///
/// # Errors
///
/// Returns [`FinanceError`] for non-finite or negative inputs.
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
) -> Result<InterestBreakdown, FinanceError> {
    validate(&[principal, annual_rate, years])?;
    let total = principal * (1.0 + annual_rate / 100.0).powf(years);
    Ok(InterestBreakdown {
        interest: total - principal,
        total,
    })
}

/// Equated monthly installment over a term given in years.
///
/// `emi = P·r·(1+r)^n / ((1+r)^n − 1)` with monthly rate `r = R/1200` and
/// `n = 12·T` months. A zero rate degenerates to the limit `P/n` rather
/// than the formula's 0/0.
///
/// # Errors
///
/// Returns [`FinanceError`] for non-finite or negative inputs, or when
/// principal or term is zero.
pub fn emi(
    principal: f64,
    annual_rate: f64,
    years: f64,
) -> Result<EmiBreakdown, FinanceError> {
    validate(&[principal, annual_rate, years])?;
    if principal == 0.0 || years == 0.0 {
        return Err(FinanceError::NonPositive);
    }

    let monthly_rate = annual_rate / 12.0 / 100.0;
    let months = years * 12.0;
    let monthly_payment = if monthly_rate == 0.0 {
        principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        principal * monthly_rate * growth / (growth - 1.0)
    };
    let total_payment = monthly_payment * months;

    Ok(EmiBreakdown {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn simple_interest_breakdown() {
        let si = simple_interest(1000.0, 10.0, 2.0).unwrap();
        assert!(close(si.interest, 200.0));
        assert!(close(si.total, 1200.0));
    }

    #[test]
    fn compound_interest_breakdown() {
        let ci = compound_interest(1000.0, 10.0, 2.0).unwrap();
        assert!(close(ci.interest, 210.0));
        assert!(close(ci.total, 1210.0));
    }

    #[test]
    fn emi_standard_case() {
        // 100000 at 12% over one year: the textbook 8884.88/month.
        let loan = emi(100_000.0, 12.0, 1.0).unwrap();
        assert!(close(loan.monthly_payment, 8_884.878_867_834_167));
        assert!(close(loan.total_payment, loan.monthly_payment * 12.0));
        assert!(close(loan.total_interest, loan.total_payment - 100_000.0));
    }

    #[test]
    fn zero_rate_emi_is_straight_division() {
        let loan = emi(1200.0, 0.0, 1.0).unwrap();
        assert!(close(loan.monthly_payment, 100.0));
        assert!(close(loan.total_interest, 0.0));
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            simple_interest(f64::NAN, 1.0, 1.0),
            Err(FinanceError::NonFinite)
        );
        assert_eq!(
            compound_interest(-1.0, 1.0, 1.0),
            Err(FinanceError::Negative)
        );
        assert_eq!(emi(0.0, 5.0, 1.0), Err(FinanceError::NonPositive));
        assert_eq!(emi(1000.0, 5.0, 0.0), Err(FinanceError::NonPositive));
    }
}
