//! Net salary derivation for attendance-payroll records.
//!
//! | Component    | Sign |
//! |--------------|------|
//! | Base salary  | +    |
//! | Bonus        | +    |
//! | Allowances   | +    |
//! | Tax          | −    |
//! | Insurance    | −    |
//! | Fine         | −    |
//!
//! The result is not rounded and not clamped: a record whose deductions
//! exceed its earnings yields a negative net salary.
//!
//! Sums saturate at the `Decimal` range instead of panicking. Validated
//! records stay far below it (see `validation::MAX_AMOUNT`), so saturation
//! only affects records built by hand.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use hrm_core::calculations::net_salary;
//! use hrm_core::AttendancePayrollRecord;
//!
//! let record = AttendancePayrollRecord {
//!     id: "1".to_string(),
//!     employee_id: "NV001".to_string(),
//!     month: "2024-06".parse().unwrap(),
//!     working_days: 22,
//!     late_days: 1,
//!     base_salary: dec!(15000000),
//!     bonus: dec!(1000000),
//!     allowances: dec!(3500000),
//!     tax: dec!(1800000),
//!     insurance: dec!(1050000),
//!     fine: dec!(50000),
//! };
//!
//! assert_eq!(net_salary(&record), dec!(16600000));
//! ```

use rust_decimal::Decimal;

use crate::AttendancePayrollRecord;

/// Sum of the additive components: base salary, bonus and allowances.
pub fn gross_earnings(record: &AttendancePayrollRecord) -> Decimal {
    record
        .base_salary
        .saturating_add(record.bonus)
        .saturating_add(record.allowances)
}

/// Sum of the subtractive components: tax, insurance and fine.
pub fn total_deductions(record: &AttendancePayrollRecord) -> Decimal {
    record
        .tax
        .saturating_add(record.insurance)
        .saturating_add(record.fine)
}

/// Returns the take-home amount of a record.
///
/// `base_salary + bonus + allowances - tax - insurance - fine`
pub fn net_salary(record: &AttendancePayrollRecord) -> Decimal {
    gross_earnings(record).saturating_sub(total_deductions(record))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn record(
        earnings: [Decimal; 3],
        deductions: [Decimal; 3],
    ) -> AttendancePayrollRecord {
        AttendancePayrollRecord {
            id: "1".to_string(),
            employee_id: "NV001".to_string(),
            month: "2024-06".parse().unwrap(),
            working_days: 22,
            late_days: 0,
            base_salary: earnings[0],
            bonus: earnings[1],
            allowances: earnings[2],
            tax: deductions[0],
            insurance: deductions[1],
            fine: deductions[2],
        }
    }

    // =========================================================================
    // net_salary tests
    // =========================================================================

    #[test]
    fn net_salary_matches_worked_example() {
        let r = record(
            [dec!(15000000), dec!(1000000), dec!(3500000)],
            [dec!(1800000), dec!(1050000), dec!(50000)],
        );

        assert_eq!(net_salary(&r), dec!(16600000));
    }

    #[test]
    fn net_salary_goes_negative_without_clamping() {
        let r = record(
            [dec!(1000000), dec!(0), dec!(0)],
            [dec!(800000), dec!(500000), dec!(200000)],
        );

        assert_eq!(net_salary(&r), dec!(-500000));
    }

    #[test]
    fn net_salary_of_all_zero_record_is_zero() {
        let r = record([Decimal::ZERO; 3], [Decimal::ZERO; 3]);

        assert_eq!(net_salary(&r), Decimal::ZERO);
    }

    #[test]
    fn net_salary_keeps_fractional_amounts() {
        let r = record(
            [dec!(100.5), dec!(0), dec!(0)],
            [dec!(0.25), dec!(0), dec!(0)],
        );

        assert_eq!(net_salary(&r), dec!(100.25));
    }

    #[test]
    fn permuting_equal_valued_inputs_does_not_change_result() {
        let amounts = [dec!(7000000), dec!(250000), dec!(1200000)];
        let deductions = [dec!(300000), dec!(90000), dec!(0)];

        let a = record(amounts, deductions);
        let b = record(
            [amounts[2], amounts[0], amounts[1]],
            [deductions[1], deductions[2], deductions[0]],
        );

        assert_eq!(net_salary(&a), net_salary(&b));
    }

    #[test]
    fn net_salary_is_linear_in_each_input() {
        let base = record(
            [dec!(10000000), dec!(500000), dec!(1000000)],
            [dec!(900000), dec!(600000), dec!(0)],
        );
        let mut raised = base.clone();
        raised.bonus += dec!(250000);
        raised.fine += dec!(100000);

        assert_eq!(net_salary(&raised) - net_salary(&base), dec!(150000));
    }

    // =========================================================================
    // component tests
    // =========================================================================

    #[test]
    fn gross_and_deductions_split_the_formula() {
        let r = record(
            [dec!(12000000), dec!(2000000), dec!(3000000)],
            [dec!(1350000), dec!(840000), dec!(0)],
        );

        assert_eq!(gross_earnings(&r), dec!(17000000));
        assert_eq!(total_deductions(&r), dec!(2190000));
        assert_eq!(r.net_salary(), dec!(14810000));
    }

    #[test]
    fn components_at_decimal_limit_saturate_instead_of_panicking() {
        let r = record([Decimal::MAX; 3], [Decimal::ZERO; 3]);
        assert_eq!(net_salary(&r), Decimal::MAX);

        let r = record([Decimal::ZERO; 3], [Decimal::MAX; 3]);
        assert_eq!(net_salary(&r), Decimal::MIN);
    }
}
