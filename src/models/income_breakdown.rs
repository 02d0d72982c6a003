//! Income breakdown model for the Salary Engine.
//!
//! This module contains the [`IncomeBreakdown`] type returned by every
//! salary calculation, and the nested [`TaxBreakdown`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The taxes withheld from a gross salary.
///
/// # Example
///
/// ```
/// use salary_engine::models::TaxBreakdown;
/// use rust_decimal_macros::dec;
///
/// let taxes = TaxBreakdown {
///     income_tax: dec!(7797),
///     levy: dec!(1000.00),
///     total: dec!(8797),
/// };
/// assert_eq!(taxes.total, dec!(8797));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Income tax after the bracket rounding rule.
    #[serde(rename = "income")]
    pub income_tax: Decimal,
    /// Medicare levy, rounded to cents.
    #[serde(rename = "medicare")]
    pub levy: Decimal,
    /// Income tax plus levy, rounded to whole dollars.
    pub total: Decimal,
}

/// The result of a salary calculation.
///
/// Always satisfies `net_income == gross_salary - taxes.total`. The
/// superannuation contribution is reported alongside but is not deducted.
///
/// Serializes with the field names `baseSalary`, `superannuation`,
/// `taxes { income, medicare, total }` and `postTaxIncome`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeBreakdown {
    /// The annual gross salary.
    #[serde(rename = "baseSalary")]
    pub gross_salary: Decimal,
    /// Employer superannuation contribution, rounded to cents.
    pub superannuation: Decimal,
    /// The taxes withheld.
    pub taxes: TaxBreakdown,
    /// Take-home pay after tax.
    #[serde(rename = "postTaxIncome")]
    pub net_income: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> IncomeBreakdown {
        IncomeBreakdown {
            gross_salary: dec!(50000),
            superannuation: dec!(4750.00),
            taxes: TaxBreakdown {
                income_tax: dec!(7797),
                levy: dec!(1000.00),
                total: dec!(8797),
            },
            net_income: dec!(41203),
        }
    }

    #[test]
    fn test_serializes_with_nested_taxes() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["baseSalary"], "50000");
        assert_eq!(json["superannuation"], "4750.00");
        assert_eq!(json["taxes"]["income"], "7797");
        assert_eq!(json["taxes"]["medicare"], "1000.00");
        assert_eq!(json["taxes"]["total"], "8797");
        assert_eq!(json["postTaxIncome"], "41203");
    }

    #[test]
    fn test_serialized_field_names_are_stable() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["baseSalary", "postTaxIncome", "superannuation", "taxes"]
        );
    }

    #[test]
    fn test_deserializes_from_wire_format() {
        let json = r#"{
            "baseSalary": "50000",
            "superannuation": "4750.00",
            "taxes": { "income": "7797", "medicare": "1000.00", "total": "8797" },
            "postTaxIncome": "41203"
        }"#;

        let breakdown: IncomeBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown, sample());
    }
}
