use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::projects::Project;

use super::ledger_errors::{LedgerError, Result};

/// Result of a committed investment: the account's remaining balance and the
/// project as credited
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOutcome {
    pub balance: Decimal,
    pub project: Project,
}

/// Parses an externally supplied amount, which clients send as either a JSON
/// number or a decimal string.
///
/// Fails `InvalidAmount` for anything non-numeric, non-finite, or not
/// strictly positive. Callers run this before acquiring any lock.
pub fn parse_amount(raw: &serde_json::Value) -> Result<Decimal> {
    let parsed = match raw {
        serde_json::Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text))
        }
        serde_json::Value::String(s) => {
            let text = s.trim();
            Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text))
        }
        _ => return Err(LedgerError::InvalidAmount(raw.to_string())),
    };

    let amount = parsed.map_err(|_| LedgerError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "{} is not a positive amount",
            amount
        )));
    }
    Ok(amount)
}
