//! Wallet Model

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Ledger entry type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "tx_type", rename_all = "snake_case"))]
pub enum TxType {
    Credit,
    Debit,
}

/// Wallet entity, one per user
///
/// `balance` is stored denormalized but must equal the signed sum of the
/// wallet's transactions if recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Wallet {
    pub id: i64,
    pub user_id: i64,
    pub balance: Decimal,
    pub currency: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Ledger entry, created exactly once per balance-affecting action and never
/// mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WalletTransaction {
    pub id: i64,
    pub wallet_id: i64,
    pub tx_type: TxType,
    /// Positive magnitude; the sign lives in `tx_type`
    pub amount: Decimal,
    pub description: String,
    pub reference_id: Option<uuid::Uuid>,
    pub created_at: i64,
}

/// Wallet with its transaction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletView {
    #[serde(flatten)]
    pub wallet: Wallet,
    pub transactions: Vec<WalletTransaction>,
}

/// Add money payload; the amount travels as a decimal string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMoneyRequest {
    pub amount: String,
}

/// Parse a user-supplied monetary amount.
///
/// Accepts strictly positive decimals with at most two fractional digits;
/// everything else fails with `InvalidAmount`.
pub fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    let amount = Decimal::from_str(raw.trim())
        .map_err(|_| AppError::new(ErrorCode::InvalidAmount))?;
    if amount <= Decimal::ZERO || amount.scale() > 2 {
        return Err(AppError::new(ErrorCode::InvalidAmount));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_decimals() {
        assert_eq!(parse_amount("10.50").unwrap(), Decimal::new(1050, 2));
        assert_eq!(parse_amount("5.25").unwrap(), Decimal::new(525, 2));
        assert_eq!(parse_amount("1").unwrap(), Decimal::ONE);
        assert_eq!(parse_amount(" 0.01 ").unwrap(), Decimal::new(1, 2));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(
            parse_amount("0").unwrap_err().code,
            ErrorCode::InvalidAmount
        );
        assert_eq!(
            parse_amount("-5").unwrap_err().code,
            ErrorCode::InvalidAmount
        );
        assert_eq!(
            parse_amount("-0.01").unwrap_err().code,
            ErrorCode::InvalidAmount
        );
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            parse_amount("abc").unwrap_err().code,
            ErrorCode::InvalidAmount
        );
        assert_eq!(parse_amount("").unwrap_err().code, ErrorCode::InvalidAmount);
        assert_eq!(
            parse_amount("10.5.0").unwrap_err().code,
            ErrorCode::InvalidAmount
        );
    }

    #[test]
    fn rejects_sub_cent_precision() {
        assert_eq!(
            parse_amount("1.005").unwrap_err().code,
            ErrorCode::InvalidAmount
        );
    }

    #[test]
    fn repeated_additions_are_exact() {
        // 10.50 + 5.25 = 15.75, with no binary-float drift
        let total = parse_amount("10.50").unwrap() + parse_amount("5.25").unwrap();
        assert_eq!(total, Decimal::new(1575, 2));
        assert_eq!(total.to_string(), "15.75");
    }

    #[test]
    fn tx_type_wire_names() {
        assert_eq!(serde_json::to_string(&TxType::Credit).unwrap(), "\"credit\"");
        assert_eq!(serde_json::to_string(&TxType::Debit).unwrap(), "\"debit\"");
    }
}
