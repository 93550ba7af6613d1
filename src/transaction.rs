//! Transaction record scored by the fraud classifier. Fields pass straight through to the model.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Invalid transaction: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Transaction kind. Accepted on the wire as its integer code or its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KindRepr", into = "i64")]
pub enum TransactionKind {
    CashIn = 0,
    CashOut = 1,
    Debit = 2,
    Payment = 3,
    Transfer = 4,
}

/// Wire form of [`TransactionKind`].
#[derive(Deserialize)]
#[serde(untagged)]
enum KindRepr {
    Code(i64),
    Name(String),
}

impl TransactionKind {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::CashIn),
            1 => Some(Self::CashOut),
            2 => Some(Self::Debit),
            3 => Some(Self::Payment),
            4 => Some(Self::Transfer),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CASH_IN" => Some(Self::CashIn),
            "CASH_OUT" => Some(Self::CashOut),
            "DEBIT" => Some(Self::Debit),
            "PAYMENT" => Some(Self::Payment),
            "TRANSFER" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl TryFrom<KindRepr> for TransactionKind {
    type Error = String;

    fn try_from(repr: KindRepr) -> Result<Self, Self::Error> {
        match repr {
            KindRepr::Code(c) => Self::from_code(c).ok_or_else(|| format!("unknown transaction type code {c}")),
            KindRepr::Name(n) => Self::from_name(&n).ok_or_else(|| format!("unknown transaction type `{n}`")),
        }
    }
}

impl From<TransactionKind> for i64 {
    fn from(kind: TransactionKind) -> Self {
        kind.code()
    }
}

/// Number of model inputs taken from a [`TransactionRecord`].
pub const TRANSACTION_DIM: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    #[serde(rename = "oldbalanceOrig")]
    pub old_balance_orig: f64,
    #[serde(rename = "newbalanceOrig")]
    pub new_balance_orig: f64,
    #[serde(rename = "oldbalanceDest")]
    pub old_balance_dest: f64,
    #[serde(rename = "newbalanceDest")]
    pub new_balance_dest: f64,
}

impl TransactionRecord {
    pub fn from_json(body: Value) -> Result<Self, TransactionError> {
        Ok(serde_json::from_value(body)?)
    }

    /// Fields in training column order.
    pub fn to_model_input(&self) -> [f32; TRANSACTION_DIM] {
        [
            self.kind.code() as f32,
            self.amount as f32,
            self.old_balance_orig as f32,
            self.new_balance_orig as f32,
            self.old_balance_dest as f32,
            self.new_balance_dest as f32,
        ]
    }
}
