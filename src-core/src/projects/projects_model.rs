use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing an investable project.
///
/// Projects enter the system as seed data; the only mutation is the
/// monotonically non-decreasing `invested_amount`, credited by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub invested_amount: Decimal,
    pub created_at: DateTime<Utc>,
}
