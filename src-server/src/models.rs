use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fundlink_core::accounts as core_accounts;

/// Public account profile. The stored credential never leaves the server.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub email: String,
    pub name: String,
    pub bio: String,
    pub balance: Decimal,
    pub following: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<core_accounts::Account> for Profile {
    fn from(a: core_accounts::Account) -> Self {
        Self {
            email: a.email,
            name: a.name,
            bio: a.bio,
            balance: a.balance,
            following: a.following,
            created_at: a.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdatePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FollowPayload {
    pub follower: String,
}

/// Amounts arrive as a JSON number or a decimal string; the ledger parses
/// and validates before any lock is taken
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AmountPayload {
    pub email: String,
    pub amount: serde_json::Value,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InvestPayload {
    pub email: String,
    pub project_id: String,
    pub amount: serde_json::Value,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub email: String,
    pub balance: Decimal,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DirectThreadPayload {
    pub from: String,
    pub to: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroupThreadPayload {
    pub group_name: String,
    pub participants: Vec<String>,
    pub creator: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload {
    pub sender: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewPostPayload {
    pub author: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LikePayload {
    pub account: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub author: String,
    pub body: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewEventPayload {
    pub organizer: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RsvpPayload {
    pub account: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub path: String,
}
