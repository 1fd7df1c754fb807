use async_trait::async_trait;
use rust_decimal::Decimal;

use super::ledger_errors::Result;
use super::ledger_model::InvestmentOutcome;
use crate::projects::Project;

/// Trait defining the contract for Ledger operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    async fn credit(&self, account_id: &str, amount: Decimal) -> Result<Decimal>;
    async fn debit(&self, account_id: &str, amount: Decimal) -> Result<Decimal>;
    async fn invest(
        &self,
        account_id: &str,
        project_id: &str,
        amount: Decimal,
    ) -> Result<InvestmentOutcome>;
    fn get_balance(&self, account_id: &str) -> Result<Decimal>;
    fn list_projects(&self) -> Result<Vec<Project>>;
    fn get_project(&self, project_id: &str) -> Result<Project>;
}
