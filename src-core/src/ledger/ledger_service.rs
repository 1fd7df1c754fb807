use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use rust_decimal::Decimal;

use crate::accounts::AccountRepositoryTrait;
use crate::constants::{ACCOUNTS_COLLECTION, PROJECTS_COLLECTION};
use crate::projects::{Project, ProjectRepositoryTrait};
use crate::store::LockManager;

use super::ledger_errors::{LedgerError, Result};
use super::ledger_model::InvestmentOutcome;
use super::ledger_traits::LedgerServiceTrait;

/// Service moving value between account balances and project investments.
///
/// Transfers only move value; the sum of balances and invested amounts is
/// invariant across every invest call.
pub struct LedgerService {
    accounts: Arc<dyn AccountRepositoryTrait>,
    projects: Arc<dyn ProjectRepositoryTrait>,
    locks: Arc<LockManager>,
}

impl LedgerService {
    /// Creates a new LedgerService instance
    pub fn new(
        accounts: Arc<dyn AccountRepositoryTrait>,
        projects: Arc<dyn ProjectRepositoryTrait>,
        locks: Arc<LockManager>,
    ) -> Self {
        Self {
            accounts,
            projects,
            locks,
        }
    }

    fn require_positive(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(format!(
                "{} is not a positive amount",
                amount
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    /// Adds `amount` to the account's balance
    async fn credit(&self, account_id: &str, amount: Decimal) -> Result<Decimal> {
        Self::require_positive(amount)?;

        let _guard = self.locks.acquire(&[ACCOUNTS_COLLECTION]).await?;
        let mut accounts = self.accounts.load()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.email == account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;

        account.balance += amount;
        account.updated_at = Utc::now();
        let balance = account.balance;
        self.accounts.save(&accounts)?;

        debug!("Credited {} to {}, balance {}", amount, account_id, balance);
        Ok(balance)
    }

    /// Subtracts `amount` from the account's balance, never below zero
    async fn debit(&self, account_id: &str, amount: Decimal) -> Result<Decimal> {
        Self::require_positive(amount)?;

        let _guard = self.locks.acquire(&[ACCOUNTS_COLLECTION]).await?;
        let mut accounts = self.accounts.load()?;
        let account = accounts
            .iter_mut()
            .find(|a| a.email == account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;

        if amount > account.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        account.balance -= amount;
        account.updated_at = Utc::now();
        let balance = account.balance;
        self.accounts.save(&accounts)?;

        debug!("Debited {} from {}, balance {}", amount, account_id, balance);
        Ok(balance)
    }

    /// Debits the account and credits the project's invested amount as one
    /// atomic unit under the two-collection lock.
    async fn invest(
        &self,
        account_id: &str,
        project_id: &str,
        amount: Decimal,
    ) -> Result<InvestmentOutcome> {
        Self::require_positive(amount)?;
        debug!(
            "Investing {} from {} into {}",
            amount, account_id, project_id
        );

        let _guard = self
            .locks
            .acquire(&[ACCOUNTS_COLLECTION, PROJECTS_COLLECTION])
            .await?;

        let mut accounts = self.accounts.load()?;
        let mut projects = self.projects.load()?;
        let prior_projects = projects.clone();

        let account = accounts
            .iter_mut()
            .find(|a| a.email == account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| LedgerError::ProjectNotFound(project_id.to_string()))?;

        if amount > account.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        account.balance -= amount;
        account.updated_at = Utc::now();
        project.invested_amount += amount;

        let balance = account.balance;
        let credited = project.clone();

        // Projects first; a failed accounts write restores the prior
        // projects snapshot
        self.projects.save(&projects)?;
        if let Err(e) = self.accounts.save(&accounts) {
            if let Err(restore) = self.projects.save(&prior_projects) {
                error!(
                    "Failed to restore projects snapshot after aborted investment: {}",
                    restore
                );
            }
            return Err(e.into());
        }

        Ok(InvestmentOutcome {
            balance,
            project: credited,
        })
    }

    /// Read-only balance lookup; no lock beyond the store's own read
    fn get_balance(&self, account_id: &str) -> Result<Decimal> {
        let accounts = self.accounts.load()?;
        accounts
            .iter()
            .find(|a| a.email == account_id)
            .map(|a| a.balance)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.load()?)
    }

    fn get_project(&self, project_id: &str) -> Result<Project> {
        let projects = self.projects.load()?;
        projects
            .into_iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| LedgerError::ProjectNotFound(project_id.to_string()))
    }
}
