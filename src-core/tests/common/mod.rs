use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use tempfile::TempDir;

use fundlink_core::accounts::{AccountRepository, AccountRepositoryTrait, AccountService};
use fundlink_core::ledger::LedgerService;
use fundlink_core::messaging::{ChatRepository, ChatRepositoryTrait, MessagingService};
use fundlink_core::projects::{Project, ProjectRepository, ProjectRepositoryTrait};
use fundlink_core::store::{CollectionStore, LockManager};

/// Fully wired core services over a throwaway data directory. The tempdir
/// lives as long as the env so the snapshots survive the whole test.
pub struct TestEnv {
    pub accounts: Arc<AccountService>,
    pub ledger: Arc<LedgerService>,
    pub messaging: Arc<MessagingService>,
    pub project_repo: Arc<dyn ProjectRepositoryTrait>,
    pub chat_repo: Arc<dyn ChatRepositoryTrait>,
    _data_dir: TempDir,
}

pub fn test_env() -> TestEnv {
    let data_dir = TempDir::new().expect("Failed to create temp data dir");
    let store = Arc::new(CollectionStore::new(data_dir.path()).expect("Failed to open store"));
    let locks = Arc::new(LockManager::new(Duration::from_secs(5)));

    let account_repo: Arc<dyn AccountRepositoryTrait> =
        Arc::new(AccountRepository::new(store.clone()));
    let project_repo: Arc<dyn ProjectRepositoryTrait> =
        Arc::new(ProjectRepository::new(store.clone()));
    let chat_repo: Arc<dyn ChatRepositoryTrait> = Arc::new(ChatRepository::new(store.clone()));

    let accounts = Arc::new(AccountService::new(
        account_repo.clone(),
        locks.clone(),
        Decimal::from(1000),
    ));
    let ledger = Arc::new(LedgerService::new(
        account_repo,
        project_repo.clone(),
        locks.clone(),
    ));
    let messaging = Arc::new(MessagingService::new(chat_repo.clone(), locks));

    TestEnv {
        accounts,
        ledger,
        messaging,
        project_repo,
        chat_repo,
        _data_dir: data_dir,
    }
}

#[allow(dead_code)]
pub fn seed_project(repo: &Arc<dyn ProjectRepositoryTrait>, id: &str, name: &str) -> Project {
    let project = Project {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        invested_amount: Decimal::ZERO,
        created_at: Utc::now(),
    };
    let mut projects = repo.load().expect("Failed to load projects");
    projects.push(project.clone());
    repo.save(&projects).expect("Failed to seed project");
    project
}
