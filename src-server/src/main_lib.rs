use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use fundlink_core::{
    accounts::{AccountRepository, AccountRepositoryTrait, AccountService, AccountServiceTrait},
    ledger::{LedgerService, LedgerServiceTrait},
    messaging::{ChatRepository, ChatRepositoryTrait, MessagingService, MessagingServiceTrait},
    projects::{Project, ProjectRepository, ProjectRepositoryTrait},
    social::{
        EventRepository, EventRepositoryTrait, PostRepository, PostRepositoryTrait, SocialService,
        SocialServiceTrait,
    },
    store::{CollectionStore, LockManager},
};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
    pub messaging_service: Arc<dyn MessagingServiceTrait>,
    pub social_service: Arc<dyn SocialServiceTrait>,
    pub uploads_dir: PathBuf,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Arc::new(CollectionStore::new(&config.data_dir)?);
    let locks = Arc::new(LockManager::new(config.lock_timeout));
    tracing::info!("Data directory in use: {}", config.data_dir.display());

    let account_repo: Arc<dyn AccountRepositoryTrait> =
        Arc::new(AccountRepository::new(store.clone()));
    let project_repo: Arc<dyn ProjectRepositoryTrait> =
        Arc::new(ProjectRepository::new(store.clone()));
    let chat_repo: Arc<dyn ChatRepositoryTrait> = Arc::new(ChatRepository::new(store.clone()));
    let post_repo: Arc<dyn PostRepositoryTrait> = Arc::new(PostRepository::new(store.clone()));
    let event_repo: Arc<dyn EventRepositoryTrait> = Arc::new(EventRepository::new(store.clone()));

    seed_projects(config, project_repo.as_ref())?;

    let account_service = Arc::new(AccountService::new(
        account_repo.clone(),
        locks.clone(),
        config.starting_balance,
    ));
    let ledger_service = Arc::new(LedgerService::new(
        account_repo,
        project_repo,
        locks.clone(),
    ));
    let messaging_service = Arc::new(MessagingService::new(chat_repo, locks.clone()));
    let social_service = Arc::new(SocialService::new(post_repo, event_repo, locks));

    Ok(Arc::new(AppState {
        account_service,
        ledger_service,
        messaging_service,
        social_service,
        uploads_dir: config.uploads_dir.clone(),
    }))
}

/// Projects are seed data; an empty collection is filled once from the
/// configured seed file.
fn seed_projects(config: &Config, projects: &dyn ProjectRepositoryTrait) -> anyhow::Result<()> {
    let Some(seed_file) = &config.seed_file else {
        return Ok(());
    };
    if !projects.load()?.is_empty() {
        return Ok(());
    }

    let raw = std::fs::read_to_string(seed_file)?;
    let seeded: Vec<Project> = serde_json::from_str(&raw)?;
    projects.save(&seeded)?;
    tracing::info!("Seeded {} projects from {}", seeded.len(), seed_file.display());
    Ok(())
}
