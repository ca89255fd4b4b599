//! Application state wiring the services to their infra adapters.
//!
//! `MessagingService` and `UserService` are generic over their ports;
//! AppState pins them to the queued record backend and the in-memory user
//! directory from courier-infra.

use std::path::PathBuf;
use std::sync::Arc;

use courier_core::service::messaging::MessagingService;
use courier_core::service::user::UserService;
use courier_infra::config::load_global_config;
use courier_infra::filesystem::resolve_data_dir;
use courier_infra::store::queue::QueuedRecordStore;
use courier_infra::store::{BackendStore, open_store};
use courier_infra::user::MemoryUserRepository;
use courier_types::config::GlobalConfig;

/// Concrete store type: the configured backend behind the single-writer queue.
pub type ConcreteStore = QueuedRecordStore<BackendStore>;

pub type ConcreteMessagingService = MessagingService<ConcreteStore>;

pub type ConcreteUserService = UserService<MemoryUserRepository>;

/// Shared application state used by the CLI and the REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub messaging: Arc<ConcreteMessagingService>,
    pub users: Arc<ConcreteUserService>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load `config.toml` and open the store.
    ///
    /// The store is not initialized here; callers decide when to truncate it.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        Self::from_config(config, data_dir)
    }

    /// Wire state from an already-loaded configuration.
    pub fn from_config(config: GlobalConfig, data_dir: PathBuf) -> anyhow::Result<Self> {
        let store = open_store(&config.store, &data_dir)?;
        let messaging = MessagingService::new(store, config.query.pair_policy);

        Ok(Self {
            messaging: Arc::new(messaging),
            users: Arc::new(UserService::new(MemoryUserRepository::new())),
            config: Arc::new(config),
            data_dir,
        })
    }
}
