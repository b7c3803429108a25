use chrono::{FixedOffset, NaiveDate, Utc};
use once_cell::sync::OnceCell;
use std::sync::Arc;

use contracts::shared::dates::LOCAL_UTC_OFFSET_SECS;
use contracts::shared::status_catalog::StatusCatalog;

use super::config::{self, Config, StatusCatalogConfig};
use super::remote::RemoteService;
use super::snapshot::SnapshotStore;

static APP_CONTEXT: OnceCell<AppContext> = OnceCell::new();

/// Состояние процесса: настройки, справочник статусов, клиент внешнего
/// сервиса и текущий снимок данных
pub struct AppContext {
    pub config: Config,
    pub catalog: StatusCatalog,
    pub remote: Arc<dyn RemoteService>,
    pub store: SnapshotStore,
}

impl AppContext {
    pub fn new(config: Config, catalog: StatusCatalog, remote: Arc<dyn RemoteService>) -> Self {
        Self {
            config,
            catalog,
            remote,
            store: SnapshotStore::new(),
        }
    }

    /// Сегодняшняя дата по местному времени школы
    pub fn today(&self) -> NaiveDate {
        let now = Utc::now();
        FixedOffset::east_opt(LOCAL_UTC_OFFSET_SECS)
            .map(|offset| now.with_timezone(&offset).date_naive())
            .unwrap_or_else(|| now.date_naive())
    }
}

pub fn initialize(context: AppContext) -> anyhow::Result<()> {
    APP_CONTEXT
        .set(context)
        .map_err(|_| anyhow::anyhow!("Application context is already initialized"))
}

pub fn get() -> &'static AppContext {
    APP_CONTEXT
        .get()
        .expect("Application context has not been initialized")
}

/// Справочник статусов из файла настроек или встроенный
pub fn load_status_catalog(settings: &StatusCatalogConfig) -> anyhow::Result<StatusCatalog> {
    let Some(path_str) = settings.path.as_deref().filter(|p| !p.trim().is_empty()) else {
        tracing::info!("Using embedded status catalog");
        return Ok(StatusCatalog::builtin().clone());
    };

    let path = config::resolve_path(path_str);
    tracing::info!("Loading status catalog from: {}", path.display());
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Cannot read status catalog {}: {}", path.display(), e))?;
    let catalog = StatusCatalog::from_json(&contents)?;
    Ok(catalog)
}
