use std::sync::Arc;

use memoria::config::{ConfigBuilder, ConfigLoader};
use memoria::prelude::*;

pub struct MemoriaCliContext {
    pub config: MemoriaConfig,
    pub store: Arc<dyn RecordStore>,
    pub relation_map: ReciprocalRelationMap,
}

impl MemoriaCliContext {
    /// Load configuration from files and the environment, then open the store
    pub async fn new(data_dir: Option<String>) -> memoria::Result<Self> {
        let mut config = ConfigLoader::load()?;
        if let Some(dir) = data_dir {
            config = ConfigBuilder::from_config(config)
                .with_data_dir(dir)
                .build()?;
        }
        Self::with_config(config).await
    }

    pub async fn with_config(config: MemoriaConfig) -> memoria::Result<Self> {
        let store = memoria::storage::create_record_store(&config.storage).await?;

        Ok(Self {
            config,
            store,
            relation_map: ReciprocalRelationMap::genealogy(),
        })
    }
}
