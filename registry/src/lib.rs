use std::sync::Arc;

use adapter::repository::image::ImageStorageImpl;
use adapter::repository::playspace::PlayspaceRepositoryImpl;
use adapter::supabase::SupabaseClient;
use kernel::repository::image::ImageStorage;
use kernel::repository::playspace::PlayspaceRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    playspace_repository: Arc<dyn PlayspaceRepository>,
    image_storage: Arc<dyn ImageStorage>,
}

impl AppRegistry {
    pub fn new(client: SupabaseClient, app_config: AppConfig) -> Self {
        let playspace_repository = Arc::new(PlayspaceRepositoryImpl::new(client.clone()));
        let image_storage = Arc::new(ImageStorageImpl::new(
            client,
            app_config.supabase.image_bucket,
        ));
        Self {
            playspace_repository,
            image_storage,
        }
    }

    pub fn playspace_repository(&self) -> Arc<dyn PlayspaceRepository> {
        self.playspace_repository.clone()
    }

    pub fn image_storage(&self) -> Arc<dyn ImageStorage> {
        self.image_storage.clone()
    }
}
