use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    redis::RedisClient,
    repository::{
        auth::AuthRepositoryImpl, comment::CommentRepositoryImpl, health::HealthCheckRepositoryImpl,
        item::ItemRepositoryImpl, user::UserRepositoryImpl,
    },
};
use kernel::repository::{
    auth::AuthRepository, comment::CommentRepository, health::HealthCheckRepository,
    item::ItemRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    item_repository: Arc<dyn ItemRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
        ));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let item_repository = Arc::new(ItemRepositoryImpl::new(pool.clone()));
        let comment_repository = Arc::new(CommentRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            item_repository,
            comment_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn item_repository(&self) -> Arc<dyn ItemRepository> {
        self.item_repository.clone()
    }

    pub fn comment_repository(&self) -> Arc<dyn CommentRepository> {
        self.comment_repository.clone()
    }
}
