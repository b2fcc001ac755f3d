use axum::Router;
use registry::AppRegistry;

use super::{
    auth, health::build_health_check_routers, item::build_item_routers, user::build_user_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_user_routers())
        .merge(build_item_routers())
        .merge(auth::routes());
    Router::new().nest("/api/v1", router)
}
