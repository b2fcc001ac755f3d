use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    follow_user, get_current_user, register_user, show_profile, unfollow_user,
    update_user_password, update_user_profile,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", post(register_user))
        .route("/me", get(get_current_user))
        .route("/me", put(update_user_profile))
        .route("/me/password", put(update_user_password));

    let profiles_routers = Router::new()
        .route("/:user_name", get(show_profile))
        .route("/:user_name/follow", post(follow_user))
        .route("/:user_name/follow", delete(unfollow_user));

    Router::new()
        .nest("/users", users_routers)
        .nest("/profiles", profiles_routers)
}
