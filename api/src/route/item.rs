use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    comment::{delete_comment, register_comment, show_comment_list},
    item::{
        delete_item, favorite_item, register_item, show_item, show_item_list, unfavorite_item,
        update_item,
    },
};

pub fn build_item_routers() -> Router<AppRegistry> {
    let items_routers = Router::new()
        .route("/", post(register_item))
        .route("/", get(show_item_list))
        .route("/:item_id", get(show_item))
        .route("/:item_id", put(update_item))
        .route("/:item_id", delete(delete_item))
        .route("/:item_id/favorite", put(favorite_item))
        .route("/:item_id/favorite", delete(unfavorite_item))
        .route("/:item_id/comments", post(register_comment))
        .route("/:item_id/comments", get(show_comment_list))
        .route("/:item_id/comments/:comment_id", delete(delete_comment));

    Router::new().nest("/items", items_routers)
}
