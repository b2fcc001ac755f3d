use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{id::ItemId, item::event::DeleteItem};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AuthorizedUser, MaybeAuthorizedUser},
    handler::viewer_following_ids,
    model::item::{
        CreateItemRequest, ItemResponse, ItemsResponse, UpdateItemRequest, UpdateItemRequestWithIds,
    },
};

pub async fn register_item(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateItemRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let item_id = registry
        .item_repository()
        .create(req.into(), user.id())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": item_id })),
    ))
}

pub async fn show_item_list(
    viewer: MaybeAuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ItemsResponse>> {
    let items = registry.item_repository().find_all().await?;
    let following_ids = viewer_following_ids(&viewer, &registry).await?;
    Ok(Json(ItemsResponse::new(items, &following_ids)))
}

pub async fn show_item(
    viewer: MaybeAuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ItemResponse>> {
    let item = registry
        .item_repository()
        .find_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("item".into()))?;

    let following_ids = viewer_following_ids(&viewer, &registry).await?;
    Ok(Json(ItemResponse::new(item, &following_ids)))
}

pub async fn update_item(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateItemRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateItemRequestWithIds::new(item_id, user.id(), req);
    registry
        .item_repository()
        .update(update.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_item(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let delete_item = DeleteItem {
        item_id,
        requested_user: user.id(),
    };
    registry
        .item_repository()
        .delete(delete_item)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn favorite_item(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .item_repository()
        .favorite(user.id(), item_id)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn unfavorite_item(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .item_repository()
        .unfavorite(user.id(), item_id)
        .await
        .map(|_| StatusCode::OK)
}
