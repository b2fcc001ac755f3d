use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    comment::event::{CreateComment, DeleteComment},
    id::{CommentId, ItemId},
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::{AuthorizedUser, MaybeAuthorizedUser},
    handler::viewer_following_ids,
    model::comment::{CommentsResponse, CreateCommentRequest},
};

pub async fn register_comment(
    user: AuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let comment_id = registry
        .comment_repository()
        .create(CreateComment::new(item_id, user.id(), req.body))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": comment_id })),
    ))
}

pub async fn show_comment_list(
    viewer: MaybeAuthorizedUser,
    Path(item_id): Path<ItemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CommentsResponse>> {
    let comments = registry
        .comment_repository()
        .find_by_item_id(item_id)
        .await?;
    let following_ids = viewer_following_ids(&viewer, &registry).await?;
    Ok(Json(CommentsResponse::new(comments, &following_ids)))
}

pub async fn delete_comment(
    user: AuthorizedUser,
    Path((item_id, comment_id)): Path<(ItemId, CommentId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .comment_repository()
        .delete(DeleteComment::new(comment_id, item_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}
