use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::user::event::{FollowUser, UnfollowUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AuthorizedUser, MaybeAuthorizedUser},
    handler::viewer_following_ids,
    model::user::{
        CreateUserRequest, ProfileResponse, UpdateUserPasswordRequest,
        UpdateUserPasswordRequestWithUserId, UpdateUserProfileRequest,
        UpdateUserProfileRequestWithUserId, UserResponse,
    },
};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;

    registry
        .user_repository()
        .create(req.into())
        .await
        .map(|user| (StatusCode::CREATED, Json(user.into())))
}

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(user.user.into())
}

pub async fn update_user_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserProfileRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateUserProfileRequestWithUserId::new(user.id(), req);
    registry
        .user_repository()
        .update_profile(update.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn update_user_password(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserPasswordRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update = UpdateUserPasswordRequestWithUserId::new(user.id(), req);
    registry
        .user_repository()
        .update_password(update.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_profile(
    viewer: MaybeAuthorizedUser,
    Path(user_name): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProfileResponse>> {
    let target = registry
        .user_repository()
        .find_by_user_name(&user_name)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("profile".into()))?;

    let following_ids = viewer_following_ids(&viewer, &registry).await?;
    Ok(Json(ProfileResponse::from_user(target, &following_ids)))
}

pub async fn follow_user(
    user: AuthorizedUser,
    Path(user_name): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let target = registry
        .user_repository()
        .find_by_user_name(&user_name)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("profile".into()))?;

    registry
        .user_repository()
        .follow(FollowUser {
            follower_id: user.id(),
            followee_id: target.user_id,
        })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn unfollow_user(
    user: AuthorizedUser,
    Path(user_name): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let target = registry
        .user_repository()
        .find_by_user_name(&user_name)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("profile".into()))?;

    registry
        .user_repository()
        .unfollow(UnfollowUser {
            follower_id: user.id(),
            followee_id: target.user_id,
        })
        .await
        .map(|_| StatusCode::OK)
}
