use std::collections::HashSet;

use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::MaybeAuthorizedUser;

pub mod auth;
pub mod comment;
pub mod health;
pub mod item;
pub mod user;

// following フラグ算出用。匿名の閲覧者は空集合（常に following = false）
pub(crate) async fn viewer_following_ids(
    viewer: &MaybeAuthorizedUser,
    registry: &AppRegistry,
) -> AppResult<HashSet<UserId>> {
    match viewer.user() {
        Some(user) => registry.user_repository().find_following_ids(user.id()).await,
        None => Ok(HashSet::new()),
    }
}
