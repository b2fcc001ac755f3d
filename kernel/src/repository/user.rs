use std::collections::HashSet;

use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, FollowUser, UnfollowUser, UpdateUserPassword, UpdateUserProfile},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>>;
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<User>>;
    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()>;
    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()>;
    async fn follow(&self, event: FollowUser) -> AppResult<()>;
    async fn unfollow(&self, event: UnfollowUser) -> AppResult<()>;
    // 全量で十分小さい前提。viewer 1 人分の following をまとめて引く
    async fn find_following_ids(&self, user_id: UserId) -> AppResult<HashSet<UserId>>;
}
