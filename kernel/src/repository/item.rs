use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{ItemId, UserId},
    item::{
        event::{CreateItem, DeleteItem, UpdateItem},
        Item,
    },
};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    // 出品を登録する
    async fn create(&self, event: CreateItem, owner_id: UserId) -> AppResult<ItemId>;
    // 出品一覧を新しい順に取得する
    async fn find_all(&self) -> AppResult<Vec<Item>>;
    // item_id から出品を取得する
    async fn find_by_id(&self, item_id: ItemId) -> AppResult<Option<Item>>;
    // 所有者本人による更新のみ許可する
    async fn update(&self, event: UpdateItem) -> AppResult<()>;
    // 所有者本人による削除のみ許可する
    async fn delete(&self, event: DeleteItem) -> AppResult<()>;
    // お気に入り登録・解除
    async fn favorite(&self, user_id: UserId, item_id: ItemId) -> AppResult<()>;
    async fn unfavorite(&self, user_id: UserId, item_id: ItemId) -> AppResult<()>;
}
