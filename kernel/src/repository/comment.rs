use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    comment::{
        event::{CreateComment, DeleteComment},
        Comment,
    },
    id::{CommentId, ItemId},
};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    // 出品に対するコメントを登録する
    async fn create(&self, event: CreateComment) -> AppResult<CommentId>;
    // 出品に紐づくコメント一覧を新しい順に取得する
    async fn find_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<Comment>>;
    // 投稿者本人による削除のみ許可する
    async fn delete(&self, event: DeleteComment) -> AppResult<()>;
}
