use crate::model::id::{CommentId, ItemId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateComment {
    pub item_id: ItemId,
    pub seller_id: UserId,
    pub body: String,
}

#[derive(Debug, new)]
pub struct DeleteComment {
    pub comment_id: CommentId,
    pub item_id: ItemId,
    pub requested_user: UserId,
}
