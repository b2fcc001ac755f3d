pub mod event;

use crate::model::{
    id::{CommentId, ItemId},
    user::CommentSeller,
};
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct Comment {
    pub comment_id: CommentId,
    pub body: String,
    pub item_id: ItemId,
    pub seller: CommentSeller,
    pub created_at: DateTime<Utc>,
}
