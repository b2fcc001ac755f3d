pub mod event;

use crate::model::{id::ItemId, user::ItemOwner};
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct Item {
    pub item_id: ItemId,
    pub title: String,
    pub description: String,
    // 価格は最小通貨単位の整数で持つ
    pub price: i64,
    pub owner: ItemOwner,
    pub created_at: DateTime<Utc>,
}
