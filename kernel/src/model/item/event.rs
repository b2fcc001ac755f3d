use crate::model::id::{ItemId, UserId};

pub struct CreateItem {
    pub title: String,
    pub description: String,
    pub price: i64,
}

#[derive(Debug)]
pub struct UpdateItem {
    pub item_id: ItemId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub requested_user: UserId,
}

#[derive(Debug)]
pub struct DeleteItem {
    pub item_id: ItemId,
    pub requested_user: UserId,
}
