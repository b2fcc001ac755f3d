use crate::model::id::UserId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

// 商品の所有者。射影を作る前に外部キーから解決済みであること
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOwner {
    pub owner_id: UserId,
    pub owner_name: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

// コメントの投稿者。レスポンス上のフィールド名は "seller"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSeller {
    pub seller_id: UserId,
    pub seller_name: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}
