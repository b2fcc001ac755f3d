use chrono::{DateTime, Utc};
use kernel::model::{
    comment::Comment,
    id::{CommentId, ItemId, UserId},
    user::CommentSeller,
};
use shared::error::AppError;

// seller も LEFT JOIN で引く。元実装は未解決のまま射影すると落ちるため、
// ここで変換エラーとして検出する
#[derive(sqlx::FromRow)]
pub struct CommentRow {
    pub comment_id: CommentId,
    pub body: String,
    pub item_id: ItemId,
    pub created_at: DateTime<Utc>,
    pub seller_id: Option<UserId>,
    pub seller_name: Option<String>,
    pub seller_bio: Option<String>,
    pub seller_image: Option<String>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = AppError;

    fn try_from(value: CommentRow) -> Result<Self, Self::Error> {
        let CommentRow {
            comment_id,
            body,
            item_id,
            created_at,
            seller_id,
            seller_name,
            seller_bio,
            seller_image,
        } = value;
        let (Some(seller_id), Some(seller_name)) = (seller_id, seller_name) else {
            return Err(AppError::ReferenceUnresolved("seller"));
        };
        Ok(Comment {
            comment_id,
            body,
            item_id,
            created_at,
            seller: CommentSeller {
                seller_id,
                seller_name,
                bio: seller_bio,
                image: seller_image,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_seller_is_rejected() {
        let row = CommentRow {
            comment_id: CommentId::new(),
            body: "Is this still available?".into(),
            item_id: ItemId::new(),
            created_at: Utc::now(),
            seller_id: None,
            seller_name: None,
            seller_bio: None,
            seller_image: None,
        };
        let res = Comment::try_from(row);
        assert!(matches!(res, Err(AppError::ReferenceUnresolved("seller"))));
    }
}
