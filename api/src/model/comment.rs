use std::collections::HashSet;

use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    comment::Comment,
    id::{CommentId, UserId},
};
use serde::{Deserialize, Serialize};

use super::user::ProfileResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[garde(length(min = 1))]
    pub body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsResponse {
    pub comments: Vec<CommentResponse>,
}

impl CommentsResponse {
    pub fn new(comments: Vec<Comment>, following_ids: &HashSet<UserId>) -> Self {
        Self {
            comments: comments
                .into_iter()
                .map(|comment| CommentResponse::new(comment, following_ids))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub seller: ProfileResponse,
}

impl CommentResponse {
    pub fn new(value: Comment, following_ids: &HashSet<UserId>) -> Self {
        let Comment {
            comment_id,
            body,
            created_at,
            seller,
            item_id: _,
        } = value;
        Self {
            id: comment_id,
            body,
            created_at,
            seller: ProfileResponse::from_seller(seller, following_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{id::ItemId, user::CommentSeller};

    #[test]
    fn seller_matches_profile_view_for_the_same_viewer() {
        let seller = CommentSeller {
            seller_id: UserId::new(),
            seller_name: "bob".into(),
            bio: None,
            image: Some("https://example.com/bob.png".into()),
        };
        let comment = Comment {
            comment_id: CommentId::new(),
            body: "Still available?".into(),
            item_id: ItemId::new(),
            seller: seller.clone(),
            created_at: Utc::now(),
        };
        let following_ids = HashSet::new();

        let expected = ProfileResponse::from_seller(seller, &following_ids);
        let res = CommentResponse::new(comment, &following_ids);
        assert_eq!(res.seller, expected);
        assert!(!res.seller.following);

        let json = serde_json::to_value(&res).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["id", "body", "createdAt", "seller"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
}
