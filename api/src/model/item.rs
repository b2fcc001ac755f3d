use std::collections::HashSet;

use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ItemId, UserId},
    item::{
        event::{CreateItem, UpdateItem},
        Item,
    },
};
use serde::{Deserialize, Serialize};

use super::user::ProfileResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
    #[garde(range(min = 0))]
    pub price: i64,
}

impl From<CreateItemRequest> for CreateItem {
    fn from(value: CreateItemRequest) -> Self {
        let CreateItemRequest {
            title,
            description,
            price,
        } = value;
        Self {
            title,
            description,
            price,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[garde(inner(length(min = 1)))]
    pub title: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(inner(range(min = 0)))]
    pub price: Option<i64>,
}

#[derive(new)]
pub struct UpdateItemRequestWithIds(ItemId, UserId, UpdateItemRequest);

impl From<UpdateItemRequestWithIds> for UpdateItem {
    fn from(value: UpdateItemRequestWithIds) -> Self {
        let UpdateItemRequestWithIds(
            item_id,
            requested_user,
            UpdateItemRequest {
                title,
                description,
                price,
            },
        ) = value;
        Self {
            item_id,
            title,
            description,
            price,
            requested_user,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    pub items: Vec<ItemResponse>,
}

impl ItemsResponse {
    pub fn new(items: Vec<Item>, following_ids: &HashSet<UserId>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| ItemResponse::new(item, following_ids))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub owner: ProfileResponse,
    pub created_at: DateTime<Utc>,
}

impl ItemResponse {
    pub fn new(value: Item, following_ids: &HashSet<UserId>) -> Self {
        let Item {
            item_id,
            title,
            description,
            price,
            owner,
            created_at,
        } = value;
        Self {
            id: item_id,
            title,
            description,
            price,
            owner: ProfileResponse::from_owner(owner, following_ids),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::user::ItemOwner;

    fn item_of(owner: ItemOwner) -> Item {
        Item {
            item_id: ItemId::new(),
            title: "Vintage camera".into(),
            description: "Working condition".into(),
            price: 12000,
            owner,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn owner_matches_profile_view_for_the_same_viewer() {
        let owner = ItemOwner {
            owner_id: UserId::new(),
            owner_name: "alice".into(),
            bio: Some("seller of old things".into()),
            image: None,
        };
        let mut following_ids = HashSet::new();
        following_ids.insert(owner.owner_id);

        let expected = ProfileResponse::from_owner(owner.clone(), &following_ids);
        let res = ItemResponse::new(item_of(owner), &following_ids);
        assert_eq!(res.owner, expected);
        assert!(res.owner.following);
    }

    #[test]
    fn item_view_uses_camel_case_field_names() {
        let owner = ItemOwner {
            owner_id: UserId::new(),
            owner_name: "alice".into(),
            bio: None,
            image: None,
        };
        let res = ItemResponse::new(item_of(owner), &HashSet::new());
        let json = serde_json::to_value(&res).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for key in ["id", "title", "description", "price", "owner", "createdAt"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
}
