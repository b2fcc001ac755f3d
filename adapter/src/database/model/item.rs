use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ItemId, UserId},
    item::Item,
    user::ItemOwner,
};
use shared::error::AppError;

// owner は LEFT JOIN で引くため、参照が壊れていると NULL になり得る
#[derive(sqlx::FromRow)]
pub struct ItemRow {
    pub item_id: ItemId,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub owner_id: Option<UserId>,
    pub owner_name: Option<String>,
    pub owner_bio: Option<String>,
    pub owner_image: Option<String>,
}

impl TryFrom<ItemRow> for Item {
    type Error = AppError;

    fn try_from(value: ItemRow) -> Result<Self, Self::Error> {
        let ItemRow {
            item_id,
            title,
            description,
            price,
            created_at,
            owner_id,
            owner_name,
            owner_bio,
            owner_image,
        } = value;
        let (Some(owner_id), Some(owner_name)) = (owner_id, owner_name) else {
            return Err(AppError::ReferenceUnresolved("owner"));
        };
        Ok(Item {
            item_id,
            title,
            description,
            price,
            created_at,
            owner: ItemOwner {
                owner_id,
                owner_name,
                bio: owner_bio,
                image: owner_image,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(owner_id: Option<UserId>, owner_name: Option<String>) -> ItemRow {
        ItemRow {
            item_id: ItemId::new(),
            title: "Vintage camera".into(),
            description: "Working condition".into(),
            price: 12000,
            created_at: Utc::now(),
            owner_id,
            owner_name,
            owner_bio: None,
            owner_image: None,
        }
    }

    #[test]
    fn resolved_owner_converts() {
        let owner_id = UserId::new();
        let item = Item::try_from(row(Some(owner_id), Some("alice".into()))).unwrap();
        assert_eq!(item.owner.owner_id, owner_id);
        assert_eq!(item.owner.owner_name, "alice");
    }

    #[test]
    fn unresolved_owner_is_rejected() {
        let res = Item::try_from(row(None, None));
        assert!(matches!(res, Err(AppError::ReferenceUnresolved("owner"))));
    }
}
