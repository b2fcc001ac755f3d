use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{ItemId, UserId},
        item::{
            event::{CreateItem, DeleteItem, UpdateItem},
            Item,
        },
    },
    repository::item::ItemRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::item::ItemRow, ConnectionPool};

#[derive(new)]
pub struct ItemRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn create(&self, event: CreateItem, owner_id: UserId) -> AppResult<ItemId> {
        let item_id = ItemId::new();
        sqlx::query(
            r#"
                INSERT INTO items (item_id, title, description, price, owned_by)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(item_id)
        .bind(event.title)
        .bind(event.description)
        .bind(event.price)
        .bind(owner_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(item_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
                SELECT
                    i.item_id,
                    i.title,
                    i.description,
                    i.price,
                    i.created_at,
                    u.user_id AS owner_id,
                    u.user_name AS owner_name,
                    u.bio AS owner_bio,
                    u.image AS owner_image
                FROM items AS i
                LEFT JOIN users AS u ON u.user_id = i.owned_by
                ORDER BY i.created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        rows.into_iter().map(Item::try_from).collect()
    }

    async fn find_by_id(&self, item_id: ItemId) -> AppResult<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(
            r#"
                SELECT
                    i.item_id,
                    i.title,
                    i.description,
                    i.price,
                    i.created_at,
                    u.user_id AS owner_id,
                    u.user_name AS owner_name,
                    u.bio AS owner_bio,
                    u.image AS owner_image
                FROM items AS i
                LEFT JOIN users AS u ON u.user_id = i.owned_by
                WHERE i.item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        row.map(Item::try_from).transpose()
    }

    async fn update(&self, event: UpdateItem) -> AppResult<()> {
        // WHERE に所有者を含めることで、他人の出品は見つからなかった扱いになる
        let res = sqlx::query(
            r#"
                UPDATE items
                SET title = COALESCE($3, title),
                    description = COALESCE($4, description),
                    price = COALESCE($5, price),
                    updated_at = now()
                WHERE item_id = $1 AND owned_by = $2
            "#,
        )
        .bind(event.item_id)
        .bind(event.requested_user)
        .bind(event.title)
        .bind(event.description)
        .bind(event.price)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("item".into()));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteItem) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM items
                WHERE item_id = $1 AND owned_by = $2
            "#,
        )
        .bind(event.item_id)
        .bind(event.requested_user)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("item".into()));
        }
        Ok(())
    }

    async fn favorite(&self, user_id: UserId, item_id: ItemId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let exists: Option<ItemId> = sqlx::query_scalar(
            r#"
                SELECT item_id FROM items WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;
        if exists.is_none() {
            return Err(AppError::EntityNotFound("item".into()));
        }

        sqlx::query(
            r#"
                INSERT INTO user_favorites (user_id, item_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(item_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn unfavorite(&self, user_id: UserId, item_id: ItemId) -> AppResult<()> {
        sqlx::query(
            r#"
                DELETE FROM user_favorites
                WHERE user_id = $1 AND item_id = $2
            "#,
        )
        .bind(user_id)
        .bind(item_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::{model::user::event::CreateUser, repository::user::UserRepository};

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn register_and_fetch_item(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = ItemRepositoryImpl::new(ConnectionPool::new(pool));

        let owner = users
            .create(CreateUser {
                user_name: "alice".into(),
                email: "a@x.com".into(),
                password: "passw0rd".into(),
            })
            .await?;

        let item_id = repo
            .create(
                CreateItem {
                    title: "Vintage camera".into(),
                    description: "Working condition".into(),
                    price: 12000,
                },
                owner.user_id,
            )
            .await?;

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 1);

        let item = repo.find_by_id(item_id).await?.expect("item should exist");
        assert_eq!(item.title, "Vintage camera");
        assert_eq!(item.price, 12000);
        assert_eq!(item.owner.owner_id, owner.user_id);
        assert_eq!(item.owner.owner_name, "alice");
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn only_owner_can_delete(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = ItemRepositoryImpl::new(ConnectionPool::new(pool));

        let owner = users
            .create(CreateUser {
                user_name: "alice".into(),
                email: "a@x.com".into(),
                password: "passw0rd".into(),
            })
            .await?;
        let other = users
            .create(CreateUser {
                user_name: "bob".into(),
                email: "b@x.com".into(),
                password: "passw0rd".into(),
            })
            .await?;

        let item_id = repo
            .create(
                CreateItem {
                    title: "Old chair".into(),
                    description: "A bit worn".into(),
                    price: 3000,
                },
                owner.user_id,
            )
            .await?;

        let res = repo
            .delete(DeleteItem {
                item_id,
                requested_user: other.user_id,
            })
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        repo.delete(DeleteItem {
            item_id,
            requested_user: owner.user_id,
        })
        .await?;
        assert!(repo.find_by_id(item_id).await?.is_none());
        Ok(())
    }
}
