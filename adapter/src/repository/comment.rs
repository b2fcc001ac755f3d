use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        comment::{
            event::{CreateComment, DeleteComment},
            Comment,
        },
        id::{CommentId, ItemId},
    },
    repository::comment::CommentRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::comment::CommentRow, ConnectionPool};

#[derive(new)]
pub struct CommentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn create(&self, event: CreateComment) -> AppResult<CommentId> {
        let mut tx = self.db.begin().await?;

        // コメント先の出品が存在することを確認してから登録する
        let exists: Option<ItemId> = sqlx::query_scalar(
            r#"
                SELECT item_id FROM items WHERE item_id = $1
            "#,
        )
        .bind(event.item_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;
        if exists.is_none() {
            return Err(AppError::EntityNotFound("item".into()));
        }

        let comment_id = CommentId::new();
        sqlx::query(
            r#"
                INSERT INTO comments (comment_id, body, item_id, seller_id)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(comment_id)
        .bind(event.body)
        .bind(event.item_id)
        .bind(event.seller_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(comment_id)
    }

    async fn find_by_item_id(&self, item_id: ItemId) -> AppResult<Vec<Comment>> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
                SELECT
                    c.comment_id,
                    c.body,
                    c.item_id,
                    c.created_at,
                    u.user_id AS seller_id,
                    u.user_name AS seller_name,
                    u.bio AS seller_bio,
                    u.image AS seller_image
                FROM comments AS c
                LEFT JOIN users AS u ON u.user_id = c.seller_id
                WHERE c.item_id = $1
                ORDER BY c.created_at DESC
            "#,
        )
        .bind(item_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn delete(&self, event: DeleteComment) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM comments
                WHERE comment_id = $1 AND item_id = $2 AND seller_id = $3
            "#,
        )
        .bind(event.comment_id)
        .bind(event.item_id)
        .bind(event.requested_user)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("comment".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{item::ItemRepositoryImpl, user::UserRepositoryImpl};
    use kernel::{
        model::{item::event::CreateItem, user::event::CreateUser},
        repository::{item::ItemRepository, user::UserRepository},
    };

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn comment_round_trip(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let items = ItemRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = CommentRepositoryImpl::new(ConnectionPool::new(pool));

        let seller = users
            .create(CreateUser {
                user_name: "alice".into(),
                email: "a@x.com".into(),
                password: "passw0rd".into(),
            })
            .await?;
        let item_id = items
            .create(
                CreateItem {
                    title: "Vintage camera".into(),
                    description: "Working condition".into(),
                    price: 12000,
                },
                seller.user_id,
            )
            .await?;

        let comment_id = repo
            .create(CreateComment::new(
                item_id,
                seller.user_id,
                "Still available?".into(),
            ))
            .await?;

        let comments = repo.find_by_item_id(item_id).await?;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].comment_id, comment_id);
        assert_eq!(comments[0].body, "Still available?");
        assert_eq!(comments[0].seller.seller_name, "alice");

        repo.delete(DeleteComment::new(comment_id, item_id, seller.user_id))
            .await?;
        assert!(repo.find_by_item_id(item_id).await?.is_empty());
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn comment_on_missing_item_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let repo = CommentRepositoryImpl::new(ConnectionPool::new(pool));

        let seller = users
            .create(CreateUser {
                user_name: "alice".into(),
                email: "a@x.com".into(),
                password: "passw0rd".into(),
            })
            .await?;

        let res = repo
            .create(CreateComment::new(
                ItemId::new(),
                seller.user_id,
                "hello".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
