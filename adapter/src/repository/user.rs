use std::collections::HashSet;

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        user::{
            event::{CreateUser, FollowUser, UnfollowUser, UpdateUserPassword, UpdateUserProfile},
            User,
        },
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    model::user::{UserCredentialRow, UserRow},
    ConnectionPool,
};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(password_hash)
        .execute(self.db.inner_ref())
        .await
        .map_err(map_unique_violation)?;

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            bio: None,
            image: None,
        })
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, bio, image
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(row.map(User::from))
    }

    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, bio, image
                FROM users
                WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(row.map(User::from))
    }

    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET user_name = COALESCE($2, user_name),
                    email = COALESCE($3, email),
                    bio = COALESCE($4, bio),
                    image = COALESCE($5, image),
                    updated_at = now()
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(event.user_name)
        .bind(event.email)
        .bind(event.bio)
        .bind(event.image)
        .execute(self.db.inner_ref())
        .await
        .map_err(map_unique_violation)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("user".into()));
        }
        Ok(())
    }

    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let row: Option<UserCredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;
        let row = row.ok_or_else(|| AppError::EntityNotFound("user".into()))?;

        let valid = bcrypt::verify(&event.current_password, &row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        let new_hash = bcrypt::hash(&event.new_password, bcrypt::DEFAULT_COST)?;
        sqlx::query(
            r#"
                UPDATE users
                SET password_hash = $2, updated_at = now()
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(new_hash)
        .execute(&mut *tx)
        .await
        .map_err(AppError::DbQueryError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn follow(&self, event: FollowUser) -> AppResult<()> {
        if event.follower_id == event.followee_id {
            return Err(AppError::UnprocessableEntity(
                "cannot follow yourself".into(),
            ));
        }
        sqlx::query(
            r#"
                INSERT INTO user_follows (follower_id, followee_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
            "#,
        )
        .bind(event.follower_id)
        .bind(event.followee_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;
        Ok(())
    }

    async fn unfollow(&self, event: UnfollowUser) -> AppResult<()> {
        sqlx::query(
            r#"
                DELETE FROM user_follows
                WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(event.follower_id)
        .bind(event.followee_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;
        Ok(())
    }

    async fn find_following_ids(&self, user_id: UserId) -> AppResult<HashSet<UserId>> {
        let ids: Vec<UserId> = sqlx::query_scalar(
            r#"
                SELECT followee_id
                FROM user_follows
                WHERE follower_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        Ok(ids.into_iter().collect())
    }
}

// users テーブルの一意制約違反をフィールド名つきのエラーへ変換する
fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_email_key") => AppError::UniquenessViolation { field: "email" },
                Some("users_user_name_key") => AppError::UniquenessViolation { field: "username" },
                _ => AppError::UniquenessViolation { field: "value" },
            };
        }
    }
    AppError::DbQueryError(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_alice() -> CreateUser {
        CreateUser {
            user_name: "alice".into(),
            email: "a@x.com".into(),
            password: "passw0rd".into(),
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn register_and_fetch_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo.create(create_alice()).await?;
        let found = repo.find_current_user(created.user_id).await?;

        let user = found.expect("user should exist");
        assert_eq!(user.user_name, "alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.bio, None);
        assert_eq!(user.image, None);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn duplicate_email_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(create_alice()).await?;
        let res = repo
            .create(CreateUser {
                user_name: "alice2".into(),
                email: "a@x.com".into(),
                password: "passw0rd".into(),
            })
            .await;

        assert!(matches!(
            res,
            Err(AppError::UniquenessViolation { field: "email" })
        ));
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running Postgres"]
    async fn follow_is_reflected_in_following_ids(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let alice = repo.create(create_alice()).await?;
        let bob = repo
            .create(CreateUser {
                user_name: "bob".into(),
                email: "b@x.com".into(),
                password: "passw0rd".into(),
            })
            .await?;

        repo.follow(FollowUser {
            follower_id: alice.user_id,
            followee_id: bob.user_id,
        })
        .await?;
        let following = repo.find_following_ids(alice.user_id).await?;
        assert!(following.contains(&bob.user_id));

        repo.unfollow(UnfollowUser {
            follower_id: alice.user_id,
            followee_id: bob.user_id,
        })
        .await?;
        let following = repo.find_following_ids(alice.user_id).await?;
        assert!(following.is_empty());
        Ok(())
    }
}
