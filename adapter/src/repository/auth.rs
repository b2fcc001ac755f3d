use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        auth::{event::CreateToken, AccessToken},
        id::UserId,
    },
    repository::auth::AuthRepository,
};
use shared::error::{AppError, AppResult};

use crate::{
    database::{model::user::UserCredentialRow, ConnectionPool},
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};

pub struct AuthorizationKey(String);

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.clone())
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(value: AccessToken) -> Self {
        Self(value.0)
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("auth:{}", self.0)
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse::<UserId>()
            .map(Self)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        let value = self.kv.get(&key).await?;
        Ok(value.map(AuthorizedUserId::into_inner))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<UserCredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::DbQueryError)?;

        // 存在しないメールアドレスも認証失敗として同じエラーにする
        let row = row.ok_or(AppError::UnauthenticatedError)?;
        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }
        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let token = AccessToken(uuid::Uuid::new_v4().simple().to_string());
        let key: AuthorizationKey = (&token).into();
        self.kv
            .set_ex(&key, &AuthorizedUserId(event.user_id), self.ttl)
            .await?;
        Ok(token)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_key_is_prefixed() {
        let token = AccessToken("abc123".into());
        let key: AuthorizationKey = (&token).into();
        assert_eq!(key.inner(), "auth:abc123");
    }

    #[test]
    fn authorized_user_id_round_trips() {
        let user_id = UserId::new();
        let value = AuthorizedUserId(user_id);
        let restored = AuthorizedUserId::try_from(value.inner()).unwrap();
        assert_eq!(restored.into_inner(), user_id);
    }
}
