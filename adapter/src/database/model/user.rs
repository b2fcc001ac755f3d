use kernel::model::{id::UserId, user::User};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            user_name,
            email,
            bio,
            image,
        } = value;
        User {
            user_id,
            user_name,
            email,
            bio,
            image,
        }
    }
}

// 認証時にのみ使う行。ハッシュはこの型の外に出さない
#[derive(sqlx::FromRow)]
pub struct UserCredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}
