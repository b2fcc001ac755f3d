use std::collections::HashSet;

use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateUserPassword, UpdateUserProfile},
        CommentSeller, ItemOwner, User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    username: String,
    #[garde(email)]
    email: String,
    #[garde(length(min = 8))]
    password: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            username,
            email,
            password,
        } = value;
        Self {
            user_name: username,
            email,
            password,
        }
    }
}

// 本人にのみ返すビュー。他人向けには ProfileResponse を使う
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            bio,
            image,
        } = value;
        Self {
            user_id,
            username: user_name,
            email,
            bio,
            image,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileRequest {
    #[garde(inner(length(min = 1)))]
    username: Option<String>,
    #[garde(inner(email))]
    email: Option<String>,
    #[garde(skip)]
    bio: Option<String>,
    #[garde(skip)]
    image: Option<String>,
}

#[derive(new)]
pub struct UpdateUserProfileRequestWithUserId(UserId, UpdateUserProfileRequest);

impl From<UpdateUserProfileRequestWithUserId> for UpdateUserProfile {
    fn from(value: UpdateUserProfileRequestWithUserId) -> Self {
        let UpdateUserProfileRequestWithUserId(
            user_id,
            UpdateUserProfileRequest {
                username,
                email,
                bio,
                image,
            },
        ) = value;
        Self {
            user_id,
            user_name: username,
            email,
            bio,
            image,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPasswordRequest {
    #[garde(length(min = 1))]
    current_password: String,
    #[garde(length(min = 8))]
    new_password: String,
}

#[derive(new)]
pub struct UpdateUserPasswordRequestWithUserId(UserId, UpdateUserPasswordRequest);

impl From<UpdateUserPasswordRequestWithUserId> for UpdateUserPassword {
    fn from(value: UpdateUserPasswordRequestWithUserId) -> Self {
        let UpdateUserPasswordRequestWithUserId(
            user_id,
            UpdateUserPasswordRequest {
                current_password,
                new_password,
            },
        ) = value;
        Self {
            user_id,
            current_password,
            new_password,
        }
    }
}

// 公開プロフィールビュー。閲覧者が誰かによって following だけが変わる。
// メールアドレスや認証情報は決して含めない
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl ProfileResponse {
    pub fn from_user(value: User, following_ids: &HashSet<UserId>) -> Self {
        let User {
            user_id,
            user_name,
            bio,
            image,
            email: _,
        } = value;
        Self {
            username: user_name,
            bio,
            image,
            following: following_ids.contains(&user_id),
        }
    }

    pub fn from_owner(value: ItemOwner, following_ids: &HashSet<UserId>) -> Self {
        let ItemOwner {
            owner_id,
            owner_name,
            bio,
            image,
        } = value;
        Self {
            username: owner_name,
            bio,
            image,
            following: following_ids.contains(&owner_id),
        }
    }

    pub fn from_seller(value: CommentSeller, following_ids: &HashSet<UserId>) -> Self {
        let CommentSeller {
            seller_id,
            seller_name,
            bio,
            image,
        } = value;
        Self {
            username: seller_name,
            bio,
            image,
            following: following_ids.contains(&seller_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn alice() -> User {
        User {
            user_id: UserId::new(),
            user_name: "alice".into(),
            email: "a@x.com".into(),
            bio: None,
            image: None,
        }
    }

    #[test]
    fn profile_view_hides_email_and_credentials() {
        let profile = ProfileResponse::from_user(alice(), &HashSet::new());
        let json = serde_json::to_value(&profile).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["username", "bio", "image", "following"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert!(!obj.contains_key("email"));
        assert!(!obj.contains_key("passwordHash"));
    }

    #[test]
    fn fresh_user_profile_for_anonymous_viewer() {
        let profile = ProfileResponse::from_user(alice(), &HashSet::new());
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "alice",
                "bio": null,
                "image": null,
                "following": false
            })
        );
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn following_reflects_the_viewer(#[case] follows: bool) {
        let user = alice();
        let mut following_ids = HashSet::new();
        if follows {
            following_ids.insert(user.user_id);
        }
        let profile = ProfileResponse::from_user(user, &following_ids);
        assert_eq!(profile.following, follows);
    }
}
