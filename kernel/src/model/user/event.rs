use crate::model::id::UserId;

pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UpdateUserProfile {
    pub user_id: UserId,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

pub struct UpdateUserPassword {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug)]
pub struct FollowUser {
    pub follower_id: UserId,
    pub followee_id: UserId,
}

#[derive(Debug)]
pub struct UnfollowUser {
    pub follower_id: UserId,
    pub followee_id: UserId,
}
