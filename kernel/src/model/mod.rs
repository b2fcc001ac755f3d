pub mod auth;
pub mod comment;
pub mod id;
pub mod item;
pub mod user;
