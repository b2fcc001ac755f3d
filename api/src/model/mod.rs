pub mod auth;
pub mod comment;
pub mod item;
pub mod user;
