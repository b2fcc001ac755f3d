pub mod auth;
pub mod comment;
pub mod health;
pub mod item;
pub mod user;
