pub mod get_current_user;
pub mod get_session;
pub mod health;
