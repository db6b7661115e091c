pub mod login_usecase;
pub mod register_user_usecase;
