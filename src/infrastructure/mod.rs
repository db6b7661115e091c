pub mod database;
pub mod migrator;
pub mod pbkdf2_password_hasher;
pub mod user_repository;
