mod config;
mod domain;
mod infrastructure;
mod presentation;
mod telemetry;
mod usecase;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    config::{Config, DEFAULT_CONFIG_PATH},
    infrastructure::{
        database, pbkdf2_password_hasher::Pbkdf2PasswordHasher,
        user_repository::SqliteUserRepository,
    },
    presentation::{
        handlers::{menu_handler, user_handler::UserHandler},
        views::terminal_view::TerminalView,
    },
    usecase::{
        login_usecase::LoginUsecase,
        register_user_usecase::{CredentialPolicy, RegisterUserUsecase},
    },
};

/// Interactive register / login demo backed by SQLite
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // .env is optional
    let _ = dotenvy::dotenv();
    let config = Config::load(&cli.config)?;
    telemetry::init(&config.logging)?;
    debug!(path = %cli.config.display(), "Configuration ready");

    let db = database::connect(&config.database).await?;
    let user_repository = SqliteUserRepository::new(db.clone());

    let pepper = config.security.pepper()?;
    let password_hasher =
        Pbkdf2PasswordHasher::with_iterations(pepper, config.security.pbkdf2_iterations);
    debug!(iterations = password_hasher.iterations(), "Password hasher ready");
    let policy = CredentialPolicy {
        allow_empty_username: config.security.allow_empty_username,
        allow_empty_password: config.security.allow_empty_password,
    };

    let login_service = LoginUsecase::new(user_repository.clone(), password_hasher.clone());
    let register_user_usecase =
        RegisterUserUsecase::new(user_repository.clone(), password_hasher.clone(), policy);

    let mut handler = UserHandler::new(login_service, register_user_usecase, TerminalView::new());
    menu_handler::run(&mut handler).await?;

    db.close().await?;
    info!("Shut down");

    Ok(())
}
