//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::{BlogRepository, PasswordService, TokenService, UserRepository};
use bloglist_infra::{
    Argon2PasswordService, DatabaseConfig, InMemoryBlogRepository, InMemoryUserRepository,
    JwtConfig, JwtTokenService,
};

#[cfg(feature = "postgres")]
use bloglist_infra::DatabaseConnections;
#[cfg(feature = "postgres")]
use bloglist_infra::database::{PostgresBlogRepository, PostgresUserRepository};

/// Shared application state. Every handle is an `Arc`, so cloning per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub users: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build state over an empty in-memory store.
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }

    /// Build the application state, falling back to memory when the database
    /// is not configured or cannot be reached.
    pub async fn new(db_config: Option<&DatabaseConfig>, jwt: JwtConfig) -> Self {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory(jwt);
        };

        #[cfg(feature = "postgres")]
        {
            match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    tracing::info!("Application state initialized with PostgreSQL");
                    return Self {
                        blogs: Arc::new(PostgresBlogRepository::new(connections.main.clone())),
                        users: Arc::new(PostgresUserRepository::new(connections.main)),
                        tokens: Arc::new(JwtTokenService::new(jwt)),
                        passwords: Arc::new(Argon2PasswordService::new()),
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = config;
            tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
        }

        Self::in_memory(jwt)
    }
}
