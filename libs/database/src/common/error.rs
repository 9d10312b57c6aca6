use core_config::ConfigError;

/// Failures surfaced while setting up or probing the database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: DatabaseError = ConfigError::MissingEnvVar("DATABASE_URL".to_string()).into();
        assert!(matches!(err, DatabaseError::Config(_)));
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_db_error_converts() {
        let err: DatabaseError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(err.to_string().starts_with("PostgreSQL error"));
    }
}
