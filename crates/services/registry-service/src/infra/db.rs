//! Database connection and initialization.

use std::time::Duration;

use common::DatabaseConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};

/// Database wrapper for connection pool management
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and check that the database answers.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        let database = Self { connection };
        database.ping().await?;
        tracing::info!(
            max_connections = config.max_connections,
            "Database connected"
        );

        Ok(database)
    }

    /// Hand the pool over to its owner.
    pub fn get_connection(self) -> DatabaseConnection {
        self.connection
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
