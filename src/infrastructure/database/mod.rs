//! Database Module
//!
//! PostgreSQL connection pool, embedded migrations, and the readiness probe.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{DatabaseSettings, ServiceKind};
use crate::presentation::http::handlers::health::{DependencyCheck, HealthStatus, ServiceHealth};

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(settings.connection_url())
        .await
}

/// Run the migrations belonging to one service's database
pub async fn run_migrations(pool: &PgPool, service: ServiceKind) -> Result<(), sqlx::migrate::MigrateError> {
    match service {
        ServiceKind::Desc => sqlx::migrate!("./migrations/desc").run(pool).await,
        ServiceKind::Mock => sqlx::migrate!("./migrations/mock").run(pool).await,
        ServiceKind::Site => Ok(()),
    }
}

/// Readiness probe issuing `SELECT 1` against the pool
pub struct DatabaseCheck {
    pool: PgPool,
}

impl DatabaseCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DependencyCheck for DatabaseCheck {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn check(&self) -> ServiceHealth {
        let start = Instant::now();
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => {
                let latency = start.elapsed().as_millis() as u64;
                ServiceHealth {
                    status: if latency < 100 {
                        HealthStatus::Healthy
                    } else {
                        HealthStatus::Degraded
                    },
                    latency_ms: Some(latency),
                    message: None,
                }
            }
            Err(e) => ServiceHealth {
                status: HealthStatus::Unhealthy,
                latency_ms: None,
                message: Some(format!("Database connection failed: {}", e)),
            },
        }
    }
}
