//! Application Startup
//!
//! Wires one service's dependencies into its router and binds the listener.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::FromRef, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;

use crate::application::gateways::AuthGateway;
use crate::application::services::{
    CategoryService, CategoryServiceImpl, IndexService, InterviewService, InterviewServiceImpl, ProfilesService,
    TopicService, TopicServiceImpl,
};
use crate::config::{ServiceKind, Settings};
use crate::infrastructure::clients::{self, AuthClient, DescClient, MockClient, NotificationClient};
use crate::infrastructure::database::{self, DatabaseCheck};
use crate::infrastructure::repositories::{PgCategoryRepository, PgInterviewRepository, PgTopicRepository};
use crate::presentation::http::handlers::health::{self, Readiness};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// State of the catalog service
#[derive(Clone, FromRef)]
pub struct DescState {
    pub topics: Arc<dyn TopicService>,
    pub categories: Arc<dyn CategoryService>,
    pub readiness: Readiness,
}

/// State of the booking service
#[derive(Clone, FromRef)]
pub struct MockState {
    pub interviews: Arc<dyn InterviewService>,
    pub readiness: Readiness,
}

/// State of the site
#[derive(Clone, FromRef)]
pub struct SiteState {
    pub index: IndexService,
    pub profiles: ProfilesService,
    pub readiness: Readiness,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build one service from settings
    pub async fn build(settings: Settings, service: ServiceKind) -> Result<Self> {
        let router = match service {
            ServiceKind::Desc => routes::desc_router(desc_state(&settings).await?),
            ServiceKind::Mock => routes::mock_router(mock_state(&settings).await?),
            ServiceKind::Site => routes::site_router(site_state(&settings)?),
        };

        // Build router with middleware
        let router = router
            .layer(CompressionLayer::new())
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!(service = %service, "Listening on {}", addr);

        health::init_server_start();

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn connect_database(settings: &Settings, service: ServiceKind) -> Result<sqlx::PgPool> {
    let db_settings = settings
        .database
        .as_ref()
        .with_context(|| format!("The {} service requires a database", service))?;

    let pool = database::create_pool(db_settings).await?;
    tracing::info!("Database connection pool created");

    if db_settings.run_migrations {
        database::run_migrations(&pool, service).await?;
        tracing::info!("Database migrations applied");
    }
    Ok(pool)
}

async fn desc_state(settings: &Settings) -> Result<DescState> {
    let pool = connect_database(settings, ServiceKind::Desc).await?;

    let topic_repo = Arc::new(PgTopicRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));

    Ok(DescState {
        topics: Arc::new(TopicServiceImpl::new(topic_repo)),
        categories: Arc::new(CategoryServiceImpl::new(category_repo)),
        readiness: Readiness::new(vec![Arc::new(DatabaseCheck::new(pool))]),
    })
}

async fn mock_state(settings: &Settings) -> Result<MockState> {
    let pool = connect_database(settings, ServiceKind::Mock).await?;
    let interview_repo = Arc::new(PgInterviewRepository::new(pool.clone()));

    Ok(MockState {
        interviews: Arc::new(InterviewServiceImpl::new(interview_repo)),
        readiness: Readiness::new(vec![Arc::new(DatabaseCheck::new(pool))]),
    })
}

fn site_state(settings: &Settings) -> Result<SiteState> {
    let remote = &settings.services;
    let http = clients::build_http_client(remote).context("Failed to build HTTP client")?;

    let auth: Arc<dyn AuthGateway> = Arc::new(AuthClient::new(http.clone(), remote.auth_url.as_str()));
    let index = IndexService::new(
        Arc::new(DescClient::new(http.clone(), remote.desc_url.as_str())),
        auth.clone(),
        Arc::new(NotificationClient::new(http.clone(), remote.notification_url.as_str())),
        Arc::new(MockClient::new(http, remote.mock_url.as_str())),
        settings.interviews,
    );
    tracing::info!(
        auth = %remote.auth_url,
        desc = %remote.desc_url,
        mock = %remote.mock_url,
        notification = %remote.notification_url,
        "Remote services configured"
    );

    Ok(SiteState {
        index,
        profiles: ProfilesService::new(auth),
        readiness: Readiness::default(),
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
