//! Catalog (desc) Service Client

use async_trait::async_trait;
use reqwest::Client;

use super::{fetch_required, join_url};
use crate::application::dto::CategoryDto;
use crate::application::gateways::CatalogGateway;
use crate::shared::error::AppError;

/// Client for the catalog's category endpoints
#[derive(Clone)]
pub struct DescClient {
    http: Client,
    base_url: String,
}

impl DescClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CatalogGateway for DescClient {
    async fn most_popular_categories(&self) -> Result<Vec<CategoryDto>, AppError> {
        let url = join_url(&self.base_url, "/categories/most_pop");
        fetch_required("desc", self.http.get(url)).await
    }
}
