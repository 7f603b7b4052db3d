use crate::model::Product;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ClientError};
use std::sync::Arc;

pub type DynProductDataSource = Arc<dyn ProductDataSource + Send + Sync>;

#[async_trait]
pub trait ProductDataSource {
    async fn fetch_products(&self) -> Result<ApiResponse<Vec<Product>>, ClientError>;
}
