use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ClientError};
use std::sync::Arc;

pub type DynProductMutation = Arc<dyn ProductMutation + Send + Sync>;

#[async_trait]
pub trait ProductMutation {
    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ClientError>;
}
