use crate::model::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: i32,
    pub title: String,
}

impl From<&Product> for DeleteRequest {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id,
            title: product.display_title().to_string(),
        }
    }
}
