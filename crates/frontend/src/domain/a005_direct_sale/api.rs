use contracts::domain::a005_direct_sale::aggregate::DirectSale;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::encode_segment;
use crate::shared::http;

pub async fn fetch_direct_sales() -> Result<Vec<DirectSale>, ApiError> {
    http::get_data("/direct-sales").await
}

pub async fn delete_direct_sale(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/direct-sales/{}", encode_segment(id))).await?;
    Ok(())
}
