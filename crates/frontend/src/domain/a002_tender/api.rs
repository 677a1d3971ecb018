use contracts::domain::a002_tender::aggregate::Tender;
use contracts::domain::common::Offer;
use serde_json::Value;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::encode_segment;
use crate::shared::http;
use crate::shared::list_utils::typed_records;

pub async fn fetch_tenders() -> Result<Vec<Tender>, ApiError> {
    http::get_data("/tenders").await
}

/// Bids share the offer shape; undecodable entries are skipped.
pub async fn fetch_bids(tender_id: &str) -> Result<Vec<Offer>, ApiError> {
    let data: Value = http::get_data(&format!("/tenders/{}/bids", encode_segment(tender_id))).await?;
    Ok(typed_records(data))
}

pub async fn delete_tender(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/tenders/{}", encode_segment(id))).await?;
    Ok(())
}
