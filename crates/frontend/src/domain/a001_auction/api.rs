use contracts::domain::a001_auction::aggregate::Auction;
use contracts::domain::common::Offer;
use serde_json::Value;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::encode_segment;
use crate::shared::http;
use crate::shared::list_utils::typed_records;

pub async fn fetch_auctions() -> Result<Vec<Auction>, ApiError> {
    http::get_data("/auctions").await
}

/// Undecodable entries are skipped rather than failing the whole row.
pub async fn fetch_offers(auction_id: &str) -> Result<Vec<Offer>, ApiError> {
    let data: Value = http::get_data(&format!("/auctions/{}/offers", encode_segment(auction_id))).await?;
    Ok(typed_records(data))
}

pub async fn delete_auction(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/auctions/{}", encode_segment(id))).await?;
    Ok(())
}
