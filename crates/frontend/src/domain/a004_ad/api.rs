use contracts::domain::a004_ad::aggregate::{Ad, AdDraft};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::encode_segment;
use crate::shared::http::{self, build_form_data, send_multipart, MultipartMethod};

pub async fn fetch_ads() -> Result<Vec<Ad>, ApiError> {
    http::get_data("/ads").await
}

/// Create (`id == None`, `POST /ads`) or replace (`PUT /ads/:id`) an ad.
/// Without a new `image` the server keeps the current one.
pub async fn save_ad(
    id: Option<&str>,
    draft: &AdDraft,
    image: Option<&web_sys::File>,
) -> Result<Option<String>, ApiError> {
    let form = build_form_data(&draft.form_fields(), image.map(|f| ("image", f)))?;
    match id {
        Some(id) => send_multipart(MultipartMethod::Put, &format!("/ads/{}", encode_segment(id)), form).await,
        None => send_multipart(MultipartMethod::Post, "/ads", form).await,
    }
}

pub async fn delete_ad(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/ads/{}", encode_segment(id))).await?;
    Ok(())
}
