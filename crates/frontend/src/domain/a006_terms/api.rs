use contracts::domain::a006_terms::aggregate::{TermsDocument, TermsDraft};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::encode_segment;
use crate::shared::http::{self, build_form_data, send_multipart, MultipartMethod};

pub async fn fetch_terms() -> Result<Vec<TermsDocument>, ApiError> {
    http::get_data("/terms").await
}

/// `POST /terms` for a new document, `PATCH /terms/:id` otherwise.
pub async fn save_terms(
    id: Option<&str>,
    draft: &TermsDraft,
    file: Option<&web_sys::File>,
) -> Result<Option<String>, ApiError> {
    let form = build_form_data(&draft.form_fields(), file.map(|f| ("file", f)))?;
    match id {
        Some(id) => send_multipart(MultipartMethod::Patch, &format!("/terms/{}", encode_segment(id)), form).await,
        None => send_multipart(MultipartMethod::Post, "/terms", form).await,
    }
}

pub async fn delete_terms(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/terms/{}", encode_segment(id))).await?;
    Ok(())
}
