use contracts::domain::a003_category::aggregate::Category;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::encode_segment;
use crate::shared::http;

pub async fn fetch_tree() -> Result<Vec<Category>, ApiError> {
    http::get_data("/categories/tree").await
}

/// `with_descendants` removes the whole subtree in one call.
pub async fn delete_category(id: &str, with_descendants: bool) -> Result<Option<String>, ApiError> {
    let path = if with_descendants {
        format!("/categories/{}/with-descendants", encode_segment(id))
    } else {
        format!("/categories/{}", encode_segment(id))
    };
    http::delete(&path).await
}
