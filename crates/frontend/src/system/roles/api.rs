use contracts::system::roles::Role;

use crate::shared::api_error::ApiError;
use crate::shared::http;

pub async fn fetch_roles() -> Result<Vec<Role>, ApiError> {
    http::get_data("/roles").await
}
