use contracts::enums::user_kind::UserKind;
use contracts::system::users::{AdminUser, FlagUpdateDto, UserFlag};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::encode_segment;
use crate::shared::http;

/// Users of one kind (`GET /users/{clients|professionals|resellers}`)
pub async fn fetch_users(kind: UserKind) -> Result<Vec<AdminUser>, ApiError> {
    http::get_data(&format!("/users/{}", kind.endpoint())).await
}

/// Write one flag (`PATCH /users/:id/{flag}`)
pub async fn set_flag(id: &str, flag: UserFlag, value: bool) -> Result<Option<String>, ApiError> {
    http::patch_json(
        &format!("/users/{}/{}", encode_segment(id), flag.path_segment()),
        &FlagUpdateDto { value },
    )
    .await
}

pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/users/{}", encode_segment(id))).await?;
    Ok(())
}
