//! Thin gloo-net wrapper for the admin API.
//!
//! Every response body is decoded through [`ApiEnvelope`]; non-2xx statuses
//! become [`ApiError`] carrying the server `message` when it sent one.

use contracts::shared::envelope::{ApiEnvelope, ApiErrorBody};
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::FormData;

use super::api_error::ApiError;
use super::api_utils::api_url;
use crate::system::auth::storage;

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response body carrying a payload.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_status(status, ApiErrorBody::message_from(body)));
    }
    Ok(ApiEnvelope::parse(body)?)
}

/// Decode the response of a mutation. An empty body is accepted; otherwise
/// the body must be an envelope and its `message` is returned.
pub fn decode_ack(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::from_status(status, ApiErrorBody::message_from(body)));
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    let envelope = ApiEnvelope::<Value>::parse(body)?;
    Ok(envelope.message)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

/// `GET path`, returning the envelope payload.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = with_auth(gloo_net::http::Request::get(&url)).send().await?;
    let (status, body) = read(response).await?;
    decode_body::<T>(status, &body).map(ApiEnvelope::into_data)
}

/// `PATCH path` with a JSON body.
pub async fn patch_json<B: Serialize>(path: &str, payload: &B) -> Result<Option<String>, ApiError> {
    let url = api_url(path);
    log::debug!("PATCH {}", url);
    let response = with_auth(gloo_net::http::Request::patch(&url))
        .json(payload)?
        .send()
        .await?;
    let (status, body) = read(response).await?;
    decode_ack(status, &body)
}

/// `DELETE path`.
pub async fn delete(path: &str) -> Result<Option<String>, ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    let response = with_auth(gloo_net::http::Request::delete(&url)).send().await?;
    let (status, body) = read(response).await?;
    decode_ack(status, &body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultipartMethod {
    Post,
    Put,
    Patch,
}

/// Build a multipart body from text fields and an optional file part.
pub fn build_form_data(
    fields: &[(&str, String)],
    file: Option<(&str, &web_sys::File)>,
) -> Result<FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Validation(format!("{:?}", e));
    let form = FormData::new().map_err(js_err)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    if let Some((name, file)) = file {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}

/// Send a multipart form; the browser sets the boundary header.
pub async fn send_multipart(
    method: MultipartMethod,
    path: &str,
    form: FormData,
) -> Result<Option<String>, ApiError> {
    let url = api_url(path);
    log::debug!("{:?} (multipart) {}", method, url);
    let builder = match method {
        MultipartMethod::Post => gloo_net::http::Request::post(&url),
        MultipartMethod::Put => gloo_net::http::Request::put(&url),
        MultipartMethod::Patch => gloo_net::http::Request::patch(&url),
    };
    let response = with_auth(builder).body(form)?.send().await?;
    let (status, body) = read(response).await?;
    decode_ack(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_ok() {
        let rows: Vec<Value> = decode_body::<Vec<Value>>(200, r#"{"data":[{"_id":"1"}],"total":1}"#)
            .unwrap()
            .into_data();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_decode_body_rejects_bare_array() {
        let err = decode_body::<Vec<Value>>(200, r#"[{"_id":"1"}]"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_decode_body_error_status() {
        let err = decode_body::<Vec<Value>>(403, r#"{"message":"Accès refusé"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 403,
                message: Some("Accès refusé".to_string())
            }
        );
        assert_eq!(decode_body::<Value>(404, "").unwrap_err(), ApiError::NotFound);
    }

    #[test]
    fn test_decode_ack() {
        assert_eq!(decode_ack(204, ""), Ok(None));
        assert_eq!(
            decode_ack(200, r#"{"data":null,"message":"Supprimé"}"#),
            Ok(Some("Supprimé".to_string()))
        );
        assert!(matches!(decode_ack(200, r#"{"ok":true}"#), Err(ApiError::Parse(_))));
        assert!(matches!(
            decode_ack(500, "oops"),
            Err(ApiError::Http { status: 500, message: None })
        ));
    }
}
