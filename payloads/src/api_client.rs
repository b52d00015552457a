use crate::{requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Property settings, including the minimum stay for new bookings.
    pub async fn get_settings(
        &self,
    ) -> Result<responses::Settings, ClientError> {
        let response = self.empty_get("settings").await?;
        ok_body(response).await
    }

    pub async fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<(), ClientError> {
        let response = self.post("create_booking", details).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(address: &str) -> APIClient {
        APIClient {
            address: address.to_string(),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn test_booking_endpoints_are_under_api() {
        let client = client("http://localhost:8000");
        assert_eq!(
            client.format_url("settings"),
            "http://localhost:8000/api/settings"
        );
        assert_eq!(
            client.format_url("create_booking"),
            "http://localhost:8000/api/create_booking"
        );
    }

    #[test]
    fn test_same_origin_client_uses_relative_paths() {
        // An empty address is the fallback when no page origin is known.
        assert_eq!(client("").format_url("settings"), "/api/settings");
    }

    #[test]
    fn test_api_error_displays_response_text() {
        let error = ClientError::APIError(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Dates overlap an existing booking".to_string(),
        );
        assert_eq!(error.to_string(), "Dates overlap an existing booking");
    }
}
