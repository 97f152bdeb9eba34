//! Config API endpoint.
//!
//! Returns site configuration relevant to clients.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Application version.
    version: String,
    /// Header download button target.
    download_url: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        version: state.version.clone(),
        download_url: state.site.download_url().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_response_serialization() {
        let response = ConfigResponse {
            version: "1.0.0".to_owned(),
            download_url: "https://example.com/releases".to_owned(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["downloadUrl"], "https://example.com/releases");
    }
}
