//! Navigation API endpoint.
//!
//! Returns the navigation table for the documentation site.

use axum::Json;
use apd_nav::NavSection;
use serde::Serialize;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation sections in sidebar order.
    sections: &'static [NavSection],
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation() -> Json<NavigationResponse> {
    Json(NavigationResponse {
        sections: apd_nav::NAV,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_response_serialization() {
        let response = NavigationResponse {
            sections: apd_nav::NAV,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["sections"][0]["title"], "Introduction");
        assert_eq!(
            json["sections"][0]["items"][0]["url"],
            "/introduction/home"
        );
        // Icons are sparse: present where set, omitted elsewhere
        assert_eq!(json["sections"][0]["items"][0]["icon"], "book");
        assert!(json["sections"][0]["items"][1].get("icon").is_none());
    }

    #[test]
    fn test_navigation_response_section_count() {
        let json = serde_json::to_value(NavigationResponse {
            sections: apd_nav::NAV,
        })
        .unwrap();

        assert_eq!(json["sections"].as_array().unwrap().len(), 3);
    }
}
