//! Wire types for the analyze and roast endpoints
//!
//! Every response field is optional on the wire, so deserialization is
//! tolerant of anything missing (`#[serde(default)]` throughout).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed body of a successful `POST /analyze` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisResult {
    pub outfit_description: String,
    pub style: Option<String>,
    pub color_palette: Option<String>,
    pub person_description: Option<String>,
    pub suggestions: Vec<Suggestion>,
}

/// One recommended item with pricing and shop links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Suggestion {
    pub category: String,
    pub item: String,
    pub description: String,
    pub estimated_price_low: Option<f64>,
    pub estimated_price_high: Option<f64>,
    /// Shop key → URL. Keys are unique; map order is not meaningful.
    pub links: BTreeMap<String, String>,
}

/// Body of `POST /roast`, built from the last analysis. Absent analysis
/// fields are sent as empty strings rather than omitted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoastRequest {
    pub outfit_description: String,
    pub style: String,
    pub color_palette: String,
    pub suggestions: Vec<Suggestion>,
    pub api_key: String,
}

impl RoastRequest {
    pub fn from_analysis(analysis: &AnalysisResult, api_key: String) -> Self {
        RoastRequest {
            outfit_description: analysis.outfit_description.clone(),
            style: analysis.style.clone().unwrap_or_default(),
            color_palette: analysis.color_palette.clone().unwrap_or_default(),
            suggestions: analysis.suggestions.clone(),
            api_key,
        }
    }
}

/// Successful `POST /roast` response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoastResponse {
    pub roast: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_full_response() {
        let json = r#"{
            "outfit_description": "Relaxed weekend look",
            "style": "casual",
            "color_palette": "earth tones",
            "person_description": "person in a denim jacket",
            "suggestions": [{
                "category": "shoes",
                "item": "White leather sneakers",
                "description": "Clean base for the denim.",
                "estimated_price_low": 60,
                "estimated_price_high": 120,
                "links": {"amazon": "https://example.com/a", "zara": "https://example.com/z"}
            }]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.outfit_description, "Relaxed weekend look");
        assert_eq!(result.style.as_deref(), Some("casual"));
        assert_eq!(result.suggestions.len(), 1);
        let s = &result.suggestions[0];
        assert_eq!(s.estimated_price_low, Some(60.0));
        assert_eq!(s.links.len(), 2);
        assert_eq!(s.links["zara"], "https://example.com/z");
    }

    #[test]
    fn test_analysis_result_tolerates_missing_fields() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.outfit_description, "");
        assert!(result.style.is_none());
        assert!(result.person_description.is_none());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_suggestion_tolerates_null_prices() {
        let json = r#"{"item": "Wool scarf", "estimated_price_low": null}"#;
        let s: Suggestion = serde_json::from_str(json).unwrap();
        assert_eq!(s.item, "Wool scarf");
        assert!(s.estimated_price_low.is_none());
        assert!(s.estimated_price_high.is_none());
        assert!(s.links.is_empty());
    }

    #[test]
    fn test_roast_request_defaults_absent_fields() {
        let analysis = AnalysisResult {
            outfit_description: "Monochrome fit".to_string(),
            ..Default::default()
        };
        let request = RoastRequest::from_analysis(&analysis, String::new());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["outfit_description"], "Monochrome fit");
        assert_eq!(value["style"], "");
        assert_eq!(value["color_palette"], "");
        assert_eq!(value["suggestions"], serde_json::json!([]));
        assert_eq!(value["api_key"], "");
    }

    #[test]
    fn test_roast_request_carries_suggestions_and_key() {
        let analysis = AnalysisResult {
            outfit_description: "desc".to_string(),
            style: Some("streetwear".to_string()),
            suggestions: vec![Suggestion {
                item: "Cap".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let request = RoastRequest::from_analysis(&analysis, "sk-123".to_string());
        assert_eq!(request.style, "streetwear");
        assert_eq!(request.suggestions.len(), 1);
        assert_eq!(request.api_key, "sk-123");
    }

    #[test]
    fn test_roast_response_default() {
        let response: RoastResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.roast, "");
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": "bad key"}"#).unwrap();
        assert_eq!(body.error, "bad key");
    }
}
