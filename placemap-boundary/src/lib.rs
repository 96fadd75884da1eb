use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::conv::*;

// -- Foursquare venues API -- //

/// Envelope of a venues search (`/venues/search`)
/// or venues explore (`/venues/explore`) response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct VenuesResponse {
    pub response: VenuesPayload,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct VenuesPayload {
    /// Filled by the search endpoint.
    #[serde(default)]
    pub venues: Vec<Venue>,
    /// Filled by the explore endpoint.
    #[serde(default)]
    pub groups: Vec<VenueGroup>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct VenueGroup {
    #[serde(default)]
    pub items: Vec<VenueItem>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
#[serde(untagged)]
pub enum VenueItem {
    Recommended { venue: Venue },
    Venue(Venue),
}

impl From<VenueItem> for Venue {
    fn from(from: VenueItem) -> Self {
        match from {
            VenueItem::Recommended { venue } | VenueItem::Venue(venue) => venue,
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct Venue {
    pub id       : String,
    pub name     : String,
    pub location : VenueLocation,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct VenueLocation {
    pub lat               : f64,
    pub lng               : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address           : Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formatted_address : Vec<String>,
}

impl VenuesResponse {
    /// All venues of the response in their original order,
    /// regardless of the endpoint that produced it.
    #[must_use]
    pub fn into_venues(self) -> Vec<Venue> {
        let VenuesPayload { venues, groups } = self.response;
        venues
            .into_iter()
            .chain(
                groups
                    .into_iter()
                    .flat_map(|group| group.items.into_iter().map(Venue::from)),
            )
            .collect()
    }
}

/// Error body of the Foursquare API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct VenuesErrorResponse {
    pub meta: VenuesErrorMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuesErrorMeta {
    pub code: u16,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_detail: Option<String>,
}

impl fmt::Display for VenuesErrorMeta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = self
            .error_detail
            .as_deref()
            .or(self.error_type.as_deref())
            .unwrap_or("unknown error");
        write!(f, "{}: {msg}", self.code)
    }
}

impl std::error::Error for VenuesErrorMeta {}

// -- Wikipedia OpenSearch API -- //

/// `[query, [titles], [descriptions], [urls]]`
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct OpenSearchResponse(
    pub String,
    pub Vec<String>,
    #[serde(default)] pub Vec<String>,
    #[serde(default)] pub Vec<String>,
);

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
#[serde(untagged)]
pub enum WikiResponse {
    Error { error: WikiError },
    Results(OpenSearchResponse),
}

/// Application-level error reported by the wiki API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{info}")]
pub struct WikiError {
    pub code: WikiErrorCode,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WikiErrorCode {
    Number(i64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_search_venues() {
        let json = r#"{
          "meta": { "code": 200 },
          "response": {
            "venues": [
              {
                "id": "4b0588f1f964a520b8d922e3",
                "name": "Taj Mahal",
                "location": {
                  "address": "Dharmapuri, Tajganj",
                  "lat": 27.17510,
                  "lng": 78.04214,
                  "formattedAddress": ["Dharmapuri, Tajganj", "Agra 282001"]
                }
              },
              {
                "id": "4c2b0b4a9eb19c7424e1a9d0",
                "name": "Agra Fort",
                "location": { "lat": 27.17951, "lng": 78.02110 }
              }
            ]
          }
        }"#;
        let res: VenuesResponse = serde_json::from_str(json).unwrap();
        let venues = res.into_venues();
        assert_eq!(2, venues.len());
        assert_eq!("Taj Mahal", venues[0].name);
        assert_eq!(Some("Dharmapuri, Tajganj"), venues[0].location.address.as_deref());
        assert_eq!(2, venues[0].location.formatted_address.len());
        assert_eq!("Agra Fort", venues[1].name);
        assert!(venues[1].location.address.is_none());
    }

    #[test]
    fn deserialize_explore_groups() {
        let json = r#"{
          "response": {
            "groups": [
              {
                "type": "Recommended Places",
                "items": [
                  { "venue": { "id": "a", "name": "Itmad-ud-Daulah", "location": { "lat": 27.19, "lng": 78.03 } } },
                  { "venue": { "id": "b", "name": "Mehtab Bagh", "location": { "lat": 27.18, "lng": 78.04 } } }
                ]
              },
              { "items": [ { "id": "c", "name": "Jama Masjid", "location": { "lat": 27.18, "lng": 78.01 } } ] }
            ]
          }
        }"#;
        let res: VenuesResponse = serde_json::from_str(json).unwrap();
        let names: Vec<_> = res.into_venues().into_iter().map(|v| v.name).collect();
        assert_eq!(vec!["Itmad-ud-Daulah", "Mehtab Bagh", "Jama Masjid"], names);
    }

    #[test]
    fn deserialize_empty_venues() {
        let res: VenuesResponse = serde_json::from_str(r#"{"response":{"venues":[]}}"#).unwrap();
        assert!(res.into_venues().is_empty());
        let res: VenuesResponse = serde_json::from_str(r#"{"response":{}}"#).unwrap();
        assert!(res.into_venues().is_empty());
    }

    #[test]
    fn display_venues_error() {
        let json = r#"{"meta":{"code":400,"errorType":"invalid_auth","errorDetail":"Missing access credentials."}}"#;
        let res: VenuesErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!("400: Missing access credentials.", res.meta.to_string());
        let json = r#"{"meta":{"code":500}}"#;
        let res: VenuesErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!("500: unknown error", res.meta.to_string());
    }

    #[test]
    fn deserialize_open_search_results() {
        let json = r#"["Agra",["Agra","Agra Fort"],["",""],["https://en.wikipedia.org/wiki/Agra","https://en.wikipedia.org/wiki/Agra_Fort"]]"#;
        let res: WikiResponse = serde_json::from_str(json).unwrap();
        let WikiResponse::Results(OpenSearchResponse(query, titles, _, urls)) = res else {
            panic!("unexpected error response");
        };
        assert_eq!("Agra", query);
        assert_eq!(vec!["Agra", "Agra Fort"], titles);
        assert_eq!(2, urls.len());
    }

    #[test]
    fn deserialize_open_search_results_without_descriptions() {
        let json = r#"["Agra",["Agra"]]"#;
        let res: WikiResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(res, WikiResponse::Results(_)));
    }

    #[test]
    fn deserialize_wiki_error() {
        let json = r#"{"error":{"code":1,"info":"no results"}}"#;
        let res: WikiResponse = serde_json::from_str(json).unwrap();
        let WikiResponse::Error { error } = res else {
            panic!("expected error response");
        };
        assert_eq!(WikiErrorCode::Number(1), error.code);
        assert_eq!("no results", error.to_string());

        let json = r#"{"error":{"code":"nosearch","info":"The \"search\" parameter must be set.","*":"See the docs"}}"#;
        let res: WikiResponse = serde_json::from_str(json).unwrap();
        let WikiResponse::Error { error } = res else {
            panic!("expected error response");
        };
        assert_eq!(WikiErrorCode::Text("nosearch".into()), error.code);
    }
}
