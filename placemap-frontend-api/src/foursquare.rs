use std::fmt::Write as _;

use gloo_net::http::Request;

use placemap_boundary::{Venue, VenuesResponse};

use crate::{encode_query_value, into_json, Result};

/// Credentials of a registered Foursquare app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoursquareCredentials {
    pub client_id: String,
    pub client_secret: String,
    /// API version date, e.g. `20180323`.
    pub version: String,
}

/// Where and what to search for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueQuery {
    /// Name of a place, e.g. `Agra, India`.
    pub near: Option<String>,
    /// `lat,lng`, used if `near` is missing.
    pub ll: Option<String>,
    pub query: Option<String>,
    pub limit: Option<u32>,
}

/// Foursquare venues API
#[derive(Debug, Clone)]
pub struct FoursquareApi {
    url: String,
    credentials: FoursquareCredentials,
}

impl FoursquareApi {
    #[must_use]
    pub const fn new(url: String, credentials: FoursquareCredentials) -> Self {
        Self { url, credentials }
    }

    #[must_use]
    pub fn search_url(&self, query: &VenueQuery) -> String {
        let FoursquareCredentials {
            client_id,
            client_secret,
            version,
        } = &self.credentials;
        let mut url = format!(
            "{}?client_id={}&client_secret={}&v={}",
            self.url,
            encode_query_value(client_id),
            encode_query_value(client_secret),
            encode_query_value(version)
        );
        let VenueQuery {
            near,
            ll,
            query,
            limit,
        } = query;
        if let Some(near) = near {
            let _ = write!(url, "&near={}", encode_query_value(near));
        } else if let Some(ll) = ll {
            let _ = write!(url, "&ll={}", encode_query_value(ll));
        }
        if let Some(query) = query {
            let _ = write!(url, "&query={}", encode_query_value(query));
        }
        if let Some(limit) = limit {
            let _ = write!(url, "&limit={limit}");
        }
        url
    }

    /// Searches venues, flattening both the `venues`
    /// and the `groups` response shape.
    pub async fn search_venues(&self, query: &VenueQuery) -> Result<Vec<Venue>> {
        let url = self.search_url(query);
        log::debug!("Searching venues near {:?}", query.near.as_ref().or(query.ll.as_ref()));
        let response = Request::get(&url).send().await?;
        let venues: VenuesResponse = into_json(response).await?;
        Ok(venues.into_venues())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> FoursquareApi {
        FoursquareApi::new(
            "https://api.foursquare.com/v2/venues/search".into(),
            FoursquareCredentials {
                client_id: "ID".into(),
                client_secret: "S/ECRET".into(),
                version: "20180323".into(),
            },
        )
    }

    #[test]
    fn build_search_url() {
        let query = VenueQuery {
            near: Some("Agra, India".into()),
            ll: Some("27.17,78.04".into()),
            query: Some("tourist attraction".into()),
            limit: Some(10),
        };
        assert_eq!(
            "https://api.foursquare.com/v2/venues/search\
             ?client_id=ID&client_secret=S%2FECRET&v=20180323\
             &near=Agra%2C%20India&query=tourist%20attraction&limit=10",
            api().search_url(&query)
        );
    }

    #[test]
    fn build_search_url_with_coordinates() {
        let query = VenueQuery {
            ll: Some("27.17,78.04".into()),
            ..Default::default()
        };
        assert_eq!(
            "https://api.foursquare.com/v2/venues/search\
             ?client_id=ID&client_secret=S%2FECRET&v=20180323&ll=27%2E17%2C78%2E04",
            api().search_url(&query)
        );
    }
}
