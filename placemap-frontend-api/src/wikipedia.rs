use gloo_net::http::Request;

use placemap_boundary::{OpenSearchResponse, WikiResponse};

use crate::{encode_query_value, Error, Result};

pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Wikipedia OpenSearch API
#[derive(Debug, Clone)]
pub struct WikipediaApi {
    url: String,
}

impl Default for WikipediaApi {
    fn default() -> Self {
        Self::new(DEFAULT_WIKIPEDIA_API_URL.to_owned())
    }
}

impl WikipediaApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    #[must_use]
    pub fn search_url(&self, text: &str) -> String {
        format!(
            "{}?origin=*&action=opensearch&format=json&search={}",
            self.url,
            encode_query_value(text)
        )
    }

    /// Searches articles that are related to `text`.
    ///
    /// An error payload of the API is returned as [`Error::Wiki`].
    pub async fn search(&self, text: &str) -> Result<OpenSearchResponse> {
        let url = self.search_url(text);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(Error::Fetch(format!(
                "Unexpected response status {}",
                response.status()
            )));
        }
        match response.json::<WikiResponse>().await? {
            WikiResponse::Results(results) => Ok(results),
            WikiResponse::Error { error } => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_search_url() {
        assert_eq!(
            "https://en.wikipedia.org/w/api.php?origin=*&action=opensearch&format=json\
             &search=Tomb%20of%20I%27tim%C4%81d%2Dud%2DDaulah",
            WikipediaApi::default().search_url("Tomb of I'timād-ud-Daulah")
        );
    }
}
