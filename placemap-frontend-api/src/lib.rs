use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use placemap_boundary::{VenuesErrorMeta, VenuesErrorResponse, WikiError};

mod foursquare;
mod wikipedia;

pub use self::{foursquare::*, wikipedia::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Venues request failed with {0}")]
    Venues(VenuesErrorMeta),

    #[error(transparent)]
    Wiki(#[from] WikiError),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        return Ok(response.json().await?);
    }
    let status = response.status();
    match response.json::<VenuesErrorResponse>().await {
        Ok(VenuesErrorResponse { meta }) => Err(Error::Venues(meta)),
        Err(_) => Err(Error::Fetch(format!(
            "Unexpected response status {status} ({})",
            response.status_text()
        ))),
    }
}

fn encode_query_value(value: &str) -> percent_encoding::PercentEncode<'_> {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC)
}
