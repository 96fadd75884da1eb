use super::*;
use placemap_entities as e;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VenueConversionError {
    #[error("Missing venue id")]
    MissingId,
    #[error(transparent)]
    Position(#[from] e::geo::CoordRangeError),
}

impl TryFrom<Venue> for e::place::Place {
    type Error = VenueConversionError;

    fn try_from(from: Venue) -> Result<Self, Self::Error> {
        let Venue { id, name, location } = from;
        let VenueLocation {
            lat,
            lng,
            address,
            formatted_address,
        } = location;
        let id = e::id::Id::from(id);
        if !id.is_valid() {
            return Err(VenueConversionError::MissingId);
        }
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng)?;
        let address = address.or_else(|| {
            (!formatted_address.is_empty()).then(|| formatted_address.join(", "))
        });
        Ok(Self {
            id,
            name,
            pos,
            address,
        })
    }
}

impl From<OpenSearchResponse> for Vec<e::wiki::WikiLink> {
    fn from(from: OpenSearchResponse) -> Self {
        let OpenSearchResponse(_query, titles, _descriptions, urls) = from;
        titles
            .into_iter()
            .enumerate()
            .filter(|(_, title)| !title.trim().is_empty())
            .map(|(i, title)| match urls.get(i).filter(|url| !url.is_empty()) {
                Some(url) => e::wiki::WikiLink {
                    url: url.clone(),
                    title,
                },
                None => e::wiki::WikiLink::from_title(title),
            })
            .collect()
    }
}
