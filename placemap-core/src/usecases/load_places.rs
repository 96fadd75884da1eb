use std::{collections::HashSet, fmt};

use placemap_entities::place::Place;

/// Keeps all places that could be converted.
///
/// Invalid entries are logged and skipped. If several places share
/// the same id only the first one is kept, so the marker indexes
/// stay stable.
pub fn collect_valid_places<I, E>(results: I) -> Vec<Place>
where
    I: IntoIterator<Item = Result<Place, E>>,
    E: fmt::Display,
{
    let mut ids = HashSet::new();
    let mut places = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        let place = match result {
            Ok(place) => place,
            Err(err) => {
                log::warn!("Skipping invalid place #{index}: {err}");
                continue;
            }
        };
        if !ids.insert(place.id.clone()) {
            log::warn!("Skipping duplicate place {}", place.id);
            continue;
        }
        places.push(place);
    }
    places
}

#[cfg(test)]
mod tests {
    use super::*;
    use placemap_entities::builders::*;

    fn place(id: &str, name: &str) -> Place {
        Place::build().id(id).name(name).finish()
    }

    #[test]
    fn skip_invalid_places() {
        let results = vec![
            Ok(place("a", "Taj Mahal")),
            Err("missing id"),
            Ok(place("b", "Agra Fort")),
        ];
        let places = collect_valid_places(results);
        assert_eq!(vec![place("a", "Taj Mahal"), place("b", "Agra Fort")], places);
    }

    #[test]
    fn keep_first_of_duplicate_ids() {
        let results: Vec<Result<_, String>> = vec![
            Ok(place("a", "Taj Mahal")),
            Ok(place("a", "Taj Mahal (duplicate)")),
            Ok(place("b", "Taj Mahal")),
        ];
        let places = collect_valid_places(results);
        assert_eq!(2, places.len());
        assert_eq!("Taj Mahal", places[0].name);
        assert_eq!("b", places[1].id.as_str());
    }

    #[test]
    fn collect_nothing() {
        assert!(collect_valid_places(Vec::<Result<Place, String>>::new()).is_empty());
    }
}
