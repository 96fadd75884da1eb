use anyhow::Result;
use leptos::*;

use placemap_core::{
    entities::{id::Id, place::Place},
    usecases::collect_valid_places,
};
use placemap_frontend_api::{FoursquareApi, WikipediaApi};

mod components;
mod config;
mod google_maps;
mod script;

use components::*;

pub use self::config::Config;

/// Reads the runtime configuration from the host page.
pub fn load_config() -> Result<Config> {
    let toml = document()
        .get_element_by_id(config::CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_else(|| {
            log::warn!("No configuration found (#{})", config::CONFIG_ELEMENT_ID);
            String::new()
        });
    Config::try_load_from_toml_str(&toml)
}

#[component]
#[must_use]
pub fn App(config: Config) -> impl IntoView {
    let Config {
        map,
        google_maps,
        foursquare,
        wikipedia,
        filter,
    } = config;

    // -- signals -- //

    let places = RwSignal::new(Vec::<Place>::new());
    let filter_text = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<Id>);

    // -- init API -- //

    let foursquare_api = FoursquareApi::new(foursquare.api_url, foursquare.credentials);
    let venue_query = foursquare.query;
    let wikipedia_api = WikipediaApi::new(wikipedia.api_url);

    // -- actions -- //

    let fetch_places = Action::new(move |()| {
        let api = foursquare_api.clone();
        let query = venue_query.clone();
        async move {
            match api.search_venues(&query).await {
                Ok(venues) => {
                    let fetched = collect_valid_places(venues.into_iter().map(Place::try_from));
                    log::info!("Fetched {} places", fetched.len());
                    places.set(fetched);
                }
                Err(err) => {
                    log::error!("Unable to fetch places: {err}");
                }
            }
        }
    });

    // -- callbacks -- //

    let on_filter_changed = Callback::new(move |text: String| {
        log::debug!("Filter text changed: '{text}'");
        filter_text.set(text);
    });

    fetch_places.dispatch(());

    view! {
      <div class="placemap">
        <aside class="sidebar">
          <FilterInput debounce=filter.debounce on_change=on_filter_changed />
          <PlaceList
            places = places.into()
            filter_text = filter_text.into()
            selected
          />
        </aside>
        <main>
          <PlaceMap
            map_config = map
            google_maps
            wikipedia = wikipedia_api
            places = places.into()
            filter_text = filter_text.into()
            selected = selected.into()
          />
        </main>
      </div>
    }
}

#[component]
#[must_use]
pub fn ConfigError(error: String) -> impl IntoView {
    view! {
      <div class="config-error">
        <h1>"Invalid configuration"</h1>
        <pre>{ error }</pre>
      </div>
    }
}
