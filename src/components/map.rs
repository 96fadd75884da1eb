use leptos::{html::Div, *};

use placemap_core::{
    entities::{id::Id, place::Place, wiki::WikiLink},
    popup::EnrichmentRequest,
    reconciler::{MarkerProps, MarkerReconciler},
};
use placemap_frontend_api::WikipediaApi;

use crate::{config, google_maps::GoogleMapWidget, script};

#[component]
pub fn PlaceMap(
    map_config: config::Map,
    google_maps: config::GoogleMaps,
    wikipedia: WikipediaApi,
    places: Signal<Vec<Place>>,
    filter_text: Signal<String>,
    selected: Signal<Option<Id>>,
) -> impl IntoView {
    let container = create_node_ref::<Div>();
    let reconciler = store_value(MarkerReconciler::<GoogleMapWidget>::new());
    let map_error = RwSignal::new(None::<String>);

    // -- actions -- //

    let fetch_wiki_links = Action::new(move |request: &EnrichmentRequest| {
        let EnrichmentRequest { id, anchor, title } = request.clone();
        let wikipedia = wikipedia.clone();
        async move {
            log::debug!("Search wiki links for marker {anchor} ({id})");
            let outcome = wikipedia
                .search(&title)
                .await
                .map(Vec::<WikiLink>::from)
                .map_err(|err| {
                    log::warn!("Unable to search wiki links for '{title}': {err}");
                    err.to_string()
                });
            reconciler.try_update_value(|r| r.complete_enrichment(id, outcome));
        }
    });

    let enrich = move |request: Option<EnrichmentRequest>| {
        if let Some(request) = request {
            fetch_wiki_links.dispatch(request);
        }
    };

    // -- callbacks -- //

    let on_marker_click = Callback::new(move |index: usize| {
        match reconciler.try_update_value(|r| r.marker_clicked(index)) {
            Some(Ok(request)) => enrich(request),
            Some(Err(err)) => log::warn!("Unable to open popup: {err}"),
            None => log::debug!("Map has been disposed"),
        }
    });

    let on_popup_closed = Callback::new(move |()| {
        reconciler.try_update_value(MarkerReconciler::popup_closed);
    });

    // -- effects -- //

    Effect::new(move |_| {
        let props = MarkerProps {
            places: places.get(),
            filter_text: filter_text.get(),
            selected: selected.get(),
        };
        enrich(reconciler.try_update_value(|r| r.sync(props)).flatten());
    });

    container.on_load(move |element| {
        let element: &web_sys::HtmlElement = &element;
        let element = element.clone();
        spawn_local(async move {
            if let Err(err) = script::load_google_maps(&google_maps).await {
                log::error!("{err:#}");
                map_error.set(Some(err.to_string()));
                return;
            }
            match GoogleMapWidget::new(&element, &map_config, on_marker_click, on_popup_closed) {
                Ok(widget) => {
                    enrich(reconciler.try_update_value(|r| r.attach_map(widget)).flatten());
                }
                Err(err) => {
                    log::error!("{err:#}");
                    map_error.set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
      <div class="map-container">
        <div class="map" node_ref=container></div>
        { move || map_error.get().map(|err| view! {
            <div class="map-error" title=err>
              "The map is currently unavailable. Please try again later."
            </div>
          })
        }
      </div>
    }
}
