use leptos::*;

use placemap_core::{
    entities::{id::Id, place::Place},
    filter::TitleFilter,
};

#[component]
pub fn PlaceList(
    places: Signal<Vec<Place>>,
    filter_text: Signal<String>,
    selected: RwSignal<Option<Id>>,
) -> impl IntoView {
    let visible_places = Memo::new(move |_| {
        let filter = TitleFilter::new(&filter_text.get());
        places.with(|places| {
            places
                .iter()
                .filter(|place| filter.matches(&place.name))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let select = move |id: Id| {
        // reselecting reopens a popup that has been closed
        if selected.with_untracked(|s| s.as_ref() == Some(&id)) {
            selected.set(None);
        }
        selected.set(Some(id));
    };

    view! {
      <ul class="place-list">
        <For
          each = move || visible_places.get()
          key = |place| place.id.clone()
          let:place
        >
          {
            let id = place.id.clone();
            let is_selected = {
              let id = id.clone();
              move || selected.with(|s| s.as_ref() == Some(&id))
            };
            view! {
              <li class:selected=is_selected on:click=move |_| select(id.clone())>
                <span class="place-name">{ place.name }</span>
                { place.address.map(|address| view! { <span class="place-address">{ address }</span> }) }
              </li>
            }
          }
        </For>
      </ul>
      { move || visible_places.with(Vec::is_empty).then(|| view! {
          <p class="no-places">"No places found"</p>
        })
      }
    }
}
