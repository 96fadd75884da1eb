use std::time::Duration;

use leptos::{leptos_dom::helpers::TimeoutHandle, *};

/// Text input that publishes its value after the user stopped typing.
#[component]
pub fn FilterInput(debounce: Duration, on_change: Callback<String>) -> impl IntoView {
    let pending = store_value(None::<TimeoutHandle>);

    let cancel_pending = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        pending.set_value(None);
    };

    on_cleanup(cancel_pending);

    view! {
      <input
        type="search"
        class="filter"
        placeholder="Filter places"
        on:input = move |ev| {
          let value = event_target_value(&ev);
          cancel_pending();
          let publish = {
            let value = value.clone();
            move || on_change.call(value)
          };
          match set_timeout_with_handle(publish, debounce) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
              log::warn!("Unable to debounce filter input: {err:?}");
              on_change.call(value);
            }
          }
        }
      />
    }
}
