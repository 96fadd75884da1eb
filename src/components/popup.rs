use leptos::{html::Div, *};

use placemap_core::popup::PopupContent;

/// Renders the content of the shared info window.
pub fn popup_content_view(content: &PopupContent) -> HtmlElement<Div> {
    match content {
        PopupContent::Pending { title } => view! {
          <div class="popup">
            <strong>{ title.clone() }</strong>
          </div>
        },
        PopupContent::Links { title, links } => {
            let no_links = links.is_empty();
            let links = links
                .iter()
                .map(|link| {
                    view! {
                      <li>
                        <a href=link.url.clone() target="_blank" rel="noopener noreferrer">
                          { link.title.clone() }
                        </a>
                      </li>
                    }
                })
                .collect_view();
            view! {
              <div class="popup">
                <strong>{ title.clone() }</strong>
                <h4>"Relevant Wikipedia Links"</h4>
                <ul>{ links }</ul>
                { no_links.then(|| view! { <p>"No related articles found"</p> }) }
              </div>
            }
        }
        PopupContent::Error { title, message } => view! {
          <div class="popup">
            <strong>{ title.clone() }</strong>
            <p class="popup-error" style="color: red">{ message.clone() }</p>
          </div>
        },
    }
}
