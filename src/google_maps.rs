//! Bindings for the parts of the Google Maps JavaScript API that
//! are needed to render the markers and the shared info window.

use anyhow::{anyhow, Result};
use js_sys::{Function, Reflect};
use leptos::{Callable, Callback};
use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};

use placemap_core::{
    entities::{animation::Animation, geo::MapBbox},
    gateways::map::{MapWidget, MarkerOptions},
    popup::PopupContent,
};

use crate::{components::popup_content_view, config};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(element: &web_sys::HtmlElement, options: &JsValue) -> Result<GoogleMap, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &GoogleMap, bounds: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    pub type GoogleMarker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Marker")]
    fn new(options: &JsValue) -> GoogleMarker;

    #[wasm_bindgen(method, js_name = setMap)]
    fn set_map(this: &GoogleMarker, map: &GoogleMap);

    #[wasm_bindgen(method, js_name = setVisible)]
    fn set_visible(this: &GoogleMarker, visible: bool);

    #[wasm_bindgen(method, js_name = setAnimation)]
    fn set_animation(this: &GoogleMarker, animation: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &GoogleMarker, event: &str, handler: &Function) -> JsValue;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = InfoWindow)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "InfoWindow")]
    fn new() -> InfoWindow;

    #[wasm_bindgen(method, js_name = setContent)]
    fn set_content(this: &InfoWindow, content: &web_sys::Node);

    #[wasm_bindgen(method)]
    fn open(this: &InfoWindow, map: &GoogleMap, anchor: &GoogleMarker);

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &InfoWindow, event: &str, handler: &Function) -> JsValue;
}

#[derive(Serialize)]
struct LatLngLiteral {
    lat: f64,
    lng: f64,
}

#[derive(Serialize)]
struct MapOptions {
    center: LatLngLiteral,
    zoom: u8,
}

#[derive(Serialize)]
struct LatLngBoundsLiteral {
    north: f64,
    east: f64,
    south: f64,
    west: f64,
}

#[derive(Serialize)]
struct GoogleMarkerOptions<'a> {
    position: LatLngLiteral,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// Renders markers and the shared info window on a Google map.
pub struct GoogleMapWidget {
    map: GoogleMap,
    info_window: InfoWindow,
    on_marker_click: Callback<usize>,
    // Listeners must stay alive as long as the map exists.
    click_listeners: Vec<Closure<dyn FnMut()>>,
    _close_listener: Closure<dyn FnMut()>,
}

impl GoogleMapWidget {
    pub fn new(
        element: &web_sys::HtmlElement,
        cfg: &config::Map,
        on_marker_click: Callback<usize>,
        on_popup_closed: Callback<()>,
    ) -> Result<Self> {
        let options = MapOptions {
            center: LatLngLiteral {
                lat: cfg.center.lat(),
                lng: cfg.center.lng(),
            },
            zoom: cfg.zoom,
        };
        let options = serde_wasm_bindgen::to_value(&options)
            .map_err(|err| anyhow!("Invalid map options: {err}"))?;
        let map = GoogleMap::new(element, &options)
            .map_err(|err| anyhow!("Unable to create map: {err:?}"))?;
        let info_window = InfoWindow::new();
        let close_listener = Closure::<dyn FnMut()>::new(move || {
            on_popup_closed.call(());
        });
        info_window.add_listener("closeclick", close_listener.as_ref().unchecked_ref());
        Ok(Self {
            map,
            info_window,
            on_marker_click,
            click_listeners: Vec::new(),
            _close_listener: close_listener,
        })
    }
}

fn animation_value(animation: Animation) -> JsValue {
    if animation.is_none() {
        return JsValue::NULL;
    }
    let name = animation.to_string();
    // google.maps.Animation.BOUNCE, google.maps.Animation.DROP
    let value = ["google", "maps", "Animation", name.as_str()]
        .into_iter()
        .try_fold(JsValue::from(js_sys::global()), |parent, key| {
            Reflect::get(&parent, &JsValue::from_str(key))
                .ok()
                .filter(|value| !value.is_undefined())
        })
        .unwrap_or_else(|| {
            log::warn!("Unsupported marker animation {animation}");
            JsValue::NULL
        });
    value
}

impl MapWidget for GoogleMapWidget {
    type Marker = GoogleMarker;

    fn create_marker(&mut self, index: usize, options: &MarkerOptions) -> GoogleMarker {
        let js_options = GoogleMarkerOptions {
            position: LatLngLiteral {
                lat: options.pos.lat(),
                lng: options.pos.lng(),
            },
            title: &options.title,
            label: options.label.map(String::from),
        };
        let js_options = serde_wasm_bindgen::to_value(&js_options).unwrap_or_else(|err| {
            log::warn!("Invalid options of marker {index}: {err}");
            JsValue::UNDEFINED
        });
        let marker = GoogleMarker::new(&js_options);
        marker.set_animation(&animation_value(options.animation));
        marker.set_map(&self.map);
        let on_marker_click = self.on_marker_click;
        let listener = Closure::<dyn FnMut()>::new(move || {
            on_marker_click.call(index);
        });
        marker.add_listener("click", listener.as_ref().unchecked_ref());
        self.click_listeners.push(listener);
        marker
    }

    fn set_marker_visible(&mut self, marker: &GoogleMarker, visible: bool) {
        marker.set_visible(visible);
    }

    fn set_marker_animation(&mut self, marker: &GoogleMarker, animation: Animation) {
        marker.set_animation(&animation_value(animation));
    }

    fn fit_bounds(&mut self, bbox: &MapBbox) {
        let bounds = LatLngBoundsLiteral {
            north: bbox.northeast().lat(),
            east: bbox.northeast().lng(),
            south: bbox.southwest().lat(),
            west: bbox.southwest().lng(),
        };
        match serde_wasm_bindgen::to_value(&bounds) {
            Ok(bounds) => self.map.fit_bounds(&bounds),
            Err(err) => log::warn!("Unable to fit map bounds: {err}"),
        }
    }

    fn open_popup(&mut self, anchor: &GoogleMarker, content: &PopupContent) {
        self.set_popup_content(content);
        self.info_window.open(&self.map, anchor);
    }

    fn set_popup_content(&mut self, content: &PopupContent) {
        let content = popup_content_view(content);
        let content: &web_sys::Node = &content;
        self.info_window.set_content(content);
    }
}
