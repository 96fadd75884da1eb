//! Loads the Google Maps script exactly once.
//!
//! The global callbacks that the script invokes are turned into a
//! single promise that is awaited as a future.

use std::cell::RefCell;

use anyhow::{anyhow, Result};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlScriptElement, Window};

use crate::config;

thread_local! {
    static READY: RefCell<Option<Promise>> = const { RefCell::new(None) };
}

/// Resolves as soon as `window.google.maps` is available.
///
/// The script tag is only injected by the first call; later calls
/// wait for the same result.
pub async fn load_google_maps(cfg: &config::GoogleMaps) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No window available"))?;
    if is_google_maps_loaded(&window) {
        log::debug!("Google Maps is already loaded");
        return Ok(());
    }
    let ready = match READY.with_borrow(Clone::clone) {
        Some(ready) => ready,
        None => {
            let ready = inject_script(&window, cfg)?;
            READY.set(Some(ready.clone()));
            ready
        }
    };
    JsFuture::from(ready)
        .await
        .map(|_| log::info!("Google Maps is ready"))
        .map_err(|err| anyhow!("Unable to load Google Maps: {}", js_error_message(&err)))
}

fn inject_script(window: &Window, cfg: &config::GoogleMaps) -> Result<Promise> {
    let document = window
        .document()
        .ok_or_else(|| anyhow!("No document available"))?;

    let mut hooks = None;
    let ready = Promise::new(&mut |resolve, reject| {
        hooks = Some((resolve, reject));
    });
    let (resolve, reject): (Function, Function) =
        hooks.ok_or_else(|| anyhow!("Promise executor has not been called"))?;

    set_global(window, &cfg.callback, &resolve)?;
    set_global(window, &cfg.error_callback, &reject)?;

    if find_script(&document, &cfg.script_url).is_some() {
        log::warn!("Script tag of Google Maps already exists");
        return Ok(ready);
    }
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|err| anyhow!("Unable to create script tag: {err:?}"))?
        .unchecked_into();
    script.set_src(&cfg.script_url);
    script.set_async(true);
    script.set_defer(true);
    script.set_onerror(Some(&reject));
    insert_script(&document, &script)?;
    log::debug!("Injected script tag of Google Maps");
    Ok(ready)
}

/// Inserts `script` before the first script of the document
/// or appends it to the head.
fn insert_script(document: &Document, script: &HtmlScriptElement) -> Result<()> {
    let first_script = document.get_elements_by_tag_name("script").item(0);
    let result = match first_script.as_ref().and_then(|s| s.parent_node().map(|p| (s, p))) {
        Some((first_script, parent)) => {
            let first_script: &web_sys::Node = first_script;
            parent.insert_before(script, Some(first_script))
        }
        None => {
            let head = document
                .head()
                .ok_or_else(|| anyhow!("Document has no head"))?;
            head.append_child(script)
        }
    };
    result
        .map(|_| ())
        .map_err(|err| anyhow!("Unable to insert script tag: {err:?}"))
}

fn find_script(document: &Document, src: &str) -> Option<web_sys::Element> {
    let scripts = document.get_elements_by_tag_name("script");
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .find(|s| s.get_attribute("src").as_deref() == Some(src))
}

fn set_global(window: &Window, name: &str, value: &Function) -> Result<()> {
    Reflect::set(window, &JsValue::from_str(name), value)
        .map(|_| ())
        .map_err(|err| anyhow!("Unable to register global function '{name}': {err:?}"))
}

fn is_google_maps_loaded(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str("google"))
        .ok()
        .filter(|google| google.is_object())
        .and_then(|google| Reflect::get(&google, &JsValue::from_str("maps")).ok())
        .is_some_and(|maps| maps.is_object())
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(msg) = err.as_string() {
        return msg;
    }
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return err.message().into();
    }
    if let Some(event) = err.dyn_ref::<web_sys::Event>() {
        return format!("'{}' event", event.type_());
    }
    format!("{err:?}")
}
