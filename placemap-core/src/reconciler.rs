use placemap_entities::{animation::Animation, geo::MapBbox, id::Id, place::Place};

use crate::{
    filter::{is_filter_active, TitleFilter},
    gateways::map::{MapWidget, MarkerOptions},
    marker::Marker,
    popup::{EnrichmentId, EnrichmentOutcome, EnrichmentRequest, Popup, PopupContent},
    Error, Result,
};


/// Inputs of the reconciler that change over time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerProps {
    pub places: Vec<Place>,
    pub filter_text: String,
    pub selected: Option<Id>,
}

/// Keeps the markers of a [`MapWidget`] consistent with
/// the places, the filter text and the selection.
///
/// Markers are created exactly once and never removed,
/// i.e. `markers()[i]` always belongs to `places[i]`.
pub struct MarkerReconciler<W: MapWidget> {
    widget: Option<W>,
    markers: Vec<Marker<W::Marker>>,
    popup: Popup,
    props: MarkerProps,
    initialized: bool,
    next_enrichment: EnrichmentId,
}

impl<W: MapWidget> Default for MarkerReconciler<W> {
    fn default() -> Self {
        Self {
            widget: None,
            markers: Vec::new(),
            popup: Popup::default(),
            props: MarkerProps::default(),
            initialized: false,
            next_enrichment: EnrichmentId::first(),
        }
    }
}

impl<W: MapWidget> MarkerReconciler<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markers(&self) -> &[Marker<W::Marker>] {
        &self.markers
    }

    pub const fn popup(&self) -> &Popup {
        &self.popup
    }

    pub const fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    pub const fn is_map_ready(&self) -> bool {
        self.widget.is_some()
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The map widget has finished loading.
    ///
    /// Creates the markers if the places have already arrived.
    pub fn attach_map(&mut self, widget: W) -> Option<EnrichmentRequest> {
        if self.widget.is_some() {
            log::warn!("Map widget is already attached");
            return None;
        }
        log::debug!("Map widget attached");
        self.widget = Some(widget);
        self.try_initialize()
    }

    /// Reconciles the markers with new props.
    ///
    /// Only the props that changed since the previous pass are applied.
    pub fn sync(&mut self, props: MarkerProps) -> Option<EnrichmentRequest> {
        let previous = std::mem::replace(&mut self.props, props);
        let mut request = None;
        if self.props.filter_text != previous.filter_text {
            let filter_text = self.props.filter_text.clone();
            self.apply_filter(&filter_text);
        }
        if self.props.selected != previous.selected {
            let selected = self.props.selected.clone();
            request = self.apply_selection(selected.as_ref());
        }
        if self.props.places != previous.places {
            log::debug!("Received {} places", self.props.places.len());
        }
        self.try_initialize().or(request)
    }

    fn try_initialize(&mut self) -> Option<EnrichmentRequest> {
        if self.initialized
            || self.widget.is_none()
            || self.props.places.is_empty()
            || is_filter_active(&self.props.filter_text)
        {
            return None;
        }
        let places = self.props.places.clone();
        match self.initialize(&places) {
            Ok(count) => log::info!("Created {count} markers"),
            Err(err) => {
                log::warn!("Unable to create markers: {err}");
                return None;
            }
        }
        let selected = self.props.selected.clone();
        selected.and_then(|id| self.apply_selection(Some(&id)))
    }

    /// Creates one marker per place and fits the map to all of them.
    pub fn initialize(&mut self, places: &[Place]) -> Result<usize> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }
        let Some(widget) = self.widget.as_mut() else {
            return Err(Error::MapNotReady);
        };
        debug_assert!(self.markers.is_empty());
        self.markers.reserve(places.len());
        for (index, place) in places.iter().enumerate() {
            let options = MarkerOptions {
                place_id: place.id.clone(),
                title: place.name.clone(),
                label: place.label(),
                pos: place.pos,
                animation: Animation::Drop,
            };
            let handle = widget.create_marker(index, &options);
            self.markers.push(Marker::new(options, handle));
        }
        if let Some(bbox) = MapBbox::covering(self.markers.iter().map(Marker::pos)) {
            widget.fit_bounds(&bbox);
        }
        self.initialized = !self.markers.is_empty();
        Ok(self.markers.len())
    }

    /// Shows all markers with a title that contains the filter text
    /// and hides all others.
    ///
    /// Returns the number of visible markers.
    pub fn apply_filter(&mut self, filter_text: &str) -> usize {
        let filter = TitleFilter::new(filter_text);
        let mut visible_count = 0;
        for marker in &mut self.markers {
            let visible = filter.matches(marker.title());
            if visible {
                visible_count += 1;
            }
            if marker.set_visible(visible) {
                if let Some(widget) = self.widget.as_mut() {
                    widget.set_marker_visible(marker.handle(), visible);
                }
            }
        }
        log::debug!(
            "{visible_count} of {} markers match '{}'",
            self.markers.len(),
            filter_text.trim()
        );
        visible_count
    }

    /// Lets the selected marker bounce and opens the popup on it.
    ///
    /// The animation of all other markers is stopped.
    pub fn apply_selection(&mut self, selected: Option<&Id>) -> Option<EnrichmentRequest> {
        let selected_index =
            selected.and_then(|id| self.markers.iter().position(|m| m.place_id() == id));
        if let (Some(id), None) = (selected, selected_index) {
            log::debug!("No marker for selected place {id}");
        }
        for index in 0..self.markers.len() {
            if Some(index) != selected_index {
                self.set_animation(index, Animation::None);
            }
        }
        let index = selected_index?;
        self.set_animation(index, Animation::Bounce);
        self.open_popup(index)
    }

    /// Selects the first marker with the given title.
    ///
    /// Titles are not unique; prefer [`Self::apply_selection`].
    pub fn apply_title_selection(&mut self, title: &str) -> Option<EnrichmentRequest> {
        let id = self
            .markers
            .iter()
            .find(|m| m.title() == title)
            .map(|m| m.place_id().clone());
        self.apply_selection(id.as_ref())
    }

    pub fn marker_clicked(&mut self, index: usize) -> Result<Option<EnrichmentRequest>> {
        if index >= self.markers.len() {
            return Err(Error::UnknownMarker(index));
        }
        Ok(self.open_popup(index))
    }

    /// The user dismissed the popup.
    pub fn popup_closed(&mut self) {
        if let Some(anchor) = self.popup.close() {
            log::debug!("Popup of marker {anchor} closed");
            self.set_animation(anchor, Animation::None);
        }
    }

    /// Shows the result of a wiki lookup.
    ///
    /// Returns `false` if the popup has been rebound or closed
    /// in the meantime and the result has been dropped.
    pub fn complete_enrichment(&mut self, id: EnrichmentId, outcome: EnrichmentOutcome) -> bool {
        let Some(content) = self.popup.complete(id, outcome) else {
            log::debug!("Dropping stale wiki result {id}");
            return false;
        };
        if let Some(widget) = self.widget.as_mut() {
            widget.set_popup_content(content);
        }
        true
    }

    fn open_popup(&mut self, index: usize) -> Option<EnrichmentRequest> {
        if self.popup.anchor() == Some(index) {
            log::debug!("Popup is already open on marker {index}");
            return None;
        }
        if let Some(previous) = self.popup.begin_opening(index) {
            self.set_animation(previous, Animation::None);
        }
        self.set_animation(index, Animation::Bounce);
        let id = self.next_enrichment;
        self.next_enrichment = id.next();
        let title = self.markers[index].title().to_owned();
        let content = PopupContent::Pending {
            title: title.clone(),
        };
        if let Some(widget) = self.widget.as_mut() {
            widget.open_popup(self.markers[index].handle(), &content);
        }
        self.popup.finish_opening(id, content);
        Some(EnrichmentRequest {
            id,
            anchor: index,
            title,
        })
    }

    fn set_animation(&mut self, index: usize, animation: Animation) {
        let marker = &mut self.markers[index];
        if marker.set_animation(animation) {
            if let Some(widget) = self.widget.as_mut() {
                widget.set_marker_animation(marker.handle(), animation);
            }
        }
    }
}
