use placemap_entities::{animation::Animation, geo::*, id::Id};

use crate::popup::PopupContent;

/// Attributes of a new marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub place_id: Id,
    pub title: String,
    pub label: Option<char>,
    pub pos: MapPoint,
    pub animation: Animation,
}

/// The interactive map that renders markers and the shared popup.
///
/// Implementations must forward clicks on the marker that has been
/// created with `index` to
/// [`MarkerReconciler::marker_clicked`](crate::reconciler::MarkerReconciler::marker_clicked)
/// and the dismissal of the popup by the user to
/// [`MarkerReconciler::popup_closed`](crate::reconciler::MarkerReconciler::popup_closed).
pub trait MapWidget {
    /// Handle of a rendered marker.
    type Marker;

    fn create_marker(&mut self, index: usize, options: &MarkerOptions) -> Self::Marker;
    fn set_marker_visible(&mut self, marker: &Self::Marker, visible: bool);
    fn set_marker_animation(&mut self, marker: &Self::Marker, animation: Animation);
    fn fit_bounds(&mut self, bbox: &MapBbox);
    fn open_popup(&mut self, anchor: &Self::Marker, content: &PopupContent);
    fn set_popup_content(&mut self, content: &PopupContent);
}
