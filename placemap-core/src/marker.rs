use placemap_entities::{animation::Animation, geo::MapPoint, id::Id};

use crate::gateways::map::MarkerOptions;

/// A marker on the map, created once per place.
///
/// Only the visual state (visibility, animation) changes after creation.
#[derive(Debug, Clone)]
pub struct Marker<H> {
    place_id: Id,
    title: String,
    pos: MapPoint,
    visible: bool,
    animation: Animation,
    handle: H,
}

impl<H> Marker<H> {
    pub(crate) fn new(options: MarkerOptions, handle: H) -> Self {
        let MarkerOptions {
            place_id,
            title,
            label: _,
            pos,
            animation,
        } = options;
        Self {
            place_id,
            title,
            pos,
            visible: true,
            animation,
            handle,
        }
    }

    pub const fn place_id(&self) -> &Id {
        &self.place_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn pos(&self) -> MapPoint {
        self.pos
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn animation(&self) -> Animation {
        self.animation
    }

    pub const fn handle(&self) -> &H {
        &self.handle
    }

    /// Returns `true` if the visibility changed.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    /// Returns `true` if the animation changed.
    pub(crate) fn set_animation(&mut self, animation: Animation) -> bool {
        let changed = self.animation != animation;
        self.animation = animation;
        changed
    }
}
