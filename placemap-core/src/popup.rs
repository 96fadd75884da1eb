use std::fmt;

use placemap_entities::wiki::WikiLink;

/// Identifies a single wiki lookup that was triggered by opening the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnrichmentId(u64);

impl EnrichmentId {
    pub(crate) const fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EnrichmentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Emitted whenever the popup has been bound to a new anchor.
///
/// The result of the lookup must be passed back with
/// [`MarkerReconciler::complete_enrichment`](crate::reconciler::MarkerReconciler::complete_enrichment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    pub id: EnrichmentId,
    /// Index of the anchor marker.
    pub anchor: usize,
    /// Title of the anchor marker, used as search term.
    pub title: String,
}

pub type EnrichmentOutcome = Result<Vec<WikiLink>, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupContent {
    /// The lookup is still running.
    Pending { title: String },
    Links { title: String, links: Vec<WikiLink> },
    Error { title: String, message: String },
}

impl PopupContent {
    pub fn title(&self) -> &str {
        match self {
            Self::Pending { title } | Self::Links { title, .. } | Self::Error { title, .. } => {
                title
            }
        }
    }

    pub fn from_outcome(title: String, outcome: EnrichmentOutcome) -> Self {
        match outcome {
            Ok(links) => Self::Links { title, links },
            Err(message) => Self::Error { title, message },
        }
    }
}

/// The single, shared popup (info window).
///
/// `Closed → Opening → Open(pending) → Open(links | error)`.
/// Opening another anchor while open goes straight to `Opening`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Popup {
    #[default]
    Closed,
    Opening {
        anchor: usize,
    },
    Open {
        anchor: usize,
        request: EnrichmentId,
        content: PopupContent,
    },
}

impl Popup {
    pub const fn anchor(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Opening { anchor } | Self::Open { anchor, .. } => Some(*anchor),
        }
    }

    pub const fn content(&self) -> Option<&PopupContent> {
        match self {
            Self::Open { content, .. } => Some(content),
            _ => None,
        }
    }

    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Rebinds the popup and returns the previous anchor.
    pub fn begin_opening(&mut self, anchor: usize) -> Option<usize> {
        let previous = self.anchor();
        debug_assert_ne!(Some(anchor), previous);
        *self = Self::Opening { anchor };
        previous
    }

    pub fn finish_opening(&mut self, request: EnrichmentId, content: PopupContent) {
        let Self::Opening { anchor } = *self else {
            debug_assert!(false, "popup is not opening");
            return;
        };
        *self = Self::Open {
            anchor,
            request,
            content,
        };
    }

    /// Closes the popup and returns the previous anchor.
    pub fn close(&mut self) -> Option<usize> {
        let previous = self.anchor();
        *self = Self::Closed;
        previous
    }

    /// Replaces the content if the popup is still open for `request`.
    pub fn complete(
        &mut self,
        request: EnrichmentId,
        outcome: EnrichmentOutcome,
    ) -> Option<&PopupContent> {
        match self {
            Self::Open {
                request: current,
                content,
                ..
            } if *current == request => {
                let title = content.title().to_owned();
                *content = PopupContent::from_outcome(title, outcome);
                Some(&*content)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(title: &str) -> PopupContent {
        PopupContent::Pending {
            title: title.into(),
        }
    }

    #[test]
    fn open_and_complete() {
        let mut popup = Popup::default();
        assert!(popup.is_closed());
        assert_eq!(None, popup.begin_opening(0));
        assert_eq!(Popup::Opening { anchor: 0 }, popup);
        assert!(popup.content().is_none());

        let id = EnrichmentId::first();
        popup.finish_opening(id, pending("Taj Mahal"));
        assert_eq!(Some(0), popup.anchor());
        assert_eq!(Some(&pending("Taj Mahal")), popup.content());

        let content = popup.complete(id, Err("no results".into())).cloned();
        assert_eq!(
            Some(PopupContent::Error {
                title: "Taj Mahal".into(),
                message: "no results".into()
            }),
            content
        );
    }

    #[test]
    fn ignore_stale_results() {
        let mut popup = Popup::default();
        let first = EnrichmentId::first();
        popup.begin_opening(0);
        popup.finish_opening(first, pending("Taj Mahal"));

        let second = first.next();
        assert_eq!(Some(0), popup.begin_opening(1));
        popup.finish_opening(second, pending("Agra Fort"));

        assert!(popup.complete(first, Ok(vec![])).is_none());
        assert_eq!(Some(&pending("Agra Fort")), popup.content());
        assert!(popup.complete(second, Ok(vec![])).is_some());
    }

    #[test]
    fn close_returns_anchor() {
        let mut popup = Popup::default();
        assert_eq!(None, popup.close());
        popup.begin_opening(3);
        popup.finish_opening(EnrichmentId::first(), pending("x"));
        assert_eq!(Some(3), popup.close());
        assert!(popup.is_closed());
        assert!(popup.complete(EnrichmentId::first(), Ok(vec![])).is_none());
    }
}
