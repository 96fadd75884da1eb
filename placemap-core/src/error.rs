use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("The map widget is not ready")]
    MapNotReady,
    #[error("The markers have already been initialized")]
    AlreadyInitialized,
    #[error("There is no marker with index {0}")]
    UnknownMarker(usize),
}
