mod load_places;

pub use self::load_places::*;
