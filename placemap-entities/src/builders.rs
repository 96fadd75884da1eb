pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_builder::*;

pub mod place_builder {

    use super::*;
    use crate::{geo::*, id::*, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn address(mut self, address: Option<&str>) -> Self {
            self.place.address = address.map(Into::into);
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::default(),
                    name: String::new(),
                    pos: MapPoint::default(),
                    address: None,
                },
            }
        }
    }
}
