use std::fmt;

use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordRangeError {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
}

/// A geographical position in degrees (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Creates a point without validation.
    ///
    /// Use [`MapPoint::try_from_lat_lng_deg`] for untrusted input.
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        let res = Self { lat, lng };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordRangeError> {
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(CoordRangeError::Latitude(lat));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(CoordRangeError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// The smallest bounding box that contains all points.
    ///
    /// Returns `None` if there are no points.
    pub fn covering(points: impl IntoIterator<Item = MapPoint>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let bbox = points.fold(Self::new(first, first), |bbox, p| bbox.extend(p));
        debug_assert!(bbox.is_valid());
        Some(bbox)
    }

    #[must_use]
    pub fn extend(self, p: MapPoint) -> Self {
        let sw = MapPoint {
            lat: self.sw.lat.min(p.lat),
            lng: self.sw.lng.min(p.lng),
        };
        let ne = MapPoint {
            lat: self.ne.lat.max(p.lat),
            lng: self.ne.lng.max(p.lng),
        };
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid()
            && self.ne.is_valid()
            && self.sw.lat <= self.ne.lat
            && self.sw.lng <= self.ne.lng
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        (self.sw.lat..=self.ne.lat).contains(&pt.lat)
            && (self.sw.lng..=self.ne.lng).contains(&pt.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_out_of_range_coordinates() {
        assert_eq!(
            Err(CoordRangeError::Latitude(90.5)),
            MapPoint::try_from_lat_lng_deg(90.5, 0.0)
        );
        assert_eq!(
            Err(CoordRangeError::Longitude(-180.1)),
            MapPoint::try_from_lat_lng_deg(0.0, -180.1)
        );
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 180.0).is_ok());
    }

    #[test]
    fn covering_bbox() {
        assert!(MapBbox::covering(vec![]).is_none());
        let bbox = MapBbox::covering(vec![
            MapPoint::from_lat_lng_deg(27.17, 78.04),
            MapPoint::from_lat_lng_deg(26.92, 75.82),
            MapPoint::from_lat_lng_deg(28.61, 77.20),
        ])
        .unwrap();
        assert!(bbox.is_valid());
        assert_eq!(MapPoint::from_lat_lng_deg(26.92, 75.82), bbox.southwest());
        assert_eq!(MapPoint::from_lat_lng_deg(28.61, 78.04), bbox.northeast());
        assert!(bbox.contains_point(MapPoint::from_lat_lng_deg(27.0, 77.0)));
        assert!(!bbox.contains_point(MapPoint::from_lat_lng_deg(29.0, 77.0)));
    }

    #[test]
    fn covering_a_single_point() {
        let p = MapPoint::from_lat_lng_deg(26.14, 78.10);
        let bbox = MapBbox::covering(Some(p)).unwrap();
        assert_eq!(p, bbox.southwest());
        assert_eq!(p, bbox.northeast());
    }
}
