//! Axis-aligned footprint extents and their running union.

use serde::{Deserialize, Serialize};

/// Bounding box of a footprint ring, in the `(left, right, bottom, top)` order
/// image placement expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Minimum longitude
    pub left: f64,
    /// Maximum longitude
    pub right: f64,
    /// Minimum latitude
    pub bottom: f64,
    /// Maximum latitude
    pub top: f64,
}

impl Extent {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Envelope of a `(lon, lat)` ring. Returns `None` for an empty ring.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut points = points.into_iter();
        let (lon, lat) = points.next()?;
        let first = Extent::new(lon, lon, lat, lat);
        Some(points.fold(first, |acc, (lon, lat)| {
            acc.union(&Extent::new(lon, lon, lat, lat))
        }))
    }

    /// Component-wise envelope of two extents
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.min(other.bottom),
            top: self.top.max(other.top),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// True when `left <= right` and `bottom <= top`
    pub fn is_well_formed(&self) -> bool {
        self.left <= self.right && self.bottom <= self.top
    }

    /// Grow zero-width or zero-height extents so they can serve as axis limits
    pub fn padded_if_degenerate(&self, pad: f64) -> Extent {
        let mut padded = *self;
        if padded.width() <= 0.0 {
            padded.left -= pad;
            padded.right += pad;
        }
        if padded.height() <= 0.0 {
            padded.bottom -= pad;
            padded.top += pad;
        }
        padded
    }
}

/// Running union of tile extents.
///
/// Starts empty and stays empty until the first extent arrives, so an
/// aggregation that matched nothing is reported as such instead of leaking
/// inverted limits to the plot.
#[derive(Debug, Clone, Default)]
pub struct BoundingBox {
    extent: Option<Extent>,
    count: usize,
}

impl BoundingBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one extent into the box
    pub fn include(&mut self, extent: Extent) {
        self.extent = Some(match self.extent {
            Some(current) => current.union(&extent),
            None => extent,
        });
        self.count += 1;
    }

    /// Number of extents folded so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
    }

    /// Current envelope, `None` if nothing was included
    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }
}

impl Extend<Extent> for BoundingBox {
    fn extend<T: IntoIterator<Item = Extent>>(&mut self, iter: T) {
        for extent in iter {
            self.include(extent);
        }
    }
}

impl FromIterator<Extent> for BoundingBox {
    fn from_iter<T: IntoIterator<Item = Extent>>(iter: T) -> Self {
        let mut bbox = BoundingBox::new();
        bbox.extend(iter);
        bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square_extent() {
        let ring = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)];
        let extent = Extent::from_points(ring).unwrap();
        assert_eq!(extent, Extent::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_empty_ring_has_no_extent() {
        assert!(Extent::from_points(Vec::<(f64, f64)>::new()).is_none());
    }

    #[test]
    fn test_extent_is_well_formed_for_any_order() {
        let ring = [(12.5, -3.0), (-7.25, 40.0), (3.0, 3.0)];
        let extent = Extent::from_points(ring).unwrap();
        assert!(extent.is_well_formed());
        assert_eq!(extent, Extent::new(-7.25, 12.5, -3.0, 40.0));
    }

    #[test]
    fn test_bounding_box_starts_empty() {
        let bbox = BoundingBox::new();
        assert!(bbox.is_empty());
        assert_eq!(bbox.count(), 0);
        assert_eq!(bbox.extent(), None);
    }

    #[test]
    fn test_bounding_box_envelope() {
        let extents = [
            Extent::new(10.0, 12.0, 20.0, 22.0),
            Extent::new(-5.0, 5.0, -5.0, 5.0),
            Extent::new(0.0, 1.0, 30.0, 31.0),
        ];
        let bbox: BoundingBox = extents.iter().copied().collect();

        assert_eq!(bbox.count(), 3);
        let expected = Extent::new(
            extents.iter().map(|e| e.left).fold(f64::INFINITY, f64::min),
            extents.iter().map(|e| e.right).fold(f64::NEG_INFINITY, f64::max),
            extents.iter().map(|e| e.bottom).fold(f64::INFINITY, f64::min),
            extents.iter().map(|e| e.top).fold(f64::NEG_INFINITY, f64::max),
        );
        assert_eq!(bbox.extent(), Some(expected));
        assert_eq!(expected, Extent::new(-5.0, 12.0, -5.0, 31.0));
    }

    #[test]
    fn test_single_extent_is_its_own_envelope() {
        let mut bbox = BoundingBox::new();
        let only = Extent::new(179.0, 180.0, -90.0, -89.0);
        bbox.include(only);
        assert_eq!(bbox.extent(), Some(only));
    }

    #[test]
    fn test_padding_degenerate_extent() {
        let point = Extent::new(3.0, 3.0, 4.0, 4.0);
        let padded = point.padded_if_degenerate(0.5);
        assert_eq!(padded, Extent::new(2.5, 3.5, 3.5, 4.5));

        let normal = Extent::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(normal.padded_if_degenerate(0.5), normal);
    }
}
