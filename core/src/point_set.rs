use std::collections::btree_map::{BTreeMap, Entry};

use num_bigint::BigInt;

use crate::error::{ShamirError, ShamirResult};
use crate::point::Point;
use crate::traits::IntoPoint;

/// Points keyed by their x-coordinate.
///
/// Iteration is always in ascending `x`, whatever order the points were
/// inserted in, which is what makes selection deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeMap<u64, Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect points, failing on the first invalid or repeated one.
    pub fn from_points<I>(points: I) -> ShamirResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        let mut set = Self::new();
        for point in points {
            set.insert(point.into_point()?)?;
        }
        Ok(set)
    }

    /// Add a point; `DuplicateX` if its x-coordinate is already taken.
    pub fn insert(&mut self, point: Point) -> ShamirResult<()> {
        match self.points.entry(point.x()) {
            Entry::Occupied(_) => Err(ShamirError::DuplicateX(point.x())),
            Entry::Vacant(slot) => {
                slot.insert(point);
                Ok(())
            }
        }
    }

    pub fn contains(&self, x: u64) -> bool {
        self.points.contains_key(&x)
    }

    pub fn get(&self, x: u64) -> Option<&Point> {
        self.points.get(&x)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in ascending `x`.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    /// The `k` points with the smallest x-coordinates.
    pub fn smallest(&self, k: usize) -> ShamirResult<Vec<&Point>> {
        if self.len() < k {
            return Err(ShamirError::InsufficientPoints {
                required: k,
                provided: self.len(),
            });
        }
        Ok(self.iter().take(k).collect())
    }

    /// Split into parallel coordinate vectors.
    pub fn coordinates(&self) -> (Vec<BigInt>, Vec<BigInt>) {
        self.iter()
            .map(|point| (BigInt::from(point.x()), point.y().clone()))
            .unzip()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::collections::btree_map::Values<'a, u64, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.values()
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::collections::btree_map::IntoValues<u64, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_values()
    }
}
