//! Threshold secret reconstruction.
//!
//! [`SecretReconstructor`] collects points and recovers `P(0)` from exactly
//! `k` of them. Selection always takes the `k` smallest x-coordinates, so the
//! result depends only on which points are present, never on the order they
//! were added in. Points beyond the first `k` are kept but not checked
//! against the recovered polynomial.

use num_bigint::BigInt;
use tracing::{debug, warn};

use crate::error::ShamirResult;
use crate::params::Threshold;
use crate::point::Point;
use crate::point_set::PointSet;
use crate::record::ShareRecord;
use crate::traits::IntoPoint;
use crate::utils::interpolate_secret;

#[derive(Clone, Debug)]
pub struct SecretReconstructor {
    threshold: Threshold,
    points: PointSet,
}

impl SecretReconstructor {
    /// An empty reconstructor needing `threshold` points.
    pub fn new(threshold: usize) -> ShamirResult<Self> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            points: PointSet::new(),
        })
    }

    /// A reconstructor over an already collected point set.
    pub fn with_points(
        threshold: usize,
        points: PointSet,
    ) -> ShamirResult<Self> {
        Ok(Self {
            threshold: Threshold::new(threshold)?,
            points,
        })
    }

    /// Decode every share of `record` into a new reconstructor using the
    /// record's threshold.
    pub fn from_record(record: &ShareRecord) -> ShamirResult<Self> {
        Self::from_record_with_threshold(record, record.threshold()?)
    }

    /// Like [`SecretReconstructor::from_record`] with the threshold supplied
    /// by the caller instead of the record.
    pub fn from_record_with_threshold(
        record: &ShareRecord,
        threshold: usize,
    ) -> ShamirResult<Self> {
        let shares = record.shares()?;
        if let Some(declared) = record.declared_count() {
            if declared != shares.len() {
                warn!(
                    declared,
                    present = shares.len(),
                    "share count differs from the record's declared n"
                );
            }
        }

        let mut reconstructor = Self::new(threshold)?;
        reconstructor.add_points(shares)?;
        Ok(reconstructor)
    }

    pub fn threshold(&self) -> usize {
        self.threshold.get()
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Store `(x, y)`. Fails with `DuplicateX` if `x` is already present.
    pub fn add_point(&mut self, x: u64, y: BigInt) -> ShamirResult<()> {
        self.points.insert(Point::new(x, y)?)
    }

    /// Decode `value` in radix `base` and store it at `x`.
    pub fn add_encoded_point(
        &mut self,
        x: u64,
        base: &str,
        value: &str,
    ) -> ShamirResult<()> {
        self.points.insert(Point::decode_str(x, base, value)?)
    }

    /// Add a batch of points, stopping at the first failure. Points added
    /// before the failure stay in place.
    pub fn add_points<I>(&mut self, points: I) -> ShamirResult<()>
    where
        I: IntoIterator,
        I::Item: IntoPoint,
    {
        for point in points {
            self.points.insert(point.into_point()?)?;
        }
        Ok(())
    }

    /// The points a reconstruction would use: the `k` smallest x.
    pub fn selected_points(&self) -> ShamirResult<Vec<&Point>> {
        self.points.smallest(self.threshold.get())
    }

    /// Recover the secret `P(0)` from the selected points.
    ///
    /// Fails with `InsufficientPoints` when fewer than `k` points are present
    /// and with `NonIntegerResult` when the interpolated constant term is not
    /// an integer, which means the points do not come from one integer
    /// polynomial of degree `k - 1`.
    pub fn reconstruct_secret(&self) -> ShamirResult<BigInt> {
        let selected = self.selected_points()?;
        debug!(
            threshold = self.threshold.get(),
            available = self.points.len(),
            selected = ?selected.iter().map(|p| p.x()).collect::<Vec<_>>(),
            "reconstructing secret"
        );
        interpolate_secret(&selected)
    }
}
