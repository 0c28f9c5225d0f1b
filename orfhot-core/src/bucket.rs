use serde::{Deserialize, Serialize};

use crate::error::{OrfError, OrfResult};

/// Capacities used when no bucket list is configured. Shorter sequences are
/// more common, so the low end is denser.
pub const DEFAULT_BUCKETS: [usize; 11] = [
    500, 700, 900, 1200, 1500, 1800, 2500, 3500, 5000, 8000, 20000,
];

/// First capacity strictly greater than `length`.
///
/// `capacities` must be ascending. A length equal to a capacity does not fit
/// that capacity.
pub fn select(length: usize, capacities: &[usize]) -> OrfResult<usize> {
    capacities
        .iter()
        .copied()
        .find(|&capacity| length < capacity)
        .ok_or_else(|| OrfError::NoBucketFound {
            length,
            largest: capacities.last().copied().unwrap_or(0),
        })
}

/// A validated, strictly ascending list of bucket capacities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct BucketSet {
    capacities: Vec<usize>,
}

impl BucketSet {
    pub fn new(capacities: Vec<usize>) -> OrfResult<Self> {
        if capacities.is_empty() {
            return Err(OrfError::EmptyBuckets);
        }
        if capacities[0] == 0 {
            return Err(OrfError::ZeroCapacity);
        }
        if let Some(index) = capacities.windows(2).position(|w| w[0] >= w[1]) {
            return Err(OrfError::UnsortedBuckets { index: index + 1 });
        }
        Ok(Self { capacities })
    }

    pub fn capacities(&self) -> &[usize] {
        &self.capacities
    }

    pub fn largest(&self) -> usize {
        self.capacities[self.capacities.len() - 1]
    }

    pub fn select(&self, length: usize) -> OrfResult<usize> {
        select(length, &self.capacities)
    }
}

impl Default for BucketSet {
    fn default() -> Self {
        Self {
            capacities: DEFAULT_BUCKETS.to_vec(),
        }
    }
}

impl TryFrom<Vec<usize>> for BucketSet {
    type Error = OrfError;

    fn try_from(value: Vec<usize>) -> OrfResult<Self> {
        BucketSet::new(value)
    }
}

impl From<BucketSet> for Vec<usize> {
    fn from(value: BucketSet) -> Self {
        value.capacities
    }
}
