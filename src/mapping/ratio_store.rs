use super::{ImageId, PixelCalibration};
use parking_lot::RwLock;
use std::collections::hash_map::{Entry, HashMap};

/// Storage of the calibrations of generated images.
///
/// Calibrations are never modified once stored. Implementations must support concurrent
/// insertions and lookups from several threads.
pub trait RatioStore: Send + Sync {
    /// Stores `calibration` under `id` unless `id` is already present.
    ///
    /// Returns `false`, leaving the store unchanged, if `id` was already present.
    fn try_insert(&self, id: ImageId, calibration: PixelCalibration) -> bool;

    /// The calibration stored under `id`, if any.
    fn get(&self, id: &ImageId) -> Option<PixelCalibration>;

    /// The number of stored calibrations.
    fn len(&self) -> usize;

    /// Is this store empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-memory [`RatioStore`] behind a read-write lock.
#[derive(Debug, Default)]
pub struct SharedRatioTable {
    table: RwLock<HashMap<ImageId, PixelCalibration>>,
}

impl SharedRatioTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RatioStore for SharedRatioTable {
    fn try_insert(&self, id: ImageId, calibration: PixelCalibration) -> bool {
        match self.table.write().entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let _ = entry.insert(calibration);
                true
            }
        }
    }

    fn get(&self, id: &ImageId) -> Option<PixelCalibration> {
        self.table.read().get(id).copied()
    }

    fn len(&self) -> usize {
        self.table.read().len()
    }
}
