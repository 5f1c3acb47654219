//! Binary file format of voxel grids.
//!
//! A grid file starts with the magic bytes `SVXG` and the format version as a little-endian
//! `u32`. The rest of the file is an LZ4 block, prefixed with its decompressed size, holding
//! the bincode encoding of the occupancy array.

use super::VoxelGrid;
use ndarray::Array3;
use std::fs;
use std::path::Path;

const MAGIC: [u8; 4] = *b"SVXG";
const FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 8;

/// Errors raised while reading or writing a voxel grid file.
#[derive(thiserror::Error, Debug)]
pub enum GridIoError {
    /// The file could not be read or written.
    #[error("cannot access the grid file: {0}")]
    Io(#[from] std::io::Error),
    /// The occupancy array could not be encoded or decoded.
    #[error("invalid grid encoding: {0}")]
    Encoding(#[from] bincode::Error),
    /// The compressed block is corrupted.
    #[error("invalid compressed grid data: {0}")]
    Compression(#[from] lz4_flex::block::DecompressError),
    /// The data does not start with the grid file header.
    #[error("not a voxel grid file")]
    BadMagic,
    /// The file was written by an unknown version of the format.
    #[error("unsupported grid format version {0}, expected {expected}", expected = FORMAT_VERSION)]
    UnsupportedVersion(u32),
}

impl VoxelGrid {
    /// Encodes this grid in the grid file format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GridIoError> {
        let encoded = bincode::serialize(self.cells())?;
        let compressed = lz4_flex::compress_prepend_size(&encoded);

        let mut bytes = Vec::with_capacity(HEADER_LEN + compressed.len());
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&compressed);
        Ok(bytes)
    }

    /// Decodes a grid encoded with [`VoxelGrid::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GridIoError> {
        if bytes.len() < HEADER_LEN || bytes[..4] != MAGIC {
            return Err(GridIoError::BadMagic);
        }

        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if version != FORMAT_VERSION {
            return Err(GridIoError::UnsupportedVersion(version));
        }

        let encoded = lz4_flex::decompress_size_prepended(&bytes[HEADER_LEN..])?;
        let cells: Array3<bool> = bincode::deserialize(&encoded)?;
        Ok(Self::from_cells(cells))
    }

    /// Writes this grid to a file, replacing it if it exists.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GridIoError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        fs::write(path, &bytes)?;
        log::debug!(
            "saved a grid of shape {:?} to {} ({} bytes)",
            self.shape(),
            path.display(),
            bytes.len()
        );
        Ok(())
    }

    /// Reads a grid written by [`VoxelGrid::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridIoError> {
        Self::from_bytes(&fs::read(path)?)
    }
}
