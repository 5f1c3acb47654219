//! Loading and writing Wavefront (`.obj`) scene files.

use crate::math::{Point, Real};
use crate::shape::{TriMesh, TriMeshBuilderError};
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Errors raised while reading or writing a Wavefront file.
#[derive(thiserror::Error, Debug)]
pub enum WavefrontError {
    /// The file could not be opened or created.
    #[error("cannot access the mesh file: {0}")]
    Io(#[from] std::io::Error),
    /// The file content is not valid Wavefront.
    #[error("malformed Wavefront data: {0}")]
    Obj(#[from] ObjError),
    /// The faces found in the file do not form a valid triangle mesh.
    #[error("invalid triangle mesh: {0}")]
    Mesh(#[from] TriMeshBuilderError),
}

impl TriMesh {
    /// Loads a triangle mesh from a Wavefront (`.obj`) file.
    ///
    /// All the objects and groups of the file are merged into one mesh. Polygonal faces
    /// are triangulated as fans around their first vertex, and faces with less than three
    /// vertices (points and lines) are ignored.
    pub fn from_obj_file(path: impl AsRef<Path>) -> Result<Self, WavefrontError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let data = ObjData::load_buf(BufReader::new(file))?;
        log::debug!(
            "loaded {} vertices from {}",
            data.position.len(),
            path.display()
        );
        Self::from_obj_data(&data)
    }

    /// Builds a triangle mesh from already parsed Wavefront data.
    pub fn from_obj_data(data: &ObjData) -> Result<Self, WavefrontError> {
        let vertices: Vec<_> = data
            .position
            .iter()
            .map(|p| Point::new(p[0] as Real, p[1] as Real, p[2] as Real))
            .collect();
        let mut indices = Vec::new();
        let mut num_skipped = 0;

        for poly in data
            .objects
            .iter()
            .flat_map(|object| object.groups.iter())
            .flat_map(|group| group.polys.iter())
        {
            let ids = &poly.0;

            if ids.len() < 3 {
                num_skipped += 1;
                continue;
            }

            for i in 1..ids.len() - 1 {
                indices.push([ids[0].0 as u32, ids[i].0 as u32, ids[i + 1].0 as u32]);
            }
        }

        if num_skipped != 0 {
            log::debug!("ignored {num_skipped} Wavefront faces with less than three vertices");
        }

        Ok(TriMesh::new(vertices, indices)?)
    }

    /// Outputs a Wavefront (`.obj`) file at the given path.
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), WavefrontError> {
        let mut file = BufWriter::new(File::create(path)?);

        ObjData {
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(vec![
                                IndexTuple(tri[0] as usize, None, None),
                                IndexTuple(tri[1] as usize, None, None),
                                IndexTuple(tri[2] as usize, None, None),
                            ])
                        })
                        .collect(),
                    name: "mesh".to_string(),
                    index: 0,
                    material: None,
                }],
                name: "scene".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)?;

        Ok(())
    }
}
