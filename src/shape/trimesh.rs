use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;
use core::fmt;
use std::collections::hash_map::{Entry, HashMap};

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex} but the mesh only has {num_vertices} vertices.")]
    VertexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
        /// The length of the vertex buffer.
        num_vertices: u32,
    },
}

/// A triangle mesh.
///
/// Meshes are values: every transformation ([`TriMesh::scaled`], [`TriMesh::translated`],
/// [`TriMesh::merged_duplicate_vertices`], and the hole filling of the `transformation`
/// module) consumes or borrows a mesh and returns a new one.
#[derive(Clone, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
}

impl fmt::Debug for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriMesh")
            .field("num_vertices", &self.vertices.len())
            .field("num_triangles", &self.indices.len())
            .field("aabb", &self.aabb)
            .finish()
    }
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// Vertices that are not referenced by any triangle are kept but ignored by the
    /// bounding box of the mesh.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        let num_vertices = vertices.len() as u32;

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(vertex) = idx.iter().find(|vid| **vid >= num_vertices) {
                return Err(TriMeshBuilderError::VertexOutOfBounds {
                    triangle: triangle as u32,
                    vertex: *vertex,
                    num_vertices,
                });
            }
        }

        let aabb = Aabb::from_points(
            indices
                .iter()
                .flat_map(|idx| idx.iter())
                .map(|vid| &vertices[*vid as usize]),
        )
        .ok_or(TriMeshBuilderError::EmptyIndices)?;

        Ok(Self {
            vertices,
            indices,
            aabb,
        })
    }

    /// Returns a scaled version of this triangle mesh.
    ///
    /// Each vertex is multiplied componentwise by `scale`.
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.vertices
            .iter_mut()
            .for_each(|pt| pt.coords.component_mul_assign(scale));

        Self {
            aabb: self.aabb.scaled(scale),
            vertices: self.vertices,
            indices: self.indices,
        }
    }

    /// Returns a translated version of this triangle mesh.
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.vertices.iter_mut().for_each(|pt| *pt += *shift);

        Self {
            aabb: self.aabb.translated(shift),
            vertices: self.vertices,
            indices: self.indices,
        }
    }

    /// Returns this mesh with all the vertices sharing the exact same position merged into one.
    ///
    /// Triangles that become degenerate (two identical vertex indices) are removed. If every
    /// triangle collapses, the original mesh is returned unchanged.
    pub fn merged_duplicate_vertices(self) -> Self {
        let mut vtx_to_id = HashMap::new();
        let mut new_vertices = Vec::with_capacity(self.vertices.len());
        let mut new_indices = Vec::with_capacity(self.indices.len());

        fn resolve_coord_id(
            coord: &Point<Real>,
            vtx_to_id: &mut HashMap<[u64; 3], u32>,
            new_vertices: &mut Vec<Point<Real>>,
        ) -> u32 {
            // `+ 0.0` turns -0.0 into 0.0 so both hash to the same key.
            let key = [
                (coord.x + 0.0).to_bits(),
                (coord.y + 0.0).to_bits(),
                (coord.z + 0.0).to_bits(),
            ];
            let id = match vtx_to_id.entry(key) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(new_vertices.len() as u32),
            };

            if *id == new_vertices.len() as u32 {
                new_vertices.push(*coord);
            }

            *id
        }

        for t in self.indices.iter() {
            let va = resolve_coord_id(&self.vertices[t[0] as usize], &mut vtx_to_id, &mut new_vertices);
            let vb = resolve_coord_id(&self.vertices[t[1] as usize], &mut vtx_to_id, &mut new_vertices);
            let vc = resolve_coord_id(&self.vertices[t[2] as usize], &mut vtx_to_id, &mut new_vertices);

            let is_degenerate = va == vb || va == vc || vb == vc;

            if !is_degenerate {
                new_indices.push([va, vb, vc]);
            }
        }

        if new_indices.is_empty() {
            return self;
        }

        log::debug!(
            "merged {} vertices into {}, dropped {} degenerate triangles",
            self.vertices.len(),
            new_vertices.len(),
            self.indices.len() - new_indices.len()
        );

        // Merging never moves a referenced vertex, so the AABB is unchanged.
        Self {
            vertices: new_vertices,
            indices: new_indices,
            aabb: self.aabb,
        }
    }

    /// Appends extra triangles to this mesh.
    ///
    /// The new triangles must only reference existing vertices.
    pub(crate) fn with_extra_triangles(mut self, extra: &[[u32; 3]]) -> Self {
        self.indices.extend_from_slice(extra);
        self
    }
}

impl TriMesh {
    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.indices.iter().map(move |ids| {
            Triangle::new(
                self.vertices[ids[0] as usize],
                self.vertices[ids[1] as usize],
                self.vertices[ids[2] as usize],
            )
        })
    }

    /// The AABB of the vertices referenced by the triangles of this mesh.
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The width of this mesh along each axis.
    pub fn extents(&self) -> Vector<Real> {
        self.aabb.extents()
    }
}

impl From<Aabb> for TriMesh {
    fn from(aabb: Aabb) -> Self {
        let (vtx, idx) = aabb.to_trimesh();
        // The index buffer of a box is never empty and never out of bounds.
        Self {
            vertices: vtx,
            indices: idx,
            aabb,
        }
    }
}
