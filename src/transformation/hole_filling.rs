//! Best-effort closing of small holes in triangle meshes.

use crate::shape::TriMesh;
use std::collections::hash_map::{Entry, HashMap};
use std::collections::HashSet;

/// Reasons why a boundary chain of a mesh is not a closed loop.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RepairError {
    /// The chain reaches a vertex starting more than one boundary edge.
    #[error("the boundary vertex {0} starts more than one boundary edge")]
    NonManifoldBoundary(u32),
    /// Following the boundary from a vertex reached a dead end.
    #[error("the boundary chain passing through vertex {0} does not close into a loop")]
    OpenBoundary(u32),
}

impl TriMesh {
    /// The loops formed by the boundary edges of this mesh.
    ///
    /// A boundary edge is an edge used by exactly one triangle. Each closed loop is returned
    /// as a list of vertex indices ordered so that triangulating it as a fan produces
    /// triangles oriented consistently with their neighbors. Boundary chains that pass
    /// through a vertex starting several boundary edges, or that do not close, are returned
    /// as errors; they do not prevent the other loops from being found.
    ///
    /// Vertices are compared by index: duplicated vertices should be merged first with
    /// [`TriMesh::merged_duplicate_vertices`].
    pub fn boundary_loops(&self) -> Vec<Result<Vec<u32>, RepairError>> {
        // Number of uses of each undirected edge, and the last directed edge seen.
        let mut edges: HashMap<(u32, u32), (u32, [u32; 2])> = HashMap::new();

        for idx in self.indices() {
            for (a, b) in [(idx[0], idx[1]), (idx[1], idx[2]), (idx[2], idx[0])] {
                let key = (a.min(b), a.max(b));
                match edges.entry(key) {
                    Entry::Occupied(mut entry) => entry.get_mut().0 += 1,
                    Entry::Vacant(entry) => {
                        let _ = entry.insert((1, [a, b]));
                    }
                }
            }
        }

        // The patches must traverse each boundary edge in the opposite direction.
        let mut starts: Vec<_> = edges
            .values()
            .filter(|(count, _)| *count == 1)
            .map(|(_, [a, b])| (*b, *a))
            .collect();
        starts.sort_unstable();

        let mut next = HashMap::new();
        let mut non_manifold = HashSet::new();

        for (from, to) in &starts {
            if next.insert(*from, *to).is_some() {
                let _ = non_manifold.insert(*from);
            }
        }

        let mut loops = Vec::new();
        let mut visited = HashSet::new();

        for (start, _) in &starts {
            if non_manifold.contains(start) || !visited.insert(*start) {
                continue;
            }

            let mut hole = vec![*start];
            let mut curr = *start;

            let result = loop {
                let Some(succ) = next.get(&curr).copied() else {
                    break Err(RepairError::OpenBoundary(curr));
                };

                if succ == *start {
                    break Ok(hole);
                }

                if non_manifold.contains(&succ) {
                    break Err(RepairError::NonManifoldBoundary(succ));
                }

                if !visited.insert(succ) {
                    break Err(RepairError::OpenBoundary(succ));
                }

                hole.push(succ);
                curr = succ;
            };

            loops.push(result);
        }

        loops
    }

    /// Closes every hole bounded by at most `max_hole_edges` boundary edges.
    ///
    /// Duplicate vertices are merged before looking for holes. Holes are triangulated as
    /// fans around their first vertex, without adding new vertices, so the AABB of the mesh
    /// is left unchanged. Larger holes (typically the open sides of a scene) and boundary
    /// chains that do not form a simple loop are left as-is.
    pub fn with_filled_holes(&self, max_hole_edges: usize) -> TriMesh {
        let mesh = self.clone().merged_duplicate_vertices();
        let mut patches = Vec::new();
        let mut num_holes = 0;
        let mut num_filled = 0;

        for chain in mesh.boundary_loops() {
            let hole = match chain {
                Ok(hole) => hole,
                Err(err) => {
                    log::debug!("skipped a boundary chain: {}", err);
                    continue;
                }
            };

            num_holes += 1;

            if hole.len() < 3 || hole.len() > max_hole_edges {
                continue;
            }

            for i in 1..hole.len() - 1 {
                patches.push([hole[0], hole[i], hole[i + 1]]);
            }
            num_filled += 1;
        }

        log::debug!(
            "found {} holes, filled {} with {} triangles",
            num_holes,
            num_filled,
            patches.len()
        );

        mesh.with_extra_triangles(&patches)
    }
}
