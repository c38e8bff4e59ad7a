// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::error::{Result, TriangulationError};
use crate::geometry::Point2;
use crate::kernel::predicates::{in_circle, orient2d, point_in_triangle};
use crate::mesh::Mesh;
use crate::numeric::scalar::Scalar;
use crate::triangulation::history::History;

pub const SQRT_3: f64 = 1.7320508075688772;

/// Number of synthetic bounding-triangle vertices; real input points get
/// identities from here on.
const SYNTHETIC: usize = 3;

/// Caller-visible product of a triangulation run.
///
/// `vertices[i]` corresponds to input point `i`; `triangles` holds index
/// triples into `vertices`. Triangles touching the synthetic bounding
/// vertices are already filtered out.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleData<T: Scalar> {
    pub vertices: Vec<Point2<T>>,
    pub triangles: Vec<[usize; 3]>,
}

/// One full incremental triangulation run over an ordered point set.
///
/// Owns one mesh and one history; independent runs share nothing. A run
/// either completes or returns the first error, in which case the partial
/// structures are discarded by dropping the value.
#[derive(Clone, Debug)]
pub struct DelaunayTriangulation<T: Scalar> {
    mesh: Mesh<T>,
    history: History,
}

impl<T: Scalar> DelaunayTriangulation<T> {
    /// Bootstrap a bounding triangle around `points` and insert every
    /// point in the given order.
    ///
    /// Fails on non-finite coordinates, duplicate points, points exactly
    /// on a triangulation edge, or an internal invariant violation; never
    /// on valid input.
    pub fn build(points: &[Point2<T>]) -> Result<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(TriangulationError::NonFinitePoint { index });
            }
        }

        let mesh = Mesh::bounded(bounding_triangle(points));
        let history = History::new([0, 1, 2]);
        let mut triangulation = Self { mesh, history };

        for (index, &point) in points.iter().enumerate() {
            triangulation.insert(index, point)?;
        }
        Ok(triangulation)
    }

    pub fn mesh(&self) -> &Mesh<T> {
        &self.mesh
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Locate the current triangle containing `point` by descending the
    /// history from the bootstrap root.
    fn locate(&self, point: &Point2<T>) -> Result<usize> {
        self.history.locate(|triangle| {
            let a = &self.mesh.vertices[triangle[0]].position;
            let b = &self.mesh.vertices[triangle[1]].position;
            let c = &self.mesh.vertices[triangle[2]].position;
            point_in_triangle(point, a, b, c)
        })
    }

    fn insert(&mut self, index: usize, point: Point2<T>) -> Result<()> {
        let face = self.locate(&point)?;
        let [a, b, c] = self.mesh.face_positions(face)?;

        if point == a || point == b || point == c {
            return Err(TriangulationError::DuplicatePoint { index });
        }
        // Inside the containing triangle, a zero orientation against any
        // edge puts the point exactly on that edge.
        let zero = T::zero();
        for (u, v) in [(a, b), (b, c), (c, a)] {
            if orient2d(&point, &u, &v) == zero {
                return Err(TriangulationError::PointOnEdge { index });
            }
        }

        let split = self.mesh.split_face(point, face)?;
        for &new_face in &split.faces {
            let vertices = self.mesh.face_vertex_ids(new_face)?;
            let key = self.history.add_node(&[face], vertices)?;
            if key != new_face {
                return Err(TriangulationError::KeyMismatch {
                    face: new_face,
                    node: key,
                });
            }
        }

        for &edge in &split.boundary {
            self.legalize(split.vertex, edge)?;
        }
        Ok(())
    }

    /// Restore the in-circle property across `edge` after `vertex` was
    /// inserted, flipping and propagating depth-first into the two
    /// quadrilateral edges that border the displaced neighbor.
    fn legalize(&mut self, vertex: usize, edge: usize) -> Result<()> {
        let twin = self.mesh.half_edges[edge].twin;
        if self.mesh.half_edges[twin].face.is_none() {
            // Bootstrap boundary, legal by definition.
            return Ok(());
        }

        let apex = self.mesh.half_edges[self.mesh.half_edges[twin].prev].origin;
        let p = self.mesh.vertices[vertex].position;
        let a = self.mesh.vertices[self.mesh.half_edges[edge].origin].position;
        let b = self.mesh.vertices[self.mesh.half_edges[twin].origin].position;
        let q = self.mesh.vertices[apex].position;

        if !in_circle(&p, &a, &b, &q) {
            return Ok(());
        }

        let flip = self.mesh.flip_edge(edge)?;
        for &new_face in &flip.new_faces {
            let vertices = self.mesh.face_vertex_ids(new_face)?;
            let key = self.history.add_node(&flip.old_faces, vertices)?;
            if key != new_face {
                return Err(TriangulationError::KeyMismatch {
                    face: new_face,
                    node: key,
                });
            }
        }

        self.legalize(vertex, flip.spread[0])?;
        self.legalize(vertex, flip.spread[1])
    }

    /// Extract the caller-visible triangulation: positions of the real
    /// vertices in input order, and the current triangles re-based to
    /// index into them.
    pub fn triangle_data(&self) -> TriangleData<T> {
        let vertices = self
            .mesh
            .vertices
            .iter()
            .skip(SYNTHETIC)
            .map(|v| v.position)
            .collect();

        let mut triangles = Vec::new();
        for (_, tri) in self.history.leaves() {
            if tri.iter().any(|&v| v < SYNTHETIC) {
                continue;
            }
            triangles.push([
                tri[0] - SYNTHETIC,
                tri[1] - SYNTHETIC,
                tri[2] - SYNTHETIC,
            ]);
        }

        TriangleData {
            vertices,
            triangles,
        }
    }
}

/// Equilateral triangle comfortably containing every input point,
/// counterclockwise, centered on the input bounding box.
fn bounding_triangle<T: Scalar>(points: &[Point2<T>]) -> [Point2<T>; 3] {
    let (min_x, min_y, max_x, max_y) = bbox(points);
    let two = T::from_f64(2.0);

    let delta = (max_x - min_x).max(max_y - min_y);
    let cx = (min_x + max_x) / two;
    let cy = (min_y + max_y) / two;
    let r = T::from_f64(64.0) * delta + T::one();
    let sqrt_3 = T::from_f64(SQRT_3);

    [
        Point2::new(cx, cy + two * r),
        Point2::new(cx - sqrt_3 * r, cy - r),
        Point2::new(cx + sqrt_3 * r, cy - r),
    ]
}

fn bbox<T: Scalar>(points: &[Point2<T>]) -> (T, T, T, T) {
    let Some(first) = points.first() else {
        let zero = T::zero();
        return (zero, zero, zero, zero);
    };
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (min_x, min_y, max_x, max_y)
}
