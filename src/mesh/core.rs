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
use crate::mesh::face::Face;
use crate::mesh::half_edge::HalfEdge;
use crate::mesh::vertex::Vertex;
use crate::numeric::scalar::Scalar;

/// Outcome of subdividing a face at an interior point.
#[derive(Clone, Debug)]
pub struct FaceSplit {
    /// The vertex created at the split point.
    pub vertex: usize,
    /// The replaced triangle's three original boundary half-edges. These
    /// are the only edges whose neighbors may have become illegal.
    pub boundary: [usize; 3],
    /// The three faces created by the split, in creation order.
    pub faces: [usize; 3],
}

/// Outcome of flipping the shared diagonal of two adjacent triangles.
#[derive(Clone, Debug)]
pub struct EdgeFlip {
    /// The two faces retired by the flip.
    pub old_faces: [usize; 2],
    /// The two faces created by the flip, in creation order.
    pub new_faces: [usize; 2],
    /// The two quadrilateral edges that bordered the old neighboring
    /// triangle; the only candidates for further legalization.
    pub spread: [usize; 2],
}

/// Doubly-connected half-edge mesh over a triangulated region.
///
/// All records live in arenas and are linked by index, so the cyclic
/// next/prev/twin graph carries no ownership. Retired faces keep their
/// records; their indices stay valid as history keys for the whole run.
#[derive(Clone, Debug)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}

impl<T: Scalar> Mesh<T> {
    /// Build the bootstrap mesh: one triangle spanning `corners`, wound
    /// counterclockwise, with its three outer twins bounding the outer
    /// region.
    ///
    /// Produces vertices 0..3, half-edges 0..3 (inner cycle) and 3..6
    /// (outer loop, `face: None`), and face 0.
    pub fn bounded(corners: [Point2<T>; 3]) -> Self {
        let mut vertices = Vec::with_capacity(3);
        for (i, corner) in corners.into_iter().enumerate() {
            vertices.push(Vertex::new(corner, i));
        }

        let mut half_edges = Vec::with_capacity(6);
        for i in 0..3 {
            let mut edge = HalfEdge::new(i);
            edge.twin = 3 + i;
            edge.next = (i + 1) % 3;
            edge.prev = (i + 2) % 3;
            edge.face = Some(0);
            half_edges.push(edge);
        }
        // Outer loop runs opposite to the inner cycle; next must continue
        // from each edge's destination vertex.
        for i in 0..3 {
            let mut edge = HalfEdge::new((i + 1) % 3);
            edge.twin = i;
            edge.next = 3 + (i + 2) % 3;
            edge.prev = 3 + (i + 1) % 3;
            half_edges.push(edge);
        }

        Self {
            vertices,
            half_edges,
            faces: vec![Face::new(0)],
        }
    }

    /// Subdivide `face` into three triangles meeting at a new vertex
    /// placed at `position`.
    ///
    /// Creates 1 vertex, 6 half-edges (three spoke pairs), and 3 faces,
    /// and rewires the original boundary edges onto the new faces. The
    /// caller is responsible for registering the new faces in the
    /// point-location history; `face` is retired.
    pub fn split_face(&mut self, position: Point2<T>, face: usize) -> Result<FaceSplit> {
        let boundary = self.face_half_edges(face)?;

        let vertex = self.vertices.len();
        let spoke = self.half_edges.len();
        let first_face = self.faces.len();

        // Spoke pair per corner: `out` runs from the new vertex to the
        // corner, `inn` back again.
        for (i, &edge) in boundary.iter().enumerate() {
            let corner = self.half_edges[edge].origin;
            let mut out = HalfEdge::new(vertex);
            out.twin = spoke + 2 * i + 1;
            let mut inn = HalfEdge::new(corner);
            inn.twin = spoke + 2 * i;
            self.half_edges.push(out);
            self.half_edges.push(inn);
        }

        // Face i: boundary edge i, then the spoke in from its destination,
        // then the spoke out to its origin.
        for (i, &edge) in boundary.iter().enumerate() {
            let new_face = first_face + i;
            let inn = spoke + 2 * ((i + 1) % 3) + 1;
            let out = spoke + 2 * i;

            self.half_edges[edge].next = inn;
            self.half_edges[edge].prev = out;
            self.half_edges[edge].face = Some(new_face);

            self.half_edges[inn].next = out;
            self.half_edges[inn].prev = edge;
            self.half_edges[inn].face = Some(new_face);

            self.half_edges[out].next = edge;
            self.half_edges[out].prev = inn;
            self.half_edges[out].face = Some(new_face);

            self.faces.push(Face::new(out));
        }

        self.vertices.push(Vertex::new(position, spoke));

        Ok(FaceSplit {
            vertex,
            boundary,
            faces: [first_face, first_face + 1, first_face + 2],
        })
    }

    /// Replace the two triangles sharing `edge` with the two triangles on
    /// the other diagonal of their union quadrilateral.
    ///
    /// The `edge`/twin pair is reused as the new diagonal. Both incident
    /// faces must be present; outer-boundary edges are never flipped. The
    /// caller registers the new faces in the history with both retired
    /// faces as parents.
    pub fn flip_edge(&mut self, edge: usize) -> Result<EdgeFlip> {
        let twin = self.half_edges[edge].twin;
        let Some(face_a) = self.half_edges[edge].face else {
            return Err(TriangulationError::BoundaryFlip { edge });
        };
        let Some(face_b) = self.half_edges[twin].face else {
            return Err(TriangulationError::BoundaryFlip { edge });
        };

        // Quadrilateral rim, named from the diagonal's point of view.
        let across_prev = self.half_edges[twin].prev;
        let across_next = self.half_edges[twin].next;
        let near_next = self.half_edges[edge].next;
        let near_prev = self.half_edges[edge].prev;

        let old_origin_edge = self.half_edges[edge].origin;
        let old_origin_twin = self.half_edges[twin].origin;

        // Re-aim the diagonal at the opposite pair of rim vertices.
        self.half_edges[edge].origin = self.half_edges[near_prev].origin;
        self.half_edges[twin].origin = self.half_edges[across_prev].origin;

        self.half_edges[edge].next = across_prev;
        self.half_edges[edge].prev = near_next;
        self.half_edges[twin].next = near_prev;
        self.half_edges[twin].prev = across_next;

        self.half_edges[across_prev].prev = edge;
        self.half_edges[across_prev].next = near_next;
        self.half_edges[near_next].prev = across_prev;
        self.half_edges[near_next].next = edge;

        self.half_edges[near_prev].prev = twin;
        self.half_edges[near_prev].next = across_next;
        self.half_edges[across_next].prev = near_prev;
        self.half_edges[across_next].next = twin;

        // The diagonal no longer leaves its old endpoints; their
        // traversal-start edges must stay outgoing.
        self.vertices[old_origin_edge].half_edge = across_next;
        self.vertices[old_origin_twin].half_edge = near_next;

        let first_face = self.faces.len();
        self.faces.push(Face::new(near_prev));
        self.faces.push(Face::new(near_next));

        for he in [twin, near_prev, across_next] {
            self.half_edges[he].face = Some(first_face);
        }
        for he in [edge, across_prev, near_next] {
            self.half_edges[he].face = Some(first_face + 1);
        }

        Ok(EdgeFlip {
            old_faces: [face_a, face_b],
            new_faces: [first_face, first_face + 1],
            spread: [across_prev, across_next],
        })
    }

    /// The three half-edges bounding `face`, starting from its incident
    /// edge. A boundary that does not close after exactly three `next`
    /// steps is a fatal invariant violation.
    pub fn face_half_edges(&self, face: usize) -> Result<[usize; 3]> {
        let first = self.faces[face].half_edge;
        let second = self.half_edges[first].next;
        let third = self.half_edges[second].next;

        if second == first || third == first || self.half_edges[third].next != first {
            return Err(TriangulationError::BrokenFaceCycle { face });
        }
        Ok([first, second, third])
    }

    /// The three vertex identities of `face`, in boundary order.
    pub fn face_vertex_ids(&self, face: usize) -> Result<[usize; 3]> {
        let edges = self.face_half_edges(face)?;
        Ok(edges.map(|e| self.half_edges[e].origin))
    }

    /// Positions of the three corners of `face`, in boundary order.
    pub fn face_positions(&self, face: usize) -> Result<[Point2<T>; 3]> {
        let ids = self.face_vertex_ids(face)?;
        Ok(ids.map(|v| self.vertices[v].position))
    }
}
