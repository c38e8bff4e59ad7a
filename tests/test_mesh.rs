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

use deltri::mesh::Mesh;
use deltri::{DelaunayTriangulation, Point2, TriangulationError};

fn test_corners() -> [Point2<f64>; 3] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(5.0, 10.0),
    ]
}

/// Check the half-edge invariants over the whole arena: twin involution,
/// next/prev inversion, 3-cycles over live faces, and an origin-consistent
/// outer loop.
fn check_invariants(mesh: &Mesh<f64>) {
    for (e, he) in mesh.half_edges.iter().enumerate() {
        let twin = &mesh.half_edges[he.twin];
        assert_eq!(twin.twin, e, "twin(twin({e})) != {e}");

        assert_eq!(mesh.half_edges[he.next].prev, e, "prev(next({e})) != {e}");
        assert_eq!(mesh.half_edges[he.prev].next, e, "next(prev({e})) != {e}");

        // next must continue from this edge's destination vertex.
        assert_eq!(
            mesh.half_edges[he.next].origin, twin.origin,
            "origin chain broken at half-edge {e}"
        );

        if let Some(face) = he.face {
            let second = he.next;
            let third = mesh.half_edges[second].next;
            assert_ne!(second, e);
            assert_ne!(third, e);
            assert_eq!(mesh.half_edges[third].next, e, "face {face} is not a 3-cycle");
            assert_eq!(mesh.half_edges[second].face, Some(face));
            assert_eq!(mesh.half_edges[third].face, Some(face));
        }
    }

    let outer: Vec<usize> = (0..mesh.half_edges.len())
        .filter(|&e| mesh.half_edges[e].face.is_none())
        .collect();
    assert_eq!(outer.len(), 3, "outer loop must stay the bootstrap boundary");
}

fn sorted_ids(mesh: &Mesh<f64>, face: usize) -> [usize; 3] {
    let mut ids = mesh.face_vertex_ids(face).unwrap();
    ids.sort_unstable();
    ids
}

#[test]
fn test_bootstrap_shape() {
    let mesh = Mesh::bounded(test_corners());

    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.half_edges.len(), 6);
    assert_eq!(mesh.faces.len(), 1);
    assert_eq!(sorted_ids(&mesh, 0), [0, 1, 2]);
    check_invariants(&mesh);
}

#[test]
fn test_split_face_topology() {
    let mut mesh = Mesh::bounded(test_corners());
    let split = mesh.split_face(Point2::new(5.0, 4.0), 0).unwrap();

    assert_eq!(split.vertex, 3);
    assert_eq!(split.faces, [1, 2, 3]);
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.half_edges.len(), 12);
    assert_eq!(mesh.faces.len(), 4);
    check_invariants(&mesh);

    // Each new triangle keeps one original edge and meets at the new
    // vertex.
    assert_eq!(sorted_ids(&mesh, 1), [0, 1, 3]);
    assert_eq!(sorted_ids(&mesh, 2), [1, 2, 3]);
    assert_eq!(sorted_ids(&mesh, 3), [0, 2, 3]);

    // The returned boundary edges are the replaced face's original cycle,
    // now owned by the new faces.
    for (i, &edge) in split.boundary.iter().enumerate() {
        assert_eq!(mesh.half_edges[edge].face, Some(split.faces[i]));
    }
}

#[test]
fn test_flip_edge_swaps_diagonal() {
    let mut mesh = Mesh::bounded(test_corners());
    mesh.split_face(Point2::new(5.0, 4.0), 0).unwrap();

    // Spoke from the new vertex to corner 0, shared by faces 1 and 3.
    let diagonal = 6;
    assert_eq!(mesh.half_edges[diagonal].origin, 3);

    let flip = mesh.flip_edge(diagonal).unwrap();
    assert_eq!(flip.old_faces, [1, 3]);
    assert_eq!(flip.new_faces, [4, 5]);
    assert_eq!(mesh.faces.len(), 6);
    check_invariants(&mesh);

    // The quadrilateral (3, 1, 0, 2) is now cut along 1-2.
    assert_eq!(sorted_ids(&mesh, 4), [1, 2, 3]);
    assert_eq!(sorted_ids(&mesh, 5), [0, 1, 2]);

    // The diagonal half-edge pair was reused for the new diagonal.
    let origin = mesh.half_edges[diagonal].origin;
    let twin_origin = mesh.half_edges[mesh.half_edges[diagonal].twin].origin;
    let mut diag = [origin, twin_origin];
    diag.sort_unstable();
    assert_eq!(diag, [1, 2]);

    // Retired faces keep their records; the new faces own the rim.
    for &old in &flip.old_faces {
        for he in &mesh.half_edges {
            assert_ne!(he.face, Some(old), "retired face still referenced");
        }
    }
}

#[test]
fn test_flip_rejects_outer_boundary() {
    let mut mesh = Mesh::bounded(test_corners());

    // Inner bootstrap edge: its twin bounds the outer region.
    assert!(matches!(
        mesh.flip_edge(0),
        Err(TriangulationError::BoundaryFlip { edge: 0 })
    ));
    // Outer half-edge itself.
    assert!(matches!(
        mesh.flip_edge(3),
        Err(TriangulationError::BoundaryFlip { edge: 3 })
    ));
}

#[test]
fn test_vertex_back_references_stay_outgoing() {
    let mut mesh = Mesh::bounded(test_corners());
    mesh.split_face(Point2::new(5.0, 4.0), 0).unwrap();
    mesh.flip_edge(6).unwrap();

    for (v, vertex) in mesh.vertices.iter().enumerate() {
        assert_eq!(
            mesh.half_edges[vertex.half_edge].origin, v,
            "vertex {v} back-reference is not outgoing"
        );
    }
}

#[test]
fn test_invariants_after_full_build() {
    let points: Vec<Point2<f64>> = [
        (100.0, 100.0),
        (175.0, 150.0),
        (200.0, 300.0),
        (400.0, 50.0),
        (500.0, 750.0),
        (100.0, 700.0),
        (300.0, 100.0),
        (50.0, 900.0),
        (800.0, 50.0),
        (150.0, 110.0),
    ]
    .iter()
    .map(|&(x, y)| Point2::new(x, y))
    .collect();

    let triangulation = DelaunayTriangulation::build(&points).unwrap();
    check_invariants(triangulation.mesh());
}
