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

use deltri::kernel::point_in_triangle;
use deltri::triangulation::History;
use deltri::{Point2, TriangulationError};

#[test]
fn test_root_starts_as_leaf() {
    let history = History::new([0, 1, 2]);

    assert_eq!(history.len(), 1);
    let leaves: Vec<_> = history.leaves().collect();
    assert_eq!(leaves, vec![(0, &[0, 1, 2])]);
}

#[test]
fn test_split_children_replace_the_root() {
    let mut history = History::new([0, 1, 2]);

    assert_eq!(history.add_node(&[0], [0, 1, 3]).unwrap(), 1);
    assert_eq!(history.add_node(&[0], [1, 2, 3]).unwrap(), 2);
    assert_eq!(history.add_node(&[0], [2, 0, 3]).unwrap(), 3);

    let keys: Vec<usize> = history.leaves().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![1, 2, 3]);
}

#[test]
fn test_flip_child_has_two_parents() {
    let mut history = History::new([0, 1, 2]);
    history.add_node(&[0], [0, 1, 3]).unwrap();
    history.add_node(&[0], [1, 2, 3]).unwrap();
    history.add_node(&[0], [2, 0, 3]).unwrap();

    let key = history.add_node(&[1, 2], [0, 2, 3]).unwrap();
    assert_eq!(key, 4);
    assert!(history.node(1).children.contains(&4));
    assert!(history.node(2).children.contains(&4));
    assert!(history.node(3).children.is_empty());

    let keys: Vec<usize> = history.leaves().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![3, 4]);
}

#[test]
fn test_add_node_rejects_unknown_parent() {
    let mut history = History::new([0, 1, 2]);

    assert_eq!(
        history.add_node(&[7], [0, 1, 3]),
        Err(TriangulationError::UnknownParent { parent: 7 })
    );
    // Nothing was linked or appended.
    assert_eq!(history.len(), 1);

    assert!(matches!(
        history.add_node(&[], [0, 1, 3]),
        Err(TriangulationError::UnknownParent { .. })
    ));
}

#[test]
fn test_locate_descends_to_containing_leaf() {
    let positions = [
        Point2::<f64>::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(5.0, 10.0),
        Point2::new(5.0, 4.0),
    ];
    let mut history = History::new([0, 1, 2]);
    history.add_node(&[0], [0, 1, 3]).unwrap();
    history.add_node(&[0], [1, 2, 3]).unwrap();
    history.add_node(&[0], [2, 0, 3]).unwrap();

    let query = Point2::new(5.0, 1.0);
    let key = history
        .locate(|tri| {
            point_in_triangle(
                &query,
                &positions[tri[0]],
                &positions[tri[1]],
                &positions[tri[2]],
            )
        })
        .unwrap();
    assert_eq!(key, 1);
}

#[test]
fn test_locate_fails_when_no_child_matches() {
    let mut history = History::new([0, 1, 2]);
    history.add_node(&[0], [0, 1, 3]).unwrap();

    let result = history.locate(|_| false);
    assert_eq!(result, Err(TriangulationError::NoContainingChild { node: 0 }));
}
