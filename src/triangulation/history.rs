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

use smallvec::SmallVec;

use crate::error::{Result, TriangulationError};

/// One triangle ever created during a run.
///
/// `vertices` stores vertex identities, not positions; positions are
/// looked up through the mesh. A node's children are the triangles that
/// replaced it: three after a split, two after a flip. A flipped-in
/// triangle has two parents, which makes the structure a DAG rather than
/// a tree.
#[derive(Clone, Debug)]
pub struct HistoryNode {
    pub vertices: [usize; 3],
    pub children: SmallVec<[usize; 3]>,
}

/// Persistent point-location structure over every triangle ever created.
///
/// Nodes are appended and never removed; keys are arena indices shared by
/// value with the mesh's face indices. Every child key is strictly
/// greater than its parents' keys, so any descent from the root strictly
/// increases and must terminate.
#[derive(Clone, Debug)]
pub struct History {
    nodes: Vec<HistoryNode>,
}

impl History {
    /// Start a history with the bootstrap triangle as root, key 0.
    pub fn new(root: [usize; 3]) -> Self {
        Self {
            nodes: vec![HistoryNode {
                vertices: root,
                children: SmallVec::new(),
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, key: usize) -> &HistoryNode {
        &self.nodes[key]
    }

    /// Register a new triangle as a child of every node in `parents`.
    ///
    /// Returns the new node's key. A missing parent key means the mesh and
    /// history have desynchronized; that is a hard failure and nothing is
    /// linked.
    pub fn add_node(&mut self, parents: &[usize], vertices: [usize; 3]) -> Result<usize> {
        if parents.is_empty() {
            return Err(TriangulationError::UnknownParent { parent: usize::MAX });
        }
        let key = self.nodes.len();
        for &parent in parents {
            if parent >= key {
                return Err(TriangulationError::UnknownParent { parent });
            }
        }

        self.nodes.push(HistoryNode {
            vertices,
            children: SmallVec::new(),
        });
        for &parent in parents {
            self.nodes[parent].children.push(key);
        }
        Ok(key)
    }

    /// Descend from the root to the current (childless) triangle whose
    /// vertex triple satisfies `contains`.
    ///
    /// At each interior node the first matching child is entered. An
    /// interior node with no matching child is a location failure, and a
    /// descent longer than the node count is an invariant breach; both
    /// are hard errors.
    pub fn locate<F>(&self, contains: F) -> Result<usize>
    where
        F: Fn(&[usize; 3]) -> bool,
    {
        let mut key = 0;
        let mut steps = 0;

        while !self.nodes[key].children.is_empty() {
            steps += 1;
            if steps > self.nodes.len() {
                return Err(TriangulationError::LocationOverrun { steps });
            }

            let mut matched = None;
            for &child in &self.nodes[key].children {
                if contains(&self.nodes[child].vertices) {
                    matched = Some(child);
                    break;
                }
            }
            match matched {
                Some(child) => key = child,
                None => return Err(TriangulationError::NoContainingChild { node: key }),
            }
        }
        Ok(key)
    }

    /// Current triangles: all childless nodes, in creation order.
    pub fn leaves(&self) -> impl Iterator<Item = (usize, &[usize; 3])> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(key, node)| (key, &node.vertices))
    }
}
