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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// A mesh vertex.
///
/// The vertex's identity is its index in the mesh arena: indices 0..3 are
/// the synthetic bounding-triangle corners, real input points follow in
/// insertion order. `half_edge` names one outgoing half-edge and exists
/// only as a traversal start.
#[derive(Clone, Debug)]
pub struct Vertex<T: Scalar> {
    pub position: Point2<T>,
    pub half_edge: usize,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Point2<T>, half_edge: usize) -> Self {
        Self {
            position,
            half_edge,
        }
    }
}
