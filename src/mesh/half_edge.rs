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

/// Sentinel for a link that has not been wired yet.
pub const INVALID: usize = usize::MAX;

/// A directed edge of the mesh. All links are arena indices.
#[derive(Clone, Debug)]
pub struct HalfEdge {
    /// Vertex this half-edge leaves from.
    pub origin: usize,
    /// Oppositely directed half-edge over the same undirected edge.
    pub twin: usize,
    /// Next half-edge around the incident face.
    pub next: usize,
    /// Previous half-edge around the incident face.
    pub prev: usize,
    /// Incident face; `None` means the outer, untriangulated region.
    pub face: Option<usize>,
}

impl HalfEdge {
    pub fn new(origin: usize) -> Self {
        Self {
            origin,
            twin: INVALID,
            next: INVALID,
            prev: INVALID,
            face: None,
        }
    }
}
