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

use thiserror::Error;

/// Errors raised during triangulation construction.
///
/// Every variant is fatal for the run: the caller discards the partial
/// structures and starts over. Nothing here is transient, so there are no
/// retry semantics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// An input coordinate was NaN or infinite.
    #[error("input point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point in the input sequence.
        index: usize,
    },

    /// An input point coincides with an already inserted vertex.
    #[error("input point {index} duplicates an earlier point")]
    DuplicatePoint {
        /// Index of the offending point in the input sequence.
        index: usize,
    },

    /// An input point lies exactly on an edge of the current triangulation.
    #[error("input point {index} lies exactly on a triangulation edge")]
    PointOnEdge {
        /// Index of the offending point in the input sequence.
        index: usize,
    },

    /// Point location reached an interior node none of whose children
    /// contain the query point.
    #[error("point location failed: no child of history node {node} contains the query")]
    NoContainingChild {
        /// Key of the interior node where descent stopped.
        node: usize,
    },

    /// Point location descended more steps than there are history nodes.
    #[error("point location exceeded {steps} descent steps")]
    LocationOverrun {
        /// Number of steps taken before giving up.
        steps: usize,
    },

    /// A history node was registered under a key that does not exist yet,
    /// or with no parents at all.
    #[error("history node registered under unknown parent {parent}")]
    UnknownParent {
        /// The missing parent key (`usize::MAX` when no parents were given).
        parent: usize,
    },

    /// A mesh face index and its history node key diverged.
    #[error("mesh face {face} and history node {node} keys diverged")]
    KeyMismatch {
        /// The face arena index.
        face: usize,
        /// The history node key that was allocated for it.
        node: usize,
    },

    /// A face boundary walk did not close after three half-edges.
    #[error("face {face} boundary is not a 3-cycle")]
    BrokenFaceCycle {
        /// The face whose cycle is broken.
        face: usize,
    },

    /// An edge flip was requested on an edge bordering the outer region.
    #[error("half-edge {edge} borders the outer region and cannot be flipped")]
    BoundaryFlip {
        /// The offending half-edge index.
        edge: usize,
    },
}

/// Result alias for triangulation operations.
pub type Result<T> = std::result::Result<T, TriangulationError>;
