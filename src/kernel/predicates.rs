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

/// Twice the signed area of the triangle (a, b, c).
///
/// Positive for counterclockwise order, negative for clockwise, zero for
/// collinear input. Evaluated in `T` with no epsilon.
#[inline]
pub fn orient2d<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
}

/// True iff `p` is not strictly separated from triangle (a, b, c) by any
/// of its edges. The boundary counts as inside, and the test is
/// independent of the triangle's winding.
pub fn point_in_triangle<T: Scalar>(
    p: &Point2<T>,
    a: &Point2<T>,
    b: &Point2<T>,
    c: &Point2<T>,
) -> bool {
    let zero = T::zero();
    let d1 = orient2d(p, a, b);
    let d2 = orient2d(p, b, c);
    let d3 = orient2d(p, c, a);

    let has_neg = d1 < zero || d2 < zero || d3 < zero;
    let has_pos = d1 > zero || d2 > zero || d3 > zero;

    !(has_neg && has_pos)
}

/// Lifted-determinant in-circle form, positive iff `p` is strictly inside
/// the circumcircle of a counterclockwise (a, b, c).
#[inline]
fn in_circle_det<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, p: &Point2<T>) -> T {
    let adx = a.x - p.x;
    let ady = a.y - p.y;
    let bdx = b.x - p.x;
    let bdy = b.y - p.y;
    let cdx = c.x - p.x;
    let cdy = c.y - p.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    adx * (bdy * clift - blift * cdy) - ady * (bdx * clift - blift * cdx)
        + alift * (bdx * cdy - bdy * cdx)
}

/// True iff `p` lies strictly inside the circumcircle of (a, b, c).
///
/// The determinant sign is normalized by the orientation of (a, b, c), so
/// either winding gives the same answer. A collinear (a, b, c) has no
/// circumcircle and yields false.
pub fn in_circle<T: Scalar>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, p: &Point2<T>) -> bool {
    let zero = T::zero();
    let orientation = orient2d(a, b, c);
    let det = in_circle_det(a, b, c, p);

    if orientation > zero {
        det > zero
    } else if orientation < zero {
        det < zero
    } else {
        false
    }
}
