//! Quadrilateral target validation.
//!
//! Decides whether a shape's expanded path-point list is an eligible
//! four-sided mapping target. The point-count rule is the hard contract;
//! the geometric checks (self-intersection, coincident points) can be
//! switched off through [`ValidationOptions`].

use std::cmp::Ordering;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Point;

/// Number of path points the host reports for a closed four-sided shape.
///
/// The host hands over an expanded path-point list, not raw corner points,
/// so a quadrilateral target arrives as seven points.
pub const QUAD_POINT_COUNT: usize = 7;

/// Why a shape was rejected as a mapping target.
///
/// The `Display` output of each variant is the user-visible diagnostic;
/// showing it is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeRejection {
    #[error("Maybe your shape has too many sides.")]
    TooManySides,

    #[error("Maybe your shape does not have enough sides.")]
    TooFewSides,

    #[error("Maybe your shape crosses over itself.")]
    SelfIntersecting,

    #[error("Maybe two or more points of your shape coincide.")]
    DuplicatePoints,
}

/// Options controlling the geometric checks.
///
/// The point-count rule always runs; these options only govern the
/// self-intersection and coincident-point checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Reject shapes whose boundary crosses over itself.
    detect_self_intersection: bool,

    /// Reject shapes with coincident boundary points.
    detect_duplicate_points: bool,

    /// Distance below which two points count as coincident.
    duplicate_epsilon: f32,
}

impl ValidationOptions {
    /// Creates options with the given switches and epsilon.
    pub fn new(
        detect_self_intersection: bool,
        detect_duplicate_points: bool,
        duplicate_epsilon: f32,
    ) -> Self {
        Self {
            detect_self_intersection,
            detect_duplicate_points,
            duplicate_epsilon,
        }
    }

    /// Whether the self-intersection check runs.
    pub fn detect_self_intersection(&self) -> bool {
        self.detect_self_intersection
    }

    /// Whether the coincident-point check runs.
    pub fn detect_duplicate_points(&self) -> bool {
        self.detect_duplicate_points
    }

    /// The coincidence distance threshold.
    pub fn duplicate_epsilon(&self) -> f32 {
        self.duplicate_epsilon
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            detect_self_intersection: true,
            detect_duplicate_points: true,
            duplicate_epsilon: 0.001,
        }
    }
}

/// Validates shape boundary points as quadrilateral mapping targets.
#[derive(Debug, Clone, Default)]
pub struct QuadValidator {
    options: ValidationOptions,
}

impl QuadValidator {
    /// Creates a validator with the given options.
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Returns the validator's options.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Checks whether `points` describes an eligible quadrilateral target.
    ///
    /// The point count is checked first and unconditionally: more than
    /// [`QUAD_POINT_COUNT`] points rejects with
    /// [`ShapeRejection::TooManySides`], fewer with
    /// [`ShapeRejection::TooFewSides`]. Only an exact-count shape reaches the
    /// geometric checks.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`ShapeRejection`].
    pub fn validate(&self, points: &[Point]) -> Result<(), ShapeRejection> {
        match points.len().cmp(&QUAD_POINT_COUNT) {
            Ordering::Greater => {
                debug!(point_count = points.len(); "Shape has too many path points");
                return Err(ShapeRejection::TooManySides);
            }
            Ordering::Less => {
                debug!(point_count = points.len(); "Shape has too few path points");
                return Err(ShapeRejection::TooFewSides);
            }
            Ordering::Equal => {}
        }

        let epsilon = self.options.duplicate_epsilon;
        let corners = strip_closing_run(points, epsilon);

        if self.options.detect_duplicate_points {
            // A quadrilateral needs four distinct corners; fewer after
            // stripping the closing run means boundary points collapsed.
            if corners.len() < 4 || has_coincident_pair(&corners, epsilon) {
                debug!(corner_count = corners.len(); "Shape has coincident points");
                return Err(ShapeRejection::DuplicatePoints);
            }
        }

        if self.options.detect_self_intersection && is_self_intersecting(&corners) {
            debug!("Shape boundary crosses over itself");
            return Err(ShapeRejection::SelfIntersecting);
        }

        Ok(())
    }
}

/// Drops the trailing run of points that coincide with the first point.
///
/// Closed paths repeat their starting point at the end of the expanded
/// point list; the repetitions are not corners.
fn strip_closing_run(points: &[Point], epsilon: f32) -> Vec<Point> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut end = points.len();
    while end > 1 && points[end - 1].coincides_with(*first, epsilon) {
        end -= 1;
    }

    points[..end].to_vec()
}

fn has_coincident_pair(corners: &[Point], epsilon: f32) -> bool {
    for (i, a) in corners.iter().enumerate() {
        for b in &corners[i + 1..] {
            if a.coincides_with(*b, epsilon) {
                return true;
            }
        }
    }
    false
}

/// Signed area orientation of the triangle (a, b, c).
fn orientation(a: Point, b: Point, c: Point) -> f32 {
    b.sub_point(a).cross(c.sub_point(a))
}

/// Proper crossing test: the segments intersect at a single interior point.
/// Shared endpoints and collinear overlaps do not count.
fn segments_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Whether any two non-adjacent boundary edges cross.
fn is_self_intersecting(corners: &[Point]) -> bool {
    let n = corners.len();
    if n < 4 {
        return false;
    }

    for i in 0..n {
        for j in (i + 1)..n {
            // Adjacent edges share a vertex; the wrap-around pair too.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }

            let (a1, a2) = (corners[i], corners[(i + 1) % n]);
            let (b1, b2) = (corners[j], corners[(j + 1) % n]);

            if segments_cross(a1, a2, b1, b2) {
                return true;
            }
        }
    }

    false
}
