//! Typed path commands and path-level diagnostics.
//!
//! A [`Path`] is an ordered sequence of [`PathCommand`]s describing the
//! boundary traversal of a shape. The describer output is purely
//! informational and never drives control flow.

use crate::geometry::Point;

/// One element of a path traversal.
///
/// The command set is closed; matches over it are exhaustive, so an
/// unrecognized command kind cannot reach the describer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Draw a straight segment to the given point.
    LineTo(Point),
    /// Draw a cubic curve to `to`, shaped by two control points.
    CurveTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Close the current subpath back to its starting point.
    ClosePath,
}

impl PathCommand {
    /// Renders this command as a human-readable diagnostic string.
    ///
    /// Deterministic for identical input points. Curve commands report the
    /// endpoint only.
    pub fn describe(&self) -> String {
        match self {
            PathCommand::MoveTo(point) => {
                format!("MOVE TO: x:{}\t\ty: {}", point.x(), point.y())
            }
            PathCommand::LineTo(point) => {
                format!("LINE TO: x:{}\t\ty: {}", point.x(), point.y())
            }
            PathCommand::CurveTo { to, .. } => {
                format!("CURVE TO: x:{}\t\ty: {}", to.x(), to.y())
            }
            PathCommand::ClosePath => "CLOSE PATH".to_string(),
        }
    }

    /// The point this command moves the pen to, if any.
    pub fn endpoint(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
            PathCommand::CurveTo { to, .. } => Some(*to),
            PathCommand::ClosePath => None,
        }
    }
}

/// An ordered sequence of path commands.
///
/// Ordering is significant: it defines the traversal order of the shape
/// boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates a path from a command sequence.
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Returns the commands in traversal order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the number of commands in the path.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether this path is a well-formed closed path.
    ///
    /// Invariant: exactly one `ClosePath`, in final position, preceded by at
    /// least one `MoveTo`.
    pub fn is_closed(&self) -> bool {
        let close_count = self
            .commands
            .iter()
            .filter(|command| matches!(command, PathCommand::ClosePath))
            .count();

        close_count == 1
            && matches!(self.commands.last(), Some(PathCommand::ClosePath))
            && self
                .commands
                .iter()
                .any(|command| matches!(command, PathCommand::MoveTo(_)))
    }

    /// Describes every command in traversal order.
    pub fn describe_all(&self) -> Vec<String> {
        self.commands.iter().map(PathCommand::describe).collect()
    }
}
