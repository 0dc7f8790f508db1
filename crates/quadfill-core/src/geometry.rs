/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// The z-component of the cross product of the two points taken as
    /// vectors from the origin. Positive when `other` lies counter-clockwise
    /// of `self`, negative when clockwise, zero when collinear.
    pub fn cross(self, other: Point) -> f32 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Euclidean distance between this point and another point
    pub fn distance_to(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Whether this point lies within `epsilon` of another point.
    pub fn coincides_with(self, other: Point, epsilon: f32) -> bool {
        self.distance_to(other) <= epsilon
    }
}
