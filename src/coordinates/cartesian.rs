use std::fmt;

use nalgebra::{distance, distance_squared, Point2};

/// Point of the projection plane.
#[derive(Debug, Clone, Copy)]
pub struct CartesianCoordinates(Point2<f64>);

impl CartesianCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn distance_to(&self, that: &CartesianCoordinates) -> f64 {
        distance(&self.0, &that.0)
    }

    /// Squared Euclidean distance, cheaper than [`Self::distance_to`] for comparisons.
    pub fn distance_squared_to(&self, that: &CartesianCoordinates) -> f64 {
        distance_squared(&self.0, &that.0)
    }
}

impl From<Point2<f64>> for CartesianCoordinates {
    fn from(p: Point2<f64>) -> Self {
        Self(p)
    }
}

impl fmt::Display for CartesianCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(abs={:.4}, ord={:.4})", self.x(), self.y())
    }
}
