//! Error types for the core crate.

use thiserror::Error;

use crate::actions::AngleViolation;
use crate::geometry::{Entity, Point};

/// Errors raised by core geometry and conversion types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The geometry requires bends the machine cannot perform.
    #[error("Angle infeasible: {reason} ({} violation(s))", .violations.len())]
    AngleInfeasible {
        reason: String,
        violations: Vec<AngleViolation>,
    },

    /// An entity carries values that cannot be traced.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

fn check_point(point: &Point, what: &str) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(CoreError::InvalidGeometry(format!(
            "{} has non-finite coordinates ({}, {})",
            what, point.x, point.y
        )))
    }
}

impl Entity {
    /// Reject entities with non-finite coordinates or a negative radius.
    pub fn validate(&self) -> Result<()> {
        match self {
            Entity::Line(line) => {
                check_point(&line.start, "line start")?;
                check_point(&line.end, "line end")
            }
            Entity::Polyline(polyline) => polyline
                .vertices
                .iter()
                .try_for_each(|vertex| check_point(vertex, "polyline vertex")),
            Entity::Circle(circle) => {
                check_point(&circle.center, "circle center")?;
                if circle.radius.is_finite() && circle.radius >= 0.0 {
                    Ok(())
                } else {
                    Err(CoreError::InvalidGeometry(format!(
                        "circle radius {} must be finite and >= 0",
                        circle.radius
                    )))
                }
            }
        }
    }
}
