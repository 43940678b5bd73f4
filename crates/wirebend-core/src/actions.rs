//! Machine instructions and conversion results
//!
//! The serialized form of [`Action`] is the contract consumed by the
//! execution service: `{"action": "AVANCER" | "PLIER" | "COUPER", "valeur"?: n}`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::units::ROTATION_LIMIT_DEGREES;

/// A single instruction for the bending head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Action {
    /// Feed the wire forward by `distance` drawing units.
    #[serde(rename = "AVANCER")]
    Advance {
        #[serde(rename = "valeur")]
        distance: f64,
    },
    /// Change heading by a signed angle in degrees.
    #[serde(rename = "PLIER")]
    Bend {
        #[serde(rename = "valeur")]
        angle: f64,
    },
    /// Sever the wire.
    #[serde(rename = "COUPER")]
    Cut,
    /// Marker left in place of a drawing element that could not be parsed.
    #[serde(rename = "ERREUR_PARSING_CHEMIN")]
    PathError { details: String },
}

impl Action {
    pub fn advance(distance: f64) -> Self {
        Action::Advance { distance }
    }

    pub fn bend(angle: f64) -> Self {
        Action::Bend { angle }
    }

    pub fn is_advance(&self) -> bool {
        matches!(self, Action::Advance { .. })
    }

    pub fn is_bend(&self) -> bool {
        matches!(self, Action::Bend { .. })
    }
}

/// A bend that the hardware cannot perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleViolation {
    /// Index of the entity being traced, `None` for the start placement.
    pub entity_index: Option<usize>,
    /// Index of the edge inside the entity, when the entity has edges.
    pub segment_index: Option<usize>,
    /// Heading change the geometry requires, in degrees.
    pub required_angle: f64,
    /// Largest heading change allowed in a single bend.
    pub allowed_angle: f64,
}

/// Payload returned when a drawing cannot be converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFailure {
    #[serde(rename = "message")]
    pub reason: String,
    pub invalid_angles: Vec<AngleViolation>,
    pub max_allowed_angle: f64,
}

impl ConversionFailure {
    pub fn new(reason: impl Into<String>, invalid_angles: Vec<AngleViolation>) -> Self {
        Self {
            reason: reason.into(),
            invalid_angles,
            max_allowed_angle: ROTATION_LIMIT_DEGREES,
        }
    }
}

/// Outcome of converting a drawing into actions.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult {
    Success(Vec<Action>),
    Failure(ConversionFailure),
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success(_))
    }

    /// Actions of a successful conversion.
    pub fn actions(&self) -> Option<&[Action]> {
        match self {
            ConversionResult::Success(actions) => Some(actions),
            ConversionResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ConversionFailure> {
        match self {
            ConversionResult::Success(_) => None,
            ConversionResult::Failure(failure) => Some(failure),
        }
    }

    /// Turn the outcome into a `Result`, mapping failures to [`CoreError::AngleInfeasible`].
    pub fn into_result(self) -> Result<Vec<Action>, CoreError> {
        match self {
            ConversionResult::Success(actions) => Ok(actions),
            ConversionResult::Failure(failure) => Err(CoreError::AngleInfeasible {
                reason: failure.reason,
                violations: failure.invalid_angles,
            }),
        }
    }
}
