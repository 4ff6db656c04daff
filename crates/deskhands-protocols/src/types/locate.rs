//! Elements located by the agent in a captured image.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rect;

/// An element the agent located in the most recent capture.
///
/// Coordinates are in capture-image space. An element without a `center`
/// is unlocated and actions that need a position skip it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocatedElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocatedElement {
    /// An element located at an image point.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            center: Some([x, y]),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_located(&self) -> bool {
        self.center.is_some()
    }
}

impl fmt::Display for LocatedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.description, &self.id, self.center) {
            (Some(desc), _, _) => write!(f, "{}", desc),
            (None, Some(id), _) => write!(f, "#{}", id),
            (None, None, Some([x, y])) => write!(f, "[{}, {}]", x, y),
            (None, None, None) => write!(f, "<unlocated>"),
        }
    }
}
