//! Detection domain types
//!
//! The structured verdict produced by the image-detection service. The wire
//! format uses human-readable category and priority names, and a bounding box
//! that is either an object of unit-interval coordinates or the literal
//! string "none" when no damage region exists.

use serde::{Deserialize, Serialize};

/// Issue category assigned by the detection service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentKind {
    #[serde(rename = "Damaged Baggage")]
    DamagedBaggage,
    #[serde(rename = "Damaged Aircraft Infrastructure")]
    DamagedAircraftInfrastructure,
    #[serde(rename = "Lost Baggage")]
    LostBaggage,
}

/// Severity assigned by the detection service
///
/// `None` is the explicit no-actionable-issue signal: the workflow's branch
/// decision keys off this exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    None,
    Low,
    Medium,
    High,
    Severe,
}

impl Priority {
    /// Whether this priority warrants generating and submitting a report
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Priority::None)
    }
}

/// Damage region within the analyzed image
///
/// Coordinates are fractions of image dimensions in `[0, 1]`. The detection
/// service sends the string `"none"` instead of an object when no region
/// applies; the untagged representation accepts both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundingBox {
    Region {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },
    Absent(String),
}

impl BoundingBox {
    pub fn is_region(&self) -> bool {
        matches!(self, BoundingBox::Region { .. })
    }
}

/// Full detection verdict for one analyzed image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(rename = "type")]
    pub kind: IncidentKind,
    pub item: String,
    pub description: String,
    pub priority: Priority,
    pub bbox: Option<BoundingBox>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_detection() {
        let json = r#"{
            "type": "Damaged Baggage",
            "item": "Blue suitcase",
            "description": "Large crack across the front shell.",
            "priority": "High",
            "bbox": {"x_min": 0.2, "y_min": 0.3, "x_max": 0.8, "y_max": 0.7}
        }"#;

        let result: DetectionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.kind, IncidentKind::DamagedBaggage);
        assert_eq!(result.priority, Priority::High);
        assert!(result.priority.is_actionable());
        assert!(result.bbox.unwrap().is_region());
    }

    #[test]
    fn test_parse_no_damage_sentinel() {
        let json = r#"{
            "type": "Damaged Aircraft Infrastructure",
            "item": "Overhead compartment",
            "description": "No damage detected.",
            "priority": "None",
            "bbox": "none"
        }"#;

        let result: DetectionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.priority, Priority::None);
        assert!(!result.priority.is_actionable());
        assert_eq!(result.bbox, Some(BoundingBox::Absent("none".to_string())));
    }

    #[test]
    fn test_priority_roundtrips_wire_names() {
        let value = serde_json::to_value(Priority::Severe).unwrap();
        assert_eq!(value, serde_json::json!("Severe"));
        let value = serde_json::to_value(Priority::None).unwrap();
        assert_eq!(value, serde_json::json!("None"));
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let result = serde_json::from_str::<Priority>("\"Catastrophic\"");
        assert!(result.is_err());
    }
}
