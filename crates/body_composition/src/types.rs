use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

/// Skinfold protocol selector. Measurement documents carry this as a
/// free string; anything outside the three recognized tags deserializes
/// to `Unknown` (rejected by `compute`) rather than failing the whole
/// document.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Protocol {
    Jp3,
    Jp7,
    Dw4,
    #[serde(other)]
    Unknown,
}

impl Protocol {
    /// Uppercase tag as stored in documents and result formula strings.
    pub fn tag(&self) -> &'static str {
        match self {
            Protocol::Jp3 => "JP3",
            Protocol::Jp7 => "JP7",
            Protocol::Dw4 => "DW4",
            Protocol::Unknown => "UNKNOWN",
        }
    }
}

/// Density-to-fat-percentage conversion equation.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DensityEquation {
    #[default]
    Siri,
    Brozek,
}

impl DensityEquation {
    pub fn tag(&self) -> &'static str {
        match self {
            DensityEquation::Siri => "SIRI",
            DensityEquation::Brozek => "BROZEK",
        }
    }
}

/// One anthropometric assessment as read from a consultation document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompositionInput {
    /// Subject gender. Required; a document without it is a caller error.
    pub gender: Gender,
    /// Age in whole years.
    pub age: u32,
    /// Body weight in kilograms.
    pub weight: f64,
    /// Stature in centimeters. Absent or zero suppresses the bone and
    /// muscle mass estimates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Skinfold site key -> thickness in millimeters. Keys may use the
    /// canonical or alias spelling per site; unrecognized keys are
    /// ignored and absent sites contribute 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folds: Option<HashMap<String, f64>>,
    /// Protocol to evaluate. Mandatory; there is no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    /// Conversion equation; defaults to SIRI when the document omits it.
    #[serde(default)]
    pub density_equation: DensityEquation,
}

/// Immutable outcome of one protocol evaluation.
#[derive(Clone, Debug, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompositionResult {
    /// Body density in g/mL, rounded to 4 decimals.
    pub body_density: f64,
    /// Fat percentage, rounded to 2 decimals.
    pub body_fat_percentage: f64,
    /// Fat mass in kg, rounded to 2 decimals.
    pub fat_mass: f64,
    /// Lean mass in kg (weight minus fat mass), rounded to 2 decimals.
    pub lean_mass: f64,
    /// Bone mass estimate in kg; present only when height was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bone_mass: Option<f64>,
    /// Residual mass in kg (organ/fluid fraction of weight).
    pub residual_mass: f64,
    /// Muscle mass in kg; present only when bone mass was computable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// Protocol and equation actually used, e.g. `"JP7_SIRI"`.
    pub formula: String,
    /// Sum (mm) of the sites the selected protocol consumed, rounded to
    /// 1 decimal. Folds outside the protocol are not included.
    pub sum_of_folds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn protocol_unrecognized_tag_maps_to_unknown() {
        let p: Protocol = serde_json::from_value(json!("POLLOCK9")).expect("deserialize");
        assert_eq!(p, Protocol::Unknown);
    }

    #[test]
    fn protocol_tags_round_trip() {
        for (p, tag) in [
            (Protocol::Jp3, "JP3"),
            (Protocol::Jp7, "JP7"),
            (Protocol::Dw4, "DW4"),
        ] {
            assert_eq!(serde_json::to_value(p).expect("serialize"), json!(tag));
            assert_eq!(p.tag(), tag);
        }
    }

    #[test]
    fn density_equation_defaults_to_siri() {
        let input: CompositionInput = serde_json::from_value(json!({
            "gender": "FEMALE",
            "age": 25,
            "weight": 60.0,
            "folds": {"triceps": 12.0},
            "protocol": "JP7"
        }))
        .expect("deserialize");
        assert_eq!(input.density_equation, DensityEquation::Siri);
        assert_eq!(input.height, None);
    }

    #[test]
    fn input_missing_gender_fails_deserialization() {
        let res: Result<CompositionInput, _> = serde_json::from_value(json!({
            "age": 30,
            "weight": 80.0,
            "protocol": "JP3",
            "folds": {}
        }));
        assert!(res.is_err());
    }

    #[test]
    fn result_serializes_camel_case_and_omits_gated_fields() {
        let result = CompositionResult {
            body_density: 1.0677,
            body_fat_percentage: 13.61,
            fat_mass: 10.89,
            lean_mass: 69.11,
            bone_mass: None,
            residual_mass: 19.28,
            muscle_mass: None,
            formula: "JP3_SIRI".into(),
            sum_of_folds: 45.0,
        };
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["bodyDensity"], 1.0677);
        assert_eq!(value["sumOfFolds"], 45.0);
        assert!(value.get("boneMass").is_none());
        assert!(value.get("muscleMass").is_none());
    }
}
