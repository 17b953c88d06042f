//! Core data models for the predictor

use crate::errors::SchemaMismatch;
use crate::schema::{field_index, CLASS_COUNT, FIELD_COUNT, FIELD_NAMES};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered input vector of the 17 health indicators
///
/// All construction paths guarantee the schema invariant: every field
/// present, no extras, values stored in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f32; FIELD_COUNT],
}

impl FeatureVector {
    /// Vector with every field at its 0.0 default
    pub fn zeroed() -> Self {
        Self {
            values: [0.0; FIELD_COUNT],
        }
    }

    /// Build from values already in schema order
    pub fn from_values(values: [f32; FIELD_COUNT]) -> Self {
        Self { values }
    }

    /// Build from (name, value) pairs, enforcing count, names and order
    pub fn from_pairs(pairs: &[(&str, f32)]) -> Result<Self, SchemaMismatch> {
        if pairs.len() != FIELD_COUNT {
            return Err(SchemaMismatch::FieldCount {
                expected: FIELD_COUNT,
                actual: pairs.len(),
            });
        }
        let mut values = [0.0; FIELD_COUNT];
        for (position, (name, value)) in pairs.iter().enumerate() {
            if *name != FIELD_NAMES[position] {
                return Err(match field_index(name) {
                    Some(expected_at) => SchemaMismatch::OutOfOrder {
                        field: name.to_string(),
                        position,
                        expected_at,
                    },
                    None => SchemaMismatch::UnknownField {
                        field: name.to_string(),
                    },
                });
            }
            values[position] = *value;
        }
        Ok(Self { values })
    }

    /// Build from name-keyed entries; order is restored from the schema
    pub fn from_named<I>(entries: I) -> Result<Self, SchemaMismatch>
    where
        I: IntoIterator<Item = (String, f32)>,
    {
        let mut values = [0.0; FIELD_COUNT];
        let mut seen = [false; FIELD_COUNT];
        for (name, value) in entries {
            let index = field_index(&name).ok_or(SchemaMismatch::UnknownField { field: name })?;
            values[index] = value;
            seen[index] = true;
        }
        if let Some(missing) = seen.iter().position(|s| !*s) {
            return Err(SchemaMismatch::MissingField {
                field: FIELD_NAMES[missing].to_string(),
            });
        }
        Ok(Self { values })
    }

    /// Value of a schema field, if the name is part of the schema
    pub fn get(&self, name: &str) -> Option<f32> {
        field_index(name).map(|i| self.values[i])
    }

    /// Overwrite one schema field
    pub fn set(&mut self, name: &str, value: f32) -> Result<(), SchemaMismatch> {
        let index = field_index(name).ok_or_else(|| SchemaMismatch::UnknownField {
            field: name.to_string(),
        })?;
        self.values[index] = value;
        Ok(())
    }

    /// Values in schema order
    pub fn values(&self) -> &[f32; FIELD_COUNT] {
        &self.values
    }

    /// Iterate (name, value) in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FIELD_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Boundary check before inference: every value must be finite
    pub fn validate_numeric(&self) -> Result<(), SchemaMismatch> {
        for (name, value) in self.iter() {
            if !value.is_finite() {
                return Err(SchemaMismatch::NonFinite {
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VectorVisitor;

        impl<'de> Visitor<'de> for VectorVisitor {
            type Value = FeatureVector;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of the {} schema fields to numbers", FIELD_COUNT)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, f32)> = Vec::with_capacity(FIELD_COUNT);
                while let Some(entry) = access.next_entry::<String, f32>()? {
                    entries.push(entry);
                }
                FeatureVector::from_named(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(VectorVisitor)
    }
}

/// Risk class emitted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    NoDiabetes,
    PreDiabetes,
    Diabetes,
}

impl RiskLabel {
    /// All labels in class-index order
    pub const ALL: [RiskLabel; CLASS_COUNT] = [
        RiskLabel::NoDiabetes,
        RiskLabel::PreDiabetes,
        RiskLabel::Diabetes,
    ];

    /// Static label table {0, 1, 2}
    pub fn from_class_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(RiskLabel::NoDiabetes),
            1 => Some(RiskLabel::PreDiabetes),
            2 => Some(RiskLabel::Diabetes),
            _ => None,
        }
    }

    /// Position of this label in the probability triple
    pub fn class_index(&self) -> usize {
        match self {
            RiskLabel::NoDiabetes => 0,
            RiskLabel::PreDiabetes => 1,
            RiskLabel::Diabetes => 2,
        }
    }

    /// Display text
    pub fn text(&self) -> &'static str {
        match self {
            RiskLabel::NoDiabetes => "No Diabetes",
            RiskLabel::PreDiabetes => "Pre-Diabetes",
            RiskLabel::Diabetes => "Diabetes",
        }
    }

    /// Semantic result color, keyed by label
    pub fn color(&self) -> LabelColor {
        match self {
            RiskLabel::NoDiabetes => LabelColor::Green,
            RiskLabel::PreDiabetes => LabelColor::Amber,
            RiskLabel::Diabetes => LabelColor::Red,
        }
    }
}

/// Semantic color for presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Green,
    Amber,
    Red,
}

/// Output of one prediction call
///
/// Created fresh per invocation and never mutated. The probability triple
/// is in class-index order and sums to 1.0 within tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    pub probabilities: [f32; CLASS_COUNT],
    pub model_version: String,
    pub generated_at: i64,
}
