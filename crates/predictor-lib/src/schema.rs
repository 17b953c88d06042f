//! Fixed input schema for the classifier
//!
//! The classifier is order-sensitive: every input vector must carry exactly
//! these fields, in exactly this order.

/// Number of input features expected by the model
pub const FIELD_COUNT: usize = 17;

/// Number of output classes produced by the model
pub const CLASS_COUNT: usize = 3;

/// Ordered field names of the input schema
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "HighBP",
    "HighChol",
    "CholCheck",
    "BMI",
    "Smoker",
    "Stroke",
    "HeartDiseaseorAttack",
    "PhysActivity",
    "Fruits",
    "Veggies",
    "HvyAlcoholConsump",
    "GenHlth",
    "MentHlth",
    "PhysHlth",
    "DiffWalk",
    "Sex",
    "Age",
];

/// Position of a field in the schema, if it is part of it
pub fn field_index(name: &str) -> Option<usize> {
    FIELD_NAMES.iter().position(|f| *f == name)
}
