//! Built-in input templates
//!
//! Named preset vectors used only to pre-fill the form. Never persisted or
//! mutated after creation.

use crate::models::FeatureVector;
use serde::Serialize;

/// Named preset input vector
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    name: &'static str,
    vector: FeatureVector,
}

impl Template {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// A fresh copy of the preset vector
    pub fn vector(&self) -> FeatureVector {
        self.vector.clone()
    }

    /// The built-in presets
    pub fn builtin() -> Vec<Template> {
        vec![
            Template {
                name: "Low Risk",
                // HighBP, HighChol, CholCheck, BMI, Smoker, Stroke,
                // HeartDiseaseorAttack, PhysActivity, Fruits, Veggies,
                // HvyAlcoholConsump, GenHlth, MentHlth, PhysHlth, DiffWalk,
                // Sex, Age
                vector: FeatureVector::from_values([
                    0.0, 0.0, 1.0, 23.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 0.0,
                    1.0, 28.0,
                ]),
            },
            Template {
                name: "Medium Risk",
                vector: FeatureVector::from_values([
                    1.0, 0.0, 1.0, 29.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 3.0, 5.0, 4.0, 0.0,
                    0.0, 45.0,
                ]),
            },
            Template {
                name: "High Risk",
                vector: FeatureVector::from_values([
                    1.0, 1.0, 1.0, 34.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 5.0, 15.0, 20.0, 1.0,
                    1.0, 62.0,
                ]),
            },
        ]
    }

    /// Look up a built-in preset; separators and case are normalized
    pub fn find(name: &str) -> Option<Template> {
        let wanted = name.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::builtin()
            .into_iter()
            .find(|t| t.name.to_ascii_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_builtin_templates() {
        let names: Vec<&str> = Template::builtin().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Low Risk", "Medium Risk", "High Risk"]);
    }

    #[test]
    fn test_low_risk_values() {
        let vector = Template::find("Low Risk").unwrap().vector();
        assert_eq!(vector.get("CholCheck"), Some(1.0));
        assert_eq!(vector.get("BMI"), Some(23.0));
        assert_eq!(vector.get("GenHlth"), Some(2.0));
        assert_eq!(vector.get("Sex"), Some(1.0));
        assert_eq!(vector.get("Age"), Some(28.0));
        assert_eq!(vector.get("HighBP"), Some(0.0));
    }

    #[test]
    fn test_find_normalizes_name() {
        assert!(Template::find("low risk").is_some());
        assert!(Template::find("low-risk").is_some());
        assert!(Template::find("HIGH_RISK").is_some());
        assert!(Template::find(" Medium Risk ").is_some());
        assert!(Template::find("no such").is_none());
    }

    #[test]
    fn test_templates_are_numeric() {
        for template in Template::builtin() {
            assert!(
                template.vector().validate_numeric().is_ok(),
                "template {} has a non-finite value",
                template.name()
            );
        }
    }
}
