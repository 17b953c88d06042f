//! Presentation adapter seam
//!
//! The core never formats output for humans. A presenter receives the
//! finished result and owns its rendering, so front-ends are swappable
//! without touching the prediction path.

use crate::models::PredictionResult;
use crate::schema::CLASS_COUNT;

/// Renders a prediction result for some output surface
pub trait ResultPresenter {
    fn present(&self, result: &PredictionResult) -> String;
}

/// Minimal presenter: label text plus the probability triple
pub struct PlainPresenter;

impl ResultPresenter for PlainPresenter {
    fn present(&self, result: &PredictionResult) -> String {
        let mut out = String::from(result.label.text());
        out.push_str(" (");
        for index in 0..CLASS_COUNT {
            if index > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{:.1}%", result.probabilities[index] * 100.0));
        }
        out.push(')');
        out
    }
}
