use serde::{Deserialize, Serialize};

use crate::conversion::Scale;

#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    pub value: f64,
    pub from: Scale,
    pub to: Scale,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub value: f64,
    pub from: Scale,
    pub to: Scale,
    pub converted: f64,
    /// Presentation string with 2 decimal places, e.g. "0°C = 32.00°F".
    pub formatted: String,
}
