use axum::{response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LearnSection {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

/// Static educational content about the three temperature scales,
/// served to the UI's "Learn" tab.
pub static LEARN_SECTIONS: &[LearnSection] = &[
    LearnSection {
        title: "Celsius (°C)",
        points: &[
            "Also known as centigrade",
            "Defined by the freezing point of water (0°C) and the boiling point of water (100°C)",
            "Commonly used in most countries for everyday temperature measurements",
            "Created by Swedish astronomer Anders Celsius in 1742",
        ],
    },
    LearnSection {
        title: "Fahrenheit (°F)",
        points: &[
            "Developed by German physicist Daniel Gabriel Fahrenheit in 1724",
            "Water freezes at 32°F and boils at 212°F at standard atmospheric pressure",
            "Commonly used in the United States for everyday temperature measurements",
        ],
    },
    LearnSection {
        title: "Kelvin (K)",
        points: &[
            "An absolute temperature scale, meaning 0K is the lowest possible temperature (absolute zero)",
            "Proposed by William Thomson, 1st Baron Kelvin, in 1848",
            "Commonly used in scientific contexts",
            "One kelvin has the same magnitude as one degree Celsius",
        ],
    },
    LearnSection {
        title: "Interesting Facts",
        points: &[
            "The temperature at which Celsius and Fahrenheit scales intersect is -40°C/-40°F",
            "Absolute zero (0K) is approximately -273.15°C or -459.67°F",
            "The Rankine scale is an absolute temperature scale using Fahrenheit degrees",
        ],
    },
];

/// GET /api/v1/learn
pub async fn learn() -> impl IntoResponse {
    Json(LEARN_SECTIONS)
}
