//! Motion Configuration
//!
//! Timing constants for every card stack animation. The host element may
//! override any subset through a JSON `data-motion` attribute.

use serde::Deserialize;

/// Attribute on the host element carrying JSON overrides
pub const MOTION_ATTRIBUTE: &str = "data-motion";

/// Animation timings (milliseconds unless noted)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Height/opacity reveal of the expanded container
    pub container_duration_ms: u32,
    /// cubic-bezier control points shared by container and chevron
    pub easing: [f32; 4],
    /// Fade/slide of a single expanded row
    pub row_duration_ms: u32,
    /// Delay added per row index
    pub row_stagger_ms: u32,
    /// Distance (px) rows slide from
    pub row_offset_px: u32,
    /// Fade-in of the collapsed placeholder panels
    pub placeholder_fade_ms: u32,
    /// Chevron rotation
    pub chevron_duration_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            container_duration_ms: 500,
            easing: [0.19, 1.0, 0.22, 1.0],
            row_duration_ms: 300,
            row_stagger_ms: 100,
            row_offset_px: 20,
            placeholder_fade_ms: 300,
            chevron_duration_ms: 410,
        }
    }
}

impl MotionConfig {
    /// Parse the `data-motion` attribute. Absent or blank means defaults.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, String> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => serde_json::from_str(json).map_err(|e| e.to_string()),
        }
    }
}
