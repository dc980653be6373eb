//! Motion Descriptors
//!
//! Inline CSS for the card stack animations. Keyframes are defined in
//! `style/card_stack.css`; this module only picks the keyframe, timing,
//! delay and offsets.

use std::time::Duration;

use crate::config::MotionConfig;
use crate::stack::{PlaceholderPanel, StackState};

pub fn easing_css(config: &MotionConfig) -> String {
    let [x1, y1, x2, y2] = config.easing;
    format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
}

/// Entrance delay of the expanded row at `index`
pub fn row_delay_ms(index: usize, config: &MotionConfig) -> u64 {
    index as u64 * u64::from(config.row_stagger_ms)
}

/// Style of one expanded row; rows leave with the same stagger they enter with
pub fn row_style(index: usize, exiting: bool, animate_enter: bool, config: &MotionConfig) -> String {
    let keyframes = match (exiting, animate_enter) {
        (true, _) => "card-row-exit",
        (false, true) => "card-row-enter",
        (false, false) => return String::new(),
    };
    format!(
        "--card-offset: {}px; animation: {} {}ms ease-out {}ms both;",
        config.row_offset_px,
        keyframes,
        config.row_duration_ms,
        row_delay_ms(index, config),
    )
}

/// Style of the expanded container. A container that was visible from the
/// first render and is not leaving gets no animation.
pub fn container_style(exiting: bool, animate_enter: bool, config: &MotionConfig) -> String {
    let keyframes = match (exiting, animate_enter) {
        (true, _) => "card-stack-conceal",
        (false, true) => "card-stack-reveal",
        (false, false) => return String::new(),
    };
    format!(
        "animation: {} {}ms {} both;",
        keyframes,
        config.container_duration_ms,
        easing_css(config),
    )
}

pub fn placeholder_style(panel: &PlaceholderPanel, config: &MotionConfig) -> String {
    format!(
        "--card-offset: {}px; animation: card-placeholder-in {}ms ease-out both;",
        panel.rise_px, config.placeholder_fade_ms,
    )
}

pub fn chevron_style(state: StackState, config: &MotionConfig) -> String {
    format!(
        "transform: rotate({}deg); transition: transform {}ms {};",
        state.chevron_degrees(),
        config.chevron_duration_ms,
        easing_css(config),
    )
}

/// How long the expanded region must stay mounted after collapsing so that
/// both the container and the last row finish their exit
pub fn exit_duration(row_count: usize, config: &MotionConfig) -> Duration {
    let last_row = match row_count {
        0 => 0,
        n => row_delay_ms(n - 1, config) + u64::from(config.row_duration_ms),
    };
    Duration::from_millis(last_row.max(u64::from(config.container_duration_ms)))
}
