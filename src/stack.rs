//! Card Stack Model
//!
//! Pure view model: the two toggle states and what is visible in each.

use crate::models::Activity;

/// Number of decorative panels drawn behind the summary row when collapsed
pub const PLACEHOLDER_COUNT: usize = 3;

/// Expand/collapse state of the stack
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackState {
    #[default]
    Collapsed,
    Expanded,
}

impl StackState {
    pub fn toggled(self) -> Self {
        match self {
            StackState::Collapsed => StackState::Expanded,
            StackState::Expanded => StackState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == StackState::Expanded
    }

    pub fn button_label(self) -> &'static str {
        match self {
            StackState::Collapsed => "Show All",
            StackState::Expanded => "Hide",
        }
    }

    pub fn chevron_degrees(self) -> u16 {
        match self {
            StackState::Collapsed => 0,
            StackState::Expanded => 180,
        }
    }

    pub fn placeholder_count(self) -> usize {
        match self {
            StackState::Collapsed => PLACEHOLDER_COUNT,
            StackState::Expanded => 0,
        }
    }
}

/// Summary row plus the rows hidden behind it
pub fn split_summary(activities: &[Activity]) -> Option<(&Activity, &[Activity])> {
    activities.split_first()
}

/// Everything visible for a given state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackLayout<'a> {
    pub summary: &'a Activity,
    pub placeholder_count: usize,
    pub rows: &'a [Activity],
}

impl<'a> StackLayout<'a> {
    /// `None` when there is no activity to summarize
    pub fn build(activities: &'a [Activity], state: StackState) -> Option<Self> {
        let (summary, rest) = split_summary(activities)?;
        Some(Self {
            summary,
            placeholder_count: state.placeholder_count(),
            rows: if state.is_expanded() { rest } else { &[] },
        })
    }
}

/// Geometry of one decorative panel, in Tailwind classes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderPanel {
    pub class: &'static str,
    /// Vertical offset (px) the panel rises from while fading in
    pub rise_px: u32,
}

pub const PLACEHOLDER_PANELS: [PlaceholderPanel; PLACEHOLDER_COUNT] = [
    PlaceholderPanel { class: "top-2 left-2 right-2 z-10", rise_px: 0 },
    PlaceholderPanel { class: "top-7 left-4 right-4 z-0", rise_px: 0 },
    PlaceholderPanel { class: "top-5 left-2 right-2 z-0", rise_px: 10 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ACTIVITIES;

    /// State reached from a fresh mount after `clicks` toggles
    fn after_clicks(clicks: usize) -> StackState {
        if clicks % 2 == 0 {
            StackState::Collapsed
        } else {
            StackState::Expanded
        }
    }

    fn titles(rows: &[Activity]) -> Vec<&'static str> {
        rows.iter().map(|a| a.title).collect()
    }

    #[test]
    fn test_initial_layout() {
        let layout = StackLayout::build(ACTIVITIES, StackState::default()).unwrap();
        assert_eq!(layout.summary, &ACTIVITIES[0]);
        assert_eq!(layout.placeholder_count, 3);
        assert!(layout.rows.is_empty());
        assert_eq!(StackState::default().button_label(), "Show All");
        assert_eq!(StackState::default().chevron_degrees(), 0);
    }

    #[test]
    fn test_expanded_layout() {
        let state = StackState::Collapsed.toggled();
        let layout = StackLayout::build(ACTIVITIES, state).unwrap();
        assert_eq!(layout.placeholder_count, 0);
        assert_eq!(titles(layout.rows), vec!["Boating", "Barbecue"]);
        assert_eq!(layout.rows[0], ACTIVITIES[1]);
        assert_eq!(layout.rows[1], ACTIVITIES[2]);
        assert_eq!(state.button_label(), "Hide");
        assert_eq!(state.chevron_degrees(), 180);
    }

    #[test]
    fn test_round_trip_restores_initial() {
        let initial = StackLayout::build(ACTIVITIES, StackState::Collapsed).unwrap();
        let state = StackState::Collapsed.toggled().toggled();
        assert_eq!(StackLayout::build(ACTIVITIES, state).unwrap(), initial);
    }

    #[test]
    fn test_state_follows_click_parity() {
        let mut state = StackState::default();
        for clicks in 1..=9 {
            state = state.toggled();
            assert_eq!(state, after_clicks(clicks));
            assert_eq!(state.is_expanded(), clicks % 2 == 1);
        }
        assert_eq!(after_clicks(0), StackState::Collapsed);
    }

    #[test]
    fn test_summary_independent_of_state() {
        let collapsed = StackLayout::build(ACTIVITIES, StackState::Collapsed).unwrap();
        let expanded = StackLayout::build(ACTIVITIES, StackState::Expanded).unwrap();
        assert_eq!(collapsed.summary, expanded.summary);
        // The summary is never repeated among the expanded rows
        assert!(expanded.rows.iter().all(|a| a.id != expanded.summary.id));
    }

    #[test]
    fn test_empty_list_has_no_layout() {
        assert!(StackLayout::build(&[], StackState::Expanded).is_none());
    }

    #[test]
    fn test_single_activity_expands_to_nothing() {
        let layout = StackLayout::build(&ACTIVITIES[..1], StackState::Expanded).unwrap();
        assert!(layout.rows.is_empty());
        assert_eq!(layout.placeholder_count, 0);
    }

    #[test]
    fn test_placeholder_panels_match_count() {
        assert_eq!(PLACEHOLDER_PANELS.len(), StackState::Collapsed.placeholder_count());
        assert_eq!(PLACEHOLDER_PANELS.iter().filter(|p| p.rise_px > 0).count(), 1);
    }
}
