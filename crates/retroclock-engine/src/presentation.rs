use chrono::NaiveDateTime;
use retroclock_types::{
    ClockDigits, ClockOptions, ColorSelection, DisplayFormat, Palette, PaletteColor,
};
use serde::Serialize;

use crate::calendar::format_date;
use crate::decompose::decompose;

/// Owned display state of one clock face.
///
/// Digits are only ever replaced wholesale by a fresh decomposition; callers
/// learn whether anything visible changed from the return values.
#[derive(Debug, Clone)]
pub struct PresentationState {
    palette: Palette,
    color: ColorSelection,
    format: DisplayFormat,
    show_seconds: bool,
    show_date: bool,
    blink_enabled: bool,
    colon_visible: bool,
    digits: ClockDigits,
    sampled_at: NaiveDateTime,
}

/// Immutable copy of what should be on screen right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationSnapshot {
    pub time: String,
    pub digits: ClockDigits,
    pub format: DisplayFormat,
    pub color: PaletteColor,
    pub colon_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl PresentationState {
    pub fn new(options: &ClockOptions, now: NaiveDateTime) -> Self {
        let palette = options.palette.clone();
        let color = ColorSelection::new(options.initial_color.index() % palette.len());

        Self {
            digits: decompose(&now, options.initial_format, options.show_seconds),
            palette,
            color,
            format: options.initial_format,
            show_seconds: options.show_seconds,
            show_date: options.show_date,
            blink_enabled: options.blink_colon,
            colon_visible: true,
            sampled_at: now,
        }
    }

    /// Recomputes the digits for `now`.
    ///
    /// Returns `true` when a digit, the meridiem or (with the date shown) the
    /// calendar day changed.
    pub fn refresh(&mut self, now: NaiveDateTime) -> bool {
        let next = decompose(&now, self.format, self.show_seconds);
        let date_changed = self.show_date && now.date() != self.sampled_at.date();
        self.sampled_at = now;

        if next == self.digits && !date_changed {
            return false;
        }
        self.digits = next;
        true
    }

    /// Flips 12h/24h and recomputes immediately so the face never lags the format.
    pub fn toggle_format(&mut self, now: NaiveDateTime) -> DisplayFormat {
        self.format = self.format.toggled();
        self.colon_visible = true;
        self.sampled_at = now;
        self.digits = decompose(&now, self.format, self.show_seconds);
        self.format
    }

    pub fn toggle_color(&mut self) -> PaletteColor {
        self.color = self.color.advanced(self.palette.len());
        self.palette.color(self.color)
    }

    /// Flips the colon when blinking is enabled; otherwise holds it visible.
    pub fn toggle_colon(&mut self) -> bool {
        self.colon_visible = if self.blink_enabled {
            !self.colon_visible
        } else {
            true
        };
        self.colon_visible
    }

    pub fn digits(&self) -> ClockDigits {
        self.digits
    }

    pub fn format(&self) -> DisplayFormat {
        self.format
    }

    pub fn color(&self) -> PaletteColor {
        self.palette.color(self.color)
    }

    pub fn color_selection(&self) -> ColorSelection {
        self.color
    }

    pub fn colon_visible(&self) -> bool {
        self.colon_visible
    }

    pub fn blink_enabled(&self) -> bool {
        self.blink_enabled
    }

    pub fn sampled_at(&self) -> NaiveDateTime {
        self.sampled_at
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            time: self.digits.to_string(),
            digits: self.digits,
            format: self.format,
            color: self.color(),
            colon_visible: self.colon_visible,
            date: self.show_date.then(|| format_date(&self.sampled_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn new_year() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_initial_state_follows_options() {
        let options = ClockOptions::default().with_format(DisplayFormat::TwelveHour);
        let state = PresentationState::new(&options, new_year());
        assert_eq!(state.digits().to_string(), "12:00 AM");
        assert!(state.colon_visible());
        assert_eq!(state.color().name, "red");
    }

    #[test]
    fn test_refresh_reports_only_visible_changes() {
        let mut state = PresentationState::new(&ClockOptions::default(), new_year());
        assert!(!state.refresh(new_year() + Duration::seconds(30)));
        assert!(state.refresh(new_year() + Duration::seconds(60)));
        assert_eq!(state.digits().to_string(), "00:01");
        assert!(!state.refresh(new_year() + Duration::seconds(61)));
    }

    #[test]
    fn test_refresh_with_seconds_changes_every_second() {
        let options = ClockOptions::default().with_seconds(true);
        let mut state = PresentationState::new(&options, new_year());
        assert!(state.refresh(new_year() + Duration::seconds(1)));
        assert_eq!(state.digits().to_string(), "00:00:01");
    }

    #[test]
    fn test_date_change_is_visible_when_date_shown() {
        let options = ClockOptions::default().with_date(true);
        let start = new_year() + Duration::days(1) - Duration::seconds(1);
        let mut state = PresentationState::new(&options, start);
        assert_eq!(state.snapshot().date.as_deref(), Some("01/01/2024"));
        assert!(state.refresh(start + Duration::seconds(1)));
        assert_eq!(state.snapshot().date.as_deref(), Some("01/02/2024"));
    }

    #[test]
    fn test_toggle_format_recomputes_immediately() {
        let options = ClockOptions::default().with_format(DisplayFormat::TwelveHour);
        let mut state = PresentationState::new(&options, new_year());
        assert_eq!(state.toggle_format(new_year()), DisplayFormat::TwentyFourHour);
        assert_eq!(state.digits().to_string(), "00:00");
        state.toggle_format(new_year());
        assert_eq!(state.digits().to_string(), "12:00 AM");
    }

    #[test]
    fn test_toggle_format_resets_colon() {
        let mut state = PresentationState::new(&ClockOptions::default(), new_year());
        assert!(!state.toggle_colon());
        state.toggle_format(new_year());
        assert!(state.colon_visible());
    }

    #[test]
    fn test_toggle_color_full_cycle_returns_to_start() {
        let options = ClockOptions::default().with_color(ColorSelection::new(2));
        let mut state = PresentationState::new(&options, new_year());
        let start = state.color();
        let names: Vec<_> = (0..5).map(|_| state.toggle_color().name).collect();
        assert_eq!(names, vec!["amber", "magenta", "red", "green", "cyan"]);
        assert_eq!(state.color(), start);
    }

    #[test]
    fn test_colon_held_when_blink_disabled() {
        let options = ClockOptions::default().with_blink(false);
        let mut state = PresentationState::new(&options, new_year());
        for _ in 0..3 {
            assert!(state.toggle_colon());
        }
    }

    #[test]
    fn test_out_of_range_initial_color_wraps() {
        let options = ClockOptions::default().with_color(ColorSelection::new(7));
        let state = PresentationState::new(&options, new_year());
        assert_eq!(state.color_selection().index(), 2);
    }
}
