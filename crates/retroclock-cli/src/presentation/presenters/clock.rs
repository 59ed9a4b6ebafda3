use chrono::NaiveDate;
use retroclock_engine::{Clicker, PresentationSnapshot, decompose_date, digit_pattern, format_date};
use retroclock_runtime::ControllerState;
use retroclock_types::{DigitValue, PaletteColor, Segment};

use crate::presentation::view_models::{
    CalendarViewModel, ClickerViewModel, ClockFaceViewModel, DigitEntryViewModel,
    DigitGalleryViewModel, LedColorViewModel, StatusBarViewModel, TuiScreenViewModel,
};

pub fn present_color(color: PaletteColor) -> LedColorViewModel {
    LedColorViewModel {
        name: color.name.to_string(),
        hex: color.rgb.to_string(),
        rgb: color.rgb,
    }
}

pub fn present_clock_face(snapshot: &PresentationSnapshot) -> ClockFaceViewModel {
    ClockFaceViewModel {
        time: snapshot.time.clone(),
        format: snapshot.format,
        digits: snapshot.digits,
        colon_visible: snapshot.colon_visible,
        color: present_color(snapshot.color),
        date: snapshot.date.clone(),
    }
}

pub fn present_digit_gallery(color: PaletteColor, columns: usize) -> DigitGalleryViewModel {
    let digits = (0u8..10)
        .map(DigitValue::from)
        .map(|digit| {
            let pattern = digit_pattern(digit);
            let segments = Segment::ALL
                .iter()
                .filter(|segment| pattern.is_on(**segment))
                .map(|segment| segment_letter(*segment))
                .collect();
            DigitEntryViewModel { digit, segments }
        })
        .collect();

    DigitGalleryViewModel {
        digits,
        color: present_color(color),
        columns: columns.clamp(1, 10),
    }
}

pub fn present_calendar(date: NaiveDate, color: PaletteColor) -> CalendarViewModel {
    CalendarViewModel {
        date: format_date(&date),
        digits: decompose_date(&date),
        color: present_color(color),
    }
}

pub fn present_clicker(clicker: &Clicker) -> ClickerViewModel {
    ClickerViewModel {
        count: clicker.count(),
        digit: clicker.digit(),
        can_increment: clicker.can_increment(),
        can_decrement: clicker.can_decrement(),
        color: present_color(clicker.color()),
    }
}

pub fn present_screen(
    snapshot: &PresentationSnapshot,
    state: ControllerState,
    clicker: Option<&Clicker>,
) -> TuiScreenViewModel {
    TuiScreenViewModel {
        face: present_clock_face(snapshot),
        clicker: clicker.map(present_clicker),
        status_bar: StatusBarViewModel {
            status: state.into(),
            format: snapshot.format,
            color_name: snapshot.color.name.to_string(),
            show_clicker: clicker.is_some(),
        },
    }
}

fn segment_letter(segment: Segment) -> char {
    char::from(b'a' + segment.index() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ClockStatus;
    use retroclock_engine::PresentationState;
    use retroclock_types::{ClockOptions, DisplayFormat, palette};

    #[test]
    fn test_gallery_segment_letters() {
        let gallery = present_digit_gallery(palette::RED, 10);
        let letters: Vec<_> = gallery.digits.iter().map(|d| d.segments.as_str()).collect();
        assert_eq!(
            letters,
            [
                "abcdef", "bc", "abdeg", "abcdg", "bcfg", "acdfg", "acdefg", "abc", "abcdefg",
                "abcdfg"
            ]
        );
    }

    #[test]
    fn test_gallery_columns_are_clamped() {
        assert_eq!(present_digit_gallery(palette::RED, 0).columns, 1);
        assert_eq!(present_digit_gallery(palette::RED, 40).columns, 10);
    }

    #[test]
    fn test_screen_reflects_snapshot_and_state() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(13, 45, 0)
            .unwrap();
        let options = ClockOptions::default().with_format(DisplayFormat::TwelveHour);
        let snapshot = PresentationState::new(&options, now).snapshot();
        let clicker = Clicker::default();

        let screen = present_screen(&snapshot, ControllerState::Suspended, Some(&clicker));
        assert_eq!(screen.face.time, "01:45 PM");
        assert_eq!(screen.face.color.hex, "#ff0000");
        assert_eq!(screen.status_bar.status, ClockStatus::Paused);
        assert_eq!(screen.clicker.map(|c| c.count), Some(0));
    }

    #[test]
    fn test_calendar_date_line() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let calendar = present_calendar(date, palette::GREEN);
        assert_eq!(calendar.date, "01/02/2024");
        assert_eq!(calendar.color.name, "green");
    }
}
