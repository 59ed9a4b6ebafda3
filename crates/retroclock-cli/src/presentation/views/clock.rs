use std::fmt;

use crate::presentation::formatters::SegmentArt;
use crate::presentation::view_models::{
    CalendarViewModel, ClockFaceViewModel, ColorMode, CreateView, DigitGalleryViewModel,
    LedColorViewModel,
};

impl CreateView for ClockFaceViewModel {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ClockFaceView { data: self, mode })
    }
}

impl CreateView for DigitGalleryViewModel {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DigitGalleryView { data: self, mode })
    }
}

impl CreateView for CalendarViewModel {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CalendarView { data: self, mode })
    }
}

fn write_art(
    f: &mut fmt::Formatter<'_>,
    art: &SegmentArt,
    color: &LedColorViewModel,
    mode: ColorMode,
) -> fmt::Result {
    let lines = match mode {
        ColorMode::Plain => art.plain_lines(),
        ColorMode::Truecolor => art.colored_lines(color.rgb),
    };
    for line in lines {
        writeln!(f, "{}", line)?;
    }
    Ok(())
}

struct ClockFaceView<'a> {
    data: &'a ClockFaceViewModel,
    mode: ColorMode,
}

impl<'a> fmt::Display for ClockFaceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let art = SegmentArt::for_clock(&self.data.digits, self.data.colon_visible);
        write_art(f, &art, &self.data.color, self.mode)?;
        writeln!(f)?;
        writeln!(f, "{}", self.data.time)?;
        if let Some(date) = &self.data.date {
            writeln!(f, "{}", date)?;
        }
        Ok(())
    }
}

struct DigitGalleryView<'a> {
    data: &'a DigitGalleryViewModel,
    mode: ColorMode,
}

impl<'a> fmt::Display for DigitGalleryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.data.columns.max(1);
        for (index, chunk) in self.data.digits.chunks(columns).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let art = SegmentArt::for_digits(chunk.iter().map(|entry| entry.digit));
            write_art(f, &art, &self.data.color, self.mode)?;
        }
        Ok(())
    }
}

struct CalendarView<'a> {
    data: &'a CalendarViewModel,
    mode: ColorMode,
}

impl<'a> fmt::Display for CalendarView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let art = SegmentArt::for_calendar(&self.data.digits);
        write_art(f, &art, &self.data.color, self.mode)?;
        writeln!(f)?;
        writeln!(f, "{}", self.data.date)
    }
}

#[cfg(test)]
mod tests {
    use crate::presentation::presenters::present_digit_gallery;
    use crate::presentation::view_models::{ColorMode, CreateView};
    use retroclock_types::palette;

    #[test]
    fn test_gallery_wraps_into_rows() {
        let gallery = present_digit_gallery(palette::CYAN, 5);
        let text = gallery.create_view(ColorMode::Plain).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7 + 1 + 7);
        assert_eq!(lines[7], "");
        assert!(lines.iter().all(|line| line.chars().count() <= 5 * 6 + 4));
    }
}
