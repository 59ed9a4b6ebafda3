//! Seven-segment glyph layout.
//!
//! Every digit is a 6x7 cell grid:
//!
//! ```text
//!  ━━━━     a
//! ┃    ┃   f b
//! ┃    ┃
//!  ━━━━     g
//! ┃    ┃   e c
//! ┃    ┃
//!  ━━━━     d
//! ```
//!
//! Unlit segments keep their stroke character with `lit == false` so a
//! renderer can draw them dimmed; plain text output blanks them.

use owo_colors::OwoColorize;
use retroclock_engine::digit_pattern;
use retroclock_types::{CalendarDigits, ClockDigits, DigitValue, Rgb, Segment, SegmentPattern};

pub const GLYPH_WIDTH: usize = 6;
pub const GLYPH_HEIGHT: usize = 7;

const HORIZONTAL: char = '━';
const VERTICAL: char = '┃';
const DOT: char = '●';
const SLASH: char = '╱';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub lit: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', lit: false };

    fn lit(ch: char) -> Self {
        Self { ch, lit: true }
    }

    fn stroke(ch: char, lit: bool) -> Self {
        Self { ch, lit }
    }

    /// Character for plain output: unlit cells are blank.
    pub fn plain(self) -> char {
        if self.lit { self.ch } else { ' ' }
    }
}

/// A row-major strip of glyphs, one cell per terminal column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentArt {
    rows: [Vec<Cell>; GLYPH_HEIGHT],
}

impl SegmentArt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_clock(digits: &ClockDigits, colon_visible: bool) -> Self {
        let mut art = Self::new();
        art.push_digit(digit_pattern(digits.hours.tens));
        art.push_digit(digit_pattern(digits.hours.ones));
        art.push_colon(colon_visible);
        art.push_digit(digit_pattern(digits.minutes.tens));
        art.push_digit(digit_pattern(digits.minutes.ones));
        if let Some(seconds) = digits.seconds {
            art.push_colon(colon_visible);
            art.push_digit(digit_pattern(seconds.tens));
            art.push_digit(digit_pattern(seconds.ones));
        }
        if digits.meridiem.is_some() {
            art.push_label(digits.meridiem_str());
        }
        art
    }

    /// `MM/DD/YY`.
    pub fn for_calendar(date: &CalendarDigits) -> Self {
        let year = date.short_year();
        let mut art = Self::new();
        art.push_digit(digit_pattern(date.month.tens));
        art.push_digit(digit_pattern(date.month.ones));
        art.push_slash();
        art.push_digit(digit_pattern(date.day.tens));
        art.push_digit(digit_pattern(date.day.ones));
        art.push_slash();
        art.push_digit(digit_pattern(year.tens));
        art.push_digit(digit_pattern(year.ones));
        art
    }

    pub fn for_digits<I>(digits: I) -> Self
    where
        I: IntoIterator<Item = DigitValue>,
    {
        let mut art = Self::new();
        for digit in digits {
            art.push_digit(digit_pattern(digit));
        }
        art
    }

    pub fn push_digit(&mut self, pattern: SegmentPattern) {
        self.push_gap();
        let on = |segment: Segment| pattern.is_on(segment);

        for (row, cells) in self.rows.iter_mut().enumerate() {
            let mut glyph = [Cell::BLANK; GLYPH_WIDTH];
            match row {
                0 | 3 | 6 => {
                    let segment = match row {
                        0 => Segment::A,
                        3 => Segment::G,
                        _ => Segment::D,
                    };
                    for cell in &mut glyph[1..GLYPH_WIDTH - 1] {
                        *cell = Cell::stroke(HORIZONTAL, on(segment));
                    }
                }
                1 | 2 => {
                    glyph[0] = Cell::stroke(VERTICAL, on(Segment::F));
                    glyph[GLYPH_WIDTH - 1] = Cell::stroke(VERTICAL, on(Segment::B));
                }
                _ => {
                    glyph[0] = Cell::stroke(VERTICAL, on(Segment::E));
                    glyph[GLYPH_WIDTH - 1] = Cell::stroke(VERTICAL, on(Segment::C));
                }
            }
            cells.extend_from_slice(&glyph);
        }
    }

    pub fn push_colon(&mut self, visible: bool) {
        self.push_gap();
        for (row, cells) in self.rows.iter_mut().enumerate() {
            cells.push(match row {
                2 | 4 => Cell::stroke(DOT, visible),
                _ => Cell::BLANK,
            });
        }
    }

    pub fn push_slash(&mut self) {
        self.push_gap();
        for (row, cells) in self.rows.iter_mut().enumerate() {
            let mut strip = [Cell::BLANK; 3];
            match row {
                1 => strip[2] = Cell::lit(SLASH),
                3 => strip[1] = Cell::lit(SLASH),
                5 => strip[0] = Cell::lit(SLASH),
                _ => {}
            }
            cells.extend_from_slice(&strip);
        }
    }

    /// Text aligned with the bottom stroke, e.g. the meridiem.
    pub fn push_label(&mut self, text: &str) {
        self.push_gap();
        let last = GLYPH_HEIGHT - 1;
        for (row, cells) in self.rows.iter_mut().enumerate() {
            if row == last {
                cells.extend(text.chars().map(Cell::lit));
            } else {
                cells.extend(text.chars().map(|_| Cell::BLANK));
            }
        }
    }

    fn push_gap(&mut self) {
        if self.width() == 0 {
            return;
        }
        for cells in &mut self.rows {
            cells.push(Cell::BLANK);
        }
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn plain_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|cells| {
                let line: String = cells.iter().map(|cell| cell.plain()).collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Lit cells in `rgb` truecolor, unlit cells blank.
    pub fn colored_lines(&self, rgb: Rgb) -> Vec<String> {
        self.rows
            .iter()
            .map(|cells| {
                let visible = cells.iter().rposition(|cell| cell.lit).map_or(0, |i| i + 1);
                cells[..visible]
                    .iter()
                    .map(|cell| {
                        if cell.lit {
                            cell.ch.truecolor(rgb.0, rgb.1, rgb.2).to_string()
                        } else {
                            " ".to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }

    pub fn to_plain_string(&self) -> String {
        self.plain_lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use retroclock_types::DigitPair;

    #[test]
    fn test_digit_gallery() {
        let art = SegmentArt::for_digits((0u8..10).map(DigitValue::from));
        assert_eq!(art.width(), 10 * GLYPH_WIDTH + 9);
        assert_snapshot!(art.to_plain_string(), @r"
         ━━━━          ━━━━   ━━━━          ━━━━   ━━━━   ━━━━   ━━━━   ━━━━
        ┃    ┃      ┃      ┃      ┃ ┃    ┃ ┃      ┃           ┃ ┃    ┃ ┃    ┃
        ┃    ┃      ┃      ┃      ┃ ┃    ┃ ┃      ┃           ┃ ┃    ┃ ┃    ┃
                       ━━━━   ━━━━   ━━━━   ━━━━   ━━━━          ━━━━   ━━━━
        ┃    ┃      ┃ ┃           ┃      ┃      ┃ ┃    ┃      ┃ ┃    ┃      ┃
        ┃    ┃      ┃ ┃           ┃      ┃      ┃ ┃    ┃      ┃ ┃    ┃      ┃
         ━━━━          ━━━━   ━━━━          ━━━━   ━━━━          ━━━━   ━━━━
        ");
    }

    #[test]
    fn test_clock_face_with_colon() {
        let digits = ClockDigits {
            hours: DigitPair::split(23),
            minutes: DigitPair::split(59),
            seconds: None,
            meridiem: None,
        };
        assert_snapshot!(SegmentArt::for_clock(&digits, true).to_plain_string(), @r"
         ━━━━   ━━━━     ━━━━   ━━━━
             ┃      ┃   ┃      ┃    ┃
             ┃      ┃ ● ┃      ┃    ┃
         ━━━━   ━━━━     ━━━━   ━━━━
        ┃           ┃ ●      ┃      ┃
        ┃           ┃        ┃      ┃
         ━━━━   ━━━━     ━━━━   ━━━━
        ");
    }

    #[test]
    fn test_hidden_colon_keeps_width() {
        let digits = ClockDigits {
            hours: DigitPair::split(8),
            minutes: DigitPair::split(30),
            seconds: Some(DigitPair::split(15)),
            meridiem: None,
        };
        let shown = SegmentArt::for_clock(&digits, true);
        let hidden = SegmentArt::for_clock(&digits, false);
        assert_eq!(shown.width(), hidden.width());
        assert_eq!(shown.width(), 6 * GLYPH_WIDTH + 2 + 7);
        assert!(!hidden.to_plain_string().contains(DOT));
        assert_eq!(shown.to_plain_string().matches(DOT).count(), 4);
    }

    #[test]
    fn test_meridiem_sits_on_bottom_row() {
        let digits = ClockDigits {
            hours: DigitPair::split(12),
            minutes: DigitPair::split(0),
            seconds: None,
            meridiem: Some(retroclock_types::Meridiem::Am),
        };
        let lines = SegmentArt::for_clock(&digits, true).plain_lines();
        assert_eq!(lines.len(), GLYPH_HEIGHT);
        assert!(lines[GLYPH_HEIGHT - 1].ends_with("  AM"));
        assert!(lines[..GLYPH_HEIGHT - 1].iter().all(|line| !line.contains("AM")));
    }

    #[test]
    fn test_calendar_layout() {
        let date = CalendarDigits {
            month: DigitPair::split(1),
            day: DigitPair::split(2),
            year: [2u8, 0, 2, 4].map(DigitValue::from),
        };
        assert_snapshot!(SegmentArt::for_calendar(&date).to_plain_string(), @r"
         ━━━━              ━━━━   ━━━━       ━━━━
        ┃    ┃      ┃   ╱ ┃    ┃      ┃   ╱      ┃ ┃    ┃
        ┃    ┃      ┃     ┃    ┃      ┃          ┃ ┃    ┃
                       ╱          ━━━━   ╱   ━━━━   ━━━━
        ┃    ┃      ┃     ┃    ┃ ┃          ┃           ┃
        ┃    ┃      ┃ ╱   ┃    ┃ ┃      ╱   ┃           ┃
         ━━━━              ━━━━   ━━━━       ━━━━
        ");
    }

    #[test]
    fn test_colored_lines_skip_unlit_cells() {
        let art = SegmentArt::for_digits([DigitValue::from(1)]);
        let lines = art.colored_lines(Rgb(255, 0, 0));
        assert!(lines[0].is_empty());
        assert!(lines[1].starts_with("     "));
        assert!(lines[1].contains("\u{1b}[38;2;255;0;0m"));
    }
}
