use retroclock_types::{ColorSelection, DigitValue, Palette, PaletteColor};

/// Single-digit counter demo. Stays within `0..=9`; moves past either bound
/// are ignored rather than reported as errors.
#[derive(Debug, Clone)]
pub struct Clicker {
    count: u8,
    palette: Palette,
    color: ColorSelection,
}

impl Clicker {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 9;

    pub fn new(palette: Palette, color: ColorSelection) -> Self {
        let color = ColorSelection::new(color.index() % palette.len());
        Self {
            count: Self::MIN,
            palette,
            color,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn digit(&self) -> DigitValue {
        DigitValue::from(self.count)
    }

    pub fn can_increment(&self) -> bool {
        self.count < Self::MAX
    }

    pub fn can_decrement(&self) -> bool {
        self.count > Self::MIN
    }

    /// Returns `false` when already at the maximum.
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.count += 1;
        true
    }

    /// Returns `false` when already at the minimum.
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.count -= 1;
        true
    }

    pub fn toggle_color(&mut self) -> PaletteColor {
        self.color = self.color.advanced(self.palette.len());
        self.color()
    }

    pub fn color(&self) -> PaletteColor {
        self.palette.color(self.color)
    }
}

impl Default for Clicker {
    fn default() -> Self {
        Self::new(Palette::default(), ColorSelection::default())
    }
}
