pub mod clock;
pub mod config;

pub use clock::{
    present_calendar, present_clicker, present_clock_face, present_color, present_digit_gallery,
    present_screen,
};
pub use config::{present_config_init, present_config_path, present_config_show};
