pub mod formatter;
pub mod palette;

pub use formatter::{format_user_report, RenderContext, RULE_WIDTH};
pub use palette::{should_use_colors, Palette, Tone};
