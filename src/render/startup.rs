//! Startup passage.
//!
//! Sets the story-wide variables every room passage relies on.

use crate::config::Config;

/// Lines of the startup passage: `$imagedir` and the `$intro` style.
pub fn startup_lines(config: &Config) -> Vec<String> {
    vec![
        "{".to_string(),
        format!("\t(set: $imagedir to \"{}\")", config.image_dir),
        format!("\t(set: $intro to (text-style: \"{}\"))", config.intro_style),
        "}".to_string(),
    ]
}
