//! ANSI escape sequences used by the text renderer.

/// Reset all text attributes
pub const RESET: &str = "\x1b[0m";

/// Bold text
pub const BOLD: &str = "\x1b[1m";

/// Dim/faint text
pub const DIM: &str = "\x1b[2m";

// === Precomputed Foreground Colors (256-color palette) ===

/// Green foreground (83), added lines
pub const FG_GREEN: &str = "\x1b[38;5;83m";

/// Red foreground (203), deleted lines
pub const FG_RED: &str = "\x1b[38;5;203m";

/// Yellow foreground (220), structure headers
pub const FG_YELLOW: &str = "\x1b[38;5;220m";

/// Cyan foreground (45), file headers and banners
pub const FG_CYAN: &str = "\x1b[38;5;45m";

/// Wraps text in escapes, or passes it through when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, style: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_disabled_is_plain() {
        assert_eq!(Palette::new(false).paint(BOLD, "x"), "x");
        assert_eq!(Palette::new(true).paint(BOLD, "x"), "\x1b[1mx\x1b[0m");
    }
}
