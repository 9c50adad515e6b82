/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.
use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }

    /// Tree column share in side-by-side mode (percent)
    fn tree_percent(&self) -> u16 {
        match self {
            Breakpoint::UltraWide => 35,
            _ => 42,
        }
    }
}

/// Split the content area into (tree, preview)
///
/// Narrow terminals stack the tree above the preview; from `Normal` up
/// they sit side by side.
pub fn split_content(area: Rect) -> (Rect, Rect) {
    let bp = Breakpoint::from_width(area.width);
    let chunks = if bp.at_least(Breakpoint::Normal) {
        let tree = bp.tree_percent();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(tree), Constraint::Percentage(100 - tree)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    };
    (chunks[0], chunks[1])
}

/// Logs panel height for the terminal height (0 hides it)
pub fn logs_height(total_height: u16) -> u16 {
    match total_height {
        0..=19 => 0,
        20..=39 => 6,
        _ => 8,
    }
}
