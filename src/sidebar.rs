use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    TogglePause,
    Restart,
    End,
}

/// Axis-aligned rectangle in window coordinates, bottom-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarButton {
    pub action: SidebarAction,
    pub label: &'static str,
    pub rect: Rect,
}

pub const SIDEBAR_BUTTONS: [SidebarButton; 3] = [
    SidebarButton {
        action: SidebarAction::TogglePause,
        label: "Pause/Resume",
        rect: Rect::new(BUTTON_X, PAUSE_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
    },
    SidebarButton {
        action: SidebarAction::Restart,
        label: "Restart Game",
        rect: Rect::new(BUTTON_X, RESTART_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
    },
    SidebarButton {
        action: SidebarAction::End,
        label: "End Game",
        rect: Rect::new(BUTTON_X, END_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
    },
];

/// Hit-tests a window position against the sidebar buttons.
pub fn button_at(x: f64, y: f64) -> Option<SidebarAction> {
    if x < FIELD_WIDTH {
        return None;
    }
    SIDEBAR_BUTTONS
        .iter()
        .find(|button| button.rect.contains(x, y))
        .map(|button| button.action)
}

/// Same as [`button_at`] for a pointer position with a top-left origin.
pub fn pointer_action(x: f64, y: f64) -> Option<SidebarAction> {
    button_at(x, WINDOW_HEIGHT - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_hit_inclusive_edges() {
        assert_eq!(button_at(710.0, 500.0), Some(SidebarAction::TogglePause));
        assert_eq!(button_at(800.0, 550.0), Some(SidebarAction::TogglePause));
        assert_eq!(button_at(750.0, 455.0), Some(SidebarAction::Restart));
        assert_eq!(button_at(750.0, 360.0), Some(SidebarAction::End));
        assert_eq!(button_at(750.0, 359.0), None);
        assert_eq!(button_at(709.0, 520.0), None);
    }

    #[test]
    fn field_clicks_are_ignored() {
        assert_eq!(button_at(350.0, 520.0), None);
    }

    #[test]
    fn pointer_positions_are_flipped() {
        // 600 - 75 = 525, inside Pause/Resume.
        assert_eq!(pointer_action(750.0, 75.0), Some(SidebarAction::TogglePause));
        assert_eq!(pointer_action(750.0, 215.0), Some(SidebarAction::End));
        assert_eq!(pointer_action(750.0, 525.0), None);
    }
}
