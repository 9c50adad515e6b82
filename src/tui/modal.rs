// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Switch to this grade and close
    ChooseGrade(String),
}

/// One row of the grade picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOption {
    pub id: String,
    pub name: String,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Grade list with its own cursor
    GradePicker {
        options: Vec<GradeOption>,
        cursor: usize,
    },
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Create a grade picker with the cursor on `current` (if listed)
    pub fn grade_picker(options: Vec<GradeOption>, current: Option<&str>) -> Self {
        let cursor = current
            .and_then(|id| options.iter().position(|o| o.id == id))
            .unwrap_or(0);
        Modal::GradePicker { options, cursor }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::GradePicker { options, cursor } => match key {
                KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => {
                    *cursor = cursor.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *cursor + 1 < options.len() {
                        *cursor += 1;
                    }
                    ModalAction::None
                }
                KeyCode::Home => {
                    *cursor = 0;
                    ModalAction::None
                }
                KeyCode::End => {
                    *cursor = options.len().saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Enter | KeyCode::Char(' ') => match options.get(*cursor) {
                    Some(option) => ModalAction::ChooseGrade(option.id.clone()),
                    None => ModalAction::Close,
                },
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades() -> Vec<GradeOption> {
        ["K", "1", "2"]
            .iter()
            .map(|id| GradeOption {
                id: id.to_string(),
                name: format!("Grade {id}"),
            })
            .collect()
    }

    #[test]
    fn test_help_closes_on_toggle_key() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
    }

    #[test]
    fn test_picker_starts_on_current_grade() {
        let modal = Modal::grade_picker(grades(), Some("1"));
        assert!(matches!(modal, Modal::GradePicker { cursor: 1, .. }));

        let modal = Modal::grade_picker(grades(), Some("9"));
        assert!(matches!(modal, Modal::GradePicker { cursor: 0, .. }));
    }

    #[test]
    fn test_picker_cursor_is_clamped() {
        let mut modal = Modal::grade_picker(grades(), None);
        modal.handle_input(KeyCode::Up);
        for _ in 0..5 {
            modal.handle_input(KeyCode::Down);
        }
        assert_eq!(
            modal.handle_input(KeyCode::Enter),
            ModalAction::ChooseGrade("2".to_string())
        );
    }

    #[test]
    fn test_empty_picker_closes_on_enter() {
        let mut modal = Modal::grade_picker(Vec::new(), None);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
    }
}
