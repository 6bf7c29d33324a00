//! Interactions a render boundary can feed back into the widget.

use serde::Deserialize;

/// One user interaction, bound to a named transition or the download trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Interaction {
    ToggleLanguage,
    ToggleView,
    SelectTab { index: usize },
    ToggleCardFlip,
    Download,
}

impl Interaction {
    /// Parse a terminal command (`lang`, `view`, `tab <n>`, `flip`,
    /// `download`) or a JSON interaction object.
    ///
    /// Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Interaction> {
        let text = text.trim();

        if text.starts_with('{') {
            return serde_json::from_str(text).ok();
        }

        let (command, arg) = match text.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, Some(arg.trim())),
            None => (text, None),
        };

        match (command, arg) {
            ("lang" | "language", None) => Some(Interaction::ToggleLanguage),
            ("view" | "dashboard", None) => Some(Interaction::ToggleView),
            ("flip", None) => Some(Interaction::ToggleCardFlip),
            ("download", None) => Some(Interaction::Download),
            ("tab", Some(arg)) => arg
                .parse()
                .ok()
                .map(|index| Interaction::SelectTab { index }),
            _ => None,
        }
    }
}
