use serde::{Deserialize, Serialize};

use super::html::escape_html;
use super::NAV_ITEMS;
use crate::i18n::t;

/// Request-independent UI state owned by the application and passed in explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    current_user: Option<String>,
}

impl UiState {
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn set_current_user(&mut self, user: impl Into<String>) {
        self.current_user = Some(user.into());
    }

    pub fn clear_current_user(&mut self) {
        self.current_user = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteCommand {
    pub id: &'static str,
    pub label: String,
    pub href: &'static str,
}

#[derive(Debug, Clone)]
pub struct CommandPalette {
    commands: Vec<PaletteCommand>,
    users: Vec<String>,
}

impl CommandPalette {
    pub fn new(commands: Vec<PaletteCommand>, users: Vec<String>) -> Self {
        Self { commands, users }
    }

    /// Navigation commands for every top-level page.
    pub fn standard(users: Vec<String>) -> Self {
        let commands = NAV_ITEMS
            .iter()
            .map(|&(id, key, href)| PaletteCommand {
                id,
                label: t(key).to_string(),
                href,
            })
            .collect();
        Self::new(commands, users)
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Case-insensitive substring match on labels; a blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<&PaletteCommand> {
        let needle = query.trim().to_lowercase();
        self.commands
            .iter()
            .filter(|command| needle.is_empty() || command.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// The selected user, defaulting to the first known user.
    pub fn current_user<'a>(&'a self, state: &'a UiState) -> Option<&'a str> {
        state
            .current_user()
            .or_else(|| self.users.first().map(String::as_str))
    }

    /// Select a known user. Unknown names leave the state untouched.
    pub fn select_user(&self, state: &mut UiState, user: &str) -> bool {
        if self.users.iter().any(|known| known == user) {
            state.set_current_user(user);
            true
        } else {
            false
        }
    }

    pub fn render(&self, state: &UiState, query: &str) -> String {
        let mut html = String::from("<div class=\"command-palette\" role=\"dialog\">");
        html.push_str(&format!(
            "<input type=\"search\" name=\"q\" placeholder=\"{}\" value=\"{}\">",
            escape_html(t("palette.placeholder")),
            escape_html(query)
        ));

        if let Some(user) = self.current_user(state) {
            html.push_str(&format!(
                "<p class=\"palette-user\">{}</p>",
                escape_html(user)
            ));
        }

        let matches = self.search(query);
        if matches.is_empty() {
            html.push_str(&format!(
                "<p class=\"palette-empty\">{}</p>",
                escape_html(t("palette.empty"))
            ));
        } else {
            html.push_str("<ul class=\"palette-results\">");
            for command in matches {
                html.push_str(&format!(
                    "<li data-command=\"{}\"><a href=\"{}\">{}</a></li>",
                    command.id,
                    command.href,
                    escape_html(&command.label)
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("</div>");
        html
    }
}
