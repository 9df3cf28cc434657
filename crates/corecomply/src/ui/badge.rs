use serde::Serialize;

use super::html::escape_html;
use crate::domain::Labelled;
use crate::i18n::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl BadgeTone {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "badge-success",
            Self::Warning => "badge-warning",
            Self::Danger => "badge-danger",
            Self::Info => "badge-info",
            Self::Neutral => "badge-neutral",
        }
    }
}

/// Map a free-form status or category string to a visual tone.
///
/// Case, spaces, hyphens and underscores are ignored.
pub fn tone_for(status: &str) -> BadgeTone {
    let normalized: String = status
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect();

    match normalized.as_str() {
        "compliant" | "published" | "passed" | "connected" | "healthy" | "done" | "resolved"
        | "active" | "completed" | "processed" | "confirmed" => BadgeTone::Success,
        "evidencepending" | "pending" | "draft" | "warning" | "degraded" | "inprogress"
        | "underreview" | "inreview" | "remediating" | "medium" | "todo" => BadgeTone::Warning,
        "noncompliant" | "failed" | "error" | "down" | "overdue" | "high" | "critical"
        | "disconnected" | "urgent" => BadgeTone::Danger,
        "open" | "planned" | "low" => BadgeTone::Info,
        _ => BadgeTone::Neutral,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    label: String,
    tone: BadgeTone,
}

impl StatusBadge {
    pub fn new(status: &str) -> Self {
        Self {
            label: status.to_string(),
            tone: tone_for(status),
        }
    }

    /// Badge for any labelled enum, translated through the i18n table.
    pub fn of<L: Labelled>(value: L) -> Self {
        Self::localized(value.i18n_key(), value.label())
    }

    fn localized(key: &str, status: &str) -> Self {
        Self {
            label: t(key).to_string(),
            tone: tone_for(status),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tone(&self) -> BadgeTone {
        self.tone
    }

    pub fn render(&self) -> String {
        format!(
            "<span class=\"badge {}\">{}</span>",
            self.tone.class(),
            escape_html(&self.label)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuditSessionStatus, ControlStatus, FindingSeverity, IntegrationStatus};

    #[test]
    fn maps_statuses_to_tones() {
        assert_eq!(tone_for("Compliant"), BadgeTone::Success);
        assert_eq!(tone_for("Evidence Pending"), BadgeTone::Warning);
        assert_eq!(tone_for("non-compliant"), BadgeTone::Danger);
        assert_eq!(tone_for("IN_PROGRESS"), BadgeTone::Warning);
        assert_eq!(tone_for("Open"), BadgeTone::Info);
        assert_eq!(tone_for("Something else"), BadgeTone::Neutral);
    }

    #[test]
    fn control_badge_uses_translated_label() {
        let badge = StatusBadge::of(ControlStatus::EvidencePending);
        assert_eq!(badge.label(), "Evidence Pending");
        assert_eq!(badge.tone(), BadgeTone::Warning);
        assert_eq!(
            badge.render(),
            "<span class=\"badge badge-warning\">Evidence Pending</span>"
        );
    }

    #[test]
    fn severity_badges_escalate_in_tone() {
        assert_eq!(
            StatusBadge::of(FindingSeverity::Low).tone(),
            BadgeTone::Info
        );
        assert_eq!(
            StatusBadge::of(FindingSeverity::Critical).tone(),
            BadgeTone::Danger
        );
    }

    #[test]
    fn payroll_and_integration_statuses_get_tones() {
        let session = StatusBadge::of(AuditSessionStatus::InReview);
        assert_eq!(session.label(), "In Review");
        assert_eq!(session.tone(), BadgeTone::Warning);
        assert_eq!(
            StatusBadge::of(IntegrationStatus::Disconnected).tone(),
            BadgeTone::Danger
        );
    }

    #[test]
    fn free_form_labels_are_escaped() {
        let html = StatusBadge::new("<b>").render();
        assert!(html.contains("&lt;b&gt;"));
    }
}
