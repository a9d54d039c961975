//! Text extraction rules for hover reading.
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"\s+").ok());

/// DOM node category under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Other,
}

/// What the adapter saw under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    pub kind: NodeKind,
    /// Node sits inside the widget's own chrome.
    pub in_widget: bool,
    pub text: String,
}

impl HoverTarget {
    #[must_use]
    pub fn element(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element,
            in_widget: false,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn widget_element(text: impl Into<String>) -> Self {
        Self {
            in_widget: true,
            ..Self::element(text)
        }
    }
}

/// Trim and collapse whitespace runs to single spaces.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    WHITESPACE_RUN.as_ref().map_or_else(
        || raw.split_whitespace().collect::<Vec<_>>().join(" "),
        |re| re.replace_all(raw.trim(), " ").into_owned(),
    )
}

/// Text to speak for a hover event, or `None` when the target is skipped.
///
/// Skips non-element nodes, the widget's own UI and blank text.
#[must_use]
pub fn hover_utterance(target: &HoverTarget) -> Option<String> {
    if target.kind != NodeKind::Element || target.in_widget {
        return None;
    }
    let text = normalize_text(&target.text);
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  Hello \n\t world  "), "Hello world");
        assert_eq!(normalize_text(" \n "), "");
    }

    #[test]
    fn hover_reads_plain_elements() {
        let target = HoverTarget::element("  Read   me ");
        assert_eq!(hover_utterance(&target).as_deref(), Some("Read me"));
    }

    #[test]
    fn hover_skips_blank_widget_and_non_element_nodes() {
        assert!(hover_utterance(&HoverTarget::element("   \n")).is_none());
        assert!(hover_utterance(&HoverTarget::widget_element("Reset")).is_none());
        let text_node = HoverTarget {
            kind: NodeKind::Text,
            in_widget: false,
            text: "loose text".to_string(),
        };
        assert!(hover_utterance(&text_node).is_none());
        let comment = HoverTarget {
            kind: NodeKind::Other,
            ..text_node
        };
        assert!(hover_utterance(&comment).is_none());
    }
}
