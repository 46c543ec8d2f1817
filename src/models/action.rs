use serde::Deserialize;

/// Raw body of a board POST, straight from the HTML form.
///
/// Every field is optional on purpose: a missing or malformed field
/// downgrades the request to a no-op instead of a rejection, so the handler
/// can always answer with the usual redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    pub action: Option<String>,
    pub id: Option<String>,
    pub text: Option<String>,
}

/// A mutation parsed from an [`ActionForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add { text: String },
    Toggle { id: u64 },
    Delete { id: u64 },
}

impl TodoAction {
    /// Parse the form into a mutation.
    ///
    /// Returns `None` for unknown actions, a missing or unparsable `id`, and
    /// add requests whose text trims to empty. Callers treat `None` as a
    /// silent no-op.
    pub fn from_form(form: &ActionForm) -> Option<Self> {
        match form.action.as_deref() {
            Some("add") => {
                let text = form.text.as_deref().unwrap_or("").trim();
                if text.is_empty() {
                    None
                } else {
                    Some(Self::Add {
                        text: text.to_string(),
                    })
                }
            }
            Some("toggle") => parse_id(form).map(|id| Self::Toggle { id }),
            Some("delete") => parse_id(form).map(|id| Self::Delete { id }),
            _ => None,
        }
    }
}

fn parse_id(form: &ActionForm) -> Option<u64> {
    form.id.as_deref()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(action: Option<&str>, id: Option<&str>, text: Option<&str>) -> ActionForm {
        ActionForm {
            action: action.map(String::from),
            id: id.map(String::from),
            text: text.map(String::from),
        }
    }

    #[test]
    fn parses_add_with_trimmed_text() {
        let action = TodoAction::from_form(&form(Some("add"), None, Some("  ship it  ")));
        assert_eq!(
            action,
            Some(TodoAction::Add {
                text: "ship it".to_string()
            })
        );
    }

    #[test]
    fn add_with_whitespace_only_text_is_a_noop() {
        assert_eq!(TodoAction::from_form(&form(Some("add"), None, Some("   "))), None);
        assert_eq!(TodoAction::from_form(&form(Some("add"), None, None)), None);
    }

    #[test]
    fn parses_toggle_and_delete_ids() {
        assert_eq!(
            TodoAction::from_form(&form(Some("toggle"), Some("2"), None)),
            Some(TodoAction::Toggle { id: 2 })
        );
        assert_eq!(
            TodoAction::from_form(&form(Some("delete"), Some("3"), None)),
            Some(TodoAction::Delete { id: 3 })
        );
    }

    #[test]
    fn unparsable_or_missing_id_is_a_noop() {
        assert_eq!(TodoAction::from_form(&form(Some("toggle"), Some("abc"), None)), None);
        assert_eq!(TodoAction::from_form(&form(Some("delete"), None, None)), None);
    }

    #[test]
    fn unknown_action_is_a_noop() {
        assert_eq!(TodoAction::from_form(&form(Some("archive"), Some("1"), None)), None);
        assert_eq!(TodoAction::from_form(&form(None, Some("1"), Some("text"))), None);
    }
}
