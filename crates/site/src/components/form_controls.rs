//! Select inputs for filter bars and settings forms.

/// Option for a `<select>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Whether the option is preselected.
    pub selected: bool,
}

impl SelectOption {
    /// Create an option, selected when `value` equals `current`.
    #[must_use]
    pub fn new(value: &str, label: &str, current: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected: value == current.trim(),
        }
    }

    /// Build a whole option list from `(value, label)` pairs.
    #[must_use]
    pub fn list<'a>(
        choices: impl IntoIterator<Item = (&'a str, &'a str)>,
        current: &str,
    ) -> Vec<Self> {
        choices
            .into_iter()
            .map(|(value, label)| Self::new(value, label, current))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_value_is_selected() {
        let options = SelectOption::list([("light", "Light"), ("dark", "Dark")], "dark");
        assert!(!options[0].selected);
        assert!(options[1].selected);
    }

    #[test]
    fn test_blank_current_selects_nothing() {
        let options = SelectOption::list([("villa", "Villa")], "");
        assert!(options.iter().all(|option| !option.selected));
    }
}
