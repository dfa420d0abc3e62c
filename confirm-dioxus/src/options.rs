//! Confirmation options and their attribute fallback chain.
//!
//! Options are read from the submitting button first, then from the element
//! that carries the confirmation configuration (usually the form), then from
//! the configured defaults.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Attribute holding the confirmation message.
pub const ATTR_MESSAGE: &str = "confirm";
/// Attribute holding the optional secondary explanation.
pub const ATTR_DESCRIPTION: &str = "confirm-description";
/// Attribute holding the phrase the user must type before accepting.
pub const ATTR_TEXT: &str = "confirm-text";
/// Attribute holding the accept control label.
pub const ATTR_ACCEPT: &str = "confirm-accept";
/// Attribute holding the reject control label.
pub const ATTR_REJECT: &str = "confirm-reject";
/// Attribute holding the accept control variant.
pub const ATTR_VARIANT: &str = "confirm-variant";

/// Visual style of the accept control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmVariant {
    /// Destructive action: accept button carries a warning icon.
    #[default]
    Danger,
    /// Neutral action: plain accept button.
    Brand,
}

impl ConfirmVariant {
    /// Parse an attribute value. Anything other than `brand` is `Danger`.
    #[must_use]
    pub fn from_attribute(value: &str) -> Self {
        if value == "brand" {
            Self::Brand
        } else {
            Self::Danger
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Brand => "brand",
        }
    }
}

impl fmt::Display for ConfirmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The attribute set of an element taking part in a confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementAttributes {
    attributes: BTreeMap<String, String>,
}

impl ElementAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Look up an attribute. Empty values are treated as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Built-in fallbacks used when neither button nor element sets a value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OptionDefaults {
    pub accept_label: String,
    pub reject_label: String,
    pub variant: ConfirmVariant,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            accept_label: "Confirm".to_string(),
            reject_label: "Cancel".to_string(),
            variant: ConfirmVariant::Danger,
        }
    }
}

/// Resolved display parameters for one dialog invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub message: String,
    pub description: Option<String>,
    pub confirm_text: Option<String>,
    pub accept_label: String,
    pub reject_label: String,
    pub variant: ConfirmVariant,
}

impl ConfirmOptions {
    /// Resolve options for `message` from `button`, then `element`, then `defaults`.
    #[must_use]
    pub fn resolve(
        message: &str,
        element: &ElementAttributes,
        button: Option<&ElementAttributes>,
        defaults: &OptionDefaults,
    ) -> Self {
        let attr = |name: &str| lookup(button, element, name);

        Self {
            message: message.to_string(),
            description: attr(ATTR_DESCRIPTION).map(str::to_string),
            confirm_text: attr(ATTR_TEXT).map(str::to_string),
            accept_label: attr(ATTR_ACCEPT).map_or_else(|| defaults.accept_label.clone(), str::to_string),
            reject_label: attr(ATTR_REJECT).map_or_else(|| defaults.reject_label.clone(), str::to_string),
            variant: attr(ATTR_VARIANT).map_or(defaults.variant, ConfirmVariant::from_attribute),
        }
    }

    /// Whether accepting requires typing `confirm_text` first.
    #[must_use]
    pub fn requires_typed_confirmation(&self) -> bool {
        self.confirm_text.is_some()
    }
}

/// Ordered lookup: button wins over element.
#[must_use]
pub fn lookup<'a>(
    button: Option<&'a ElementAttributes>,
    element: &'a ElementAttributes,
    name: &str,
) -> Option<&'a str> {
    button
        .and_then(|button| button.get(name))
        .or_else(|| element.get(name))
}
