use std::fmt::Display;

use thiserror::Error;

/// The component whose props contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    TagItem,
    TagList,
}

impl Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Component::TagItem => write!(f, "TagItem"),
            Component::TagList => write!(f, "TagList"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TagsError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{component}: mandatory prop '{prop}' was not supplied")]
    MissingProp { component: Component, prop: String },
    #[error("{component}: prop '{prop}' must not be empty")]
    EmptyText { component: Component, prop: String },
    #[error("{component}: prop '{prop}' should be {expected}, found {found}")]
    WrongShape {
        component: Component,
        prop: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("'{0}' is not a valid attribute name")]
    InvalidAttributeName(String),
}

impl TagsError {
    /// Returns true for every variant that represents a broken props contract.
    /// Malformed JSON is a different kind of failure and returns false.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, TagsError::Json(_))
    }

    pub(crate) fn missing<S: Into<String>>(component: Component, prop: S) -> Self {
        Self::MissingProp {
            component,
            prop: prop.into(),
        }
    }

    pub(crate) fn empty<S: Into<String>>(component: Component, prop: S) -> Self {
        Self::EmptyText {
            component,
            prop: prop.into(),
        }
    }
}
