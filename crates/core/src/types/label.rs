//! Parsing errors for the storefront's fixed display labels.

/// A display label that is not part of a closed label set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} label: {label:?}")]
pub struct UnknownLabel {
    /// Which label set was being parsed (e.g. "payment method").
    pub kind: &'static str,
    /// The rejected input.
    pub label: String,
}

impl UnknownLabel {
    pub(crate) fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_owned(),
        }
    }
}
