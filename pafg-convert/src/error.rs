use thiserror::Error;

/// Faults raised while translating a configuration tree.
///
/// Optional fields never produce these; they fall back to defaults or cause
/// the enclosing entry to be skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A field the target syntax cannot do without is absent or empty.
    #[error("required field `{field}` is missing in {context}")]
    MissingField {
        field: &'static str,
        context: String,
    },
}

impl ConvertError {
    pub(crate) fn missing(field: &'static str, context: impl Into<String>) -> Self {
        Self::MissingField {
            field,
            context: context.into(),
        }
    }
}
