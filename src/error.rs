use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum CombinatoricsError {
    /// A configuration parameter (`total`, `n`) was below zero.
    #[error("{generator}(): {name} must be >= 0, got {value}")]
    NegativeArgument {
        generator: &'static str,
        name: &'static str,
        value: i64,
    },
}

/// Rejects negative configuration parameters before any input is seen.
pub(crate) fn non_negative(generator: &'static str, name: &'static str, value: i64) -> Result<u64, CombinatoricsError> {
    u64::try_from(value).map_err(|_| {
        tracing::warn!(generator, name, value, "rejected negative parameter");
        CombinatoricsError::NegativeArgument { generator, name, value }
    })
}
