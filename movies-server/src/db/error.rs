//! Store error type

/// Failure inside the persistence layer.
///
/// "Row not found" is not represented here; repositories report absence
/// through their return values.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("failed to create {object}: {source}")]
    Schema {
        object: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    pub(crate) fn schema(object: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Schema { object, source }
    }
}
