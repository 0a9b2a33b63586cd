use business::domain::errors::RepositoryError;

/// Translates driver errors into the domain's repository errors.
pub(crate) fn into_repository_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        // The referenced wishlist vanished between lookup and insert.
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::NotFound,
        // Rows came back but do not fit the entity.
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => {
            tracing::error!(error = %err, "stored row could not be decoded");
            RepositoryError::Persistence
        }
        _ => {
            tracing::error!(error = %err, "database query failed");
            RepositoryError::DatabaseError
        }
    }
}

/// Builds an `ILIKE` pattern that matches `needle` literally anywhere in the column.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
