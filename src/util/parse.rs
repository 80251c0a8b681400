use sea_orm::DbErr;

/// Parses a stored snowflake id column at the repository boundary.
///
/// # Arguments
/// - `field` - Column name, used in the error message
/// - `value` - Stored string value
///
/// # Returns
/// - `Ok(u64)` - Parsed id
/// - `Err(DbErr::Custom)` - Value is not a valid u64
pub fn parse_id(field: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}
