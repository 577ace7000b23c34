//! CLI input validation
//!
//! Validation runs before any network call; the first failing check aborts
//! the command. String-valued flags are converted to their real types here,
//! at the CLI boundary, so the rest of the code never sees `"true"` strings.

use uuid::Uuid;

use crate::error::ValidationError;

/// Length of the hyphenated GUID form, 8-4-4-4-12
const HYPHENATED_GUID_LEN: usize = 36;

/// Validate and parse a GUID-valued option.
///
/// Only the hyphenated form is accepted; `Uuid::parse_str` alone would also
/// take the simple, braced, and urn forms, which the Graph commands reject.
pub fn parse_guid(value: &str) -> Result<Uuid, ValidationError> {
    if value.len() != HYPHENATED_GUID_LEN {
        return Err(ValidationError::InvalidGuid {
            value: value.to_string(),
        });
    }

    Uuid::parse_str(value).map_err(|_| ValidationError::InvalidGuid {
        value: value.to_string(),
    })
}

/// Validate and parse a boolean-valued string option.
///
/// The external flag contract is string-valued: exactly `true` or `false`.
/// `option` is the flag name, used in the error message.
pub fn parse_bool_flag(option: &str, value: &str) -> Result<bool, ValidationError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean {
            value: value.to_string(),
            option: option.to_string(),
        }),
    }
}

/// Apply `parse_bool_flag` to an optional flag value
pub fn parse_opt_bool_flag(
    option: &str,
    value: Option<&str>,
) -> Result<Option<bool>, ValidationError> {
    value.map(|v| parse_bool_flag(option, v)).transpose()
}
