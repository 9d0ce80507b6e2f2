//! `${VAR}` expansion for site metadata strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Only braced references are expanded; a bare `$name` is kept as written
/// even when the same string also holds a `${VAR}`. An unclosed `${` is
/// kept literally.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        let reference = shellexpand::env_with_context(&rest[start..end], lookup_var)
            .map_err(|e| ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} not set", e.cause.0),
            })?;
        expanded.push_str(&reference);
        rest = &rest[end..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

fn lookup_var(var: &str) -> Result<Option<String>, UnsetVar> {
    std::env::var(var)
        .map(Some)
        .map_err(|_| UnsetVar(var.to_owned()))
}

/// Name of a variable that had no value and no default.
struct UnsetVar(String);

/// Expand an optional field in place.
pub(crate) fn expand_field(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}
