//! CLI command implementations

pub mod list;
pub mod pixel;

use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// Parses `a,b,c` into three samples.
pub fn parse_triple<T>(text: &str) -> Result<[T; 3]>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected 3 comma-separated values, got {} in '{}'", parts.len(), text);
    }
    let mut out = Vec::with_capacity(3);
    for part in parts {
        out.push(
            part.parse::<T>()
                .with_context(|| format!("invalid sample '{}' in '{}'", part, text))?,
        );
    }
    match <[T; 3]>::try_from(out) {
        Ok(px) => Ok(px),
        Err(_) => bail!("expected 3 values in '{}'", text),
    }
}

/// Formats samples for display: integers for 8-bit spaces, 6 decimals otherwise.
pub fn format_values(values: &[f64], integer: bool) -> String {
    values
        .iter()
        .map(|v| if integer { format!("{}", *v as i64) } else { format!("{:.6}", v) })
        .collect::<Vec<_>>()
        .join(",")
}
