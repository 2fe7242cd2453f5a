use payables_states::Record;
use serde::Serialize;
use serde::de::DeserializeOwned;
use ustr::Ustr;

/// A record served by a REST collection endpoint.
///
/// The draft doubles as the POST/PATCH body, so it must serialize with unset
/// fields omitted.
pub trait Resource:
    Record<Id = Ustr, Draft: Serialize + Send + Sync + 'static>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Path segment below `/api`, e.g. `purchase-orders`.
    const ENDPOINT: &'static str;

    /// Singular, human-readable name used in notices.
    const LABEL: &'static str;

    /// Client-side checks the page runs before submitting a draft.
    ///
    /// Returns the first problem found.
    fn validate(_draft: &Self::Draft) -> Result<(), String> {
        Ok(())
    }
}

/// Fails with "`field` is required" when `value` is missing or blank.
pub(crate) fn require_text(value: Option<&str>, field: &str) -> Result<(), String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(format!("{field} is required")),
    }
}

/// Fails when `value` is missing or not strictly positive.
pub(crate) fn require_positive(value: Option<f64>, field: &str) -> Result<(), String> {
    match value {
        Some(amount) if amount > 0.0 => Ok(()),
        Some(_) => Err(format!("{field} must be greater than zero")),
        None => Err(format!("{field} is required")),
    }
}
