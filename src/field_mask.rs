use crate::errors::{SheetsError, SheetsResult};
use indexmap::IndexSet;

/// Attribute paths a partial update may touch, in the order they were set.
///
/// `force_send` tracks attributes whose value is the zero value (`false`,
/// `0`) and must still be transmitted; otherwise the backend cannot tell
/// "cleared" from "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    paths: IndexSet<String>,
    force_send: IndexSet<String>,
}

impl FieldMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>) -> &mut Self {
        self.paths.insert(path.into());
        self
    }

    pub fn force_send(&mut self, field: impl Into<String>) -> &mut Self {
        self.force_send.insert(field.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn force_send_fields(&self) -> impl Iterator<Item = &str> {
        self.force_send.iter().map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn is_force_sent(&self, field: &str) -> bool {
        self.force_send.contains(field)
    }

    /// Comma-joined mask, failing when nothing was selected.
    pub fn render_required(&self, what: &str) -> SheetsResult<String> {
        if self.is_empty() {
            return Err(SheetsError::validation(format!(
                "no {what} specified"
            )));
        }
        Ok(self.render())
    }

    pub fn render(&self) -> String {
        self.paths.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_dedups() {
        let mut mask = FieldMask::new();
        mask.add("b").add("a").add("b");
        assert_eq!(mask.render(), "b,a");
        assert!(mask.contains("a"));
    }

    #[test]
    fn empty_mask_fails_when_required() {
        let err = FieldMask::new().render_required("formatting options").unwrap_err();
        assert!(matches!(err, SheetsError::Validation(_)));
        assert_eq!(err.to_string(), "no formatting options specified");
    }
}
