use serde::{Deserialize, Serialize};

/// Access parameters for the price spreadsheet.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub sheet_id: String,
    pub access_key: String,
    pub range: String,
}

impl SheetConfig {
    /// Name of the first empty field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.sheet_id.trim().is_empty() {
            Some("sheet_id")
        } else if self.access_key.trim().is_empty() {
            Some("access_key")
        } else if self.range.trim().is_empty() {
            Some("range")
        } else {
            None
        }
    }

    /// Copy that is safe to hand back to a client.
    pub fn redacted(&self) -> Self {
        Self {
            sheet_id: self.sheet_id.clone(),
            access_key: if self.access_key.is_empty() {
                String::new()
            } else {
                "[redacted]".to_string()
            },
            range: self.range.clone(),
        }
    }
}

impl std::fmt::Debug for SheetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetConfig")
            .field("sheet_id", &self.sheet_id)
            .field("access_key", &"[redacted]")
            .field("range", &self.range)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SheetConfig {
        SheetConfig {
            sheet_id: "sheet-1".to_string(),
            access_key: "secret".to_string(),
            range: "Prices!A1:C10".to_string(),
        }
    }

    #[test]
    fn complete_config_has_no_missing_field() {
        assert_eq!(complete().missing_field(), None);
    }

    #[test]
    fn reports_first_blank_field() {
        let mut config = complete();
        config.access_key = "   ".to_string();
        assert_eq!(config.missing_field(), Some("access_key"));

        config.sheet_id.clear();
        assert_eq!(config.missing_field(), Some("sheet_id"));
    }

    #[test]
    fn debug_output_hides_access_key() {
        let rendered = format!("{:?}", complete());
        assert!(!rendered.contains("secret"));
        assert_eq!(complete().redacted().access_key, "[redacted]");
    }
}
