use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:localhost|[^\s/?#:@]+\.[^\s/?#:@]+)(?::\d{1,5})?(?:[/?#]\S*)?$")
        .expect("HTTP_URL pattern is valid")
});

/// One problem with one submitted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub code: String,
}

/// Field name → messages, in stable (alphabetical) field order.
///
/// Serializes as `{"field": [{"message": "...", "code": "..."}]}`, which is
/// also the text the contact form returns to asynchronous callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldError>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, code: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(FieldError {
            message: message.into(),
            code: code.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.0
            .get(field)
            .map(|errs| errs.iter().map(|e| e.message.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// `field: message; field: message`
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .flat_map(|(field, errs)| errs.iter().map(move |e| format!("{field}: {}", e.message)))
            .collect::<Vec<_>>()
            .join("; ")
    }

    // ------------------------
    // Field checks
    // ------------------------

    pub fn required_text(&mut self, field: &str, value: &str, max_chars: usize) {
        let value = value.trim();
        if value.is_empty() {
            self.add(field, "required", "This field is required.");
            return;
        }
        self.max_length(field, value, max_chars);
    }

    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max_chars: usize) {
        if let Some(value) = value {
            self.max_length(field, value.trim(), max_chars);
        }
    }

    pub fn email(&mut self, field: &str, value: &str, max_chars: usize) {
        let value = value.trim();
        if value.is_empty() {
            self.add(field, "required", "This field is required.");
            return;
        }
        if !EmailAddress::is_valid(value) {
            self.add(field, "invalid", "Enter a valid email address.");
            return;
        }
        self.max_length(field, value, max_chars);
    }

    pub fn required_url(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.add(field, "required", "This field is required.");
            return;
        }
        self.url(field, value);
    }

    pub fn optional_url(&mut self, field: &str, value: Option<&str>) {
        match value.map(str::trim) {
            None | Some("") => {}
            Some(value) => self.url(field, value),
        }
    }

    pub fn at_most(&mut self, field: &str, value: u32, max: u32) {
        if value > max {
            self.add(
                field,
                "max_value",
                format!("Ensure this value is less than or equal to {max}."),
            );
        }
    }

    fn max_length(&mut self, field: &str, value: &str, max_chars: usize) {
        let len = value.chars().count();
        if len > max_chars {
            self.add(
                field,
                "max_length",
                format!("Ensure this value has at most {max_chars} characters (it has {len})."),
            );
        }
    }

    fn url(&mut self, field: &str, value: &str) {
        if !HTTP_URL.is_match(value) {
            self.add(field, "invalid", "Enter a valid URL.");
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        let mut errors = FieldErrors::new();
        errors.required_text("title", "   ", 10);

        assert_eq!(errors.messages("title"), vec!["This field is required."]);
    }

    #[test]
    fn test_required_text_counts_chars_not_bytes() {
        let mut errors = FieldErrors::new();
        errors.required_text("title", "ééééé", 5);
        assert!(errors.is_empty());

        errors.required_text("title", "éééééé", 5);
        assert_eq!(
            errors.messages("title"),
            vec!["Ensure this value has at most 5 characters (it has 6)."]
        );
    }

    #[test]
    fn test_email_validation() {
        let mut errors = FieldErrors::new();
        errors.email("email", "jane@example.com", 254);
        assert!(errors.is_empty());

        errors.email("email", "not-an-email", 254);
        assert_eq!(errors.messages("email"), vec!["Enter a valid email address."]);
    }

    #[test]
    fn test_url_validation() {
        let mut errors = FieldErrors::new();
        errors.required_url("url", "https://github.com/someone");
        errors.optional_url("demo", Some("http://localhost:8000/demo"));
        errors.optional_url("blank", Some(""));
        errors.optional_url("missing", None);
        assert!(errors.is_empty(), "{errors}");

        errors.required_url("url", "ftp://example.com");
        errors.optional_url("demo", Some("github.com/someone"));
        assert!(errors.contains("url"));
        assert!(errors.contains("demo"));
    }

    #[test]
    fn test_at_most() {
        let mut errors = FieldErrors::new();
        errors.at_most("proficiency", 100, 100);
        assert!(errors.is_empty());

        errors.at_most("proficiency", 101, 100);
        assert_eq!(
            errors.messages("proficiency"),
            vec!["Ensure this value is less than or equal to 100."]
        );
    }

    #[test]
    fn test_to_json_shape() {
        let mut errors = FieldErrors::new();
        errors.add("name", "required", "This field is required.");

        let value: serde_json::Value = serde_json::from_str(&errors.to_json()).unwrap();
        assert_eq!(value["name"][0]["code"], "required");
        assert_eq!(value["name"][0]["message"], "This field is required.");
    }

    #[test]
    fn test_summary_is_field_ordered() {
        let mut errors = FieldErrors::new();
        errors.add("message", "required", "This field is required.");
        errors.add("email", "invalid", "Enter a valid email address.");

        assert_eq!(
            errors.summary(),
            "email: Enter a valid email address.; message: This field is required."
        );
        assert!(errors.into_result().is_err());
    }
}
