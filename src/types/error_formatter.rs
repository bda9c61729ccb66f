//! Error list formatting utilities.
//!
//! The boundary layer renders a failed outcome as a list of errors. The
//! [`ErrorFormatter`] trait controls how each error and the joins between
//! them look; [`ErrorFormatConfig`] is the configuration-driven formatter
//! used by [`Outcome::display_errors`](crate::Outcome::display_errors).
use alloc::string::{String, ToString};
use core::fmt::{self, Display};

use crate::types::Error;

/// Trait for customizing error list formatting.
pub trait ErrorFormatter {
    fn format_item(&self, error: &Error) -> String {
        error.to_string()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_list<'a>(&self, errors: impl Iterator<Item = &'a Error>) -> String {
        let mut result = String::new();
        for (i, error) in errors.enumerate() {
            if i > 0 {
                result.push_str(self.separator());
            }
            result.push_str(&self.format_item(error));
        }
        result
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub item_prefix: Option<String>,
    /// Puts each error on its own line; `separator` is ignored while set.
    pub multiline: bool,
    pub show_code: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self { separator: "; ".into(), item_prefix: None, multiline: false, show_code: true }
    }
}

impl ErrorFormatConfig {
    /// One error per line, each prefixed with `- `.
    #[inline]
    pub fn bulleted() -> Self {
        Self { item_prefix: Some("- ".into()), multiline: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, error: &Error) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.item_prefix {
            result.push_str(prefix);
        }
        if self.show_code {
            result.push_str(&error.to_string());
        } else {
            result.push_str(error.message());
        }
        result
    }

    fn separator(&self) -> &str {
        if self.multiline {
            "\n"
        } else {
            &self.separator
        }
    }
}

/// Builder for customizing how an outcome's errors are displayed.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, Outcome};
///
/// let outcome = Outcome::<()>::failure_many([Error::empty("FirstName"), Error::empty("LastName")]);
/// assert_eq!(
///     outcome.display_errors().show_code(false).to_string(),
///     "FirstName must not be empty.; LastName must not be empty."
/// );
/// ```
pub struct ErrorListDisplay<'a> {
    pub(crate) errors: &'a [Error],
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorListDisplay<'a> {
    pub fn new(errors: &'a [Error]) -> Self {
        Self { errors, config: ErrorFormatConfig::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self.config.multiline = false;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.config.multiline = multiline;
        self
    }

    pub fn bulleted(mut self) -> Self {
        let show_code = self.config.show_code;
        self.config = ErrorFormatConfig { show_code, ..ErrorFormatConfig::bulleted() };
        self
    }

    pub fn compact(mut self) -> Self {
        let show_code = self.config.show_code;
        self.config = ErrorFormatConfig { show_code, ..ErrorFormatConfig::compact() };
        self
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }
}

impl Display for ErrorListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config.format_list(self.errors.iter()))
    }
}
