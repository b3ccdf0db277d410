//!
//! Diagnostics accumulator.
//!
//! One `Diagnostics` value is created per mapping call and threaded by
//! `&mut` through every conversion step. Steps append and keep going; the
//! entry point inspects the result once, so a configuration with several
//! independent problems reports all of them in a single pass.
//!

use crate::{Error, config::Config, log, log::Topic, path::AttrPath};
use derive_more::Display;
use serde::Serialize;
use std::fmt;

///
/// Severity
///

#[derive(Clone, Copy, Debug, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[display("warning")]
    Warning,

    #[display("error")]
    Error,
}

///
/// DiagnosticClass
/// What kind of conversion step raised the diagnostic.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum DiagnosticClass {
    /// A declarative number does not fit the API's native width.
    Coercion,

    /// A nested element or a node field could not be converted.
    Conversion,

    /// A composite identifier could not be decoded.
    IdDecode,

    /// The configuration is well-formed but violates a business rule.
    InvalidConfig,
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub class: DiagnosticClass,
    pub attribute: AttrPath,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(
        class: DiagnosticClass,
        attribute: AttrPath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            class,
            attribute,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn warning(
        class: DiagnosticClass,
        attribute: AttrPath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(class, attribute, summary, detail)
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}: {}",
            self.severity, self.class, self.attribute, self.summary, self.detail
        )
    }
}

///
/// Diagnostics
///
/// Append-only. With a retention cap, entries past the cap are counted in
/// `dropped` instead of stored, but a dropped error still makes
/// `has_error` true. The cap is at least one, so the first entry is always
/// kept and `is_empty` means nothing was reported at all.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
    dropped: usize,

    #[serde(skip)]
    dropped_errors: usize,

    #[serde(skip)]
    limit: Option<usize>,

    #[serde(skip)]
    fatal: bool,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            limit: Some(max_entries.max(1)),
            ..Self::default()
        }
    }

    /// Accumulator honouring `diagnostics.max_entries` from the current config.
    #[must_use]
    pub fn from_config() -> Self {
        match Config::get().diagnostics.max_entries {
            Some(max) => Self::with_limit(max),
            None => Self::new(),
        }
    }

    pub fn append(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.fatal = true;
        }

        if self.limit.is_some_and(|max| self.entries.len() >= max) {
            self.dropped += 1;
            if diagnostic.is_error() {
                self.dropped_errors += 1;
            }
            return;
        }

        self.entries.push(diagnostic);
    }

    pub fn error(
        &mut self,
        class: DiagnosticClass,
        attribute: AttrPath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.append(Diagnostic::error(class, attribute, summary, detail));
    }

    pub fn warning(
        &mut self,
        class: DiagnosticClass,
        attribute: AttrPath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.append(Diagnostic::warning(class, attribute, summary, detail));
    }

    /// Move every entry of `other` into `self`, keeping order.
    pub fn extend(&mut self, other: Self) {
        self.fatal |= other.fatal;
        self.dropped += other.dropped;
        self.dropped_errors += other.dropped_errors;

        for diagnostic in other.entries {
            self.append(diagnostic);
        }
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.fatal
    }

    /// Errors currently retained (dropped entries are not counted).
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|d| d.is_error()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.entries.len() - self.error_count()
    }

    /// Entries currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    #[must_use]
    pub const fn dropped_errors(&self) -> usize {
        self.dropped_errors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }

        if self.dropped > 0 {
            write!(f, "\n... and {} more", self.dropped)?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

///
/// Mapped
///
/// Return value of every public mapping entry point: the converted value
/// together with everything reported while building it.
///

#[derive(Debug)]
#[must_use]
pub struct Mapped<T> {
    value: T,
    diagnostics: Diagnostics,
}

impl<T> Mapped<T> {
    pub const fn new(value: T, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.diagnostics.has_error()
    }

    /// Release the value only when nothing fatal was reported.
    ///
    /// Warnings are discarded; use `into_parts` to keep them.
    pub fn into_result(self) -> Result<T, Error> {
        if self.diagnostics.has_error() {
            log!(
                Topic::Mapping,
                Warn,
                "mapping rejected with {} error(s)",
                self.diagnostics.error_count() + self.diagnostics.dropped_errors()
            );

            return Err(Error::Diagnostics(self.diagnostics));
        }

        Ok(self.value)
    }

    /// Value and diagnostics, whether or not anything fatal was reported.
    pub fn into_parts(self) -> (T, Diagnostics) {
        (self.value, self.diagnostics)
    }
}

///
/// TESTS
///
