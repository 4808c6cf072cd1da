use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A child element that no declaration consumed.
    UnparsedElement,
    /// The element tag differs from the tag the node expected.
    TagMismatch,
}

/// A non-fatal finding from parsing a document, usually gateway schema drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub kind: DiagnosticKind,
    /// Tag of the element the finding is about.
    pub tag: String,
    /// Tag of the enclosing element, or the expected tag for a mismatch.
    pub context: String,
}

impl ParseDiagnostic {
    pub fn unparsed(tag: &str, parent: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnparsedElement,
            tag: tag.to_string(),
            context: parent.to_string(),
        }
    }

    pub fn tag_mismatch(found: &str, expected: &str) -> Self {
        Self {
            kind: DiagnosticKind::TagMismatch,
            tag: found.to_string(),
            context: expected.to_string(),
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnparsedElement => write!(
                f,
                "Tag \"{}\" was not parsed. Child of \"{}\" tag.",
                self.tag, self.context
            ),
            DiagnosticKind::TagMismatch => write!(
                f,
                "Element received <{}> does not match expected tag name {}.",
                self.tag, self.context
            ),
        }
    }
}

/// Findings collected while parsing one document. Each one is also logged
/// at `warn` level as it is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<ParseDiagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: ParseDiagnostic) {
        tracing::warn!(
            tag = %diagnostic.tag,
            context = %diagnostic.context,
            "{diagnostic}"
        );
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseDiagnostic> {
        self.0.iter()
    }

    /// Whether an unparsed element with this tag was reported.
    pub fn reports_unparsed(&self, tag: &str) -> bool {
        self.0
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnparsedElement && d.tag == tag)
    }
}

impl IntoIterator for Diagnostics {
    type Item = ParseDiagnostic;
    type IntoIter = std::vec::IntoIter<ParseDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseDiagnostic;
    type IntoIter = std::slice::Iter<'a, ParseDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
