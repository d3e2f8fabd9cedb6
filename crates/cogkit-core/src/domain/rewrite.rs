//! Whole-buffer rewriting.
//!
//! A [`RewritePlan`] is an ordered list of steps applied to one in-memory
//! string: each step sees the output of the previous one. Literal steps
//! replace every occurrence of an exact substring; pattern steps replace
//! every regex match. Replacement text is inserted verbatim (no `$1`
//! expansion).
//!
//! | Rewrite                 | Input  | Steps                                  |
//! |-------------------------|--------|----------------------------------------|
//! | `RewritePlan::manifest` | text   | 4-5 literals, then 4 line deletions    |
//! | [`TokenReplacement`]    | bytes  | token -> machine name                  |
//!
//! The token pass works on raw bytes so templates in any encoding, and
//! binaries, go through it untouched apart from the token itself.

use memchr::memmem;
use regex_lite::{NoExpand, Regex};

use crate::domain::error::DomainError;

/// Title suffix shipped in the starter kit manifest.
pub const MANIFEST_TITLE_MARKER: &str = ": Cog Sub-theme Starter Kit";
/// Description line shipped in the starter kit manifest.
pub const MANIFEST_DESCRIPTION_MARKER: &str =
    "Read the included README.md on how to create a theme with cog.";

/// Lines removed from the manifest by pattern, in application order.
const MANIFEST_LINE_PATTERNS: &[&str] = &[
    r"hidden: true\n",
    r"# Information added by Drupal\.org packaging script on [0-9-]+\n",
    r"version: '[^']+'\n",
    r"datestamp: [0-9]+\n",
];

/// One rewrite step.
#[derive(Debug, Clone)]
pub enum RewriteStep {
    Literal { find: String, replace: String },
    Pattern { regex: Regex, replace: String },
}

impl RewriteStep {
    pub fn literal(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self::Literal {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Compile a pattern step.
    ///
    /// # Errors
    /// `DomainError::InvalidPattern` if `pattern` is not a valid regex.
    pub fn pattern(pattern: &str, replace: impl Into<String>) -> Result<Self, DomainError> {
        let regex = Regex::new(pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::Pattern {
            regex,
            replace: replace.into(),
        })
    }

    fn apply(&self, input: &str) -> String {
        match self {
            Self::Literal { find, .. } if find.is_empty() => input.to_string(),
            Self::Literal { find, replace } => input.replace(find.as_str(), replace),
            Self::Pattern { regex, replace } => {
                regex.replace_all(input, NoExpand(replace.as_str())).into_owned()
            }
        }
    }
}

/// Ordered sequence of rewrite steps.
#[derive(Debug, Clone, Default)]
pub struct RewritePlan {
    steps: Vec<RewriteStep>,
}

impl RewritePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: RewriteStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: RewriteStep) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order over `input`.
    pub fn apply(&self, input: &str) -> String {
        self.steps
            .iter()
            .fold(input.to_string(), |buffer, step| step.apply(&buffer))
    }

    /// Rules for the starter kit's `.info.yml`.
    ///
    /// Literal substitutions run first, then the line deletions.
    pub fn manifest(name: &str, description: Option<&str>) -> Result<Self, DomainError> {
        let mut plan = Self::new()
            .with_step(RewriteStep::literal(
                MANIFEST_TITLE_MARKER,
                format!(": {name}"),
            ))
            .with_step(RewriteStep::literal("# core: 8.x", "core: 8.x"))
            .with_step(RewriteStep::literal("core: '8.x'\n", ""))
            .with_step(RewriteStep::literal("project: 'cog'\n", ""));

        if let Some(description) = description.filter(|d| !d.is_empty()) {
            plan.push(RewriteStep::literal(MANIFEST_DESCRIPTION_MARKER, description));
        }

        for pattern in MANIFEST_LINE_PATTERNS {
            plan.push(RewriteStep::pattern(pattern, "")?);
        }

        Ok(plan)
    }
}

/// Token -> machine name over a file's raw bytes.
#[derive(Debug, Clone)]
pub struct TokenReplacement {
    token: String,
    replacement: String,
}

impl TokenReplacement {
    pub fn new(token: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            replacement: replacement.into(),
        }
    }

    /// Replace every non-overlapping occurrence of the token.
    ///
    /// Returns `None` when the token does not occur (or is empty), so callers
    /// can skip the write.
    pub fn apply(&self, input: &[u8]) -> Option<Vec<u8>> {
        if self.token.is_empty() {
            return None;
        }

        let mut matches = memmem::find_iter(input, self.token.as_bytes()).peekable();
        matches.peek()?;

        let mut output = Vec::with_capacity(input.len());
        let mut last = 0;
        for at in matches {
            output.extend_from_slice(&input[last..at]);
            output.extend_from_slice(self.replacement.as_bytes());
            last = at + self.token.len();
        }
        output.extend_from_slice(&input[last..]);
        Some(output)
    }
}
