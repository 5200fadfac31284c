//! Roster validation result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::PlayerId;

/// Issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    /// Warning - the roster can still be submitted.
    Warning,
    /// Error - blocks submission.
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single roster issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterIssue {
    /// Issue code (e.g., "KEEPER_LIMIT_EXCEEDED").
    pub code: String,
    /// Issue severity.
    pub severity: IssueSeverity,
    /// Human-readable message.
    pub message: String,
    /// Player the issue is about (empty for roster-level issues).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    /// Observed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<String>,
    /// Configured limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

impl RosterIssue {
    /// Create a new issue.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        severity: IssueSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            severity,
            message: message.into(),
            player_id: None,
            observed: None,
            limit: None,
        }
    }

    /// Create an error-level issue.
    #[must_use]
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, IssueSeverity::Error, message)
    }

    /// Create a warning-level issue.
    #[must_use]
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, IssueSeverity::Warning, message)
    }

    /// Add player context.
    #[must_use]
    pub fn with_player(mut self, player_id: &PlayerId) -> Self {
        self.player_id = Some(player_id.clone());
        self
    }

    /// Add observed value.
    #[must_use]
    pub fn with_observed(mut self, value: impl fmt::Display) -> Self {
        self.observed = Some(value.to_string());
        self
    }

    /// Add limit value.
    #[must_use]
    pub fn with_limit(mut self, value: impl fmt::Display) -> Self {
        self.limit = Some(value.to_string());
        self
    }

    /// Returns true if this issue blocks submission.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl fmt::Display for RosterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)?;
        if let Some(player) = &self.player_id {
            write!(f, " (player: {player})")?;
        }
        Ok(())
    }
}

/// Outcome of validating a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterValidation {
    /// No error-level issues were found.
    pub passed: bool,
    /// Issues in the order they were found.
    pub issues: Vec<RosterIssue>,
}

impl RosterValidation {
    /// Create a passing result with no issues.
    #[must_use]
    pub fn success() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
        }
    }

    /// Create a result from issues, determining pass/fail.
    #[must_use]
    pub fn from_issues(issues: Vec<RosterIssue>) -> Self {
        Self {
            passed: !issues.iter().any(RosterIssue::is_error),
            issues,
        }
    }

    /// Error-level issues only.
    #[must_use]
    pub fn errors(&self) -> Vec<&RosterIssue> {
        self.issues.iter().filter(|i| i.is_error()).collect()
    }

    /// Warning-level issues only.
    #[must_use]
    pub fn warnings(&self) -> Vec<&RosterIssue> {
        self.issues.iter().filter(|i| !i.is_error()).collect()
    }

    /// Returns true if an issue with `code` was reported.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }

    /// Add an issue to this result.
    pub fn add_issue(&mut self, issue: RosterIssue) {
        if issue.is_error() {
            self.passed = false;
        }
        self.issues.push(issue);
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: Self) {
        if !other.passed {
            self.passed = false;
        }
        self.issues.extend(other.issues);
    }
}

impl Default for RosterValidation {
    fn default() -> Self {
        Self::success()
    }
}
