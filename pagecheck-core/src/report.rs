use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Violation;

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleOutcome {
    pub description: &'static str,
    pub violation: Option<Violation>,
}

impl ExampleOutcome {
    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }
}

/// Outcome of every example in a group, in the order they ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleReport {
    pub group: &'static str,
    pub outcomes: Vec<ExampleOutcome>,
}

impl ExampleReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ExampleOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExampleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

impl fmt::Display for ExampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group)?;
        for outcome in &self.outcomes {
            match &outcome.violation {
                None => write!(f, "\n  {} ... ok", outcome.description)?,
                Some(violation) => write!(f, "\n  {} ... FAILED\n    {}", outcome.description, violation)?,
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Passed,
    Failed,
}

#[derive(Serialize)]
struct OutcomeView<'a> {
    description: &'a str,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
struct ReportView<'a> {
    group: &'a str,
    success: bool,
    examples: Vec<OutcomeView<'a>>,
}

impl Serialize for ExampleReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let examples = self
            .outcomes
            .iter()
            .map(|o| OutcomeView {
                description: o.description,
                status: if o.passed() { Status::Passed } else { Status::Failed },
                message: o.violation.as_ref().map(|v| v.to_string()),
            })
            .collect();
        ReportView {
            group: self.group,
            success: self.is_success(),
            examples,
        }
        .serialize(serializer)
    }
}
