//! The in-toto statement: the wire-visible part of an attestation.

use serde::{Deserialize, Serialize};

use crate::canonical::{to_canonical_json, JsonConfig};
use crate::error::{CoreError, Result};
use crate::predicate::Predicate;
use crate::types::{validate_subjects, Subject};

/// Statement type URI for in-toto v0.1 statements. Constant for all
/// predicate types.
pub const STATEMENT_TYPE_V01: &str = "https://in-toto.io/Statement/v0.1";

/// A statement binding a predicate to a list of subjects.
///
/// `_type` and `predicateType` are fixed when the statement is created and
/// have no setters. Subjects only enter through [`Statement::add_subjects`],
/// so every held subject has at least one digest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement<P> {
    #[serde(rename = "_type")]
    statement_type: &'static str,

    #[serde(rename = "predicateType")]
    predicate_type: &'static str,

    subject: Vec<Subject>,

    predicate: P,
}

/// Wire shape accepted by [`Statement::from_json`] before validation.
#[derive(Deserialize)]
struct RawStatement<P> {
    #[serde(rename = "_type")]
    statement_type: String,

    #[serde(rename = "predicateType")]
    predicate_type: String,

    subject: Option<Vec<Subject>>,

    predicate: P,
}

impl<P: Predicate> Statement<P> {
    /// A statement with no subjects and a default predicate.
    pub fn new() -> Self {
        Self {
            statement_type: STATEMENT_TYPE_V01,
            predicate_type: P::PREDICATE_TYPE,
            subject: Vec::new(),
            predicate: P::default(),
        }
    }

    /// The statement type URI.
    pub fn statement_type(&self) -> &str {
        self.statement_type
    }

    /// The predicate type URI.
    pub fn predicate_type(&self) -> &str {
        self.predicate_type
    }

    /// Subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subject
    }

    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    pub fn predicate_mut(&mut self) -> &mut P {
        &mut self.predicate
    }

    /// Append subjects, all or nothing.
    ///
    /// The whole batch is checked first. If any subject has no digests the
    /// call fails with [`CoreError::InvalidSubject`] and the subject list is
    /// untouched. Duplicates are kept.
    pub fn add_subjects<I>(&mut self, subjects: I) -> Result<()>
    where
        I: IntoIterator<Item = Subject>,
    {
        let batch: Vec<Subject> = subjects.into_iter().collect();
        validate_subjects(&batch)?;
        self.subject.extend(batch);
        Ok(())
    }

    /// Encode to canonical JSON bytes.
    pub fn to_canonical_json(&self, config: &JsonConfig) -> Result<Vec<u8>> {
        to_canonical_json(self, config)
    }

    /// Parse a statement, checking its type URIs and subjects.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let raw: RawStatement<P> = serde_json::from_slice(bytes)
            .map_err(|e| CoreError::MalformedStatement(e.to_string()))?;

        if raw.statement_type != STATEMENT_TYPE_V01 {
            return Err(CoreError::MalformedStatement(format!(
                "unexpected _type: expected '{}', got '{}'",
                STATEMENT_TYPE_V01, raw.statement_type
            )));
        }
        if raw.predicate_type != P::PREDICATE_TYPE {
            return Err(CoreError::MalformedStatement(format!(
                "unexpected predicateType: expected '{}', got '{}'",
                P::PREDICATE_TYPE,
                raw.predicate_type
            )));
        }
        let subjects = raw
            .subject
            .ok_or_else(|| CoreError::MalformedStatement("missing subject array".into()))?;

        let mut statement = Self {
            statement_type: STATEMENT_TYPE_V01,
            predicate_type: P::PREDICATE_TYPE,
            subject: Vec::with_capacity(subjects.len()),
            predicate: raw.predicate,
        };
        statement.add_subjects(subjects)?;
        Ok(statement)
    }
}

impl<P: Predicate> Default for Statement<P> {
    fn default() -> Self {
        Self::new()
    }
}
