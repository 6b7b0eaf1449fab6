//! The attestation envelope.
//!
//! An attestation is two separate groups of data:
//!
//! - the [`Statement`]: `_type`, `predicateType`, `subject`, `predicate`.
//!   This is the only thing ever handed to the JSON encoder.
//! - the [`Envelope`] mode: unsigned, or signed together with the exact bytes
//!   an external signer produced. It never appears in the JSON body.
//!
//! Emission dispatches on the mode. Once signed, the statement fields are no
//! longer the source of truth: they may have been edited since, or never
//! populated at all, and the signed bytes are written out untouched.

use std::io::Write;

use bytes::Bytes;
use tracing::{debug, trace, warn};
use vex_attest_core::{JsonConfig, Predicate, Statement, Subject, VexDocument};

use crate::error::{AttestationError, Result};

/// Serialization mode of an attestation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Envelope {
    /// Emit by encoding the statement fields.
    #[default]
    Unsigned,
    /// Emit these bytes verbatim.
    Signed(Bytes),
}

/// An in-toto attestation binding a predicate to a list of subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct Attestation<P = VexDocument> {
    statement: Statement<P>,
    envelope: Envelope,
}

impl<P: Predicate> Attestation<P> {
    /// Create an unsigned attestation with no subjects and a default predicate.
    pub fn new() -> Self {
        Self {
            statement: Statement::new(),
            envelope: Envelope::Unsigned,
        }
    }

    /// Wrap previously signed bytes.
    ///
    /// The statement fields are left at their defaults; only the bytes are
    /// emitted.
    pub fn from_signed_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            statement: Statement::new(),
            envelope: Envelope::Signed(bytes.into()),
        }
    }

    /// Parse an unsigned attestation from its JSON form.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let statement = Statement::from_json(bytes)?;
        debug!(
            subjects = statement.subjects().len(),
            "parsed unsigned attestation"
        );
        Ok(Self {
            statement,
            envelope: Envelope::Unsigned,
        })
    }

    /// The in-toto statement type URI.
    pub fn statement_type(&self) -> &str {
        self.statement.statement_type()
    }

    /// The predicate type URI, fixed by `P`.
    pub fn predicate_type(&self) -> &str {
        self.statement.predicate_type()
    }

    /// Subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        self.statement.subjects()
    }

    /// The predicate payload.
    pub fn predicate(&self) -> &P {
        self.statement.predicate()
    }

    /// Mutable access to the predicate.
    ///
    /// Changes made after signing are not emitted.
    pub fn predicate_mut(&mut self) -> &mut P {
        self.statement.predicate_mut()
    }

    /// The wire-visible statement fields.
    pub fn statement(&self) -> &Statement<P> {
        &self.statement
    }

    /// The serialization mode.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Whether emission writes signed bytes.
    pub fn is_signed(&self) -> bool {
        matches!(self.envelope, Envelope::Signed(_))
    }

    /// The signed bytes, if the attestation has been signed.
    pub fn signed_bytes(&self) -> Option<&[u8]> {
        match &self.envelope {
            Envelope::Signed(bytes) => Some(&bytes[..]),
            Envelope::Unsigned => None,
        }
    }

    /// Append subjects, all or nothing.
    ///
    /// Fails with [`AttestationError::InvalidSubject`] if any subject has no
    /// digests, in which case the subject list is unchanged. No
    /// deduplication is performed.
    pub fn add_subjects<I>(&mut self, subjects: I) -> Result<()>
    where
        I: IntoIterator<Item = Subject>,
    {
        let before = self.statement.subjects().len();
        self.statement.add_subjects(subjects)?;
        let added = self.statement.subjects().len() - before;

        if self.is_signed() && added > 0 {
            warn!(added, "subjects added to a signed attestation will not be emitted");
        }
        debug!(added, total = before + added, "added subjects");
        Ok(())
    }

    /// Record externally produced signed bytes.
    ///
    /// This does not sign anything. It switches emission to write `bytes`
    /// verbatim from now on.
    pub fn mark_signed(&mut self, bytes: impl Into<Bytes>) {
        let bytes = bytes.into();
        debug!(len = bytes.len(), "attestation marked as signed");
        self.envelope = Envelope::Signed(bytes);
    }

    /// Consuming form of [`Attestation::mark_signed`].
    pub fn into_signed(mut self, bytes: impl Into<Bytes>) -> Self {
        self.mark_signed(bytes);
        self
    }

    /// Canonical JSON of the statement fields, whatever the mode.
    ///
    /// This is the payload an external signer signs.
    pub fn statement_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.statement.to_canonical_json(&JsonConfig::default())?)
    }

    /// Write the attestation to `w`.
    ///
    /// Signed attestations write their signed bytes. Unsigned ones are
    /// encoded as two-space indented JSON without HTML escaping.
    pub fn to_json<W: Write>(&self, w: W) -> Result<()> {
        self.to_json_with(&JsonConfig::default(), w)
    }

    /// Write the attestation to `w` using `config` for the unsigned encoding.
    ///
    /// `config` has no effect on a signed attestation.
    pub fn to_json_with<W: Write>(&self, config: &JsonConfig, mut w: W) -> Result<()> {
        match &self.envelope {
            Envelope::Signed(bytes) => {
                trace!(len = bytes.len(), "writing signed attestation");
                w.write_all(bytes).map_err(AttestationError::WriteFailure)?;
            }
            Envelope::Unsigned => {
                let encoded = self.statement.to_canonical_json(config)?;
                trace!(len = encoded.len(), "writing unsigned attestation");
                w.write_all(&encoded).map_err(AttestationError::WriteFailure)?;
            }
        }
        w.flush().map_err(AttestationError::WriteFailure)
    }

    /// Emit into a new buffer.
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.to_json(&mut buf)?;
        Ok(buf)
    }
}

impl<P: Predicate> Default for Attestation<P> {
    fn default() -> Self {
        Self::new()
    }
}
