//! Test fixtures and helpers.
//!
//! The library never signs. Tests that need a signed attestation use
//! [`ExternalSigner`], which stands in for the real signing service: it
//! wraps the statement in a DSSE envelope signed with Ed25519 and hands the
//! envelope bytes back to the attestation.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};

use vex_attest::{Attestation, AttestationError, Predicate, Result, Subject};

/// DSSE payload type for in-toto statements.
pub const IN_TOTO_PAYLOAD_TYPE: &str = "application/vnd.in-toto+json";

/// A DSSE (Dead Simple Signing Envelope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsseEnvelope {
    pub payload_type: String,
    /// Base64 of the statement bytes.
    pub payload: String,
    pub signatures: Vec<DsseSignature>,
}

/// A single DSSE signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsseSignature {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keyid: String,
    /// Base64 of the Ed25519 signature over the PAE.
    pub sig: String,
}

/// DSSE pre-authentication encoding.
///
/// `"DSSEv1" SP len(type) SP type SP len(body) SP body`
pub fn pae(payload_type: &str, payload: &[u8]) -> Vec<u8> {
    let mut buf = format!(
        "DSSEv1 {} {} {} ",
        payload_type.len(),
        payload_type,
        payload.len()
    )
    .into_bytes();
    buf.extend_from_slice(payload);
    buf
}

/// An Ed25519 DSSE signer playing the part of the external signing process.
#[derive(Debug, Clone)]
pub struct ExternalSigner {
    key: SigningKey,
}

impl ExternalSigner {
    /// Deterministic signer from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(&seed),
        }
    }

    /// Signer with a random key.
    pub fn generate() -> Self {
        Self {
            key: SigningKey::generate(&mut rand::rngs::OsRng),
        }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.key.verifying_key()
    }

    /// Key id recorded in envelopes: hex of the public key.
    pub fn keyid(&self) -> String {
        hex::encode(self.verifying_key().as_bytes())
    }

    /// Produce DSSE envelope bytes over the attestation's statement.
    pub fn sign_bytes<P: Predicate>(&self, attestation: &Attestation<P>) -> Result<Vec<u8>> {
        let statement = attestation.statement_bytes()?;
        let signature = self.key.sign(&pae(IN_TOTO_PAYLOAD_TYPE, &statement));

        let envelope = DsseEnvelope {
            payload_type: IN_TOTO_PAYLOAD_TYPE.to_string(),
            payload: STANDARD.encode(&statement),
            signatures: vec![DsseSignature {
                keyid: self.keyid(),
                sig: STANDARD.encode(signature.to_bytes()),
            }],
        };
        serde_json::to_vec(&envelope).map_err(AttestationError::EncodingFailure)
    }

    /// Sign and record the envelope on the attestation.
    pub fn sign<P: Predicate>(&self, attestation: Attestation<P>) -> Result<Attestation<P>> {
        let bytes = self.sign_bytes(&attestation)?;
        Ok(attestation.into_signed(bytes))
    }

    /// Check that `envelope` carries a valid signature from this signer.
    pub fn verify(&self, envelope: &[u8]) -> bool {
        self.verify_inner(envelope).unwrap_or(false)
    }

    fn verify_inner(&self, envelope: &[u8]) -> Option<bool> {
        let envelope: DsseEnvelope = serde_json::from_slice(envelope).ok()?;
        let payload = STANDARD.decode(&envelope.payload).ok()?;
        let message = pae(&envelope.payload_type, &payload);
        let key = self.verifying_key();

        Some(envelope.signatures.iter().any(|s| {
            STANDARD
                .decode(&s.sig)
                .ok()
                .and_then(|raw| Signature::from_slice(&raw).ok())
                .map(|sig| key.verify(&message, &sig).is_ok())
                .unwrap_or(false)
        }))
    }
}

/// Decode the statement bytes carried inside a DSSE envelope.
pub fn envelope_payload(envelope: &[u8]) -> Option<Vec<u8>> {
    let envelope: DsseEnvelope = serde_json::from_slice(envelope).ok()?;
    STANDARD.decode(envelope.payload).ok()
}

/// A few well-formed subjects.
pub fn sample_subjects() -> Vec<Subject> {
    vec![
        Subject::new("cgr.dev/chainguard/nginx")
            .with_digest("sha256", "0b1bbc2b3a8f5ecc4e8a1e8d2d3e0b3a9ec1f7a2d6b1c3e4f5a6b7c8d9e0f1a2"),
        Subject::new("app.tar.gz")
            .with_digest("sha256", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
            .with_digest("sha512", "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"),
    ]
}
