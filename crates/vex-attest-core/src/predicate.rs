//! The capability an attestation payload must provide.

use serde::{de::DeserializeOwned, Serialize};

/// A typed claim about a set of subjects.
///
/// The envelope only needs a zero value to start from, an encoding, and the
/// URI that goes into `predicateType`. Everything else about the payload is
/// opaque to it.
pub trait Predicate: Serialize + DeserializeOwned + Default {
    /// URI identifying the predicate schema.
    const PREDICATE_TYPE: &'static str;
}
