#![forbid(unsafe_code)]

//! Vehicle identity model and seeded variation (headless, no rendering).
//!
//! Design goals:
//! - a vehicle identity always resolves: every descriptor classifies to a body kind and hashes
//!   to a non-zero seed
//! - deterministic outputs: identical identity text yields identical seed, draws and parameters
//! - no I/O and no shared mutable state, so calls are freely concurrent

pub mod classify;
pub mod descriptor;
pub mod error;
pub mod personality;
pub mod prng;
pub mod seed;

pub use classify::{BodyKind, Classifier, Rule, classify};
pub use descriptor::{GENERIC_LABEL, VehicleDescriptor};
pub use error::{Error, Result};
pub use personality::Personality;
pub use prng::Mulberry32;
pub use seed::{FALLBACK_SEED, Seed, ZERO_HASH_SEED, fnv1a_32};

use serde::Serialize;

/// Everything the renderer needs to know about an identity, minus geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedIdentity {
    pub label: String,
    pub kind: BodyKind,
    pub seed: Seed,
}

impl ResolvedIdentity {
    /// The literal identity used by the fallback rendition.
    pub fn fallback() -> Self {
        Self {
            label: GENERIC_LABEL.to_string(),
            kind: BodyKind::Sedan,
            seed: Seed::fallback(),
        }
    }

    pub fn personality(&self) -> Personality {
        Personality::from_seed(self.seed)
    }
}

/// Resolves descriptors into render identities with a configurable classifier.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    classifier: Classifier,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn resolve(&self, descriptor: &VehicleDescriptor) -> Result<ResolvedIdentity> {
        descriptor.validate()?;

        let identity = ResolvedIdentity {
            label: descriptor.label(),
            kind: self.classifier.classify(descriptor),
            seed: Seed::from_descriptor(descriptor),
        };
        tracing::debug!(
            label = %identity.label,
            kind = %identity.kind,
            seed = identity.seed.get(),
            "resolved vehicle identity"
        );
        Ok(identity)
    }
}

/// Resolves with the default classifier.
pub fn resolve(descriptor: &VehicleDescriptor) -> Result<ResolvedIdentity> {
    Engine::new().resolve(descriptor)
}
