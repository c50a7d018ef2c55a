//! Compiled contract artifacts as produced by Hardhat, and the store they
//! are loaded from.
pub mod artifact;
pub mod artifacts;

pub use {
    artifact::{Artifact, EncodeError},
    artifacts::{HardhatArtifacts, LoadError},
};
