//! Trait definitions for the external collaborators of the deploy script.
//!
//! These traits abstract the artifact store and the chain so that the script
//! can be unit tested with mocks.

use {
    alloy::primitives::{Address, B256, Bytes},
    anyhow::Result,
    contracts::{Artifact, HardhatArtifacts},
};

/// A contract created on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// Address of the new contract.
    pub address: Address,
    pub transaction_hash: B256,
    /// Account that paid for and signed the creation transaction.
    pub deployer: Address,
    pub gas_used: u64,
}

/// Looks up compiled contracts by name.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactLoading: Send + Sync {
    fn load_artifact(&self, name: &str) -> Result<Artifact>;
}

impl ArtifactLoading for HardhatArtifacts {
    fn load_artifact(&self, name: &str) -> Result<Artifact> {
        Ok(self.load(name)?)
    }
}

/// Creates contracts on chain on behalf of a signing account.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContractDeploying: Send + Sync {
    /// Address of the account signing the creation transaction.
    fn deployer(&self) -> Address;

    /// Submits a contract creation transaction with `code` (creation bytecode
    /// and encoded constructor arguments) as input and waits until it is
    /// confirmed.
    async fn deploy(&self, code: Bytes) -> Result<Deployment>;
}
