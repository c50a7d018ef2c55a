use {
    crate::traits::{ContractDeploying, Deployment},
    alloy::{
        network::{ReceiptResponse, TransactionBuilder as _},
        primitives::{Address, B256, Bytes},
        providers::Provider as _,
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, Result},
    ethrpc::AlloyProvider,
};

/// Deploys contracts through a provider whose wallet holds the signer for
/// `deployer`.
pub struct Deployer {
    provider: AlloyProvider,
    deployer: Address,
    required_confirmations: u64,
}

impl Deployer {
    pub fn new(provider: AlloyProvider, deployer: Address, required_confirmations: u64) -> Self {
        Self {
            provider,
            deployer,
            required_confirmations,
        }
    }
}

#[async_trait::async_trait]
impl ContractDeploying for Deployer {
    fn deployer(&self) -> Address {
        self.deployer
    }

    async fn deploy(&self, code: Bytes) -> Result<Deployment> {
        // Nonce, gas and fees are filled in by the provider.
        let tx = TransactionRequest::default()
            .from(self.deployer)
            .with_deploy_code(code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to submit contract creation transaction")?;
        let transaction_hash = *pending.tx_hash();
        tracing::debug!(
            ?transaction_hash,
            confirmations = self.required_confirmations,
            "waiting for deployment to be confirmed"
        );

        let receipt = pending
            .with_required_confirmations(self.required_confirmations)
            .get_receipt()
            .await
            .context("failed to get deployment receipt")?;
        deployment(&receipt, transaction_hash, self.deployer)
    }
}

/// Turns the receipt of a confirmed creation transaction into a
/// [`Deployment`], failing if the transaction reverted.
fn deployment(
    receipt: &impl ReceiptResponse,
    transaction_hash: B256,
    deployer: Address,
) -> Result<Deployment> {
    anyhow::ensure!(
        receipt.status(),
        "contract creation transaction {transaction_hash:?} reverted"
    );
    let address = receipt
        .contract_address()
        .context("deployment receipt has no contract address")?;

    Ok(Deployment {
        address,
        transaction_hash,
        deployer,
        gas_used: receipt.gas_used(),
    })
}
