#[cfg(test)]
use alloy::providers::mock;
use {
    crate::AlloyProvider,
    alloy::{
        network::{EthereumWallet, TxSigner},
        primitives::Signature,
        providers::{Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
    },
    anyhow::{Context, Result},
    url::Url,
};

/// Provider that signs every outgoing transaction with `signer`. The signer's
/// address becomes the default sender.
pub fn provider_with_signer<S>(url: &Url, signer: S) -> AlloyProvider
where
    S: TxSigner<Signature> + Send + Sync + 'static,
{
    let rpc = ClientBuilder::default().http(url.clone());
    let wallet = EthereumWallet::new(signer);

    ProviderBuilder::new()
        .wallet(wallet)
        .connect_client(rpc)
        .erased()
}

/// Fails unless the node behind `provider` serves chain `expected`.
pub async fn ensure_chain_id(provider: &AlloyProvider, expected: u64) -> Result<()> {
    let chain_id = provider
        .get_chain_id()
        .await
        .context("could not fetch current chain id")?;
    tracing::debug!(chain_id, "connected to node");
    anyhow::ensure!(
        chain_id == expected,
        "node serves chain {chain_id} but chain {expected} was expected"
    );
    Ok(())
}

#[cfg(test)]
pub fn dummy_provider() -> (AlloyProvider, mock::Asserter) {
    let asserter = mock::Asserter::new();
    let provider = ProviderBuilder::new()
        .connect_mocked_client(asserter.clone())
        .erased();
    (provider, asserter)
}
