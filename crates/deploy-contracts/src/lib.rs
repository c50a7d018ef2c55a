pub mod arguments;
pub mod credential;
pub mod deployer;
pub mod script;
pub mod traits;

use {
    alloy::dyn_abi::DynSolValue,
    anyhow::Result,
    contracts::HardhatArtifacts,
    credential::Credential,
    deployer::Deployer,
    script::Report,
};

/// Runs the deploy script once. The credential is read before any connection
/// to the node is made.
pub async fn run(args: arguments::Arguments) -> Result<Report> {
    tracing::info!(
        "Running deploy script for the {} Contract.",
        args.contract_name
    );

    let credential = Credential::load(&args.private_key_file)?;
    let signer = credential.signer()?;
    let deployer_address = signer.address();

    let provider = ethrpc::alloy::provider_with_signer(&args.node_url, signer);
    if let Some(chain_id) = args.chain_id {
        ethrpc::alloy::ensure_chain_id(&provider, chain_id).await?;
    }

    let artifacts = HardhatArtifacts::new(&args.artifacts_dir);
    let deployer = Deployer::new(provider, deployer_address, args.required_confirmations);
    script::deploy_contract(
        &artifacts,
        &deployer,
        &args.contract_name,
        &[DynSolValue::Address(args.marketplace_address)],
    )
    .await
}
