use {
    crate::traits::{ArtifactLoading, ContractDeploying, Deployment},
    alloy::{dyn_abi::DynSolValue, primitives::Bytes},
    anyhow::{Context, Result},
};

/// What a finished deployment reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub contract_name: String,
    /// ABI encoded constructor arguments.
    pub constructor_args: Bytes,
    pub deployment: Deployment,
}

/// Deploys the contract `name` with `constructor_args`.
///
/// Nothing is submitted unless the artifact resolves and the arguments match
/// its constructor. The deployment is not retried.
#[tracing::instrument(skip_all, fields(contract = name))]
pub async fn deploy_contract(
    artifacts: &dyn ArtifactLoading,
    deployer: &dyn ContractDeploying,
    name: &str,
    constructor_args: &[DynSolValue],
) -> Result<Report> {
    let artifact = artifacts
        .load_artifact(name)
        .with_context(|| format!("failed to load artifact {name:?}"))?;
    artifact.ensure_deployable()?;
    let encoded = artifact.encode_deploy(constructor_args)?;
    let code = artifact.deploy_code(constructor_args)?;

    tracing::debug!(
        artifact = artifact.fully_qualified_name(),
        deployer = %deployer.deployer(),
        "deploying contract"
    );
    let deployment = deployer
        .deploy(code)
        .await
        .with_context(|| format!("failed to deploy {}", artifact.contract_name))?;

    tracing::info!("args {encoded}");
    tracing::info!(
        "{} was deployed to {}",
        artifact.contract_name,
        deployment.address
    );
    tracing::debug!(
        transaction_hash = ?deployment.transaction_hash,
        deployer = %deployment.deployer,
        gas_used = deployment.gas_used,
        "deployment confirmed"
    );

    Ok(Report {
        contract_name: artifact.contract_name,
        constructor_args: encoded,
        deployment,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::traits::{MockArtifactLoading, MockContractDeploying},
        alloy::primitives::{Address, B256, U256, address},
        contracts::{Artifact, LoadError},
    };

    const MARKETPLACE: Address = address!("0xa1d22441dE66BB328E8269451B1A28d181C74d11");
    const DEPLOYED: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn marketplace() -> Artifact {
        Artifact::from_json(
            r#"{
                "_format": "hh-sol-artifact-1",
                "contractName": "Marketplace",
                "sourceName": "contracts/Marketplace.sol",
                "abi": [{
                    "type": "constructor",
                    "stateMutability": "nonpayable",
                    "inputs": [{ "name": "_marketplace", "type": "address", "internalType": "address" }]
                }],
                "bytecode": "0x6080604052"
            }"#,
        )
        .unwrap()
    }

    fn deployment() -> Deployment {
        Deployment {
            address: DEPLOYED,
            transaction_hash: B256::repeat_byte(0x42),
            deployer: DEPLOYER,
            gas_used: 1_234_567,
        }
    }

    fn artifacts() -> MockArtifactLoading {
        let mut artifacts = MockArtifactLoading::new();
        artifacts
            .expect_load_artifact()
            .withf(|name| name == "Marketplace")
            .returning(|_| Ok(marketplace()));
        artifacts
    }

    #[tokio::test]
    async fn deploys_marketplace() {
        let artifacts = artifacts();
        let mut deployer = MockContractDeploying::new();
        deployer.expect_deployer().return_const(DEPLOYER);
        deployer
            .expect_deploy()
            .times(1)
            .withf(|code| {
                let mut expected = vec![0x60, 0x80, 0x60, 0x40, 0x52];
                expected.extend_from_slice(&[0; 12]);
                expected.extend_from_slice(MARKETPLACE.as_slice());
                code[..] == expected[..]
            })
            .returning(|_| Ok(deployment()));

        let report = deploy_contract(
            &artifacts,
            &deployer,
            "Marketplace",
            &[DynSolValue::Address(MARKETPLACE)],
        )
        .await
        .unwrap();

        assert_eq!(report.contract_name, "Marketplace");
        assert_eq!(
            report.constructor_args.to_string(),
            "0x000000000000000000000000a1d22441de66bb328e8269451b1a28d181c74d11"
        );
        assert_eq!(report.deployment, deployment());
        assert_ne!(report.deployment.address, MARKETPLACE);
    }

    #[tokio::test]
    async fn encoded_arguments_only_depend_on_input() {
        let artifacts = artifacts();
        let mut deployer = MockContractDeploying::new();
        deployer.expect_deployer().return_const(DEPLOYER);
        deployer
            .expect_deploy()
            .times(2)
            .returning(|_| Ok(deployment()));

        let args = [DynSolValue::Address(MARKETPLACE)];
        let first = deploy_contract(&artifacts, &deployer, "Marketplace", &args)
            .await
            .unwrap();
        let second = deploy_contract(&artifacts, &deployer, "Marketplace", &args)
            .await
            .unwrap();
        assert_eq!(first.constructor_args, second.constructor_args);
    }

    #[tokio::test]
    async fn missing_artifact_sends_nothing() {
        let mut artifacts = MockArtifactLoading::new();
        artifacts.expect_load_artifact().returning(|name| {
            Err(LoadError::NotFound {
                name: name.to_string(),
                dir: "artifacts".into(),
            }
            .into())
        });
        let mut deployer = MockContractDeploying::new();
        deployer.expect_deploy().times(0);

        let err = deploy_contract(
            &artifacts,
            &deployer,
            "Marketplace",
            &[DynSolValue::Address(MARKETPLACE)],
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn mistyped_argument_sends_nothing() {
        let artifacts = artifacts();
        let mut deployer = MockContractDeploying::new();
        deployer.expect_deploy().times(0);

        let result = deploy_contract(
            &artifacts,
            &deployer,
            "Marketplace",
            &[DynSolValue::Uint(U256::from(1), 256)],
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn deployment_failure_is_not_retried() {
        let artifacts = artifacts();
        let mut deployer = MockContractDeploying::new();
        deployer.expect_deployer().return_const(DEPLOYER);
        deployer
            .expect_deploy()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("insufficient funds for gas * price + value")));

        let err = deploy_contract(
            &artifacts,
            &deployer,
            "Marketplace",
            &[DynSolValue::Address(MARKETPLACE)],
        )
        .await
        .unwrap_err();
        assert!(format!("{err:?}").contains("insufficient funds"));
    }
}
