use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use async_trait::async_trait;

use crate::error::EvmClientError;

use super::EvmSigningClient;

/// Something that can put new contracts on chain on behalf of a single operator
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    /// The account paying for, and recorded as the creator of, every deployment
    fn operator(&self) -> Address;

    /// Sends a contract-creation transaction and resolves once the contract
    /// is confirmed to exist, yielding its address
    async fn deploy_contract(
        &self,
        name: &str,
        creation_code: Bytes,
    ) -> Result<Address, EvmClientError>;
}

#[async_trait]
impl ContractDeployer for EvmSigningClient {
    fn operator(&self) -> Address {
        self.address()
    }

    async fn deploy_contract(
        &self,
        name: &str,
        creation_code: Bytes,
    ) -> Result<Address, EvmClientError> {
        let tx = TransactionRequest::default()
            .with_from(self.address())
            .with_deploy_code(creation_code);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| EvmClientError::SendTransaction(e.into()))?;

        tracing::debug!("{} creation transaction sent: {}", name, pending.tx_hash());

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| EvmClientError::TransactionWithoutReceipt(e.into()))?;

        if !receipt.status() {
            return Err(EvmClientError::TransactionWithReceipt(Box::new(receipt)));
        }

        let address = receipt
            .contract_address
            .ok_or(EvmClientError::NoContractAddress(receipt.transaction_hash))?;

        self.ensure_contract(address).await?;

        Ok(address)
    }
}

impl EvmSigningClient {
    /// Errors unless there is code at the address
    pub async fn ensure_contract(&self, address: Address) -> Result<(), EvmClientError> {
        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(|e| EvmClientError::FailedGetCode(address, e.into()))?;

        if code.is_empty() {
            return Err(EvmClientError::NotContract(address));
        }

        Ok(())
    }
}
