use alloy_signer::k256::SecretKey;
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};

use crate::error::EvmClientError;

/// Builds a signer from either a mnemonic or a `0x`-prefixed private key
pub fn make_signer(
    credential: &str,
    hd_index: Option<u32>,
) -> Result<PrivateKeySigner, EvmClientError> {
    let hd_index = hd_index.unwrap_or_default();

    match credential.trim().strip_prefix("0x") {
        Some(stripped) => {
            // a raw key has nothing to derive from
            if hd_index > 0 {
                return Err(EvmClientError::DerivationWithPrivateKey);
            }
            let private_key =
                const_hex::decode(stripped).map_err(|e| EvmClientError::Signer(e.into()))?;
            let secret_key =
                SecretKey::from_slice(&private_key).map_err(|e| EvmClientError::Signer(e.into()))?;
            Ok(PrivateKeySigner::from_signing_key(secret_key.into()))
        }
        None => MnemonicBuilder::<English>::default()
            .phrase(credential.trim())
            .index(hd_index)
            .map_err(|e| EvmClientError::Signer(e.into()))?
            .build()
            .map_err(|e| EvmClientError::Signer(e.into())),
    }
}

#[cfg(test)]
mod test {
    use alloy_primitives::{address, Address};

    use super::make_signer;
    use crate::error::EvmClientError;

    const ANVIL_MNEMONIC: &str = "test test test test test test test test test test test junk";
    const ANVIL_KEY_0: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS_0: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    #[test]
    fn mnemonic_and_private_key_agree() {
        let from_mnemonic = make_signer(ANVIL_MNEMONIC, None).unwrap();
        let from_key = make_signer(ANVIL_KEY_0, None).unwrap();

        assert_eq!(from_mnemonic.address(), ANVIL_ADDRESS_0);
        assert_eq!(from_key.address(), ANVIL_ADDRESS_0);
    }

    #[test]
    fn hd_index_derives_other_accounts() {
        let signer = make_signer(ANVIL_MNEMONIC, Some(1)).unwrap();
        assert_eq!(
            signer.address(),
            address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
    }

    #[test]
    fn private_key_cannot_derive() {
        assert!(matches!(
            make_signer(ANVIL_KEY_0, Some(1)),
            Err(EvmClientError::DerivationWithPrivateKey)
        ));
        assert!(matches!(
            make_signer("0xnothex", None),
            Err(EvmClientError::Signer(_))
        ));
    }
}
