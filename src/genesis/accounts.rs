use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;

/// Private keys for the standard dev accounts (derived from the
/// "test test test test test test test test test test test junk" mnemonic)
pub const DEV_PRIVATE_KEYS: &[&str] = &[
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
    "7c852118294e51e653712a81e05800f419141751be58f605c371e15141b007a6",
    "47e179ec197488593b187f80a00eb0da91f1b9d0b13f8733639f19c30a34926a",
    "8b3a350cf5c34c9194ca85829a2df0ec3153be0318b5e2d3348e872092edffba",
    "92db14e403b83dfe3df233f83dfa3a0d7096f21ca9b0d6d6b8d88b2b4ec1564e",
    "4bbbf85ce3377467afe5d46f804f221813b2bb87f24d81f60f1fcdbf7cbf4356",
    "dbda1821b80551c9d65939329250298aa3472ba22feea921c0cf5d620ea67b97",
    "2a871d0798f97d79848a013d4936a73bf4cc922c825d33c1cf7073dff6d409c6",
];

/// Parse the first `count` dev keys into signers.
///
/// # Panics
///
/// Panics if `count` exceeds the number of known dev keys. The keys
/// themselves are compile-time constants and always parse.
pub fn dev_signers(count: usize) -> Vec<PrivateKeySigner> {
    assert!(
        count <= DEV_PRIVATE_KEYS.len(),
        "only {} dev keys available, {} requested",
        DEV_PRIVATE_KEYS.len(),
        count
    );

    DEV_PRIVATE_KEYS[..count]
        .iter()
        .map(|key| key.parse().expect("dev keys should be valid"))
        .collect()
}

/// Addresses of the first `count` dev accounts
pub fn dev_addresses(count: usize) -> Vec<Address> {
    dev_signers(count).iter().map(|signer| signer.address()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_first_dev_address() {
        let addresses = dev_addresses(1);
        assert_eq!(addresses[0], address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
    }

    #[test]
    fn test_dev_signers_distinct() {
        let signers = dev_signers(DEV_PRIVATE_KEYS.len());
        let unique: std::collections::HashSet<_> =
            signers.iter().map(|s| s.address()).collect();
        assert_eq!(unique.len(), DEV_PRIVATE_KEYS.len());
    }

    #[test]
    #[should_panic(expected = "dev keys available")]
    fn test_too_many_dev_signers_panics() {
        dev_signers(DEV_PRIVATE_KEYS.len() + 1);
    }
}
