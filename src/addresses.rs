use alloy_primitives::{address, Address};

/// The all-zero address. An account instance still pointing here has not been
/// configured yet.
pub const GENESIS_ADDRESS: Address = address!("0000000000000000000000000000000000000000");

/// Whether `address` is the genesis address.
pub fn is_genesis(address: &Address) -> bool {
    *address == GENESIS_ADDRESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn genesis_is_zero() {
        assert_eq!(GENESIS_ADDRESS, Address::ZERO);
        assert!(is_genesis(
            &Address::from_str("0x0000000000000000000000000000000000000000").unwrap()
        ));
        assert!(!is_genesis(
            &Address::from_str("0x000000000044C6B8Cb4d8f0F889a3E47664EAeda").unwrap()
        ));
    }
}
