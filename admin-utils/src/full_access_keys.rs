use near_sdk::{Promise, PublicKey, ext_contract};

/// Lets the owner of a contract manage full access keys of the contract
/// account itself, e.g. to recover it or redeploy it.
#[ext_contract(ext_full_access_keys)]
pub trait FullAccessKeys {
    /// Adds a full access key to the contract account.
    ///
    /// NOTE: MUST attach 1 yⓃ for security purposes.
    fn add_full_access_key(&mut self, public_key: PublicKey) -> Promise;

    /// Deletes a key from the contract account.
    ///
    /// NOTE: MUST attach 1 yⓃ for security purposes.
    fn delete_key(&mut self, public_key: PublicKey) -> Promise;
}
