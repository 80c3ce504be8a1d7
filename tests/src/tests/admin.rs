use near_plugins::Ownable;
use near_sdk::{PublicKey, test_utils::get_created_receipts};
use tokensig_nft::{
    TokenSignerNft, admin_utils::full_access_keys::FullAccessKeys, standard::TokenId,
};

use super::env::{Env, MINT_DEPOSIT, ONE_YOCTO, TokenSignerExt};

fn public_key() -> PublicKey {
    "ed25519:6E8sCci9badyRkXb3JoRpBj5p8C6Tw41ELDZoiihKEtp"
        .parse()
        .unwrap()
}

#[test]
fn owner_is_set_on_init() {
    let env = Env::new();

    assert_eq!(env.view(|c| c.owner_get()), Some(env.owner.clone()));
}

#[test]
fn ownership_can_be_transferred() {
    let env = Env::new();

    env.call(&env.owner, ONE_YOCTO, |c| c.owner_set(Some(env.user1.clone())));
    assert_eq!(env.view(|c| c.owner_get()), Some(env.user1.clone()));

    env.call(&env.user1, MINT_DEPOSIT, |c| {
        c.nft_mint(TokenId::from(1u64), env.user2.clone(), None)
    });
    assert_eq!(env.nft_token(TokenId::from(1u64)).unwrap().owner_id, env.user2);
}

#[test]
#[should_panic]
fn previous_owner_loses_access() {
    let env = Env::new();
    env.call(&env.owner, ONE_YOCTO, |c| c.owner_set(Some(env.user1.clone())));

    env.call(&env.owner, MINT_DEPOSIT, |c| {
        c.nft_mint(TokenId::from(1u64), env.user2.clone(), None)
    });
}

#[test]
fn owner_adds_full_access_key() {
    let env = Env::new();

    drop(env.call(&env.owner, ONE_YOCTO, |c| c.add_full_access_key(public_key())));

    let receipts = get_created_receipts();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].receiver_id, env.contract_id);
}

#[test]
#[should_panic]
fn only_owner_adds_full_access_key() {
    let env = Env::new();

    drop(env.call(&env.user1, ONE_YOCTO, |c| c.add_full_access_key(public_key())));
}

#[test]
#[should_panic]
fn only_owner_deletes_key() {
    let env = Env::new();

    drop(env.call(&env.user1, ONE_YOCTO, |c| c.delete_key(public_key())));
}
