use near_sdk::{
    NearToken,
    mock::MockAction,
    serde::Deserialize,
    serde_json::{self, Value, json},
    test_utils::get_created_receipts,
};
use rstest::rstest;
use tokensig_nft::standard::{AsHex, MagicValue, SignatureHash, TokenId, ext_token_signer};
use tokensig_test_utils::random::{Rng, gen_random_hash, rng};

use super::env::{Env, TokenSignerExt};

/// Arguments of `is_valid_signature` as they travel between contracts
#[derive(Debug, Deserialize)]
#[serde(crate = "::near_sdk::serde")]
struct IsValidSignatureArgs {
    token_id: TokenId,
    hash: AsHex<SignatureHash>,
}

#[rstest]
fn callable_from_another_contract(mut rng: impl Rng) {
    let env = Env::new();
    let token_id = TokenId::from(1u64);
    let hash = gen_random_hash(&mut rng);
    env.nft_mint(token_id, &env.user1);
    env.nft_sign(&env.user1, token_id, hash);

    // some other contract asks
    env.call(&env.user3, NearToken::from_yoctonear(0), |_| {
        drop(
            ext_token_signer::ext(env.contract_id.clone())
                .is_valid_signature(token_id, AsHex(hash)),
        );
    });

    let receipts = get_created_receipts();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].receiver_id, env.contract_id);
    let [MockAction::FunctionCallWeight {
        method_name, args, ..
    }] = receipts[0].actions.as_slice()
    else {
        panic!("expected a single function call");
    };
    assert_eq!(method_name.as_slice(), b"is_valid_signature");

    let json: Value = serde_json::from_slice(args).unwrap();
    assert_eq!(json["token_id"], "1");
    let hash_hex = json["hash"].as_str().unwrap();
    assert!(hash_hex.starts_with("0x"));
    assert_eq!(hash_hex.len(), 2 + 64);

    let args: IsValidSignatureArgs = serde_json::from_value(json).unwrap();
    assert_eq!(
        env.is_valid_signature(args.token_id, args.hash.into_inner()),
        MagicValue::VALID
    );
}

#[rstest]
#[case::leading_zeros(json!("01"))]
#[case::sign(json!("+1"))]
#[case::hex(json!("0x1"))]
#[case::number(json!(1))]
#[case::overflow(json!(
    "115792089237316195423570985008687907853269984665640564039457584007913129639936"
))]
fn rejects_non_canonical_token_id(#[case] token_id: Value) {
    let args = json!({
        "token_id": token_id,
        "hash": AsHex([0u8; 32]),
    });

    serde_json::from_value::<IsValidSignatureArgs>(args).unwrap_err();
}

#[test]
fn accepts_bare_hex_hash() {
    let args: IsValidSignatureArgs = serde_json::from_value(json!({
        "token_id": "0",
        "hash": "ff".repeat(32),
    }))
    .unwrap();

    assert_eq!(args.token_id, TokenId::MIN);
    assert_eq!(args.hash.into_inner(), [0xff; 32]);
}
