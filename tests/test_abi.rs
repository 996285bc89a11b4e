use serde_json::json;
use web3_sdk::Error;
use web3_sdk::abi::{json_method_to_string, json_to_value};

#[test]
fn renders_canonical_method_signatures() {
    let item = json!({
        "name": "transfer",
        "inputs": [{"type": "address"}, {"type": "uint256"}],
    });
    assert_eq!(json_method_to_string(&item).unwrap(), "transfer(address,uint256)");

    let no_args = json!({"name": "decimals", "inputs": []});
    assert_eq!(json_method_to_string(&no_args).unwrap(), "decimals()");
}

#[test]
fn untyped_inputs_are_skipped() {
    let item = json!({
        "name": "transfer",
        "inputs": [{"type": "address"}, {"name": "untyped"}],
    });
    assert_eq!(json_method_to_string(&item).unwrap(), "transfer(address)");
}

#[test]
fn a_name_that_is_already_a_signature_passes_through() {
    let item = json!({"name": "transfer(address,uint256)"});
    assert_eq!(
        json_method_to_string(&item).unwrap(),
        "transfer(address,uint256)"
    );
}

#[test]
fn malformed_items_fail_with_invalid_input() {
    assert!(matches!(
        json_method_to_string(&json!("not an object")),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        json_method_to_string(&json!({"inputs": []})),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        json_method_to_string(&json!({"name": "transfer"})),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn json_text_parses_or_fails_with_decode_error() {
    let value = json_to_value(r#"{"name": "decimals", "inputs": []}"#).unwrap();
    assert_eq!(json_method_to_string(&value).unwrap(), "decimals()");
    assert!(matches!(json_to_value("{oops"), Err(Error::DecodeError(_))));
}
