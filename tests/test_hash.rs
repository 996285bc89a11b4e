use web3_sdk::{Error, KECCAK_NULL_HASH, keccak256};

#[test]
fn hashes_text_input() {
    assert_eq!(
        keccak256("abc").unwrap().as_deref(),
        Some("0x4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
    );
    assert_eq!(
        keccak256("hello world").unwrap().as_deref(),
        Some("0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fab")
    );
}

#[test]
fn prefixed_input_is_decoded_before_hashing() {
    // "0x68..." is the hex spelling of "hello world", so both must hash
    // to the same digest.
    assert_eq!(
        keccak256("0x68656c6c6f20776f726c64").unwrap(),
        keccak256("hello world").unwrap()
    );
}

#[test]
fn unprefixed_hex_is_hashed_as_text() {
    assert_ne!(
        keccak256("68656c6c6f20776f726c64").unwrap(),
        keccak256("hello world").unwrap()
    );
}

#[test]
fn empty_input_yields_the_null_hash_sentinel() {
    assert_eq!(keccak256("").unwrap(), None);
    // "0x" decodes to zero bytes, so it hits the sentinel too.
    assert_eq!(keccak256("0x").unwrap(), None);
    assert_eq!(
        KECCAK_NULL_HASH,
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
}

#[test]
fn malformed_prefixed_hex_propagates_decode_error() {
    assert!(matches!(keccak256("0x123"), Err(Error::DecodeError(_))));
    assert!(matches!(keccak256("0xzz"), Err(Error::DecodeError(_))));
}
