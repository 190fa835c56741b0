//! SHA-256 builder and digest function behaviour

use hex_literal::hex;
use seedpass_hashing::{AsyncHashResult, Hash, HashError, SHA256_DIGEST_LEN, sha256_digest};

const COMBINED: &[u8] = b"correct|||horse|||battery";
const COMBINED_DIGEST: [u8; 32] =
    hex!("d3f645fd3c782d32986f5d01b99623b64de6d7fc961b3617ceebb665fb412010");

#[test]
fn test_sha256_digest_known_vectors() {
    assert_eq!(sha256_digest(COMBINED), COMBINED_DIGEST);
    assert_eq!(
        sha256_digest(b""),
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
    assert_eq!(
        sha256_digest(b"a"),
        hex!("ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb")
    );
}

#[tokio::test]
async fn test_sha256_builder_matches_sync_digest() {
    let hash = Hash::sha256()
        .compute(COMBINED)
        .await
        .expect("SHA-256 hash computation should succeed");

    assert_eq!(hash.len(), SHA256_DIGEST_LEN);
    assert_eq!(hash.as_bytes(), &COMBINED_DIGEST);
    assert_eq!(
        hash.to_hex(),
        "d3f645fd3c782d32986f5d01b99623b64de6d7fc961b3617ceebb665fb412010"
    );
    assert_eq!(hash.to_string(), hash.to_hex());
}

#[tokio::test]
async fn test_sha256_builder_with_handler() {
    let hex = Hash::sha256()
        .on_result(|result| match result {
            Ok(hash) => hash.to_hex(),
            Err(_) => String::new(),
        })
        .compute(COMBINED.to_vec())
        .await;

    assert_eq!(hex.len(), 64);
    assert!(hex.starts_with("d3f645fd"));
}

#[tokio::test]
async fn test_sha256_builder_with_error_then_handler() {
    let len = Hash::sha256()
        .on_error(|e| e)
        .on_result(|result| result.map(|hash| hash.len()).unwrap_or_default())
        .compute("seed")
        .await;

    assert_eq!(len, SHA256_DIGEST_LEN);
}

#[tokio::test]
async fn test_sha256_builder_with_error_passes_success() {
    let hash = Hash::sha256()
        .on_error(|e| HashError::internal(format!("digest failed: {e}")))
        .compute(COMBINED)
        .await
        .expect("successful digests pass through the error handler");

    assert_eq!(hash.as_bytes(), &COMBINED_DIGEST);
}

#[tokio::test]
async fn test_ready_and_error_results() {
    let ready = AsyncHashResult::ready(Ok(COMBINED_DIGEST.into())).await;
    assert_eq!(ready.map(|h| h.to_vec()).ok(), Some(COMBINED_DIGEST.to_vec()));

    let failed = AsyncHashResult::error(HashError::internal("boom")).await;
    assert!(matches!(failed, Err(HashError::Internal(msg)) if msg == "boom"));
}

#[test]
fn test_to_array_checks_length() {
    let hash = seedpass_hashing::HashResult::new(COMBINED_DIGEST.to_vec());
    let array: [u8; 32] = hash.to_array().expect("32-byte digest fits");
    assert_eq!(array, COMBINED_DIGEST);

    let short = seedpass_hashing::HashResult::new(vec![0u8; 20]);
    assert!(matches!(
        short.to_array::<32>(),
        Err(HashError::DigestLength {
            expected: 32,
            actual: 20
        })
    ));
}

#[test]
fn test_hash_error_converts_to_crypto_kind() {
    let error: seedpass_common::Error = HashError::internal("digest unavailable").into();
    assert_eq!(error.kind(), &seedpass_common::ErrorKind::Crypto);
    assert!(error.to_string().contains("digest unavailable"));
}
