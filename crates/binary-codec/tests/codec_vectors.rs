// Path: crates/binary-codec/tests/codec_vectors.rs

use xrpl_binary_codec::types::path_set::PATH_SET_END;
use xrpl_binary_codec::*;
use xrpl_types::AccountId;

const A: AccountId = AccountId([0xAA; 20]);
const B: AccountId = AccountId([0xBB; 20]);

fn payment() -> FieldMap {
    FieldMap::new()
        .with("Account", A)
        .with("TransactionType", FieldValue::named("Payment"))
        .with("Fee", Amount::drops(10))
        .with("Sequence", 1u32)
        .with("Amount", Amount::drops(1_000_000))
        .with("Destination", B)
}

#[test]
fn minimal_payment_is_written_in_canonical_order() {
    let encoded = encode_hex(&payment()).unwrap();
    let expected = [
        "120000".to_string(),
        "2400000001".into(),
        "6140000000000F4240".into(),
        "68400000000000000A".into(),
        format!("8114{}", "AA".repeat(20)),
        format!("8314{}", "BB".repeat(20)),
    ]
    .concat();
    assert_eq!(encoded, expected);

    let decoded = decode_hex(&encoded).unwrap();
    assert_eq!(decoded, payment());
    assert_eq!(decoded.len(), 6);
}

#[test]
fn decoded_objects_re_encode_identically() {
    let bytes = encode(&payment()).unwrap();
    assert_eq!(encode(&decode(&bytes).unwrap()).unwrap(), bytes);
}

#[test]
fn nested_memo_round_trips() {
    let memo = FieldMap::new()
        .with("MemoData", vec![0xCD])
        .with("MemoType", vec![0xAB]);
    let tx = FieldMap::new().with("Memos", vec![FieldMap::new().with("Memo", memo)]);
    let encoded = encode_hex(&tx).unwrap();
    assert_eq!(encoded, "F9EA7C01AB7D01CDE1F1");
    assert_eq!(decode_hex(&encoded).unwrap(), tx);
}

#[test]
fn zero_amounts_have_fixed_encodings() {
    let native = FieldMap::new().with("Fee", Amount::drops(0));
    assert_eq!(encode_hex(&native).unwrap(), "684000000000000000");

    let issued = FieldMap::new().with("LimitAmount", Amount::issued("0", "USD", B).unwrap());
    assert_eq!(
        encode_hex(&issued).unwrap(),
        format!(
            "638000000000000000{}{}",
            "0000000000000000000000005553440000000000",
            "BB".repeat(20)
        )
    );
    assert_eq!(decode_hex(&encode_hex(&issued).unwrap()).unwrap(), issued);
}

#[test]
fn blob_prefix_widens_after_192_bytes() {
    for (len, prefix) in [(192usize, "77C0"), (193, "77C100")] {
        let tx = FieldMap::new().with("Domain", vec![0x5A; len]);
        let encoded = encode_hex(&tx).unwrap();
        assert!(encoded.starts_with(prefix), "{}", len);
        assert_eq!(encoded.len(), prefix.len() + len * 2);
        assert_eq!(decode_hex(&encoded).unwrap(), tx);
    }
}

#[test]
fn bookkeeping_fields_are_dropped() {
    let with_hash = payment().with("hash", [0x11u8; 32]);
    assert_eq!(encode(&with_hash).unwrap(), encode(&payment()).unwrap());
}

#[test]
fn unknown_names_are_reported() {
    let tx = payment().with("NotAField", 1u32);
    assert_eq!(
        encode(&tx),
        Err(CodecError::UnknownField {
            name: "NotAField".into()
        })
    );
}

#[test]
fn unknown_ids_are_reported_with_their_offset() {
    let mut bytes = encode(&FieldMap::new().with("Sequence", 1u32)).unwrap();
    bytes.extend_from_slice(&[0x20, 200, 0, 0, 0, 0]);
    let err = decode(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::AtField { offset: 5, .. }), "{:?}", err);
    assert_eq!(
        err.root_cause(),
        &CodecError::UnknownFieldId {
            type_code: 2,
            field_code: 200
        }
    );
}

#[test]
fn truncation_names_the_field_and_offsets() {
    let mut bytes = encode(&payment()).unwrap();
    bytes.pop();
    let err = decode(&bytes).unwrap_err();
    assert!(
        matches!(&err, CodecError::AtField { field, offset: 48, .. } if field == "Destination"),
        "{:?}",
        err
    );
    assert_eq!(
        err.root_cause(),
        &CodecError::Truncated {
            offset: 50,
            needed: 20,
            available: 19
        }
    );
}

#[test]
fn nested_failures_carry_a_field_path() {
    let memo = FieldMap::new().with("MemoData", 7u32);
    let tx = FieldMap::new().with("Memos", vec![FieldMap::new().with("Memo", memo)]);
    let err = encode(&tx).unwrap_err();
    assert_eq!(err.field_path(), vec!["Memos", "[0]", "MemoData"]);
    assert!(matches!(err.root_cause(), CodecError::TypeMismatch { .. }));
}

/// `depth` levels of Memos → Memo nesting; the innermost memo is empty.
fn nested_memos(depth: usize) -> FieldMap {
    (0..depth).fold(FieldMap::new(), |inner, _| {
        FieldMap::new().with("Memos", vec![FieldMap::new().with("Memo", inner)])
    })
}

#[test]
fn nesting_is_bounded_on_encode() {
    assert!(encode(&nested_memos(8)).is_ok());
    let err = encode(&nested_memos(9)).unwrap_err();
    assert_eq!(err.root_cause(), &CodecError::DepthLimitExceeded { limit: 16 });
}

#[test]
fn nesting_is_bounded_on_decode() {
    let permissive = Codec::new(CodecConfig {
        max_depth: 64,
        ..CodecConfig::default()
    });
    let bytes = permissive.encode(&nested_memos(20)).unwrap();
    assert_eq!(permissive.decode(&bytes).unwrap(), nested_memos(20));
    let err = decode(&bytes).unwrap_err();
    assert_eq!(err.root_cause(), &CodecError::DepthLimitExceeded { limit: 16 });
}

#[test]
fn limits_load_from_toml() {
    let config: CodecConfig = toml::from_str("max_depth = 4\nmax_blob_length = 8").unwrap();
    let codec = Codec::new(config);
    assert!(codec.encode(&nested_memos(2)).is_ok());
    assert!(codec.encode(&nested_memos(3)).is_err());

    let err = codec
        .encode(&FieldMap::new().with("Domain", vec![0u8; 9]))
        .unwrap_err();
    assert_eq!(
        err.root_cause(),
        &CodecError::LengthPrefixTooLong { length: 9, max: 8 }
    );
    let bytes = encode(&FieldMap::new().with("Domain", vec![0u8; 9])).unwrap();
    assert!(matches!(
        codec.decode(&bytes).unwrap_err().root_cause(),
        CodecError::LengthPrefixTooLong { .. }
    ));
}

#[test]
fn supplementary_types_round_trip() {
    let usd: Currency = "USD".parse().unwrap();
    let steps = vec![
        PathStep::account(A),
        PathStep::currency_issuer(usd, B).unwrap(),
    ];
    let paths = PathSet::new(vec![
        Path::new(steps).unwrap(),
        Path::new(vec![PathStep::currency(Currency::XRP)]).unwrap(),
    ])
    .unwrap();
    let bridge = XChainBridge {
        locking_chain_door: A,
        locking_chain_issue: Issue::Xrp,
        issuing_chain_door: B,
        issuing_chain_issue: Issue::Issued {
            currency: usd,
            issuer: B,
        },
    };
    let tx = FieldMap::new()
        .with("TransactionType", FieldValue::named("XChainCommit"))
        .with("Paths", paths)
        .with("XChainBridge", bridge)
        .with("Asset", Issue::Issued { currency: usd, issuer: A })
        .with("BaseAsset", usd)
        .with("MPTokenIssuanceID", [0x42u8; 24])
        .with("TakerPaysCurrency", [0x01u8; 20])
        .with("Amendments", vec![[0x03u8; 32], [0x04u8; 32]])
        .with("SendMax", Amount::mpt(500, [0x42; 24]))
        .with("LimitAmount", Amount::issued("-12.75e3", "EUR", A).unwrap());
    let bytes = encode(&tx).unwrap();
    assert_eq!(decode(&bytes).unwrap(), tx);
}

#[test]
fn path_sets_end_with_their_terminator() {
    let paths = PathSet::new(vec![Path::new(vec![PathStep::issuer(A)]).unwrap()]).unwrap();
    let bytes = encode(&FieldMap::new().with("Paths", paths)).unwrap();
    assert_eq!(bytes.first(), Some(&0x01));
    assert_eq!(bytes.get(1), Some(&0x12));
    assert_eq!(bytes.get(2), Some(&0x20));
    assert_eq!(bytes.last(), Some(&PATH_SET_END));
    assert_eq!(bytes.len(), 2 + 1 + 20 + 1);
}

#[test]
fn hex_input_is_case_insensitive() {
    let upper = encode_hex(&payment()).unwrap();
    assert_eq!(decode_hex(&upper.to_lowercase()).unwrap(), payment());
    assert!(matches!(decode_hex("12000"), Err(CodecError::InvalidHex(_))));
}

const SIGNED_PAYMENT: &str = concat!(
    "120000220000000024001B733261400000000000000F68400000000000000C",
    "7321ED90ADC33C2BBD9B4A0D94223DBE30D34227B82F587C5909A857B3AB7DE8D6E2EF",
    "74402754D4EE7EBDA0A073488904E8A55CECAEDA13EA2829AF5C0EB2CC201C4B4E2AB7",
    "2D20D308EE12C5D1C112BCFCAFEBDA6C8198D92C0C57F15D8A25B5BFBF200E",
    "811474E4DD74B588FA412F0993B8E7E07C2FA92109B4",
    "8314858233827B488ECB8D0EB940E7AC85CE41E343CF",
);

const UNSIGNED_PAYMENT: &str = concat!(
    "120000220000000024001B733261400000000000001268400000000000000C",
    "811474E4DD74B588FA412F0993B8E7E07C2FA92109B4",
    "8314D708DAB02885BA68A48EBCC4EE3551CF1AF7B267",
);

#[test]
fn network_payment_decodes_and_re_encodes_byte_for_byte() {
    let tx = decode_hex(SIGNED_PAYMENT).unwrap();
    assert_eq!(tx.get("TransactionType"), Some(&FieldValue::named("Payment")));
    assert_eq!(tx.get("Sequence"), Some(&FieldValue::UInt32(0x001B_7332)));
    assert_eq!(tx.get("Amount"), Some(&FieldValue::Amount(Amount::drops(15))));
    assert_eq!(tx.get("Fee"), Some(&FieldValue::Amount(Amount::drops(12))));
    assert_eq!(
        tx.get("Account"),
        Some(&FieldValue::AccountId(
            AccountId::from_hex("74E4DD74B588FA412F0993B8E7E07C2FA92109B4").unwrap()
        ))
    );
    assert_eq!(tx.len(), 9);
    assert_eq!(encode_hex(&tx).unwrap(), SIGNED_PAYMENT);
}

#[test]
fn network_payment_hashes_to_its_ledger_id() {
    assert_eq!(
        hash_tx_blob(SIGNED_PAYMENT).unwrap(),
        "BE76FC0ABE8BE83F91219D2371FF5199F0271ACF0E12794D2EA5DE77AC49E877"
    );
    assert!(matches!(
        hash_tx_blob(UNSIGNED_PAYMENT),
        Err(CodecError::InvalidValue { .. })
    ));
    // The unsigned form is still a well-formed transaction.
    assert_eq!(encode_hex(&decode_hex(UNSIGNED_PAYMENT).unwrap()).unwrap(), UNSIGNED_PAYMENT);
}
