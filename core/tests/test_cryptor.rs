// End-to-end tests for the encrypt/decrypt pipelines.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use rncryptor_core::{
        crypto::EnvelopeMaterial,
        cryptor::seal_with_material,
        decrypt, encrypt, encrypt_with_schema,
        utils::{decode_base64, encode_base64},
        CryptorConfig, Decryptor, Encryptor, ErrorKind, SchemaVersion,
    };

    const PASSWORD_A: &str = "P@ssw0rd!";
    const PLAINTEXT: &str = "Hello, World! Let's use a few characters outside of the alphanumeric set.";
    const BLOCK_MULTIPLE: &str = "Lorem ipsum dolor sit amet, cons"; // 32 bytes
    const ALL_SCHEMAS: [SchemaVersion; 4] =
        [SchemaVersion::V0, SchemaVersion::V1, SchemaVersion::V2, SchemaVersion::V3];

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn long_text() -> String {
        "Mary had a little lamb, its fleece was white as snow. ".repeat(120)
    }

    fn fixed_material() -> EnvelopeMaterial {
        EnvelopeMaterial {
            encryption_salt: [0x01; 8],
            hmac_salt: [0x02; 8],
            iv: [0x03; 16],
        }
    }

    // ## 1️⃣ Round trips

    #[test]
    fn round_trip_default_schema() {
        init_logging();
        let ct = encrypt(PLAINTEXT.as_bytes(), PASSWORD_A).unwrap();
        assert_eq!(decrypt(&ct, PASSWORD_A).unwrap(), PLAINTEXT.as_bytes());
    }

    #[test]
    fn round_trip_every_schema() {
        for schema in ALL_SCHEMAS {
            let ct = encrypt_with_schema(PLAINTEXT.as_bytes(), PASSWORD_A, schema).unwrap();
            assert_eq!(decrypt(&ct, PASSWORD_A).unwrap(), PLAINTEXT.as_bytes(), "{:?}", schema);
        }
    }

    #[test]
    fn round_trip_block_size_multiple() {
        assert_eq!(BLOCK_MULTIPLE.len() % 16, 0);
        for schema in ALL_SCHEMAS {
            let ct = encrypt_with_schema(BLOCK_MULTIPLE.as_bytes(), PASSWORD_A, schema).unwrap();
            assert_eq!(decrypt(&ct, PASSWORD_A).unwrap(), BLOCK_MULTIPLE.as_bytes());
        }
    }

    #[test]
    fn round_trip_empty_plaintext() {
        for schema in ALL_SCHEMAS {
            let ct = encrypt_with_schema(b"", PASSWORD_A, schema).unwrap();
            assert!(decrypt(&ct, PASSWORD_A).unwrap().is_empty());
        }
    }

    #[test]
    fn round_trip_long_text_past_counter_wrap() {
        let text = long_text();
        assert!(text.len() > 256 * 16);
        for schema in [SchemaVersion::V0, SchemaVersion::V2] {
            let ct = encrypt_with_schema(text.as_bytes(), PASSWORD_A, schema).unwrap();
            assert_eq!(decrypt(&ct, PASSWORD_A).unwrap(), text.as_bytes());
        }
    }

    #[test]
    fn round_trip_text_helpers() {
        let enc = Encryptor::new();
        let ct = enc.encrypt_str("grüße", PASSWORD_A).unwrap();
        assert_eq!(Decryptor::new().decrypt_to_string(&ct, PASSWORD_A).unwrap(), "grüße");
    }

    #[test]
    fn round_trip_raw_bytes() {
        let enc = Encryptor::new();
        let raw = enc.encrypt_to_bytes(b"raw", PASSWORD_A, SchemaVersion::V1).unwrap();
        assert_eq!(Decryptor::new().decrypt_bytes(&raw, PASSWORD_A).unwrap(), b"raw");
    }

    // ## 2️⃣ Wire shape

    #[test]
    fn schema_byte_is_honoured() {
        for schema in [SchemaVersion::V0, SchemaVersion::V1, SchemaVersion::V2] {
            let ct = encrypt_with_schema(PLAINTEXT.as_bytes(), PASSWORD_A, schema).unwrap();
            let raw = decode_base64(&ct).unwrap();
            assert_eq!(raw[0], schema.as_byte());
        }
    }

    #[test]
    fn configured_default_schema_is_used() {
        let enc = Encryptor::with_config(CryptorConfig::new(Some(SchemaVersion::V0)));
        let raw = decode_base64(&enc.encrypt(b"x", PASSWORD_A).unwrap()).unwrap();
        assert_eq!(raw[0], 0x00);
        assert_eq!(raw[1], 0x00);

        assert_eq!(CryptorConfig::new(None), CryptorConfig::default());
        assert_eq!(Encryptor::new().config().default_schema, SchemaVersion::V2);
    }

    #[test]
    fn attack_at_dawn_is_82_bytes_under_cbc() {
        for schema in [SchemaVersion::V1, SchemaVersion::V2] {
            let raw = Encryptor::new().encrypt_to_bytes(b"attack at dawn", PASSWORD_A, schema).unwrap();
            assert_eq!(raw.len(), 34 + 16 + 32);
        }
    }

    #[test]
    fn ctr_envelope_has_no_padding() {
        let raw = Encryptor::new().encrypt_to_bytes(b"attack at dawn", PASSWORD_A, SchemaVersion::V0).unwrap();
        assert_eq!(raw.len(), 34 + 14 + 32);
    }

    #[test]
    fn base64_is_padded_standard_alphabet() {
        let ct = encrypt(b"attack at dawn", PASSWORD_A).unwrap();
        // 82 raw bytes -> 28 groups of 4 characters, last group padded.
        assert_eq!(ct.len(), 112);
        assert!(ct.ends_with('='));
    }

    #[test]
    fn fresh_material_per_call() {
        let a = encrypt(PLAINTEXT.as_bytes(), PASSWORD_A).unwrap();
        let b = encrypt(PLAINTEXT.as_bytes(), PASSWORD_A).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn sealing_with_fixed_material_is_deterministic() {
        let m = fixed_material();
        let a = seal_with_material(b"same", PASSWORD_A, SchemaVersion::V2, &m).unwrap();
        let b = seal_with_material(b"same", PASSWORD_A, SchemaVersion::V2, &m).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.encryption_salt, m.encryption_salt);
        assert_eq!(a.hmac_salt, m.hmac_salt);
        assert_eq!(a.iv, m.iv);
        assert_eq!(Decryptor::new().open(&a, PASSWORD_A).unwrap(), b"same");
    }

    // ## 3️⃣ Failure kinds

    #[test]
    fn wrong_password_is_authentication_failure() {
        let ct = encrypt(PLAINTEXT.as_bytes(), PASSWORD_A).unwrap();
        let err = decrypt(&ct, "bad-password").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
    }

    #[test]
    fn tampered_ciphertext_is_authentication_failure() {
        for schema in ALL_SCHEMAS {
            let mut raw = Encryptor::new().encrypt_to_bytes(PLAINTEXT.as_bytes(), PASSWORD_A, schema).unwrap();
            raw[40] ^= 0x01;
            let err = decrypt(&encode_base64(&raw), PASSWORD_A).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::AuthenticationFailure, "{:?}", schema);
        }
    }

    #[test]
    fn tampered_header_is_authentication_failure_when_covered() {
        let mut raw = Encryptor::new().encrypt_to_bytes(PLAINTEXT.as_bytes(), PASSWORD_A, SchemaVersion::V2).unwrap();
        raw[20] ^= 0x01; // inside the IV
        let err = decrypt(&encode_base64(&raw), PASSWORD_A).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
    }

    #[test]
    fn tampered_tag_is_authentication_failure() {
        let mut raw = Encryptor::new().encrypt_to_bytes(PLAINTEXT.as_bytes(), PASSWORD_A, SchemaVersion::V1).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let err = decrypt(&encode_base64(&raw), PASSWORD_A).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
    }

    #[test]
    fn unknown_schema_byte_is_rejected_before_authentication() {
        let mut raw = Encryptor::new().encrypt_to_bytes(PLAINTEXT.as_bytes(), PASSWORD_A, SchemaVersion::V2).unwrap();
        for bad in [0x04u8, 0x80, 0xFF] {
            raw[0] = bad;
            let err = decrypt(&encode_base64(&raw), PASSWORD_A).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedSchema);
        }
    }

    // A V2 envelope relabelled as V3 parses (V3 aliases V2) but fails the
    // header-covering HMAC. Pinned here because the V3 alias is unresolved.
    #[test]
    fn relabelled_v3_envelope_fails_authentication() {
        let mut raw = Encryptor::new().encrypt_to_bytes(PLAINTEXT.as_bytes(), PASSWORD_A, SchemaVersion::V2).unwrap();
        raw[0] = 0x03;
        let err = decrypt(&encode_base64(&raw), PASSWORD_A).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
    }

    #[test]
    fn short_buffers_are_truncated() {
        for len in [0usize, 1, 34, 65] {
            let text = encode_base64(&vec![0x02; len]);
            let err = decrypt(&text, PASSWORD_A).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TruncatedEnvelope, "len {}", len);
        }
    }

    #[test]
    fn invalid_base64_is_malformed_encoding() {
        for text in ["not base64!", "QUJD*A==", "QU\u{e9}D"] {
            let err = decrypt(text, PASSWORD_A).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedEncoding, "{:?}", text);
        }
    }

    #[test]
    fn line_wrapped_base64_decodes() {
        let ct = encrypt(PLAINTEXT.as_bytes(), PASSWORD_A).unwrap();
        let wrapped = ct
            .as_bytes()
            .chunks(64)
            .map(|line| std::str::from_utf8(line).unwrap())
            .collect::<Vec<_>>()
            .join("\r\n");
        assert!(wrapped.contains('\n'));

        assert_eq!(decrypt(&wrapped, PASSWORD_A).unwrap(), PLAINTEXT.as_bytes());
        assert_eq!(decode_base64(&format!(" {}\n\t", wrapped)).unwrap(), decode_base64(&ct).unwrap());
        assert_eq!(decode_base64("QU JD\nRA==").unwrap(), b"ABCD");
    }

    #[test]
    fn non_utf8_plaintext_is_invalid_text() {
        let ct = encrypt(&[0xFF, 0xFE, 0xFD], PASSWORD_A).unwrap();
        let err = Decryptor::new().decrypt_to_string(&ct, PASSWORD_A).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidText);
    }

    #[test]
    fn decrypt_failures_share_one_public_message() {
        let ct = encrypt(PLAINTEXT.as_bytes(), PASSWORD_A).unwrap();
        let auth = decrypt(&ct, "nope").unwrap_err();
        let trunc = decrypt("AAAA", PASSWORD_A).unwrap_err();
        let enc = decrypt("%%%", PASSWORD_A).unwrap_err();
        assert_eq!(auth.public_message(), "decryption failed");
        assert_eq!(trunc.public_message(), auth.public_message());
        assert_eq!(enc.public_message(), auth.public_message());
        assert_eq!(auth.to_string(), "authentication failed");
    }

    // ## 4️⃣ Concurrency

    #[test]
    fn shared_encryptor_across_threads() {
        let enc = Arc::new(Encryptor::new());
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let enc = Arc::clone(&enc);
                thread::spawn(move || {
                    let schema = ALL_SCHEMAS[i as usize];
                    let pt = vec![i; 40 + i as usize];
                    let ct = enc.encrypt_with_schema(&pt, PASSWORD_A, schema).unwrap();
                    (pt, ct)
                })
            })
            .collect();

        for h in handles {
            let (pt, ct) = h.join().unwrap();
            assert_eq!(decrypt(&ct, PASSWORD_A).unwrap(), pt);
        }
    }

    #[test]
    fn cryptors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Encryptor>();
        assert_send_sync::<Decryptor>();
    }
}
