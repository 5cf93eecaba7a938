//! Engine-level behavior through the public `transform` entry point.

use decipher::{CodecError, CodecRequest, ErrorKind, Mode, transform};

fn encode(algorithm: &str, input: &str) -> String {
    transform(&CodecRequest::encode(algorithm, input)).unwrap()
}

fn decode(algorithm: &str, input: &str) -> Result<String, CodecError> {
    transform(&CodecRequest::decode(algorithm, input))
}

const SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello, World!",
    "The quick brown fox jumps over the lazy dog 0123456789",
    "  leading and trailing  ",
    "tabs\tnew\nlines\r\n",
    "punctuation: !@#$%^&*()_+-=[]{};':\",./<>?`~",
    "ünïcödé, 日本語, emoji 🦀",
];

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_hex_scenario() {
    assert_eq!(encode("hex", "AB"), "4142");
    assert_eq!(decode("hex", "4142").unwrap(), "AB");
}

#[test]
fn test_rot13_scenario() {
    let request = CodecRequest::new("rot13", "Hello, World!");
    assert_eq!(transform(&request).unwrap(), "Uryyb, Jbeyq!");
}

#[test]
fn test_atbash_scenario() {
    let request = CodecRequest::new("atbash", "Hello");
    assert_eq!(transform(&request).unwrap(), "Svool");
}

#[test]
fn test_morse_scenario() {
    assert_eq!(encode("morse", "SOS"), "... --- ...");
}

#[test]
fn test_railfence_scenario() {
    let plain = "WEAREDISCOVEREDFLEEATONCE";
    let request = CodecRequest::encode("railfence", plain).with_rails(3);
    let cipher = transform(&request).unwrap();
    assert_eq!(cipher, "WECRLTEERDSOEEFEAOCAIVDEN");

    let back = transform(&CodecRequest::decode("railfence", cipher).with_rails(3)).unwrap();
    assert_eq!(back, plain);
}

#[test]
fn test_vigenere_scenario() {
    let request = CodecRequest::encode("vigenere", "ATTACKATDAWN").with_key("LEMON");
    let cipher = transform(&request).unwrap();
    assert_eq!(cipher, "LXFOPVEFRNHR");

    let back = transform(&CodecRequest::decode("vigenere", cipher).with_key("LEMON")).unwrap();
    assert_eq!(back, "ATTACKATDAWN");
}

// ============================================================================
// Laws
// ============================================================================

#[test]
fn test_involutions() {
    let ascii: String = (0u8..0x80).map(char::from).collect();
    for algorithm in ["rot13", "atbash"] {
        for text in SAMPLES.iter().copied().chain([ascii.as_str()]) {
            let once = transform(&CodecRequest::new(algorithm, text)).unwrap();
            let twice = transform(&CodecRequest::new(algorithm, once)).unwrap();
            assert_eq!(twice, text, "{} on {:?}", algorithm, text);
        }
    }
}

#[test]
fn test_byte_codecs_roundtrip() {
    for algorithm in ["hex", "base64"] {
        for text in SAMPLES {
            let encoded = encode(algorithm, text);
            assert_eq!(decode(algorithm, &encoded).unwrap(), *text, "{}", algorithm);
        }
    }
}

#[test]
fn test_railfence_roundtrip_every_rail_count() {
    for text in SAMPLES {
        let len = text.chars().count() as i64;
        for rails in [2, 3, 4, 7, len, len + 1, len + 10] {
            let cipher =
                transform(&CodecRequest::encode("railfence", *text).with_rails(rails)).unwrap();
            let back =
                transform(&CodecRequest::decode("railfence", cipher).with_rails(rails)).unwrap();
            assert_eq!(back, *text, "rails = {}", rails);
        }
    }
}

#[test]
fn test_vigenere_roundtrip_mixed_text() {
    for key in ["LEMON", "a", "Zebra Crossing", "k3y!"] {
        for text in SAMPLES {
            let cipher =
                transform(&CodecRequest::encode("vigenere", *text).with_key(key)).unwrap();
            let back = transform(&CodecRequest::decode("vigenere", cipher).with_key(key)).unwrap();
            assert_eq!(back, *text, "key {:?}", key);
        }
    }
}

#[test]
fn test_vigenere_skips_non_letters() {
    let request = CodecRequest::encode("vigenere", "AT TACK 1 AT DAWN.").with_key("LEMON");
    assert_eq!(transform(&request).unwrap(), "LX FOPV 1 EF RNHR.");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_vigenere_empty_or_non_alphabetic_key() {
    for key in ["", "123", "--"] {
        let request = CodecRequest::encode("vigenere", "anything").with_key(key);
        let err = transform(&request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        assert_eq!(err, CodecError::missing_parameter("key"));
    }

    let no_key = CodecRequest::decode("vigenere", "anything");
    assert_eq!(transform(&no_key).unwrap_err().kind(), ErrorKind::MissingParameter);
}

#[test]
fn test_hex_odd_length() {
    let err = decode("hex", "ABC").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert!(err.message().contains("odd hex length"));
}

#[test]
fn test_base64_malformed() {
    let err = decode("base64", "@@@@").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert!(err.message().contains("invalid base64"));
}

#[test]
fn test_invalid_utf8_after_decode() {
    assert_eq!(decode("hex", "c328").unwrap_err().kind(), ErrorKind::DecodeError);
    assert_eq!(decode("base64", "wyg=").unwrap_err().kind(), ErrorKind::DecodeError);
}

#[test]
fn test_unknown_algorithm() {
    let err = transform(&CodecRequest::encode("caesar", "abc")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownAlgorithm);

    match transform(&CodecRequest::encode("bas64", "abc")).unwrap_err() {
        CodecError::UnknownAlgorithm { name, suggestion } => {
            assert_eq!(name, "bas64");
            assert_eq!(suggestion.as_deref(), Some("base64"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_morse_decode_never_fails() {
    assert_eq!(decode("morse", "... ---- ...").unwrap(), "S?S");
    assert_eq!(decode("morse", "hello").unwrap(), "?");
}

// ============================================================================
// Empty input
// ============================================================================

#[test]
fn test_empty_input_everywhere() {
    for algorithm in ["hex", "base64", "rot13", "atbash", "morse", "railfence"] {
        for mode in [Mode::Encode, Mode::Decode] {
            let request = CodecRequest::new(algorithm, "").with_mode(mode);
            assert_eq!(transform(&request).unwrap(), "", "{} {}", algorithm, mode);
        }
    }
    let request = CodecRequest::encode("vigenere", "").with_key("KEY");
    assert_eq!(transform(&request).unwrap(), "");
}

#[test]
fn test_missing_key_wins_over_empty_input() {
    let request = CodecRequest::encode("vigenere", "");
    assert_eq!(
        transform(&request).unwrap_err(),
        CodecError::missing_parameter("key")
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_independent_calls_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("thread {} says hello", i);
                let cipher = transform(&CodecRequest::encode("morse", text.as_str())).unwrap();
                transform(&CodecRequest::decode("morse", cipher)).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("THREAD {} SAYS HELLO", i));
    }
}
