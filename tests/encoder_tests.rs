// tests/encoder_tests.rs
use sms_split::*;

#[test]
fn test_gsm_encoder() {
    let encoder = Gsm7;

    assert_eq!(encoder.code_point_bits(), 7);
    assert_eq!(encoder.name(), ENCODER_NAME_GSM);

    for ch in "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./09:;<=>?¡AZÄÖÑÜ§¿azäöñüà".chars() {
        assert_eq!(encoder.code_points(ch), Ok(1), "{:?}", ch);
    }
    for ch in "\u{000C}[\\]^{|}~€".chars() {
        assert_eq!(encoder.code_points(ch), Ok(2), "{:?}", ch);
    }

    let err = encoder.code_points('你').unwrap_err();
    assert_eq!(err, SplitError::NotEncodable { character: '你', encoding: "GSM" });

    assert!(encoder.check_encodability("All of these are GSM: [~€]"));
    assert!(!encoder.check_encodability("你"));
}

#[test]
fn test_utf16_encoder() {
    let encoder = Utf16;

    assert_eq!(encoder.code_point_bits(), 16);
    assert_eq!(encoder.name(), ENCODER_NAME_UTF16);

    assert_eq!(encoder.code_points('😂'), Ok(2));
    assert_eq!(encoder.code_points('#'), Ok(1));
    assert_eq!(encoder.code_points('你'), Ok(1));

    assert!(encoder.check_encodability("你"));
    assert!(encoder.check_encodability("mixed [~] 🙂 你好"));
}

#[test]
fn test_encoders_as_trait_objects() {
    let encoders: Vec<Box<dyn Encoder>> = vec![Box::new(Gsm7), Box::new(Utf16)];
    let costs: Vec<usize> = encoders.iter().map(|e| e.code_points('~').unwrap()).collect();
    assert_eq!(costs, vec![2, 1]);
}

#[test]
fn test_auto_detection() {
    assert_eq!(auto_detect_encoder("Plain GSM message {with} extensions €").name(), "GSM");
    assert_eq!(auto_detect_encoder("One emoji 🙂 is enough").name(), "UTF-16");
    assert_eq!(auto_detect_encoder("tab\tis not GSM").name(), "UTF-16");
}

/// A scheme that only knows digits, each costing one 4-bit code point
#[derive(Debug)]
struct Digits;

impl Encoder for Digits {
    fn name(&self) -> &'static str {
        "DIGITS"
    }

    fn code_point_bits(&self) -> usize {
        4
    }

    fn code_points(&self, ch: char) -> Result<usize> {
        if ch.is_ascii_digit() {
            Ok(1)
        } else {
            Err(SplitError::NotEncodable { character: ch, encoding: "DIGITS" })
        }
    }
}

#[test]
fn test_custom_encoder() {
    let mut splitter = Splitter::new();
    splitter.set_encoder(Digits);
    splitter.set_message_bytes(10);

    // 20 digits fit in 10 bytes of 4-bit code points
    let segments = splitter.split("from", &["to"], &"1".repeat(20)).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].encoding(), "DIGITS");

    // 8 digits per segment once the 6 byte header is taken
    let segments = splitter.split("from", &["to"], &"1".repeat(21)).unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2].content(), "11111");

    assert!(splitter.split("from", &["to"], "12a").unwrap_err().is_not_encodable());
}
