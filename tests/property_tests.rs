// tests/property_tests.rs
use proptest::prelude::*;
use sms_split::*;

fn cost(content: &str, encoder: &dyn Encoder) -> usize {
    content.chars().map(|ch| encoder.code_points(ch).unwrap()).sum()
}

/// Characters drawn from the GSM repertoire, weighted towards word text
fn gsm_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            6 => proptest::char::range('a', 'z'),
            2 => Just(' '),
            1 => prop::sample::select(vec!['.', ',', '!', '\n', '[', '~', '€', 'é', 'Ω']),
        ],
        0..600,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn split_message_round_trips(text in gsm_text(), budget in 2usize..200) {
        let chars: Vec<char> = text.chars().collect();
        let parts = split_message(&chars, &Gsm7, budget).unwrap();

        prop_assert_eq!(parts.concat(), text);
        for part in &parts {
            prop_assert!(cost(part, &Gsm7) <= budget);
        }
    }

    #[test]
    fn utf16_split_respects_budget(text in "\\PC{0,300}", budget in 2usize..100) {
        let chars: Vec<char> = text.chars().collect();
        let parts = split_message(&chars, &Utf16, budget).unwrap();

        prop_assert_eq!(parts.concat(), text);
        for part in &parts {
            prop_assert!(cost(part, &Utf16) <= budget);
        }
    }

    #[test]
    fn splitter_headers_are_consistent(text in gsm_text(), short in any::<bool>()) {
        let mut splitter = Splitter::new();
        splitter.set_short_reference(short);
        let segments = splitter.split("from", &["to"], &text).unwrap();

        let rebuilt: String = segments.iter().map(Segment::content).collect();
        prop_assert_eq!(rebuilt, text.clone());

        if cost(&text, &Gsm7) <= 160 {
            prop_assert_eq!(segments.len(), 1);
            prop_assert!(!segments[0].has_udh());
        } else {
            let udh_len = if short { 6 } else { 7 };
            let first = segments[0].udh().clone();
            for (idx, segment) in segments.iter().enumerate() {
                prop_assert!(cost(segment.content(), &Gsm7) <= (140 - udh_len) * 8 / 7);
                prop_assert_eq!(segment.udh().len(), udh_len);
                prop_assert_eq!(&segment.udh()[..udh_len - 1], &first[..udh_len - 1]);
                prop_assert_eq!(segment.sequence_number(), Some(idx as u8 + 1));
            }
        }
    }
}
