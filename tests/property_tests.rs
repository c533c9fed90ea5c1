use huffcode::{Codec, CodecConfig, Error, Node, TieBreak};
use proptest::prelude::*;

fn sums_hold(node: &Node) -> bool {
    match node.children() {
        None => node.freq() > 0,
        Some((left, right)) => {
            node.freq() == left.freq() + right.freq() && sums_hold(left) && sums_hold(right)
        }
    }
}

#[test]
fn test_single_symbol_corpus() {
    let codec = Codec::build("aaaa").unwrap();
    assert!(codec.root().is_leaf());
    assert_eq!(codec.table().iter().collect::<Vec<_>>(), vec![('a', "")]);
    assert_eq!(codec.encode("aaaa").unwrap(), "");
    assert_eq!(codec.decode("").unwrap(), "a");
}

#[test]
fn test_unknown_symbol_has_no_partial_output() {
    let codec = Codec::build("abc").unwrap();
    let err = codec.encode("abcd").unwrap_err();
    assert!(matches!(err, Error::UnknownSymbol('d')));
}

#[test]
fn test_unrecognized_code_names_token() {
    let codec = Codec::build("ab").unwrap();
    let err = codec.decode("0 1 01extra").unwrap_err();
    assert!(matches!(err, Error::UnrecognizedCode(ref t) if t == "01extra"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_codes_are_prefix_free(text in "[a-z ]{2,200}") {
        let codec = Codec::build(&text);
        prop_assume!(codec.is_ok());
        let codec = codec.unwrap();
        prop_assume!(codec.table().len() >= 2);

        let codes: Vec<&str> = codec.table().iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a), "{:?} prefixes {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_lowercases(text in "[a-zA-Z0-9]{2,200}") {
        let codec = Codec::build(&text).unwrap();
        prop_assume!(!codec.tree().is_degenerate());
        let encoded = codec.encode(&text).unwrap();
        prop_assert_eq!(codec.decode(&encoded).unwrap(), text.to_lowercase());
    }

    #[test]
    fn test_frequency_monotonicity(text in "[a-z\n ]{1,200}", unordered in any::<bool>()) {
        let tie_break = if unordered { TieBreak::Unordered } else { TieBreak::InsertionOrder };
        let config = CodecConfig { tie_break, ..CodecConfig::default() };
        let codec = Codec::build_with_config(&text, &config);
        prop_assume!(codec.is_ok());
        let codec = codec.unwrap();

        prop_assert!(sums_hold(codec.root()));
        prop_assert_eq!(codec.root().freq(), codec.frequencies().total());
    }

    #[test]
    fn test_tie_break_does_not_change_cost(text in "[a-h]{2,200}") {
        let ordered = Codec::build(&text).unwrap();
        let unordered = Codec::build_with_config(
            &text,
            &CodecConfig { tie_break: TieBreak::Unordered, ..CodecConfig::default() },
        )
        .unwrap();
        prop_assert_eq!(
            ordered.table().encoded_bits(ordered.frequencies()),
            unordered.table().encoded_bits(unordered.frequencies())
        );
    }
}
