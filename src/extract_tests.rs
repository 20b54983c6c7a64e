#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::config::NamingConfig;
    use crate::error::BemError;
    use crate::extract::*;
    use crate::node::{AttributeMap, AttributeValue};

    fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_block_extraction() {
        let mut a = attrs(&[("class", "-card foo")]);
        let changed = extract_block(&mut a, Some("div"), &NamingConfig::default()).unwrap();
        assert!(changed);
        assert_eq!(a, attrs(&[("class", "foo"), ("block", "card")]));
    }

    #[test]
    fn test_element_extraction_removes_emptied_class() {
        let mut a = attrs(&[("id", "x"), ("class", "__title")]);
        extract_element(&mut a, None, &NamingConfig::default()).unwrap();
        assert_eq!(a, attrs(&[("id", "x"), ("elem", "title")]));
        assert!(!a.contains("class"));
    }

    #[test]
    fn test_no_class_is_noop() {
        let mut a = attrs(&[("id", "x")]);
        let changed = extract_block(&mut a, None, &NamingConfig::default()).unwrap();
        assert!(!changed);
        assert_eq!(a, attrs(&[("id", "x")]));
    }

    #[test]
    fn test_no_match_creates_no_attribute() {
        let mut a = attrs(&[("class", "foo  bar")]);
        let changed = extract_element(&mut a, None, &NamingConfig::default()).unwrap();
        assert!(!changed);
        // The class value is not even normalized when nothing matches.
        assert_eq!(a, attrs(&[("class", "foo  bar")]));
    }

    #[test]
    fn test_kept_tokens_preserve_order() {
        let mut a = attrs(&[("class", "z -a y -b x")]);
        extract_block(&mut a, None, &NamingConfig::default()).unwrap();
        assert_eq!(a.get_text("block"), Some("a b"));
        assert_eq!(a.get_text("class"), Some("z y x"));
    }

    #[test]
    fn test_existing_target_is_overwritten_in_place() {
        let mut a = attrs(&[("block", "old"), ("class", "-new")]);
        extract_block(&mut a, None, &NamingConfig::default()).unwrap();
        assert_eq!(a, attrs(&[("block", "new")]));
    }

    #[test]
    fn test_custom_transform() {
        let mut a = attrs(&[("class", "x-one x-two keep")]);
        let changed = extract_attribute(&mut a, None, "x-", "data-x", |s| s.to_uppercase()).unwrap();
        assert!(changed);
        assert_eq!(a.get_text("data-x"), Some("ONE TWO"));
        assert_eq!(a.get_text("class"), Some("keep"));
    }

    #[test]
    fn test_non_string_class_is_invalid_node() {
        let mut a = AttributeMap::new();
        a.insert("class", AttributeValue::Other(json!(true)));
        let before = a.clone();

        let err = extract_block(&mut a, Some("span"), &NamingConfig::default()).unwrap_err();
        match err {
            BemError::InvalidNode { tag, .. } => assert_eq!(tag, "span"),
            other => panic!("expected invalid node, got {:?}", other),
        }
        assert_eq!(a, before);
    }

    #[rstest]
    #[case("size_large", "size:large")]
    #[case("disabled", "disabled")]
    #[case("theme_dark_blue", "theme:dark_blue")]
    #[case("size_", "size")]
    #[case("_large", "")]
    #[case("", "")]
    fn test_modifier_pair(#[case] stripped: &str, #[case] expected: &str) {
        assert_eq!(modifier_pair(stripped, "_"), expected);
    }

    #[test]
    fn test_modifier_pair_multichar_delimiter() {
        assert_eq!(modifier_pair("size--lg--x", "--"), "size:lg--x");
        assert_eq!(modifier_pair("size-lg", "--"), "size-lg");
    }

    #[test]
    fn test_modifier_extraction() {
        let mut a = attrs(&[("class", "_size_large _disabled")]);
        extract_modifiers(&mut a, None, &NamingConfig::default()).unwrap();
        assert_eq!(a, attrs(&[("mods", "size:large disabled")]));
    }

    #[test]
    fn test_nameless_prefix_token_is_consumed_and_dropped() {
        let mut a = attrs(&[("class", "- -card x")]);
        extract_block(&mut a, None, &NamingConfig::default()).unwrap();
        assert_eq!(a, attrs(&[("class", "x"), ("block", "card")]));

        let mut mixed = attrs(&[("class", "- -card")]);
        extract_block(&mut mixed, None, &NamingConfig::default()).unwrap();
        assert_eq!(mixed, attrs(&[("block", "card")]));
    }

    #[test]
    fn test_only_nameless_tokens_create_no_target() {
        let mut lone = attrs(&[("id", "x"), ("class", "- keep")]);
        let changed = extract_block(&mut lone, None, &NamingConfig::default()).unwrap();
        assert!(changed);
        assert_eq!(lone, attrs(&[("id", "x"), ("class", "keep")]));

        let mut emptied = attrs(&[("class", "_ _")]);
        extract_modifiers(&mut emptied, None, &NamingConfig::default()).unwrap();
        assert!(emptied.is_empty());
    }

    #[test]
    fn test_partition_drops_empty_outputs() {
        let result = partition_tokens(&["m_", "m__x", "y"], "m_", |s| modifier_pair(s, "_"));
        assert_eq!(result.matched, 2);
        assert!(result.extracted.is_empty());
        assert_eq!(result.kept, vec!["y".to_string()]);
    }

    #[test]
    fn test_partition_tokens() {
        let result = partition_tokens(&["m_a", "x", "m_b_c"], "m_", |s| modifier_pair(s, "_"));
        assert_eq!(
            result,
            ExtractionResult {
                matched: 2,
                extracted: vec!["a".to_string(), "b:c".to_string()],
                kept: vec!["x".to_string()],
            }
        );
    }
}
