#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::node::*;

    #[test]
    fn test_posthtml_tree_round_trip() {
        let input = json!([
            "\n",
            {
                "tag": "div",
                "attrs": { "id": "main", "class": "-card", "hidden": true },
                "content": ["hi", { "tag": "br" }],
                "location": { "line": 3, "column": 1 }
            }
        ]);

        let tree: Vec<MarkupNode> = serde_json::from_value(input.clone()).unwrap();
        match &tree[1] {
            MarkupNode::Element(el) => {
                assert_eq!(el.tag_name(), Some("div"));
                assert_eq!(el.attr("class"), Some("-card"));
                let attrs = el.attributes.as_ref().unwrap();
                assert_eq!(attrs.get("hidden"), Some(&AttributeValue::Other(json!(true))));
                assert_eq!(el.children.as_ref().map(Vec::len), Some(2));
                assert!(el.extra.contains_key("location"));
            }
            other => panic!("expected element, got {:?}", other),
        }

        assert_eq!(serde_json::to_value(&tree).unwrap(), input);
    }

    #[test]
    fn test_empty_attrs_and_content_keep_their_presence() {
        let input = json!([{ "tag": "img", "attrs": {}, "content": [] }, { "tag": "br" }]);
        let tree: Vec<MarkupNode> = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&tree).unwrap(), input);
    }

    #[test]
    fn test_tag_false_wrapper() {
        let input = json!([{ "tag": false, "content": [{ "tag": "div" }] }]);
        let tree: Vec<MarkupNode> = serde_json::from_value(input.clone()).unwrap();
        match &tree[0] {
            MarkupNode::Element(el) => {
                assert_eq!(el.tag, Some(NodeTag::Flag(false)));
                assert_eq!(el.tag_name(), None);
            }
            other => panic!("expected element, got {:?}", other),
        }
        assert_eq!(serde_json::to_value(&tree).unwrap(), input);
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let mut attrs: AttributeMap = [("b", "1"), ("a", "2"), ("class", "x")].into_iter().collect();
        attrs.set("a", "3");
        attrs.set("block", "card");
        attrs.remove("class");

        let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "block"]);

        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"b":"1","a":"3","block":"card"}"#);
    }

    #[test]
    fn test_empty_string_attribute_is_present() {
        let mut attrs = AttributeMap::new();
        attrs.set("class", "");
        assert!(attrs.contains("class"));
        assert_eq!(attrs.remove("class"), Some(AttributeValue::Text(String::new())));
        assert!(!attrs.contains("class"));
    }

    #[test]
    fn test_has_class() {
        assert!(ElementNode::new("p").with_attr("class", "x").has_class());
        assert!(!ElementNode::new("p").with_attr("id", "x").has_class());
    }
}
