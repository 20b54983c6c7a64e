//! Markup tree handed over by the host pipeline.
//!
//! The serialized form follows posthtml: a tree is an array whose items are
//! either strings (text) or element objects `{ tag, attrs, content }`. Keys the
//! pass does not know about are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CLASS_ATTR: &str = "class";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkupNode {
    Text(String),
    Element(ElementNode),
}

/// Element tag. posthtml writes `"tag": false` for wrapper nodes that only group content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeTag {
    Name(String),
    Flag(bool),
}

impl NodeTag {
    pub fn name(&self) -> Option<&str> {
        match self {
            NodeTag::Name(name) => Some(name),
            NodeTag::Flag(_) => None,
        }
    }
}

/// `attrs` and `content` keep their presence: an input `"attrs": {}` is written back as such.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<NodeTag>,
    #[serde(default, rename = "attrs", skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
    #[serde(default, rename = "content", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MarkupNode>>,
    /// Host-specific keys (source locations and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ElementNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: Some(NodeTag::Name(tag.to_string())),
            ..Self::default()
        }
    }

    /// A tagless wrapper (`"tag": false`).
    pub fn wrapper() -> Self {
        Self {
            tag: Some(NodeTag::Flag(false)),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes_mut().set(name, value);
        self
    }

    pub fn with_children(mut self, children: Vec<MarkupNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_ref().and_then(NodeTag::name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref().and_then(|a| a.get_text(name))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.as_ref().is_some_and(|a| a.contains(name))
    }

    /// Attribute map, created empty if the node had none.
    pub fn attributes_mut(&mut self) -> &mut AttributeMap {
        self.attributes.get_or_insert_with(AttributeMap::default)
    }

    pub fn has_class(&self) -> bool {
        self.has_attr(CLASS_ATTR)
    }
}

impl From<ElementNode> for MarkupNode {
    fn from(element: ElementNode) -> Self {
        MarkupNode::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    /// Anything that is not a string, e.g. `true` for a bare boolean attribute.
    Other(Value),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Other(_) => None,
        }
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => AttributeValue::Text(s),
            other => AttributeValue::Other(other),
        }
    }
}

impl From<AttributeValue> for Value {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Text(s) => Value::String(s),
            AttributeValue::Other(v) => v,
        }
    }
}

/// Ordered attribute mapping. Overwriting keeps an attribute's position; new
/// attributes are appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.insert(name, AttributeValue::Text(value.to_string()));
    }

    pub fn insert(&mut self, name: &str, value: AttributeValue) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl From<Map<String, Value>> for AttributeMap {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, AttributeValue::from(value)))
                .collect(),
        }
    }
}

impl From<AttributeMap> for Map<String, Value> {
    fn from(attributes: AttributeMap) -> Self {
        attributes
            .entries
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut attributes = AttributeMap::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}
