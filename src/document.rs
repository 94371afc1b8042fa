//! # Job Document Tree
//!
//! The in-memory form of a job `config.xml`. A document is an ordered tree
//! of [`Node`]s rooted at an [`Element`]. Child order is significant: the
//! consuming server reads the document positionally.
//!
//! Type tags (`class="…"`, `plugin="…"`) are modelled as [`TypeTag`] values
//! and attached when an element is constructed with [`Element::typed`], so a
//! variant block cannot be built without the tag its consumer dispatches on.

use std::fmt;

/// A scalar element value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// An attribute identifying the schema variant an element instantiates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    /// `class="…"`: the implementation class or collection type.
    Class(String),
    /// `plugin="…"`: the plugin (and version) providing the implementation.
    Plugin(String),
}

impl TypeTag {
    pub fn class(name: impl Into<String>) -> Self {
        TypeTag::Class(name.into())
    }

    pub fn plugin(name: impl Into<String>) -> Self {
        TypeTag::Plugin(name.into())
    }

    /// Attribute name as written in the document.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            TypeTag::Class(_) => "class",
            TypeTag::Plugin(_) => "plugin",
        }
    }

    /// Attribute value as written in the document.
    pub fn value(&self) -> &str {
        match self {
            TypeTag::Class(v) | TypeTag::Plugin(v) => v,
        }
    }
}

/// A node of the job document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with no content, e.g. `<description/>`.
    Empty(String),
    /// An element holding a single scalar, e.g. `<disabled>false</disabled>`.
    Value { name: String, value: Value },
    /// An element with type tags and ordered children.
    Element(Element),
}

impl Node {
    pub fn empty(name: impl Into<String>) -> Self {
        Node::Empty(name.into())
    }

    pub fn value(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Node::Value {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A text element, or an empty element when `text` is `None`.
    pub fn optional_text(name: impl Into<String>, text: Option<&str>) -> Self {
        match text {
            Some(text) => Node::value(name, text),
            None => Node::empty(name),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Empty(name) | Node::Value { name, .. } => name,
            Node::Element(element) => &element.name,
        }
    }

    /// The scalar content, if this is a [`Node::Value`].
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_empty_element(&self) -> bool {
        match self {
            Node::Empty(_) => true,
            Node::Value { .. } => false,
            Node::Element(element) => element.tags.is_empty() && element.children.is_empty(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element with optional type tags and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    tags: Vec<TypeTag>,
    children: Vec<Node>,
}

impl Element {
    /// An untagged element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An element tagged with the given implementation class.
    pub fn typed(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: vec![TypeTag::class(class)],
            children: Vec::new(),
        }
    }

    /// Adds a further type tag, such as a plugin version.
    pub fn with_tag(mut self, tag: TypeTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Appends a child, keeping insertion order.
    pub fn with(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[TypeTag] {
        &self.tags
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The `class` type tag, if any.
    pub fn type_class(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            TypeTag::Class(class) => Some(class.as_str()),
            TypeTag::Plugin(_) => None,
        })
    }

    /// The `plugin` type tag, if any.
    pub fn plugin(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            TypeTag::Plugin(plugin) => Some(plugin.as_str()),
            TypeTag::Class(_) => None,
        })
    }

    /// The first child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|node| node.name() == name)
    }

    /// The first child element with the given name.
    pub fn child_element(&self, name: &str) -> Option<&Element> {
        self.child(name).and_then(Node::as_element)
    }

    /// The scalar content of the first child with the given name.
    pub fn child_value(&self, name: &str) -> Option<&Value> {
        self.child(name).and_then(Node::as_value)
    }

    /// Child names in document order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(Node::name).collect()
    }

    /// Number of entries a list-style element holds, counting its type tags.
    ///
    /// Typed collections such as `<triggers class="vector">` carry their
    /// collection marker as the first entry.
    pub fn entry_count(&self) -> usize {
        self.tags.len() + self.children.len()
    }
}
