//! XML encoding of job documents
//!
//! Converts a document tree into `config.xml` text using `xot`. Booleans are
//! written as `true`/`false`, empty nodes as empty elements, and text is
//! escaped by the serializer.

use xot::Xot;

use crate::document::{Element, Node};
use crate::error::{Error, Result};

/// Declaration prepended by [`to_xml_document`].
pub const XML_DECLARATION: &str = "<?xml version='1.1' encoding='UTF-8'?>";

fn serialization_error(err: xot::Error) -> Error {
    Error::Serialization {
        message: err.to_string(),
    }
}

/// Encodes `root` and its descendants as XML text.
pub fn to_xml(root: &Element) -> Result<String> {
    let mut xot = Xot::new();
    let node = build_element(&mut xot, root)?;
    xot.to_string(node).map_err(serialization_error)
}

/// Encodes `root` as a standalone document with an XML declaration.
pub fn to_xml_document(root: &Element) -> Result<String> {
    Ok(format!("{}\n{}", XML_DECLARATION, to_xml(root)?))
}

fn build_element(xot: &mut Xot, element: &Element) -> Result<xot::Node> {
    let name = xot.add_name(element.name());
    let node = xot.new_element(name);

    for tag in element.tags() {
        let attribute = xot.add_name(tag.attribute_name());
        xot.attributes_mut(node)
            .insert(attribute, tag.value().to_string());
    }

    for child in element.children() {
        let child_node = match child {
            Node::Empty(name) => {
                let name = xot.add_name(name);
                xot.new_element(name)
            }
            Node::Value { name, value } => {
                let name = xot.add_name(name);
                let value_node = xot.new_element(name);
                let text = value.to_string();
                if !text.is_empty() {
                    let text_node = xot.new_text(&text);
                    xot.append(value_node, text_node)
                        .map_err(serialization_error)?;
                }
                value_node
            }
            Node::Element(element) => build_element(xot, element)?,
        };
        xot.append(node, child_node).map_err(serialization_error)?;
    }

    Ok(node)
}
