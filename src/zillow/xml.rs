use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use crate::zillow::ZillowError;

/// Parses an XML document into a nested JSON value with a single top-level
/// key named after the root element.
///
/// Conversion rules: child elements are grouped by qualified tag name into
/// arrays, attributes land under `"$"`, text inside an element that also has
/// children or attributes lands under `"_"`, and a text-only element becomes
/// a plain string.
pub fn xml_to_value(xml: &str) -> Result<Value, ZillowError> {
    let doc = Document::parse(xml).map_err(|e| ZillowError::XmlParse(e.to_string()))?;
    let root = doc.root_element();

    let mut top = Map::new();
    top.insert(qualified_name(&root), element_to_value(&root));
    Ok(Value::Object(top))
}

/// Tag name as written in the document, prefix included. The result tags in
/// the operation table are prefixed ("SearchResults:searchresults"), so the
/// keys here have to be too.
fn qualified_name(node: &Node) -> String {
    let name = node.tag_name().name();
    match node
        .tag_name()
        .namespace()
        .and_then(|uri| node.lookup_prefix(uri))
    {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{name}"),
        _ => name.to_string(),
    }
}

fn element_to_value(node: &Node) -> Value {
    let text = node
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect::<String>()
        .trim()
        .to_string();

    let children: Vec<Node> = node.children().filter(|c| c.is_element()).collect();
    let attrs: Vec<_> = node.attributes().collect();

    if children.is_empty() && attrs.is_empty() {
        return Value::String(text);
    }

    let mut map = Map::new();

    if !attrs.is_empty() {
        let mut attr_map = Map::new();
        for attr in &attrs {
            attr_map.insert(
                attr.name().to_string(),
                Value::String(attr.value().to_string()),
            );
        }
        map.insert("$".to_string(), Value::Object(attr_map));
    }

    if !text.is_empty() {
        map.insert("_".to_string(), Value::String(text));
    }

    for child in children {
        let entry = map
            .entry(qualified_name(&child))
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = entry {
            items.push(element_to_value(&child));
        }
    }

    Value::Object(map)
}
