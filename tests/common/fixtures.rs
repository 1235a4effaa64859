use serde_json::{json, Value};

/// The stylesheet every fixture document starts from.
pub fn default_styles() -> Value {
    json!([
        {
            "name": "Normal",
            "attributes": {
                "SpaceAfter": { "length": "6pt" },
                "WidowControl": { "boolean": true }
            }
        },
        {
            "name": "Heading1",
            "basedOn": "Normal",
            "attributes": {
                "SpaceBefore": { "length": "12pt" },
                "KeepWithNext": { "boolean": true },
                "OutlineLevel": { "enum": { "outlineLevel": "level1" } }
            }
        },
        {
            "name": "Emphasis",
            "attributes": {
                "Color": { "color": "#c00000" }
            }
        }
    ])
}

/// Create a document from a list of body elements
pub fn document(body: Vec<Value>) -> Value {
    json!({
        "styles": default_styles(),
        "body": body
    })
}

/// Create a paragraph with direct attributes
pub fn paragraph(attributes: Value) -> Value {
    json!({
        "kind": "Paragraph",
        "attributes": attributes
    })
}

/// Create a paragraph with a named style
pub fn styled_paragraph(style: &str, attributes: Value) -> Value {
    json!({
        "kind": "Paragraph",
        "style": style,
        "attributes": attributes
    })
}

/// Create an element of any kind with children
pub fn element(kind: &str, children: Vec<Value>) -> Value {
    json!({
        "kind": kind,
        "children": children
    })
}
