//! Loading a document (stylesheet plus body) from its JSON description.
//!
//! Style references are names in the JSON form; loading links them into
//! shared [`Style`] values so that effective resolution can cascade without a
//! stylesheet lookup.

use crate::attribute::AttributeMap;
use crate::element::DocumentElement;
use crate::error::ModelError;
use crate::kind::ElementKind;
use crate::style::{Style, Stylesheet};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Document {
    pub stylesheet: Stylesheet,
    pub body: Vec<DocumentElement>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentDef {
    #[serde(default)]
    styles: Vec<StyleDef>,
    #[serde(default)]
    body: Vec<ElementDef>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StyleDef {
    name: String,
    #[serde(default)]
    based_on: Option<String>,
    #[serde(default)]
    attributes: AttributeMap,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementDef {
    kind: ElementKind,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    attributes: AttributeMap,
    #[serde(default)]
    children: Vec<ElementDef>,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let def: DocumentDef = serde_json::from_str(json)?;
        let stylesheet = link_styles(def.styles)?;
        let body = def
            .body
            .into_iter()
            .map(|el| link_element(el, &stylesheet))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Loaded document: {} styles, {} top-level elements",
            stylesheet.len(),
            body.len()
        );
        Ok(Self { stylesheet, body })
    }
}

fn link_styles(defs: Vec<StyleDef>) -> Result<Stylesheet, ModelError> {
    let mut positions = HashMap::new();
    for (i, def) in defs.iter().enumerate() {
        if positions.insert(def.name.as_str(), i).is_some() {
            return Err(ModelError::DuplicateStyle(def.name.clone()));
        }
    }

    let mut built: Vec<Option<Arc<Style>>> = vec![None; defs.len()];
    for i in 0..defs.len() {
        build_style(i, &defs, &positions, &mut built, &mut Vec::new())?;
    }

    let mut stylesheet = Stylesheet::new();
    for style in built.into_iter().flatten() {
        stylesheet.add(style);
    }
    Ok(stylesheet)
}

fn build_style(
    index: usize,
    defs: &[StyleDef],
    positions: &HashMap<&str, usize>,
    built: &mut [Option<Arc<Style>>],
    visiting: &mut Vec<usize>,
) -> Result<Arc<Style>, ModelError> {
    if let Some(style) = &built[index] {
        return Ok(style.clone());
    }
    let def = &defs[index];
    if visiting.contains(&index) {
        return Err(ModelError::StyleCycle(def.name.clone()));
    }
    visiting.push(index);

    let based_on = match &def.based_on {
        Some(base) => {
            let base_index = *positions
                .get(base.as_str())
                .ok_or_else(|| ModelError::UnknownStyle(base.clone()))?;
            Some(build_style(base_index, defs, positions, built, visiting)?)
        }
        None => None,
    };
    visiting.pop();

    let style = Arc::new(Style {
        name: def.name.clone(),
        attributes: def.attributes.clone(),
        based_on,
    });
    built[index] = Some(style.clone());
    Ok(style)
}

fn link_element(def: ElementDef, stylesheet: &Stylesheet) -> Result<DocumentElement, ModelError> {
    let style = match def.style {
        Some(name) => Some(
            stylesheet
                .get(&name)
                .cloned()
                .ok_or(ModelError::UnknownStyle(name))?,
        ),
        None => None,
    };
    let children = def
        .children
        .into_iter()
        .map(|child| link_element(child, stylesheet))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DocumentElement {
        kind: def.kind,
        attributes: def.attributes,
        style,
        children,
    })
}
