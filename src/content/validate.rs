use crate::content::{ContentTree, Page, Section, FLAT_SECTION};
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a stored override was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Corruption {
    #[error("content root is not an object")]
    RootNotObject,

    #[error("page {page} is not an object")]
    PageNotObject { page: String },

    /// A string that was serialized as `{"0": "a", "1": "b", ...}`
    #[error("{path} is a character-indexed object")]
    CharacterIndexed { path: String },

    #[error("{path} is a nested object where text was expected")]
    NestedObject { path: String },

    #[error("{path} is an array where text was expected")]
    ArrayLeaf { path: String },

    #[error("{path} is not text")]
    NonStringLeaf { path: String },
}

/// Check the shape of a decoded content blob and convert it to a tree.
///
/// Every leaf must be a string. A page member that is a string is a flat
/// field and lands in [`FLAT_SECTION`]; a page member that is an object is
/// a section whose members must all be strings.
pub fn parse_tree(value: &Value) -> Result<ContentTree, Corruption> {
    let root = value.as_object().ok_or(Corruption::RootNotObject)?;

    root.iter()
        .map(|(name, page)| {
            let members = page.as_object().ok_or_else(|| Corruption::PageNotObject {
                page: name.clone(),
            })?;
            parse_page(name, members).map(|p| (name.clone(), p))
        })
        .collect()
}

fn parse_page(page: &str, members: &Map<String, Value>) -> Result<Page, Corruption> {
    let mut sections = Page::new();

    for (key, member) in members {
        let path = format!("{page}.{key}");

        match member {
            Value::String(text) => {
                sections
                    .entry(FLAT_SECTION.to_string())
                    .or_default()
                    .insert(key.clone(), text.clone());
            }
            Value::Object(fields) => {
                let section = parse_section(&path, fields)?;
                sections
                    .entry(key.clone())
                    .or_default()
                    .extend(section);
            }
            other => return Err(leaf_error(path, other)),
        }
    }

    Ok(sections)
}

fn parse_section(prefix: &str, fields: &Map<String, Value>) -> Result<Section, Corruption> {
    fields
        .iter()
        .map(|(field, leaf)| match leaf {
            Value::String(text) => Ok((field.clone(), text.clone())),
            other => Err(leaf_error(format!("{prefix}.{field}"), other)),
        })
        .collect()
}

fn leaf_error(path: String, leaf: &Value) -> Corruption {
    match leaf {
        Value::Object(map) if is_character_indexed(map) => Corruption::CharacterIndexed { path },
        Value::Object(_) => Corruption::NestedObject { path },
        Value::Array(_) => Corruption::ArrayLeaf { path },
        _ => Corruption::NonStringLeaf { path },
    }
}

fn is_character_indexed(map: &Map<String, Value>) -> bool {
    !map.is_empty()
        && map
            .keys()
            .all(|k| !k.is_empty() && k.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_sections_and_flat_pages() {
        let tree = parse_tree(&json!({
            "home": { "hero": { "title": "Hello", "subtitle": "World" } },
            "service-sales": { "title": "Sales", "description": "We sell" }
        }))
        .unwrap();

        assert_eq!(tree.get("home", "hero", "subtitle"), Some("World"));
        assert_eq!(tree.get("service-sales", FLAT_SECTION, "title"), Some("Sales"));
        assert_eq!(tree.field_count(), 4);
    }

    #[test]
    fn empty_object_is_an_empty_tree() {
        assert!(parse_tree(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn rejects_character_indexed_field() {
        let err = parse_tree(&json!({
            "home": { "hero": { "title": { "0": "H", "1": "i" } } }
        }))
        .unwrap_err();

        assert_eq!(
            err,
            Corruption::CharacterIndexed {
                path: "home.hero.title".to_string()
            }
        );
    }

    #[test]
    fn section_with_numeric_field_names_is_accepted() {
        let tree = parse_tree(&json!({
            "home": { "steps": { "1": "Browse", "2": "Visit", "3": "Buy" } }
        }))
        .unwrap();

        assert_eq!(tree.get("home", "steps", "2"), Some("Visit"));
    }

    #[test]
    fn rejects_nested_object_leaf() {
        let err = parse_tree(&json!({
            "home": { "hero": { "title": { "text": "Hi" } } }
        }))
        .unwrap_err();

        assert!(matches!(err, Corruption::NestedObject { path } if path == "home.hero.title"));
    }

    #[test]
    fn rejects_arrays_and_other_primitives() {
        assert!(matches!(
            parse_tree(&json!({ "home": { "hero": { "title": ["a"] } } })),
            Err(Corruption::ArrayLeaf { .. })
        ));
        assert!(matches!(
            parse_tree(&json!({ "home": { "hero": { "count": 3 } } })),
            Err(Corruption::NonStringLeaf { .. })
        ));
        assert!(matches!(
            parse_tree(&json!({ "home": { "title": null } })),
            Err(Corruption::NonStringLeaf { .. })
        ));
    }

    #[test]
    fn rejects_wrong_outer_shapes() {
        assert_eq!(parse_tree(&json!("text")), Err(Corruption::RootNotObject));
        assert_eq!(
            parse_tree(&json!({ "home": "oops" })),
            Err(Corruption::PageNotObject {
                page: "home".to_string()
            })
        );
    }
}
