//! Static snippet catalogs: Liquid variables, Liquid blocks, template
//! elements, and email components. The editor inserts these verbatim at
//! the caret; the data is configuration the core consumes, never produces.

use serde::Serialize;

mod blocks;
mod components;
mod elements;
mod variables;

/// A single `{{ … }}` output tag with its documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiquidVariable {
    pub name: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// A multi-line `{% … %}` block (conditional section, loop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiquidBlock {
    pub id: &'static str,
    pub title: &'static str,
    pub code: &'static str,
}

/// A larger canned template section (header, order summary, footer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateElement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// A small structural building block (button, divider, columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmailComponent {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub html: &'static str,
}

pub fn liquid_variables() -> &'static [LiquidVariable] {
    variables::VARIABLES
}

pub fn liquid_blocks() -> &'static [LiquidBlock] {
    blocks::BLOCKS
}

pub fn template_elements() -> &'static [TemplateElement] {
    elements::ELEMENTS
}

pub fn email_components() -> &'static [EmailComponent] {
    components::COMPONENTS
}

pub fn find_block(id: &str) -> Option<&'static LiquidBlock> {
    blocks::BLOCKS.iter().find(|b| b.id == id)
}

pub fn find_element(id: &str) -> Option<&'static TemplateElement> {
    elements::ELEMENTS.iter().find(|e| e.id == id)
}

pub fn find_component(id: &str) -> Option<&'static EmailComponent> {
    components::COMPONENTS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::tags;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let block_ids: HashSet<_> = liquid_blocks().iter().map(|b| b.id).collect();
        assert_eq!(block_ids.len(), liquid_blocks().len());

        let element_ids: HashSet<_> = template_elements().iter().map(|e| e.id).collect();
        assert_eq!(element_ids.len(), template_elements().len());

        let component_ids: HashSet<_> = email_components().iter().map(|c| c.id).collect();
        assert_eq!(component_ids.len(), email_components().len());
    }

    #[test]
    fn test_variable_codes_are_output_tags() {
        for variable in liquid_variables() {
            assert!(
                variable.code.starts_with("{{") && variable.code.ends_with("}}"),
                "{} is not an output tag",
                variable.name
            );
        }
    }

    #[test]
    fn test_block_codes_are_balanced() {
        for block in liquid_blocks() {
            let opens = block.code.matches("{%").count();
            let closes = block.code.matches("%}").count();
            assert_eq!(opens, closes, "unbalanced control tags in {}", block.id);
        }
    }

    #[test]
    fn test_snippet_tags_survive_protection_round_trip() {
        // Every catalog entry must pass through the rich-text mirror intact
        for variable in liquid_variables() {
            assert_eq!(tags::unprotect(&tags::protect(variable.code)), variable.code);
        }
        for block in liquid_blocks() {
            assert_eq!(tags::unprotect(&tags::protect(block.code)), block.code);
        }
        for element in template_elements() {
            assert_eq!(tags::unprotect(&tags::protect(element.code)), element.code);
        }
    }

    #[test]
    fn test_find_by_id() {
        assert!(find_block("order-discounts").is_some());
        assert!(find_element("header").is_some());
        assert!(find_component("button").is_some());
        assert!(find_block("no-such-block").is_none());
    }
}
