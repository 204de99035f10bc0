//! Filter sidebar layout: section order and expanded/collapsed panels.

use serde::{Deserialize, Serialize};

use paintshop_core::{DomainError, DomainResult};

use crate::facet::Facet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub facet: Facet,
    pub expanded: bool,
}

/// Ordered facet sections, each one collapsible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLayout {
    sections: Vec<SidebarSection>,
}

impl Default for SidebarLayout {
    fn default() -> Self {
        Self {
            sections: Facet::ALL
                .into_iter()
                .map(|facet| SidebarSection { facet, expanded: true })
                .collect(),
        }
    }
}

impl SidebarLayout {
    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    pub fn order(&self) -> Vec<Facet> {
        self.sections.iter().map(|s| s.facet).collect()
    }

    pub fn position(&self, facet: Facet) -> Option<usize> {
        self.sections.iter().position(|s| s.facet == facet)
    }

    pub fn is_expanded(&self, facet: Facet) -> bool {
        self.sections.iter().any(|s| s.facet == facet && s.expanded)
    }

    fn section_mut(&mut self, facet: Facet) -> Option<&mut SidebarSection> {
        self.sections.iter_mut().find(|s| s.facet == facet)
    }

    /// Flip a section open/closed; returns the new state.
    pub fn toggle_section(&mut self, facet: Facet) -> bool {
        match self.section_mut(facet) {
            Some(section) => {
                section.expanded = !section.expanded;
                section.expanded
            }
            None => false,
        }
    }

    pub fn set_expanded(&mut self, facet: Facet, expanded: bool) {
        if let Some(section) = self.section_mut(facet) {
            section.expanded = expanded;
        }
    }

    pub fn expand_all(&mut self) {
        self.sections.iter_mut().for_each(|s| s.expanded = true);
    }

    pub fn collapse_all(&mut self) {
        self.sections.iter_mut().for_each(|s| s.expanded = false);
    }

    /// Drag a section from index `from` to index `to`.
    pub fn move_section(&mut self, from: usize, to: usize) -> DomainResult<()> {
        let len = self.sections.len();
        if from >= len || to >= len {
            return Err(DomainError::invalid_argument(format!(
                "sidebar move {from} -> {to} out of range (sections: {len})"
            )));
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_lists_every_facet_expanded() {
        let layout = SidebarLayout::default();
        assert_eq!(layout.order(), Facet::ALL.to_vec());
        assert!(Facet::ALL.iter().all(|f| layout.is_expanded(*f)));
    }

    #[test]
    fn toggle_collapses_then_expands() {
        let mut layout = SidebarLayout::default();
        assert!(!layout.toggle_section(Facet::Color));
        assert!(!layout.is_expanded(Facet::Color));
        assert!(layout.is_expanded(Facet::Finish));
        assert!(layout.toggle_section(Facet::Color));
    }

    #[test]
    fn collapse_and_expand_all() {
        let mut layout = SidebarLayout::default();
        layout.collapse_all();
        assert!(Facet::ALL.iter().all(|f| !layout.is_expanded(*f)));
        layout.set_expanded(Facet::Price, true);
        assert!(layout.is_expanded(Facet::Price));
        layout.expand_all();
        assert!(Facet::ALL.iter().all(|f| layout.is_expanded(*f)));
    }

    #[test]
    fn move_section_reorders() {
        let mut layout = SidebarLayout::default();
        layout.move_section(4, 0).unwrap();
        assert_eq!(
            layout.order(),
            vec![Facet::Price, Facet::ProductType, Facet::Area, Facet::Finish, Facet::Color]
        );
        layout.move_section(0, 4).unwrap();
        assert_eq!(layout.order(), Facet::ALL.to_vec());
        assert_eq!(layout.position(Facet::Color), Some(3));
    }

    #[test]
    fn moved_section_keeps_its_expanded_state() {
        let mut layout = SidebarLayout::default();
        layout.toggle_section(Facet::Area);
        layout.move_section(1, 3).unwrap();
        assert_eq!(layout.sections()[3].facet, Facet::Area);
        assert!(!layout.sections()[3].expanded);
    }

    #[test]
    fn out_of_range_move_is_invalid_argument() {
        let mut layout = SidebarLayout::default();
        let err = layout.move_section(0, 5).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(layout, SidebarLayout::default());
    }
}
