use crate::domain::{Template, TemplateSection};
use crate::FlowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl Template {
    /// Append a fresh placeholder section and return its id. Section ids
    /// stay unique within the template by counting up from the highest
    /// existing `section-N` suffix.
    pub fn add_section(&mut self) -> String {
        let id = self.next_section_id();
        self.sections.push(TemplateSection {
            id: id.clone(),
            title: "New Section".to_string(),
            content: "# New Section\n\nAdd your content here.".to_string(),
        });
        id
    }

    fn next_section_id(&self) -> String {
        let max = self
            .sections
            .iter()
            .filter_map(|s| s.id.strip_prefix("section-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("section-{}", max + 1)
    }

    /// Remove a section by id. A template must keep at least one section.
    pub fn delete_section(&mut self, id: &str) -> Result<(), FlowError> {
        if self.sections.len() <= 1 {
            return Err(FlowError::validation("Cannot delete the only section"));
        }
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        if self.sections.len() == before {
            return Err(FlowError::not_found("section", id));
        }
        Ok(())
    }

    pub fn rename_section(&mut self, id: &str, title: &str) -> Result<(), FlowError> {
        let section = self.section_mut(id)?;
        section.title = title.to_string();
        Ok(())
    }

    pub fn set_section_content(&mut self, id: &str, content: &str) -> Result<(), FlowError> {
        let section = self.section_mut(id)?;
        section.content = content.to_string();
        Ok(())
    }

    /// Move a section one slot up or down, clamped at the ends.
    pub fn move_section(&mut self, id: &str, direction: MoveDirection) -> Result<(), FlowError> {
        let index = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| FlowError::not_found("section", id))?;
        let target = match direction {
            MoveDirection::Up => index.saturating_sub(1),
            MoveDirection::Down => (index + 1).min(self.sections.len() - 1),
        };
        if target != index {
            self.sections.swap(index, target);
        }
        Ok(())
    }

    fn section_mut(&mut self, id: &str) -> Result<&mut TemplateSection, FlowError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| FlowError::not_found("section", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn template() -> Template {
        Template {
            id: "p1".to_string(),
            name: "Standard Proposal".to_string(),
            description: "A comprehensive proposal template".to_string(),
            last_modified: date!(2023 - 03 - 15),
            sections: vec![
                TemplateSection {
                    id: "intro".to_string(),
                    title: "Introduction".to_string(),
                    content: "# Introduction".to_string(),
                },
                TemplateSection {
                    id: "timeline".to_string(),
                    title: "Timeline".to_string(),
                    content: "# Timeline".to_string(),
                },
            ],
        }
    }

    #[test]
    fn added_section_ids_stay_unique() {
        let mut t = template();
        let a = t.add_section();
        let b = t.add_section();
        assert_ne!(a, b);
        assert_eq!(t.sections.len(), 4);
    }

    #[test]
    fn cannot_delete_the_only_section() {
        let mut t = template();
        t.delete_section("intro").unwrap();
        let err = t.delete_section("timeline").unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
        assert_eq!(t.sections.len(), 1);
    }

    #[test]
    fn move_clamps_at_the_ends() {
        let mut t = template();
        t.move_section("intro", MoveDirection::Up).unwrap();
        assert_eq!(t.sections[0].id, "intro");
        t.move_section("intro", MoveDirection::Down).unwrap();
        assert_eq!(t.sections[1].id, "intro");
        t.move_section("intro", MoveDirection::Down).unwrap();
        assert_eq!(t.sections[1].id, "intro");
    }

    #[test]
    fn rename_and_edit_target_by_id() {
        let mut t = template();
        t.rename_section("timeline", "Schedule").unwrap();
        t.set_section_content("timeline", "# Schedule").unwrap();
        let section = t.sections.iter().find(|s| s.id == "timeline").unwrap();
        assert_eq!(section.title, "Schedule");
        assert_eq!(section.content, "# Schedule");
        assert!(t.rename_section("missing", "x").is_err());
    }
}
