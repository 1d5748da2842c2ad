use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Proposal,
    Contract,
}

impl TemplateKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Proposal => "Proposals",
            Self::Contract => "Contracts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// A document template (proposal or contract) made of ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub last_modified: Date,
    pub sections: Vec<TemplateSection>,
}
