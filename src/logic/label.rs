use serde::Serialize;

use crate::models::labels::Label as RawLabel;
use crate::utils::constants::{NO_DESCRIPTION, NO_TITLE};
use crate::utils::or_placeholder;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Label {
    raw: RawLabel,
}

impl From<RawLabel> for Label {
    fn from(raw: RawLabel) -> Self {
        Self { raw }
    }
}

impl Label {
    pub fn raw(&self) -> &RawLabel {
        &self.raw
    }

    pub fn id(&self) -> u64 {
        self.raw.id
    }

    pub fn name(&self) -> &str {
        or_placeholder(self.raw.name.as_deref(), NO_TITLE)
    }

    pub fn description(&self) -> &str {
        or_placeholder(self.raw.description.as_deref(), NO_DESCRIPTION)
    }

    pub fn priority(&self) -> Option<i64> {
        self.raw.priority
    }

    pub fn is_project_label(&self) -> bool {
        self.raw.is_project_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_read_back_with_placeholders() {
        let raw: RawLabel = serde_json::from_value(json!({
            "id": 88,
            "name": "",
            "description": null,
            "priority": null,
            "is_project_label": true
        }))
        .unwrap();
        let label = Label::from(raw);

        assert_eq!(label.id(), 88);
        assert_eq!(label.name(), "(no title)");
        assert_eq!(label.description(), "(no description)");
        assert_eq!(label.priority(), None);
        assert!(label.is_project_label());
    }
}
