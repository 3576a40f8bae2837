//! Form-based prompt composer
//!
//! Six optional fields, joined in declaration order with a full-width comma.
//! The subject reads as-is; every other field carries its fixed label.

use crate::utils::error::{AppError, AppResult};

pub const FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Subject,
    Composition,
    Action,
    Location,
    Style,
    Editing,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Subject,
        Field::Composition,
        Field::Action,
        Field::Location,
        Field::Style,
        Field::Editing,
    ];

    /// Label prefixed to the field value in the composed prompt. The subject
    /// is the lead of the sentence and carries none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Field::Subject => None,
            Field::Composition => Some("構圖"),
            Field::Action => Some("動作"),
            Field::Location => Some("地點"),
            Field::Style => Some("風格"),
            Field::Editing => Some("編輯指令"),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Subject => "主題",
            Field::Composition => "構圖",
            Field::Action => "動作",
            Field::Location => "地點",
            Field::Style => "風格",
            Field::Editing => "編輯指令",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorForm {
    pub subject: String,
    pub composition: String,
    pub action: String,
    pub location: String,
    pub style: String,
    pub editing: String,
}

impl GeneratorForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Subject => &self.subject,
            Field::Composition => &self.composition,
            Field::Action => &self.action,
            Field::Location => &self.location,
            Field::Style => &self.style,
            Field::Editing => &self.editing,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Subject => &mut self.subject,
            Field::Composition => &mut self.composition,
            Field::Action => &mut self.action,
            Field::Location => &mut self.location,
            Field::Style => &mut self.style,
            Field::Editing => &mut self.editing,
        }
    }

    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).trim().is_empty())
    }

    /// Compose the prompt from the non-blank fields in declaration order.
    pub fn compose(&self) -> AppResult<String> {
        if self.is_blank() {
            return Err(AppError::Validation("請至少填寫一個欄位".to_string()));
        }

        let mut parts = Vec::new();
        for field in Field::ALL {
            let value = self.field(field).trim();
            if value.is_empty() {
                continue;
            }
            match field.label() {
                Some(label) => parts.push(format!("{}：{}", label, value)),
                None => parts.push(value.to_string()),
            }
        }

        Ok(parts.join("，"))
    }
}
