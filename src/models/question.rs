use std::fmt;

use serde::{Deserialize, Serialize};

/// 后端分配的题目 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        QuestionId(value.to_string())
    }
}

/// 题型（封闭集合，未知值在反序列化时报错）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    Text,
    Number,
    Date,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::MultipleChoice,
        QuestionType::Text,
        QuestionType::Number,
        QuestionType::Date,
    ];

    /// 接口中使用的值
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Text => "text",
            QuestionType::Number => "number",
            QuestionType::Date => "date",
        }
    }

    /// 表单中显示的名称
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::Text => "Text",
            QuestionType::Number => "Number",
            QuestionType::Date => "Date",
        }
    }

    /// 按接口值查找题型
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已保存的题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "QuestionRecord")]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub required: bool,
}

/// 后端返回的原始记录
///
/// 文档数据库的后端使用 `_id`，开启 virtuals 时 `_id` 和 `id` 会同时出现。
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    #[serde(default)]
    id: Option<QuestionId>,
    #[serde(default, rename = "_id")]
    underscore_id: Option<QuestionId>,
    question_text: String,
    question_type: QuestionType,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    required: bool,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = String;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.underscore_id)
            .ok_or_else(|| "missing field `id` (or `_id`)".to_string())?;
        Ok(Self {
            id,
            question_text: record.question_text,
            question_type: record.question_type,
            options: record.options,
            category: record.category,
            required: record.required,
        })
    }
}

impl Question {
    /// 由草稿和 ID 组装题目
    pub fn from_draft(id: QuestionId, draft: QuestionDraft) -> Self {
        Self {
            id,
            question_text: draft.question_text,
            question_type: draft.question_type,
            options: draft.options,
            category: draft.category,
            required: draft.required,
        }
    }

    /// 去掉 ID 后的字段
    pub fn to_draft(&self) -> QuestionDraft {
        QuestionDraft {
            question_text: self.question_text.clone(),
            question_type: self.question_type,
            options: self.options.clone(),
            category: self.category.clone(),
            required: self.required,
        }
    }
}

/// 表单草稿：与 `Question` 相同，但没有 ID
///
/// `Default` 即空草稿。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub category: String,
    pub required: bool,
}

impl QuestionDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 表单中单个字段的修改
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    QuestionText(String),
    QuestionType(QuestionType),
    Options(Vec<String>),
    Category(String),
    Required(bool),
}

impl DraftField {
    /// 只修改对应的一个字段
    pub fn apply_to(self, draft: &mut QuestionDraft) {
        match self {
            DraftField::QuestionText(v) => draft.question_text = v,
            DraftField::QuestionType(v) => draft.question_type = v,
            DraftField::Options(v) => draft.options = v,
            DraftField::Category(v) => draft.category = v,
            DraftField::Required(v) => draft.required = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_json_shape() {
        let question = Question {
            id: "q1".into(),
            question_text: "Favorite color?".to_string(),
            question_type: QuestionType::MultipleChoice,
            options: vec!["Red".to_string(), "Blue".to_string()],
            category: "preferences".to_string(),
            required: true,
        };

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "q1",
                "questionText": "Favorite color?",
                "questionType": "multiple_choice",
                "options": ["Red", "Blue"],
                "category": "preferences",
                "required": true
            })
        );
    }

    #[test]
    fn test_question_accepts_underscore_id() {
        let question: Question = serde_json::from_value(json!({
            "_id": "65f0c1",
            "questionText": "Age?",
            "questionType": "number",
            "options": [],
            "category": "",
            "required": false
        }))
        .unwrap();

        assert_eq!(question.id, QuestionId("65f0c1".to_string()));
        assert_eq!(question.question_type, QuestionType::Number);
    }

    #[test]
    fn test_question_accepts_both_id_fields() {
        // 开启 virtuals 的文档数据库会同时返回 `_id` 和 `id`
        let question: Question = serde_json::from_value(json!({
            "_id": "65f0c1",
            "id": "65f0c1",
            "questionText": "Age?",
            "questionType": "number",
            "options": [],
            "category": "",
            "required": false
        }))
        .unwrap();
        assert_eq!(question.id, QuestionId("65f0c1".to_string()));

        // 一条这样的记录不能让整个列表解析失败
        let list: Vec<Question> = serde_json::from_value(json!([
            {"id": "q1", "questionText": "A", "questionType": "text"},
            {"_id": "q2", "id": "q2", "questionText": "B", "questionType": "date"},
            {"_id": "q3", "questionText": "C", "questionType": "number"}
        ]))
        .unwrap();
        let ids: Vec<&str> = list.iter().map(|q| q.id.0.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn test_question_without_any_id_is_rejected() {
        let result: Result<Question, _> = serde_json::from_value(json!({
            "questionText": "Orphan",
            "questionType": "text"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("`_id`"));
    }

    #[test]
    fn test_unknown_question_type_is_rejected() {
        let result: Result<Question, _> = serde_json::from_value(json!({
            "id": "q1",
            "questionText": "Pick",
            "questionType": "slider"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let value = serde_json::to_value(QuestionDraft::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "questionText": "",
                "questionType": "multiple_choice",
                "options": [],
                "category": "",
                "required": false
            })
        );
    }

    #[test]
    fn test_field_change_touches_one_field() {
        let mut draft = QuestionDraft {
            question_text: "When?".to_string(),
            category: "dates".to_string(),
            ..Default::default()
        };
        let before = draft.clone();

        DraftField::QuestionType(QuestionType::Date).apply_to(&mut draft);

        assert_eq!(draft.question_type, QuestionType::Date);
        assert_eq!(draft.question_text, before.question_text);
        assert_eq!(draft.category, before.category);
        assert_eq!(draft.options, before.options);
        assert_eq!(draft.required, before.required);
    }

    #[test]
    fn test_options_preserved_for_non_choice_types() {
        let question = Question::from_draft(
            "q9".into(),
            QuestionDraft {
                question_text: "Comments".to_string(),
                question_type: QuestionType::Text,
                options: vec!["legacy".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(question.to_draft().options, vec!["legacy".to_string()]);
    }

    #[test]
    fn test_question_type_lookup() {
        assert_eq!(QuestionType::from_value("date"), Some(QuestionType::Date));
        assert_eq!(QuestionType::from_value("Date"), None);
        assert_eq!(QuestionType::MultipleChoice.label(), "Multiple Choice");
    }
}
