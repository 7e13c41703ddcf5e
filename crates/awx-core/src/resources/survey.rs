//! Survey documents attached to job templates.
//!
//! A survey is always read and written whole: the server has no endpoint
//! for a single question, so any edit means posting the full document again.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// The complete survey of a job template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Questions in prompt order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: Vec<SurveyQuestion>,

    /// Top-level keys not modelled here, sent back on replacement.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Survey {
    /// Returns true if the document has no questions.
    ///
    /// A template without a survey answers with an empty document.
    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }

    /// Look up a question by the variable it sets.
    pub fn question(&self, variable: &str) -> Option<&SurveyQuestion> {
        self.spec.iter().find(|q| q.variable == variable)
    }
}

/// One prompted input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub question_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub question_description: String,

    /// Extra variable the answer is stored in.
    pub variable: String,

    /// `text`, `textarea`, `password`, `integer`, `float`,
    /// `multiplechoice` or `multiselect`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default: Value,

    /// Newline-separated string or list, depending on server version.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub choices: Value,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_decodes() {
        let survey: Survey = serde_json::from_value(json!({})).unwrap();
        assert!(survey.is_empty());
    }

    #[test]
    fn unknown_top_level_keys_survive_round_trip() {
        let survey: Survey = serde_json::from_value(json!({
            "name": null,
            "description": "Release",
            "spec": null,
            "locale": "en"
        }))
        .unwrap();

        assert_eq!(survey.name, "");
        assert!(survey.is_empty());

        let encoded = serde_json::to_value(&survey).unwrap();
        assert_eq!(encoded["locale"], "en");
        assert_eq!(encoded["description"], "Release");
    }

    #[test]
    fn question_lookup_and_encoding() {
        let survey: Survey = serde_json::from_value(json!({
            "name": "",
            "description": "",
            "spec": [{
                "question_name": "Environment",
                "variable": "env",
                "type": "multiplechoice",
                "required": true,
                "choices": ["dev", "prod"],
                "default": "dev"
            }]
        }))
        .unwrap();

        let question = survey.question("env").unwrap();
        assert_eq!(question.kind, "multiplechoice");
        assert!(question.required);

        let encoded = serde_json::to_value(&survey).unwrap();
        assert_eq!(encoded["spec"][0]["type"], "multiplechoice");
        assert!(encoded["spec"][0].get("min").is_none());
    }
}
