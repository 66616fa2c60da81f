use crate::de::{lenient_bool, lenient_i64, lenient_list, lenient_string, lenient_strings};
use crate::style::{Alignment, CssValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonProps {
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    pub background_color: String,
    pub text_color: String,
    pub align: Alignment,
    pub border_radius: CssValue,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Haz clic aquí".to_string(),
            url: "#".to_string(),
            background_color: "#007bff".to_string(),
            text_color: "#ffffff".to_string(),
            align: Alignment::Center,
            border_radius: CssValue::Number(6.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizProps {
    #[serde(deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub options: Vec<String>,
    /// Absent means the first option; `null` or a negative index means none
    #[serde(deserialize_with = "lenient_i64")]
    pub correct_answer: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub explanation: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub show_answer: Option<bool>,
}

impl QuizProps {
    /// Index of the correct option, if it points at an existing option
    pub fn correct_answer(&self) -> Option<usize> {
        self.correct_answer
            .and_then(|index| usize::try_from(index).ok())
            .filter(|index| *index < self.options.len())
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer.unwrap_or(true)
    }
}

impl Default for QuizProps {
    fn default() -> Self {
        Self {
            question: "¿Cuál es la respuesta correcta?".to_string(),
            options: vec![
                "Opción A".to_string(),
                "Opción B".to_string(),
                "Opción C".to_string(),
            ],
            correct_answer: Some(0),
            explanation: String::new(),
            show_answer: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionItem {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
}

/// Collapsible sections; mail clients get every section expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionProps {
    #[serde(deserialize_with = "lenient_list")]
    pub items: Vec<AccordionItem>,
    pub header_color: String,
}

impl Default for AccordionProps {
    fn default() -> Self {
        Self {
            items: vec![AccordionItem {
                title: "Sección 1".to_string(),
                content: "Contenido de la sección".to_string(),
            }],
            header_color: "#f5f5f5".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answer_out_of_range_is_none() {
        let props: QuizProps =
            serde_json::from_str(r#"{"options": ["a", "b"], "correctAnswer": 5}"#).unwrap();
        assert_eq!(props.correct_answer(), None);

        let props: QuizProps =
            serde_json::from_str(r#"{"options": ["a", "b"], "correctAnswer": "1"}"#).unwrap();
        assert_eq!(props.correct_answer(), Some(1));
    }

    #[test]
    fn test_missing_answer_means_first_option() {
        let props: QuizProps = serde_json::from_str(r#"{"options": ["a", "b"]}"#).unwrap();
        assert_eq!(props.correct_answer(), Some(0));
    }

    #[test]
    fn test_negative_or_null_answer_means_none() {
        let props: QuizProps =
            serde_json::from_str(r#"{"options": ["a", "b"], "correctAnswer": -1}"#).unwrap();
        assert_eq!(props.correct_answer(), None);

        let props: QuizProps =
            serde_json::from_str(r#"{"options": ["a", "b"], "correctAnswer": null}"#).unwrap();
        assert_eq!(props.correct_answer(), None);
    }

    #[test]
    fn test_button_defaults() {
        let props: ButtonProps = serde_json::from_str(r#"{"text": "Leer más"}"#).unwrap();
        assert_eq!(props.text, "Leer más");
        assert_eq!(props.url, "#");
        assert_eq!(props.background_color, "#007bff");
    }
}
