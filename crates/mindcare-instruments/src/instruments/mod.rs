pub mod gad7;
pub mod phq9;

use std::sync::LazyLock;

use crate::scoring::{AnswerOption, Question};

/// "Over the last 2 weeks, how often..." options shared by PHQ-9 and GAD-7.
pub fn frequency_options() -> &'static [AnswerOption] {
    static OPTIONS: LazyLock<Vec<AnswerOption>> = LazyLock::new(|| {
        [
            (0, "Not at all"),
            (1, "Several days"),
            (2, "More than half the days"),
            (3, "Nearly every day"),
        ]
        .iter()
        .map(|(value, label)| AnswerOption {
            value: *value,
            label: label.to_string(),
        })
        .collect()
    });
    &OPTIONS
}

pub(crate) fn questions(items: &[(&str, &str)]) -> Vec<Question> {
    items
        .iter()
        .map(|(id, text)| Question {
            id: id.to_string(),
            text: text.to_string(),
        })
        .collect()
}
