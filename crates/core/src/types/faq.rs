//! Frequently asked questions.

use serde::{Deserialize, Serialize};

use super::FaqId;

/// A question/answer pair shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    /// Display position; lower comes first.
    #[serde(default)]
    pub order: i32,
}

impl Faq {
    /// Sort FAQs for display: by `order`, then by `id`.
    #[must_use]
    pub fn ordered(mut faqs: Vec<Self>) -> Vec<Self> {
        faqs.sort_by_key(|faq| (faq.order, faq.id));
        faqs
    }
}

/// Body of `POST /admin/faqs` and `PUT /admin/faqs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub order: i32,
}

impl From<&Faq> for FaqInput {
    fn from(faq: &Faq) -> Self {
        Self {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            order: faq.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: i32, order: i32) -> Faq {
        Faq {
            id: FaqId::new(id),
            question: format!("q{id}"),
            answer: format!("a{id}"),
            order,
        }
    }

    #[test]
    fn test_ordered_by_order_then_id() {
        let sorted = Faq::ordered(vec![faq(3, 1), faq(1, 2), faq(2, 1), faq(4, 0)]);
        let ids: Vec<i32> = sorted.iter().map(|f| f.id.as_i32()).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }
}
