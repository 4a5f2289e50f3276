use crate::db::Question;

/// Keeps the questions whose text contains `term`, ignoring case.
pub fn search(term: &str, corpus: impl IntoIterator<Item = Question>) -> Vec<Question> {
    let needle = term.to_lowercase();
    corpus
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id,
            question: text.to_owned(),
            answer: "answer".to_owned(),
            category: 1,
            difficulty: 1,
        }
    }

    fn corpus() -> Vec<Question> {
        vec![
            question(5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"),
            question(6, "What was the TITLE of the 1990 fantasy directed by Tim Burton?"),
            question(12, "Who invented Peanut Butter?"),
        ]
    }

    #[test]
    fn matches_ignore_case() {
        // "entitled" contains the term as well
        let found = search("title", corpus());
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![5, 6]);

        let found = search("tim burton", corpus());
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![6]);
    }

    #[test]
    fn keeps_corpus_order() {
        let found = search("WHO", corpus());
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![5, 12]);
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(search("", corpus()), corpus());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search("asdf", corpus()).is_empty());
    }
}
