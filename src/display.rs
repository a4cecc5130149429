//! What the solution panel shows for each [`SolveResult`].

use crate::solve::SolveResult;

pub const IDLE_HINT: &str = "Draw an expression, then press Solve.";
pub const PENDING_HINT: &str = "Solving…";

/// One visual block of the solution panel, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Hint(String),
    Loading(String),
    /// The expression the solver recognized.
    Expression(String),
    Label(String),
    /// The answer, already split on line breaks.
    Answer(Vec<String>),
    Note(String),
}

/// Map the current result to the blocks to render.
pub fn present(result: &SolveResult) -> Vec<DisplayBlock> {
    match result {
        SolveResult::Idle => vec![DisplayBlock::Hint(IDLE_HINT.to_owned())],
        SolveResult::Pending => vec![DisplayBlock::Loading(PENDING_HINT.to_owned())],
        SolveResult::Success(answer) => {
            let mut blocks = Vec::new();
            if let Some(expression) = non_empty(answer.expression.as_deref()) {
                blocks.push(DisplayBlock::Expression(expression.to_owned()));
            }
            blocks.push(DisplayBlock::Label(answer.label.clone()));
            blocks.push(DisplayBlock::Answer(split_lines(&answer.answer)));
            if let Some(note) = non_empty(answer.note.as_deref()) {
                blocks.push(DisplayBlock::Note(note.to_owned()));
            }
            blocks
        }
        SolveResult::Error(failure) => {
            let mut blocks = vec![
                DisplayBlock::Label(failure.label.clone()),
                DisplayBlock::Answer(split_lines(&failure.answer)),
            ];
            if let Some(note) = non_empty(failure.note.as_deref()) {
                blocks.push(DisplayBlock::Note(note.to_owned()));
            }
            blocks
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::{SolveAnswer, SolveFailure};

    #[test]
    fn test_idle_and_pending() {
        assert_eq!(present(&SolveResult::Idle), vec![DisplayBlock::Hint(IDLE_HINT.to_owned())]);
        assert!(matches!(
            present(&SolveResult::Pending).as_slice(),
            [DisplayBlock::Loading(_)]
        ));
    }

    #[test]
    fn test_success_splits_answer_lines() {
        let result = SolveResult::Success(SolveAnswer {
            label: "Equation solved".to_owned(),
            expression: Some("x ^ 2 = 4".to_owned()),
            answer: "x  =  -2,  2\ny: no solution".to_owned(),
            note: None,
        });
        assert_eq!(
            present(&result),
            vec![
                DisplayBlock::Expression("x ^ 2 = 4".to_owned()),
                DisplayBlock::Label("Equation solved".to_owned()),
                DisplayBlock::Answer(vec!["x  =  -2,  2".to_owned(), "y: no solution".to_owned()]),
            ]
        );
    }

    #[test]
    fn test_blank_optionals_are_hidden() {
        let result = SolveResult::Success(SolveAnswer {
            label: "Result".to_owned(),
            expression: Some("  ".to_owned()),
            answer: "1".to_owned(),
            note: Some(String::new()),
        });
        assert_eq!(present(&result).len(), 2);
    }

    #[test]
    fn test_error_shows_note() {
        let result = SolveResult::Error(SolveFailure {
            label: "Connection error".to_owned(),
            answer: "Could not reach the solver.".to_owned(),
            note: Some("request failed: connection refused".to_owned()),
        });
        assert_eq!(
            present(&result).last(),
            Some(&DisplayBlock::Note("request failed: connection refused".to_owned()))
        );
    }
}
