//! Splits a free-form instructions blob into numbered steps.
//!
//! Fragments of 10 characters or fewer are treated as noise and dropped, so a
//! genuinely short step such as "Serve hot." disappears. That is a known
//! limitation of the heuristic.

use crate::model::InstructionStep;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

const MIN_STEP_LEN: usize = 10;
const MAX_LINE_STEPS: usize = 20;
const MAX_SENTENCE_STEPS: usize = 15;

static STEP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)step\s*\d+\s*[-:]").expect("valid step marker regex"));
static NUMBERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.\s").expect("valid numbered marker regex"));
static DIRECTIONS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)directions:").expect("valid header regex"));
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid line break regex"));
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+[A-Z]").expect("valid sentence regex"));

/// Split raw instructions into step texts.
///
/// Returns an empty list when the input is absent or blank; callers wanting a
/// placeholder should use [`segment`].
pub fn split_instructions(raw: Option<&str>) -> Vec<String> {
    let raw = match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => raw,
        None => return Vec::new(),
    };

    let marked = STEP_MARKER.replace_all(raw, "\n");
    let marked = NUMBERED_MARKER.replace_all(&marked, "\n");
    let marked = DIRECTIONS_HEADER.replace_all(&marked, "\n");

    let mut steps: Vec<String> = LINE_BREAKS
        .split(&marked)
        .map(str::trim)
        .filter(|piece| is_usable(piece))
        .take(MAX_LINE_STEPS)
        .map(String::from)
        .collect();

    // The sentence split runs on the raw text, so markers survive in its output
    if steps.len() <= 1 {
        let sentences = split_sentences(raw);
        debug!(
            "Line split gave {} step(s), retrying by sentence: {}",
            steps.len(),
            sentences.len()
        );
        steps = sentences;
    }

    if steps.is_empty() {
        steps.push(raw.to_string());
    }

    steps
}

/// Segment raw instructions into numbered steps.
///
/// Absent or blank input yields a single placeholder step built from `title`,
/// so the result is never empty.
pub fn segment(raw: Option<&str>, title: &str) -> Vec<InstructionStep> {
    let mut steps = split_instructions(raw);
    if steps.is_empty() {
        steps.push(placeholder(title));
    }

    steps
        .into_iter()
        .enumerate()
        .map(|(index, instruction)| InstructionStep {
            step: index as u32 + 1,
            instruction,
            duration: 0,
        })
        .collect()
}

fn placeholder(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        "Follow the recipe to prepare this dish.".to_string()
    } else {
        format!("Follow the recipe to prepare {}.", title)
    }
}

fn is_usable(piece: &str) -> bool {
    piece.trim().chars().count() > MIN_STEP_LEN
}

/// Sentence split on ". X" where X is uppercase, keeping X with the next piece
fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        pieces.push(&text[start..boundary.start()]);
        // The uppercase letter is a single ASCII byte at the end of the match
        start = boundary.end() - 1;
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(|piece| {
            let piece = piece.trim();
            if piece.ends_with('.') {
                piece.to_string()
            } else {
                format!("{}.", piece)
            }
        })
        .filter(|piece| is_usable(piece))
        .take(MAX_SENTENCE_STEPS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_markers() {
        let raw = "STEP 1 - Heat the oil in a large pan. STEP 2 - Add the onions and fry until soft. step 3: Stir in the rice and stock.";
        let steps = segment(Some(raw), "Pilaf");

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[0].instruction, "Heat the oil in a large pan.");
        assert_eq!(steps[1].step, 2);
        assert_eq!(steps[1].instruction, "Add the onions and fry until soft.");
        assert_eq!(steps[2].step, 3);
        assert_eq!(steps[2].instruction, "Stir in the rice and stock.");
        assert!(steps.iter().all(|s| s.duration == 0));
    }

    #[test]
    fn test_crlf_paragraphs() {
        let raw = "Preheat oven to 180C.\r\n\r\nMix the flour and butter together.\r\n\r\nBake for 25 minutes until golden.";
        let steps = split_instructions(Some(raw));
        assert_eq!(
            steps,
            vec![
                "Preheat oven to 180C.",
                "Mix the flour and butter together.",
                "Bake for 25 minutes until golden.",
            ]
        );
    }

    #[test]
    fn test_numbered_lines_and_directions_header() {
        let raw = "DIRECTIONS:\n1. Boil the pasta in salted water.\n2. Drain and toss with the sauce.";
        let steps = split_instructions(Some(raw));
        assert_eq!(
            steps,
            vec![
                "Boil the pasta in salted water.",
                "Drain and toss with the sauce."
            ]
        );
    }

    #[test]
    fn test_short_fragments_dropped() {
        let raw = "STEP 1\nServe hot.\nSimmer the sauce for twenty minutes.\nEnjoy!\nGarnish with fresh coriander leaves.";
        let steps = split_instructions(Some(raw));
        assert_eq!(
            steps,
            vec![
                "Simmer the sauce for twenty minutes.",
                "Garnish with fresh coriander leaves."
            ]
        );
    }

    #[test]
    fn test_sentence_fallback() {
        let raw = "Whisk the eggs with sugar. Fold in the sifted flour gently. Pour into the tin and bake";
        let steps = split_instructions(Some(raw));
        assert_eq!(
            steps,
            vec![
                "Whisk the eggs with sugar.",
                "Fold in the sifted flour gently.",
                "Pour into the tin and bake.",
            ]
        );
    }

    #[test]
    fn test_sentence_split_ignores_lowercase_continuation() {
        let raw = "Cook at 180C for approx. ten minutes until done";
        let steps = split_instructions(Some(raw));
        assert_eq!(steps, vec!["Cook at 180C for approx. ten minutes until done."]);
    }

    #[test]
    fn test_single_line_marker_retries_on_raw_text() {
        assert_eq!(
            split_instructions(Some("STEP 1 - Mix the flour and the sugar")),
            vec!["STEP 1 - Mix the flour and the sugar."]
        );
        assert_eq!(
            split_instructions(Some("DIRECTIONS: Whisk the eggs with the milk")),
            vec!["DIRECTIONS: Whisk the eggs with the milk."]
        );
    }

    #[test]
    fn test_last_sentence_keeps_single_period() {
        let raw = "Whisk the eggs with sugar. Fold in the sifted flour gently.";
        let steps = split_instructions(Some(raw));
        assert_eq!(
            steps,
            vec!["Whisk the eggs with sugar.", "Fold in the sifted flour gently."]
        );
        assert!(steps.iter().all(|s| !s.ends_with("..")));
    }

    #[test]
    fn test_line_cap() {
        let raw = (1..=25)
            .map(|i| format!("Instruction line number {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let steps = split_instructions(Some(&raw));
        assert_eq!(steps.len(), 20);
        assert_eq!(steps[19], "Instruction line number 20");
    }

    #[test]
    fn test_sentence_cap() {
        let raw = (1..=18)
            .map(|i| format!("Repeat stirring round {}", i))
            .collect::<Vec<_>>()
            .join(". ");
        let steps = split_instructions(Some(&raw));
        assert_eq!(steps.len(), 15);
        assert_eq!(steps[0], "Repeat stirring round 1.");
    }

    #[test]
    fn test_all_noise_falls_back_to_full_text() {
        let steps = split_instructions(Some("  Mix well. "));
        assert_eq!(steps, vec!["Mix well."]);
    }

    #[test]
    fn test_missing_instructions_placeholder() {
        for raw in [None, Some(""), Some(" \r\n ")] {
            let steps = segment(raw, "Beef Wellington");
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].step, 1);
            assert_eq!(
                steps[0].instruction,
                "Follow the recipe to prepare Beef Wellington."
            );
        }
    }

    #[test]
    fn test_steps_are_contiguous() {
        let raw = "Chop all the vegetables finely.\nFry the garlic in olive oil.\nAdd tomatoes and simmer gently.\nSeason and serve with bread.";
        let steps = segment(Some(raw), "Stew");
        let numbers: Vec<u32> = steps.iter().map(|s| s.step).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }
}
