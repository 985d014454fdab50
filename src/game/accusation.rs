//! Accusation evaluator.
//!
//! Scoring walks the collected clues in order, resolves each one through the
//! clue table and counts those pointing at the accused. Names are compared
//! exactly; a name nobody is linked to simply scores zero.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::data_structures::clue_registry::ClueRegistry;
use crate::data_structures::clue_table::ClueTable;
use crate::error::MysteryResult;
use crate::game::console::{read_line, LineRead};

/// Number of corroborating clues an accusation needs to stand.
pub const SUPPORTING_CLUES_REQUIRED: usize = 2;

/// Counts the collected clues that point to `accused`.
///
/// Clues without an entry in `table` are skipped.
pub fn score(registry: &ClueRegistry, table: &ClueTable, accused: &str) -> usize {
    registry
        .iter()
        .filter_map(|clue| table.lookup(clue))
        .filter(|suspect| *suspect == accused)
        .count()
}

/// Pairs every collected clue, in order, with the suspect it points to.
pub fn clue_summary<'a>(
    registry: &'a ClueRegistry,
    table: &'a ClueTable,
) -> Vec<(&'a str, Option<&'a str>)> {
    registry
        .iter()
        .map(|clue| (clue, table.lookup(clue)))
        .collect()
}

/// Whether an accusation is backed by enough clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// At least [`SUPPORTING_CLUES_REQUIRED`] clues point to the accused
    Supported,
    /// Fewer clues than required
    Weak,
}

impl Verdict {
    /// Applies the fixed game rule to a score.
    pub fn from_score(score: usize) -> Self {
        if score >= SUPPORTING_CLUES_REQUIRED {
            Self::Supported
        } else {
            Self::Weak
        }
    }
}

/// A scored accusation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accusation {
    /// The name the player accused
    pub accused: String,

    /// Number of collected clues pointing to the accused
    pub score: usize,

    /// The verdict for that score
    pub verdict: Verdict,
}

impl Accusation {
    /// Scores an accusation against the collected clues.
    pub fn evaluate<S: Into<String>>(registry: &ClueRegistry, table: &ClueTable, accused: S) -> Self {
        let accused = accused.into();
        let score = score(registry, table, &accused);
        Self {
            verdict: Verdict::from_score(score),
            accused,
            score,
        }
    }
}

impl fmt::Display for Accusation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.score == 1 { "clue points" } else { "clues point" };
        writeln!(f, "{} {} to {}.", self.score, noun, self.accused)?;
        match self.verdict {
            Verdict::Supported => write!(
                f,
                "Accusation supported: the evidence points to {}!",
                self.accused
            ),
            Verdict::Weak => write!(
                f,
                "Weak accusation: not enough evidence against {}.",
                self.accused
            ),
        }
    }
}

/// Prints the case notes, asks for a name and scores the accusation.
///
/// Returns `None` when no line could be read, either because input closed or
/// because the line is not valid UTF-8. Any line that was read is trimmed and
/// scored, even a blank one or one that names no known suspect.
pub fn accuse<R, W>(
    registry: &ClueRegistry,
    table: &ClueTable,
    list_suspects: bool,
    input: &mut R,
    output: &mut W,
) -> MysteryResult<Option<Accusation>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(output, "\nCase notes:")?;
    let summary = clue_summary(registry, table);
    if summary.is_empty() {
        writeln!(output, "  (nothing to go on)")?;
    }
    for (clue, suspect) in summary {
        match suspect {
            Some(suspect) => writeln!(output, "  - {clue} -> {suspect}")?,
            None => writeln!(output, "  - {clue} -> (no suspect linked)")?,
        }
    }

    if list_suspects {
        writeln!(output, "Suspects: {}", table.suspects().join(", "))?;
    }
    write!(output, "Who do you accuse? ")?;
    output.flush()?;

    let accused = match read_line(input)? {
        LineRead::Line(line) => line.trim().to_string(),
        LineRead::Unreadable | LineRead::Closed => {
            warn!("no accusation read");
            writeln!(output, "\nNo valid name was given. No accusation made.")?;
            return Ok(None);
        }
    };

    let accusation = Accusation::evaluate(registry, table, accused);
    info!(
        accused = %accusation.accused,
        score = accusation.score,
        verdict = ?accusation.verdict,
        "accusation scored"
    );
    writeln!(output, "{accusation}")?;

    Ok(Some(accusation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::clue_table::ClueTableConfig;
    use crate::game::case_file::{reference_clue_table, ROOM_CLUES};
    use std::io::Cursor;
    use test_case::test_case;

    fn all_reference_clues() -> ClueRegistry {
        ROOM_CLUES.iter().map(|(_, clue)| *clue).collect()
    }

    #[test_case("Sr. Green", 2; "green")]
    #[test_case("Srta. Scarlet", 2; "scarlet")]
    #[test_case("Mrs. Peacock", 2; "peacock")]
    #[test_case("Mr. Black", 2; "black")]
    #[test_case("Nonexistent Suspect", 0; "unknown")]
    #[test_case("mr. black", 0; "case sensitive")]
    #[test_case("", 0; "empty name")]
    fn test_score_with_all_clues(accused: &str, expected: usize) {
        let registry = all_reference_clues();
        let table = reference_clue_table(ClueTableConfig::default()).unwrap();

        assert_eq!(score(&registry, &table, accused), expected);
    }

    #[test]
    fn test_clues_without_suspect_are_skipped() {
        let registry: ClueRegistry = ["orphan clue", "mancha de tinta fresca"].into_iter().collect();
        let table = reference_clue_table(ClueTableConfig::default()).unwrap();

        assert_eq!(score(&registry, &table, "Mr. Black"), 1);
        assert_eq!(
            clue_summary(&registry, &table),
            vec![
                ("mancha de tinta fresca", Some("Mr. Black")),
                ("orphan clue", None),
            ]
        );
    }

    #[test_case(0, Verdict::Weak)]
    #[test_case(1, Verdict::Weak)]
    #[test_case(2, Verdict::Supported)]
    #[test_case(5, Verdict::Supported)]
    fn test_verdict_threshold(score: usize, expected: Verdict) {
        assert_eq!(Verdict::from_score(score), expected);
    }

    #[test]
    fn test_evaluate_and_display() {
        let registry = all_reference_clues();
        let table = reference_clue_table(ClueTableConfig::default()).unwrap();

        let accusation = Accusation::evaluate(&registry, &table, "Mr. Black");
        assert_eq!(accusation.score, 2);
        assert_eq!(accusation.verdict, Verdict::Supported);
        assert_eq!(
            accusation.to_string(),
            "2 clues point to Mr. Black.\nAccusation supported: the evidence points to Mr. Black!"
        );
    }

    #[test]
    fn test_accuse_trims_name() {
        let registry = all_reference_clues();
        let table = reference_clue_table(ClueTableConfig::default()).unwrap();
        let mut input = Cursor::new("  Sr. Green \n");
        let mut output = Vec::new();

        let accusation = accuse(&registry, &table, true, &mut input, &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(accusation.accused, "Sr. Green");
        assert_eq!(accusation.verdict, Verdict::Supported);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Suspects: Mr. Black, Mrs. Peacock, Sr. Green, Srta. Scarlet"));
    }

    #[test]
    fn test_accuse_scores_blank_line() {
        let registry = all_reference_clues();
        let table = reference_clue_table(ClueTableConfig::default()).unwrap();
        let mut input = Cursor::new("   \n");
        let mut output = Vec::new();

        let accusation = accuse(&registry, &table, false, &mut input, &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(accusation.accused, "");
        assert_eq!(accusation.score, 0);
        assert_eq!(accusation.verdict, Verdict::Weak);
        let transcript = String::from_utf8(output).unwrap();
        assert!(!transcript.contains("No accusation made."));
    }

    #[test_case(b""; "closed input")]
    #[test_case(b"\xff\xfe\n"; "invalid utf8")]
    fn test_accuse_without_name(raw: &[u8]) {
        let registry = ClueRegistry::new();
        let table = ClueTable::new();
        let mut input = Cursor::new(raw.to_vec());
        let mut output = Vec::new();

        let accusation = accuse(&registry, &table, false, &mut input, &mut output).unwrap();

        assert!(accusation.is_none());
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("No accusation made."));
        assert!(!transcript.contains("Suspects:"));
    }
}
