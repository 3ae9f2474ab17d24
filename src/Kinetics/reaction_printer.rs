//! Printouts for reaction mechanisms: a numbered table of reaction equations
//! and a scored sub-mechanism report of the kind produced by pathway-search
//! exercises. Output goes to stdout as `prettytable` tables; mechanism lists
//! can also be dumped as a JSON document.

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// One candidate sub-mechanism: the indices of its reactions in the parent
/// mechanism, the reaction equations themselves, the substances they touch and
/// the score assigned by the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMechanism {
    pub reaction_ids: Vec<usize>,
    pub reactions: Vec<String>,
    pub substances: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MechanismPrintMode {
    /// every sub-mechanism, in storage order
    #[default]
    All,
    /// only the sub-mechanisms sharing the maximum score
    Top,
}

/// Numbered table of reaction equations, one `r<i>` row per reaction.
pub fn reactions_table(reactions: &[String]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("id"), Cell::new("reaction")]));
    for (i, reaction) in reactions.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&format!("r{}", i)),
            Cell::new(reaction),
        ]));
    }
    table
}

/// Prints the reaction table and the reaction count to stdout.
pub fn print_reactions(reactions: &[String]) {
    reactions_table(reactions).printstd();
    println!("n_reactions = {}", reactions.len());
}

/// Picks which sub-mechanisms a report should show. `mode` and
/// `print_n_sub_mech` are mutually exclusive: either a mode (all of them, or
/// only the top-scored ones) or an explicit head count, not both. With neither
/// argument everything is selected.
pub fn select_sub_mechanisms(
    mechs: &[ScoredMechanism],
    mode: Option<MechanismPrintMode>,
    print_n_sub_mech: Option<usize>,
) -> Result<Vec<usize>, String> {
    if mode.is_some() && print_n_sub_mech.is_some() {
        return Err(
            "mode and print_n_sub_mech are mutually exclusive; give at most one".to_string(),
        );
    }
    if let Some(n) = print_n_sub_mech {
        return Ok((0..mechs.len().min(n)).collect());
    }
    match mode.unwrap_or_default() {
        MechanismPrintMode::All => Ok((0..mechs.len()).collect()),
        MechanismPrintMode::Top => {
            let max_score = mechs
                .iter()
                .map(|m| m.score)
                .fold(f64::NEG_INFINITY, f64::max);
            Ok(mechs
                .iter()
                .enumerate()
                .filter(|(_, m)| m.score == max_score)
                .map(|(i, _)| i)
                .collect())
        }
    }
}

/// Prints the selected sub-mechanisms, one table per mechanism with a
/// `Reaction Sub Mechanism: <index> (score <s>)` header line.
pub fn print_reaction_sub_mechanisms(
    mechs: &[ScoredMechanism],
    mode: Option<MechanismPrintMode>,
    print_n_sub_mech: Option<usize>,
) -> Result<(), String> {
    let selected = select_sub_mechanisms(mechs, mode, print_n_sub_mech)?;
    for idx in selected {
        let mech = &mechs[idx];
        println!("Reaction Sub Mechanism: {} (score {:.2})", idx, mech.score);
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("id"), Cell::new("reaction")]));
        for (id, reaction) in mech.reaction_ids.iter().zip(mech.reactions.iter()) {
            table.add_row(Row::new(vec![
                Cell::new(&format!("r{}", id)),
                Cell::new(reaction),
            ]));
        }
        table.printstd();
        println!("substances: {:?}", mech.substances);
    }
    Ok(())
}

/// Writes the mechanism list to `file_name` as a pretty-printed JSON document.
pub fn save_mechanisms_json(
    mechs: &[ScoredMechanism],
    file_name: &str,
) -> Result<(), std::io::Error> {
    let mut file = File::create(file_name)?;
    file.write_all(serde_json::to_string_pretty(&mechs)?.as_bytes())?;
    println!("Sub mechanisms have been written to {}", file_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_mechanisms() -> Vec<ScoredMechanism> {
        vec![
            ScoredMechanism {
                reaction_ids: vec![0, 2],
                reactions: vec!["A + B <=> C".to_string(), "C -> D".to_string()],
                substances: vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
                score: 0.5,
            },
            ScoredMechanism {
                reaction_ids: vec![1],
                reactions: vec!["2 A -> E".to_string()],
                substances: vec!["A".to_string(), "E".to_string()],
                score: 0.9,
            },
            ScoredMechanism {
                reaction_ids: vec![0, 1],
                reactions: vec!["A + B <=> C".to_string(), "2 A -> E".to_string()],
                substances: vec!["A".to_string(), "B".to_string(), "C".to_string(), "E".to_string()],
                score: 0.9,
            },
        ]
    }

    #[test]
    fn test_reactions_table_rows() {
        let reactions = vec![
            "NO2 + NO2 => NO3 + NO".to_string(),
            "NO3 + NO2 => NO + NO2 + O2".to_string(),
        ];
        let table = reactions_table(&reactions);
        assert_eq!(table.len(), 3);
        let row = table.get_row(1).unwrap();
        assert_eq!(row.get_cell(0).unwrap().get_content(), "r0");
        assert_eq!(row.get_cell(1).unwrap().get_content(), "NO2 + NO2 => NO3 + NO");
        print_reactions(&reactions);
    }

    #[test]
    fn test_select_defaults_to_all() {
        let mechs = sample_mechanisms();
        let selected = select_sub_mechanisms(&mechs, None, None).unwrap();
        assert_eq!(selected, vec![0, 1, 2]);
    }

    #[test]
    fn test_select_top_scored() {
        let mechs = sample_mechanisms();
        let selected =
            select_sub_mechanisms(&mechs, Some(MechanismPrintMode::Top), None).unwrap();
        assert_eq!(selected, vec![1, 2]);
    }

    #[test]
    fn test_select_head_count() {
        let mechs = sample_mechanisms();
        let selected = select_sub_mechanisms(&mechs, None, Some(2)).unwrap();
        assert_eq!(selected, vec![0, 1]);
        // asking for more than exists is not an error
        let selected = select_sub_mechanisms(&mechs, None, Some(10)).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_mode_and_count_conflict() {
        let mechs = sample_mechanisms();
        let res = select_sub_mechanisms(&mechs, Some(MechanismPrintMode::All), Some(1));
        assert!(res.is_err());
        assert!(res.unwrap_err().contains("mutually exclusive"));
    }

    #[test]
    fn test_print_sub_mechanisms_smoke() {
        let mechs = sample_mechanisms();
        print_reaction_sub_mechanisms(&mechs, Some(MechanismPrintMode::Top), None).unwrap();
    }

    #[test]
    fn test_save_mechanisms_json() {
        let mechs = sample_mechanisms();
        let temp_file = NamedTempFile::new().unwrap();
        let file_path = temp_file.path().to_str().unwrap();
        save_mechanisms_json(&mechs, file_path).unwrap();
        let content = std::fs::read_to_string(file_path).unwrap();
        assert!(content.contains("reaction_ids"));
        let back: Vec<ScoredMechanism> = serde_json::from_str(&content).unwrap();
        assert_eq!(back, mechs);
    }
}
