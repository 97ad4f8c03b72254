use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crossword::puzzle::error::{FromFileError, ParseErrorType};
use crossword::puzzle::{Crossword, WordList};
use crossword::solve::{CrosswordSolver, SolveResult};

#[test]
fn test_crosswords() -> Result<()> {
    test_crossword_dir(project_path("res/test/solvable"), true)?;
    test_crossword_dir(project_path("res/test/unsolvable"), false)?;
    Ok(())
}

fn test_crossword_dir(path: impl AsRef<Path>, solvable: bool) -> Result<()> {
    let mut dirs: Vec<_> = fs::read_dir(path)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<_, _>>()?;
    dirs.sort_unstable();
    assert!(!dirs.is_empty());
    for dir in dirs {
        println!("Solving {}", dir.display());
        let crossword = Crossword::from_file(dir.join("structure.txt"))?;
        let words = WordList::from_file(dir.join("words.txt"))?;
        for &inference in &[true, false] {
            let result = CrosswordSolver::new(&crossword, &words)
                .inference(inference)
                .solve();
            match result {
                SolveResult::Solved(data) => {
                    assert!(solvable, "Solved {}", dir.display());
                    assert!(
                        crossword.verify_solution(&data.solution),
                        "Invalid solution for {}",
                        dir.display()
                    );
                }
                SolveResult::Unsolvable => assert!(!solvable, "Could not solve {}", dir.display()),
                SolveResult::Cancelled => panic!("Search cancelled for {}", dir.display()),
            }
        }
    }
    Ok(())
}

#[test]
fn ladder_has_one_solution() -> Result<()> {
    let dir = project_path("res/test/solvable/ladder");
    let crossword = Crossword::from_file(dir.join("structure.txt"))?;
    let words = WordList::from_file(dir.join("words.txt"))?;
    let solution = crossword::solve::solve(&crossword, &words).expect("no solution");
    assert_eq!(
        vec!["crane", "cat", "aha", "eat", "toast"],
        solution.words().collect::<Vec<_>>()
    );
    assert_eq!(
        "crane\na█h█a\ntoast\n",
        solution.display(&crossword).to_string()
    );
    Ok(())
}

#[test]
fn invalid_structures() {
    let cases = [
        ("res/test/invalid/ragged.txt", ParseErrorType::RaggedRow),
        ("res/test/invalid/cell.txt", ParseErrorType::InvalidCell),
    ];
    for &(path, error_type) in &cases {
        match Crossword::from_file(project_path(path)) {
            Err(FromFileError::Parse(error)) => assert_eq!(error_type, error.error_type()),
            other => panic!("expected a parse error for {}, got {:?}", path, other.err()),
        }
    }
}

#[test]
fn missing_file() {
    let result = WordList::from_file(project_path("res/test/missing.txt"));
    assert!(matches!(result, Err(FromFileError::Io(_))));
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
