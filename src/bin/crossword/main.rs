#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossword::image::CrosswordImageBuilder;
use crossword::puzzle::{Crossword, Solution, WordList};
use crossword::solve::{CrosswordSolver, SolveResult};
use log::debug;
use tempfile::NamedTempFile;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let crossword = Crossword::from_file(options.structure()).with_context(|| {
        format!(
            "failed to read structure from \"{}\"",
            options.structure().display()
        )
    })?;
    let words = WordList::from_file(options.words()).with_context(|| {
        format!(
            "failed to read words from \"{}\"",
            options.words().display()
        )
    })?;
    let mut solver = CrosswordSolver::new(&crossword, &words);
    solver.inference(options.inference());
    if let Some(timeout) = options.timeout() {
        solver.cancel_flag(start_timer(timeout));
    }
    match solver.solve() {
        SolveResult::Unsolvable => println!("No solution."),
        SolveResult::Cancelled => println!("Search cancelled."),
        SolveResult::Solved(data) => {
            debug!("{:?}", data.stats);
            print!("{}", data.solution.display(&crossword));
            if let Some(path) = options.output() {
                save_image(&crossword, &data.solution, path)
                    .with_context(|| format!("failed to save image to \"{}\"", path.display()))?;
                println!("Saved image to {}", path.display());
            }
        }
    }
    Ok(())
}

/// Returns a flag that is set once the timeout has passed
fn start_timer(timeout: Duration) -> Arc<AtomicBool> {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    thread::spawn(move || {
        thread::sleep(timeout);
        flag.store(true, Ordering::Relaxed);
    });
    cancel
}

/// Writes the image to a temporary file in the same directory, then moves it to `path`
fn save_image(crossword: &Crossword, solution: &Solution, path: &Path) -> Result<()> {
    let mut builder = CrosswordImageBuilder::new(crossword);
    builder.solution(solution);
    let image = builder.build();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    image.write_svg(file.as_file_mut())?;
    file.persist(path)?;
    Ok(())
}
