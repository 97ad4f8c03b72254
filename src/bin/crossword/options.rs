use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;

#[derive(Clone, Debug)]
pub(crate) struct Options {
    structure: PathBuf,
    words: PathBuf,
    output: Option<PathBuf>,
    inference: bool,
    timeout: Option<Duration>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let timeout = match matches.value_of("timeout") {
            Some(s) => {
                let seconds = s
                    .parse::<f64>()
                    .with_context(|| format!("invalid timeout \"{}\"", s))?;
                if !seconds.is_finite() || seconds < 0. {
                    bail!("timeout must be a non-negative number of seconds");
                }
                Some(Duration::from_secs_f64(seconds))
            }
            None => None,
        };
        Ok(Self {
            structure: matches.value_of("structure").unwrap_or_default().into(),
            words: matches.value_of("words").unwrap_or_default().into(),
            output: matches.value_of("output").map(PathBuf::from),
            inference: !matches.is_present("no_inference"),
            timeout,
        })
    }

    pub fn structure(&self) -> &Path {
        &self.structure
    }

    pub fn words(&self) -> &Path {
        &self.words
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn inference(&self) -> bool {
        self.inference
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("Crossword")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Fill a crossword grid with words from a word list")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("structure")
                .required(true)
                .value_name("STRUCTURE")
                .help("file with the crossword grid, '_' for open cells and '#' for blocked cells"),
        )
        .arg(
            Arg::with_name("words")
                .required(true)
                .value_name("WORDS")
                .help("file with one candidate word per line"),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT")
                .help("save an SVG image of the filled crossword"),
        )
        .arg(
            Arg::with_name("no_inference")
                .long("no-inference")
                .help("do not maintain arc consistency during backtracking search"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SECONDS")
                .help("stop searching after the given number of seconds"),
        )
}
