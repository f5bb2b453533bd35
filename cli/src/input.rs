use std::io::{self, BufRead};

use anyhow::Context;
use console::Term;
use subscout_common::Domain;

const PROMPT: &str = "Enter the domain (e.g. example.com): ";

/// Asks for the root domain on standard input.
pub fn prompt_domain() -> anyhow::Result<Domain> {
    Term::stdout()
        .write_str(PROMPT)
        .context("writing domain prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading domain from standard input")?;

    parse_domain(&line)
}

fn parse_domain(line: &str) -> anyhow::Result<Domain> {
    line.parse::<Domain>()
        .with_context(|| format!("invalid domain {:?}", line.trim()))
}
