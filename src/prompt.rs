use std::io::{BufRead, Write};

use owo_colors::OwoColorize;

use crate::catalog;
use crate::reporter::cli::severity_colored;
use crate::session::FormSession;

/// Run the interactive form: collect answers, then render the submit
/// affordance and submit when the gate allows it.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut FormSession,
) -> Result<(), String> {
    collect_answers(input, out, session)?;

    if session.can_submit() {
        writeln!(out, "\n  {}", "Checking...".dimmed()).map_err(io_err)?;
        out.flush().map_err(io_err)?;
        session.submit();
    } else {
        writeln!(out, "\n  [{}]", session.submit_label()).map_err(io_err)?;
    }
    Ok(())
}

/// One pass over the catalog. A number picks an option, an empty line
/// skips the symptom, end of input skips everything remaining.
pub fn collect_answers<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut FormSession,
) -> Result<(), String> {
    for symptom in catalog::catalog() {
        writeln!(out, "\n  {}", symptom.prompt.bold()).map_err(io_err)?;
        for (i, severity) in symptom.options.iter().enumerate() {
            writeln!(out, "    {}. {}", i + 1, severity_colored(*severity)).map_err(io_err)?;
        }
        loop {
            write!(out, "  > ").map_err(io_err)?;
            out.flush().map_err(io_err)?;
            let mut line = String::new();
            if input.read_line(&mut line).map_err(io_err)? == 0 {
                return Ok(());
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                break;
            }
            match trimmed.parse::<usize>() {
                Ok(n) if (1..=symptom.options.len()).contains(&n) => {
                    session.set_answer(symptom.id, symptom.options[n - 1]);
                    break;
                }
                _ => {
                    writeln!(
                        out,
                        "  Enter a number between 1 and {}, or leave empty to skip.",
                        symptom.options.len()
                    )
                    .map_err(io_err)?;
                }
            }
        }
    }
    Ok(())
}

fn io_err(e: std::io::Error) -> String {
    format!("Terminal I/O failed: {e}")
}
