//! Interactive prompt session.
//!
//! Asks for a season and a plant type on stdin, then prints the combined
//! advice. Ctrl+C or end-of-input at either prompt cancels the session;
//! cancellation is a normal exit, not an error.

use eyre::Result;
use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::advice;

/// Prompt shown before reading the season.
const SEASON_PROMPT: &str = "Season (summer/winter/spring/autumn): ";

/// Prompt shown before reading the plant type.
const PLANT_PROMPT: &str = "Plant type (flower/vegetable/succulent): ";

/// Notice printed when input collection is cancelled.
const CANCELLED: &str = "Input cancelled.";

/// Run the interactive session: two prompts, one advice printout.
pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

    let Some(season) = ask(&mut rl, SEASON_PROMPT)? else {
        println!("{}", CANCELLED);
        return Ok(());
    };
    let Some(plant_type) = ask(&mut rl, PLANT_PROMPT)? else {
        println!("{}", CANCELLED);
        return Ok(());
    };

    println!("{}", advice::resolve(&season, &plant_type));
    Ok(())
}

/// Read one line, mapping Ctrl+C and end-of-input to `None`.
fn ask(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) => {
            // Ctrl+C - cancel the session
            debug!("ask: interrupted");
            Ok(None)
        }
        Err(ReadlineError::Eof) => {
            // Ctrl+D / closed stdin - cancel the session
            debug!("ask: end of input");
            Ok(None)
        }
        Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
    }
}
