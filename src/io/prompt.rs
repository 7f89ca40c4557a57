//! Interactive collection of generation parameters
//!
//! Questions are asked in a fixed order: dimensions (optionally reusing the
//! saved pair), pattern mode, cell size, border size. Answers that cannot be
//! used are re-asked rather than aborting the session.

use std::io::{BufRead, Write};

use log::warn;

use crate::io::configuration::REUSE_ANSWER;
use crate::io::error::{PatternError, Result, terminal_error};
use crate::io::settings::{DimensionStore, Dimensions};
use crate::pattern::{GenerationParameters, PatternMode};

/// Question-and-answer session over a line reader and a writer
pub struct Prompter<'s, R, W> {
    input: R,
    output: W,
    store: &'s dyn DimensionStore,
}

impl<'s, R: BufRead, W: Write> Prompter<'s, R, W> {
    /// Create a session reading answers from `input` and writing questions to `output`
    pub fn new(input: R, output: W, store: &'s dyn DimensionStore) -> Self {
        Self {
            input,
            output,
            store,
        }
    }

    /// Ask for every generation parameter
    ///
    /// The chosen dimensions are saved to the store before the remaining
    /// questions; store failures are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written, or input
    /// ends before all answers are given
    pub fn collect(&mut self) -> Result<GenerationParameters> {
        let dimensions = self.dimensions()?;
        if let Err(e) = self.store.save(dimensions) {
            warn!("Could not save dimensions for next time: {e}");
        }

        let mode = self.mode()?;
        let cell_size = self.positive(
            "cell size",
            "Enter the size of each colored cell in pixels: ",
        )?;
        let border_size = self.border_size(cell_size)?;

        Ok(GenerationParameters {
            width: dimensions.width,
            height: dimensions.height,
            cell_size,
            border_size,
            mode,
        })
    }

    fn dimensions(&mut self) -> Result<Dimensions> {
        match self.store.load() {
            Ok(Some(saved)) => {
                let answer = self.ask(
                    "reuse confirmation",
                    &format!(
                        "Use previous width and height (Width: {}px, Height: {}px)? (y/n): ",
                        saved.width, saved.height
                    ),
                )?;
                if answer.eq_ignore_ascii_case(REUSE_ANSWER) {
                    return Ok(saved);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Could not load previous dimensions: {e}"),
        }

        let width = self.positive("width", "Enter the width of the image in pixels: ")?;
        let height = self.positive("height", "Enter the height of the image in pixels: ")?;
        Ok(Dimensions { width, height })
    }

    fn mode(&mut self) -> Result<PatternMode> {
        let mut menu = String::from("Choose pattern type:\n");
        for mode in PatternMode::ALL {
            menu.push_str(&format!("  {mode}\n"));
        }
        menu.push_str("Enter your choice (a-i): ");

        loop {
            let answer = self.ask("pattern type", &menu)?;
            match answer.parse::<PatternMode>() {
                Ok(mode) => return Ok(mode),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    fn border_size(&mut self, cell_size: usize) -> Result<usize> {
        let prompt =
            format!("Enter the size of the black border between cells (0 to {cell_size}): ");
        loop {
            let answer = self.ask("border size", &prompt)?;
            match answer.parse::<usize>() {
                Ok(border) if border <= cell_size => return Ok(border),
                _ => self.say(&format!(
                    "Invalid border size. Please enter a value between 0 and {cell_size}."
                ))?,
            }
        }
    }

    fn positive(&mut self, name: &'static str, prompt: &str) -> Result<usize> {
        loop {
            let answer = self.ask(name, prompt)?;
            match answer.parse::<usize>() {
                Ok(value) if value > 0 => return Ok(value),
                _ => self.say(&format!("Invalid {name}. Please enter a positive whole number."))?,
            }
        }
    }

    fn ask(&mut self, name: &'static str, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").map_err(|e| terminal_error("write prompt", e))?;
        self.output
            .flush()
            .map_err(|e| terminal_error("flush prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| terminal_error("read answer", e))?;
        if read == 0 {
            return Err(PatternError::InputClosed { prompt: name });
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| terminal_error("write message", e))
    }
}
