//! Interactive text menu.
//!
//! The loop reads answers line by line from any [`BufRead`] and writes the
//! transcript to any [`Write`], so the binary drives it with the terminal
//! and tests drive it with in-memory buffers. Rejected input is reported and
//! the menu shown again; history write failures end the loop.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use crate::catalogue::{Culture, Gender};
use crate::error::{InputError, MenuError};
use crate::generator::EmailGenerator;
use crate::history::HistoryStore;
use crate::validation::validate_count;

const MENU: &str = concat!(
    "\n",
    "Advanced Email Generator\n",
    "1. Generate Emails\n",
    "2. View History\n",
    "3. Search Emails by Prefix\n",
    "4. Exit\n",
);
const OPTION_PROMPT: &str = "Choose an option (1-4): ";
const COUNT_PROMPT: &str = "How many emails to generate? (1-50): ";
const PREFIX_PROMPT: &str = "Enter email prefix to search: ";

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
}

/// One interactive session over a generator and its history.
pub struct Menu<'a, R, W> {
    generator: &'a mut EmailGenerator,
    store: &'a mut HistoryStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Binds a session to its generator, history, and terminal streams.
    #[must_use]
    pub const fn new(
        generator: &'a mut EmailGenerator,
        store: &'a mut HistoryStore,
        input: R,
        output: W,
    ) -> Self {
        Self {
            generator,
            store,
            input,
            output,
        }
    }

    /// Runs until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Terminal`] when reading or writing the streams
    /// fails and [`MenuError::History`] when generated records cannot be
    /// persisted.
    pub fn run(mut self) -> Result<(), MenuError> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(choice) = self.prompt(OPTION_PROMPT)? else {
                return Ok(());
            };
            let step = match choice.as_str() {
                "1" => self.generate()?,
                "2" => self.view_history()?,
                "3" => self.search()?,
                "4" => {
                    writeln!(self.output, "Exiting...")?;
                    Step::Stop
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Step::Continue
                }
            };
            if step == Step::Stop {
                return Ok(());
            }
        }
    }

    fn generate(&mut self) -> Result<Step, MenuError> {
        let count = match self.ask(COUNT_PROMPT, validate_count)? {
            ControlFlow::Continue(count) => count,
            ControlFlow::Break(step) => return Ok(step),
        };
        let (gender, culture) = match self.ask_choices()? {
            ControlFlow::Continue(choices) => choices,
            ControlFlow::Break(step) => return Ok(step),
        };

        let records = self
            .generator
            .generate_multiple(self.store, count, gender, culture)?;
        writeln!(self.output, "\nGenerated Emails:")?;
        for record in &records {
            writeln!(self.output, "{}", record.summary_line())?;
        }
        Ok(Step::Continue)
    }

    fn view_history(&mut self) -> Result<Step, MenuError> {
        if self.store.is_empty() {
            writeln!(self.output, "No history available.")?;
            return Ok(Step::Continue);
        }
        writeln!(self.output, "\nEmail Generation History:")?;
        for line in self.store.display_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(Step::Continue)
    }

    fn search(&mut self) -> Result<Step, MenuError> {
        let Some(prefix) = self.prompt(PREFIX_PROMPT)? else {
            return Ok(Step::Stop);
        };
        let (gender, culture) = match self.ask_choices()? {
            ControlFlow::Continue(choices) => choices,
            ControlFlow::Break(step) => return Ok(step),
        };

        let matches = self.store.search(&prefix, gender, culture);
        if matches.is_empty() {
            writeln!(self.output, "No emails found with that prefix.")?;
            return Ok(Step::Continue);
        }
        writeln!(self.output, "\nMatching Emails:")?;
        for email in matches {
            writeln!(self.output, "{email}")?;
        }
        Ok(Step::Continue)
    }

    fn ask_choices(&mut self) -> Result<ControlFlow<Step, (Gender, Culture)>, MenuError> {
        let gender_prompt = format!("Choose gender ({}): ", Gender::KEYS.join("/"));
        let gender = match self.ask(&gender_prompt, str::parse::<Gender>)? {
            ControlFlow::Continue(gender) => gender,
            ControlFlow::Break(step) => return Ok(ControlFlow::Break(step)),
        };
        let culture_prompt = format!("Choose culture ({}): ", Culture::KEYS.join(", "));
        let culture = match self.ask(&culture_prompt, str::parse::<Culture>)? {
            ControlFlow::Continue(culture) => culture,
            ControlFlow::Break(step) => return Ok(ControlFlow::Break(step)),
        };
        Ok(ControlFlow::Continue((gender, culture)))
    }

    /// Prompts and validates one answer.
    ///
    /// Breaks with [`Step::Continue`] after reporting rejected input, and
    /// with [`Step::Stop`] when input has ended.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl FnOnce(&str) -> Result<T, InputError>,
    ) -> Result<ControlFlow<Step, T>, MenuError> {
        let Some(answer) = self.prompt(prompt)? else {
            return Ok(ControlFlow::Break(Step::Stop));
        };
        match parse(&answer) {
            Ok(value) => Ok(ControlFlow::Continue(value)),
            Err(err) => {
                writeln!(self.output, "{err}")?;
                Ok(ControlFlow::Break(Step::Continue))
            }
        }
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, MenuError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
