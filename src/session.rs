//! A single interactive run: read a relation row by row, compute its closure, and report
//! both relations.
//!
//! The size of the universe is the length of the first row. All remaining rows are parsed
//! against this size, regardless of their own length (see [`crate::row_parser`]). A premature
//! end of input is treated as a sequence of empty rows.

use crate::closure::{ClosureConfig, ClosureMethod};
use crate::error::RelationError;
use crate::log_matrix;
use crate::matrix::{DEFAULT_MAX_UNIVERSE_SIZE, RelationMatrix};
use crate::render::{render_pairs, render_rows};
use crate::row_parser::{parse_row, universe_size};
use log::{debug, info};
use std::io::{BufRead, Write};

/// A configuration object for a [`Session`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// The largest accepted universe (default: [`DEFAULT_MAX_UNIVERSE_SIZE`]). A longer
    /// first row is rejected with [`RelationError::InvalidSize`].
    pub max_universe_size: usize,
    /// The algorithm used to compute the closure (default: Warshall).
    pub method: ClosureMethod,
    /// The name of the relation in the set output (default: `R`). The closure is
    /// named by appending `*`.
    pub relation_name: String,
    /// Write a short introduction and a prompt before each row (default: false).
    pub prompt: bool,
    /// Cancel the closure computation after this many iterations (default: `usize::MAX`).
    /// See [`ClosureConfig::max_iterations`].
    pub max_iterations: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_universe_size: DEFAULT_MAX_UNIVERSE_SIZE,
            method: ClosureMethod::default(),
            relation_name: "R".to_string(),
            prompt: false,
            max_iterations: usize::MAX,
        }
    }
}

/// Both relations produced by a successful [`Session::run`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SessionReport {
    pub relation: RelationMatrix,
    pub closure: RelationMatrix,
}

pub struct Session<R: BufRead, W: Write> {
    config: SessionConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, input: R, output: W) -> Session<R, W> {
        Session {
            config,
            input,
            output,
        }
    }

    /// Read the relation, compute its closure and write the report to the output.
    pub fn run(&mut self) -> Result<SessionReport, RelationError> {
        let relation = self.read_relation()?;
        let config = ClosureConfig::new(relation.clone())
            .with_max_iterations(self.config.max_iterations);
        let closure = self.config.method.run_with_config(config)?;
        self.write_report(&relation, &closure)?;
        self.output.flush()?;
        Ok(SessionReport { relation, closure })
    }

    /// Read all rows of the relation from the input.
    pub fn read_relation(&mut self) -> Result<RelationMatrix, RelationError> {
        if self.config.prompt {
            writeln!(
                self.output,
                "Enter the relation matrix one row at a time. The length of the first row\n\
                 decides the size: entering 1010 as the first row creates a 4 x 4 matrix.\n"
            )?;
        }

        let first = self.read_row(0)?;
        let size = universe_size(&first);
        let mut relation = RelationMatrix::with_max_size(size, self.config.max_universe_size)?;
        info!("Reading a relation over {size} elements.");

        relation.set_row(0, &parse_row(&first, size));
        for i in 1..size {
            let line = self.read_row(i)?;
            relation.set_row(i, &parse_row(&line, size));
        }

        debug!("Relation complete ({}).", log_matrix(&relation));
        Ok(relation)
    }

    /// Write both matrices and, for small enough universes, both pair sets.
    pub fn write_report(
        &mut self,
        relation: &RelationMatrix,
        closure: &RelationMatrix,
    ) -> Result<(), RelationError> {
        let size = relation.size();
        let name = &self.config.relation_name;
        let closure_name = format!("{name}*");
        let output = &mut self.output;

        writeln!(output, "\nCreated a {size} x {size} matrix.")?;
        writeln!(output, "\nMatrix of the relation {name}:\n")?;
        write_relation(output, name, relation)?;
        writeln!(output, "\nMatrix of its transitive closure {closure_name}:\n")?;
        write_relation(output, &closure_name, closure)?;
        Ok(())
    }

    /// Read one line, including its terminator. Returns an empty string at the end of input.
    ///
    /// Bytes that are not valid UTF-8 become replacement characters, so they count towards
    /// the row length but never relate two elements.
    fn read_row(&mut self, index: usize) -> Result<String, RelationError> {
        if self.config.prompt {
            write!(self.output, "Enter row {}: ", index + 1)?;
            self.output.flush()?;
        }

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("Input ended before row {}.", index + 1);
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

fn write_relation<W: Write>(
    output: &mut W,
    name: &str,
    matrix: &RelationMatrix,
) -> Result<(), RelationError> {
    for line in render_rows(matrix) {
        writeln!(output, "{line}")?;
    }
    if let Some(pairs) = render_pairs(name, matrix) {
        writeln!(output, "\n{pairs}")?;
    } else {
        debug!("Skipping pair set of `{name}` (too many elements to label).");
    }
    Ok(())
}
