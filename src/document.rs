use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{Error, Result},
    tokenizer::{Token, Tokenizer},
};

/// Tokens of a text file, one entry per source line. Lines without any
/// surviving token are kept as empty entries so line numbers stay aligned.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Document {
    lines: Vec<Vec<Token>>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io("open text file", path, e))?;

        let document = Self::from_reader(BufReader::new(file))
            .map_err(|e| Error::io("read text file", path, e))?;
        log::debug!(
            "Tokenized {} words on {} lines from {}",
            document.token_count(),
            document.line_count(),
            path.display()
        );

        Ok(document)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let tokenizer = Tokenizer::new();

        let lines = reader
            .split(b'\n')
            .map(|line| line.map(|line| tokenizer.tokenize(line)))
            .collect::<std::io::Result<Vec<_>>>()?;

        Ok(Self { lines })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn token_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Iterates `(line_number, tokens)` with 1-based line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &[Token])> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, tokens)| (i + 1, tokens.as_slice()))
    }
}
