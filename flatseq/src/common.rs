use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use flatseq_core::{json, Leaf, Nested};

/// Where the input document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// No path and `-` both mean stdin.
    pub(crate) fn new(infile: Option<&Path>) -> Self {
        match infile {
            Some(path) if path != Path::new("-") => Source::File(path.to_path_buf()),
            _ => Source::Stdin,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read_text(&self) -> anyhow::Result<String> {
        match self {
            Source::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            Source::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut text)
                    .context("Failed to read input from stdin")?;
                Ok(text)
            }
        }
    }

    /// Read and parse the input document.
    pub(crate) fn load(&self) -> anyhow::Result<Nested<Leaf>> {
        let text = self.read_text()?;
        let value = parse_input(&text, self)?;
        tracing::debug!(source = %self.describe(), bytes = text.len(), "loaded input");
        Ok(value)
    }
}

fn parse_input(text: &str, source: &Source) -> anyhow::Result<Nested<Leaf>> {
    json::parse(text).with_context(|| format!("Failed to parse JSON from {}", source.describe()))
}
