use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use flatseq_core::{deep, display_leaves, two_level, Leaf, LeafKind, Nested};
use strum::IntoEnumIterator;

use crate::common;

/// How to flatten the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Strategy {
    /// Two-level input, outer and inner index cursor
    Cursor,
    /// Two-level input, rows pulled on demand
    Lazy,
    /// Any depth, flattened up front
    Precomputed,
    /// Any depth, leaves produced on demand
    DepthFirst,
}

impl Strategy {
    pub(crate) fn is_two_level(self) -> bool {
        matches!(self, Strategy::Cursor | Strategy::Lazy)
    }

    /// Start flattening `value`.
    ///
    /// Two-level strategies validate the input first and keep the rows in
    /// `rows`, which has to outlive the returned iterator.
    pub(crate) fn leaves<'a>(
        self,
        value: &'a Nested<Leaf>,
        rows: &'a mut Option<Vec<Vec<&'a Leaf>>>,
    ) -> anyhow::Result<Box<dyn Iterator<Item = &'a Leaf> + 'a>> {
        if self.is_two_level() {
            let validated = value
                .to_rows()
                .context("Input is not a sequence of sequences of leaves")?;
            let rows = rows.insert(validated);
            Ok(match self {
                Strategy::Cursor => Box::new(two_level::cursor(rows.as_slice()).copied()),
                _ => Box::new(two_level::lazy(rows.iter()).copied()),
            })
        } else {
            Ok(match self {
                Strategy::Precomputed => Box::new(deep::precomputed(value)),
                _ => Box::new(deep::depth_first(value)),
            })
        }
    }
}

#[derive(Debug, Parser)]
pub(crate) struct Flatten {
    /// input JSON file, `-` or nothing for stdin
    infile: Option<PathBuf>,
    /// Flattening strategy. `cursor` and `lazy` only accept a sequence of
    /// sequences.
    #[arg(long, value_enum, default_value_t = Strategy::DepthFirst)]
    strategy: Strategy,
    /// Pull leaves one at a time and stop after this many.
    #[arg(long)]
    take: Option<usize>,
    /// Also print the number of leaves of each kind and the nesting depth.
    #[arg(long)]
    stats: bool,
}

impl Flatten {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let value = common::Source::new(self.infile.as_deref()).load()?;
        tracing::debug!(strategy = ?self.strategy, "flattening input");

        let mut rows = None;
        let leaves = self.strategy.leaves(&value, &mut rows)?;
        let mut stdout = io::stdout().lock();
        write_leaves(&mut stdout, leaves, self.take)?;
        if self.stats {
            write_stats(&mut stdout, &value)?;
        }
        Ok(())
    }
}

/// Write all leaves as one list, or the first `take` leaves one per line.
pub(crate) fn write_leaves<'a, W: Write>(
    out: &mut W,
    leaves: impl Iterator<Item = &'a Leaf>,
    take: Option<usize>,
) -> io::Result<()> {
    let Some(take) = take else {
        return writeln!(out, "{}", display_leaves(leaves));
    };
    let mut leaves = leaves.peekable();
    for (i, leaf) in leaves.by_ref().take(take).enumerate() {
        writeln!(out, "{}: {}", i + 1, leaf)?;
    }
    if leaves.peek().is_some() {
        writeln!(out, "...")?;
    }
    Ok(())
}

pub(crate) fn write_stats<W: Write>(out: &mut W, value: &Nested<Leaf>) -> io::Result<()> {
    let mut counts = BTreeMap::new();
    for leaf in value.iter() {
        *counts.entry(leaf.kind()).or_insert(0usize) += 1;
    }
    writeln!(out, "depth: {}", value.depth())?;
    writeln!(out, "leaves: {}", counts.values().sum::<usize>())?;
    for kind in LeafKind::iter() {
        writeln!(out, "  {}: {}", kind, counts.get(&kind).copied().unwrap_or(0))?;
    }
    Ok(())
}
