//! Argument scanning in the manner of GNU `getopt_long`.

use std::ops::Bound;
use std::path::Path;
use std::slice;

use tracing::debug;

use crate::set::Supplied;
use crate::{ParseError, ParseErrorKind, Set};

#[cfg(test)]
mod tests;

const TERMINATOR: &str = "--";

/// How options and positional arguments may interleave.
///
/// Positional arguments keep their relative order in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ordering {
    /// GNU behaviour: options may appear after positional arguments.
    #[default]
    Permute,
    /// POSIX behaviour: the first positional argument ends option scanning.
    RequireOrder,
}

/// The remaining arguments of a scan.
type Args<'v> = slice::Iter<'v, String>;

impl Set<'_> {
    /// Parses `args` against the declared options and validates the result.
    ///
    /// The first element is the program name; when no program was set, its
    /// basename prefixes error messages. Returns the positional arguments in
    /// the order they appeared.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] met while scanning, or the first
    /// mandatory or group violation once scanning succeeds.
    pub fn parse<I, S>(&mut self, args: I) -> Result<Vec<String>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = args.into_iter().map(Into::into);
        if let Some(arg0) = words.next() {
            self.adopt_program(&arg0);
        }
        let rest: Vec<String> = words.collect();
        let positional = self
            .scan(&rest)
            .map_err(|kind| ParseError::new(self.program(), kind))?;
        self.validate()?;
        Ok(positional)
    }

    fn adopt_program(&mut self, arg0: &str) {
        if !self.program().is_empty() {
            return;
        }
        let base = Path::new(arg0)
            .file_name()
            .map_or_else(|| arg0.to_owned(), |name| name.to_string_lossy().into_owned());
        self.set_program(base);
    }

    fn scan(&mut self, args: &[String]) -> Result<Vec<String>, ParseErrorKind> {
        let mut positional = Vec::new();
        let mut remaining = args.iter();
        while let Some(arg) = remaining.next() {
            if arg == TERMINATOR {
                positional.extend(remaining.by_ref().cloned());
                debug!("option scanning ended at --");
                break;
            }
            if let Some(body) = arg.strip_prefix(TERMINATOR) {
                self.long_option(body, &mut remaining)?;
                continue;
            }
            if let Some(cluster) = arg.strip_prefix('-')
                && !cluster.is_empty()
            {
                self.short_cluster(cluster, &mut remaining)?;
                continue;
            }
            positional.push(arg.clone());
            if self.ordering() == Ordering::RequireOrder {
                positional.extend(remaining.by_ref().cloned());
                debug!(at = %arg, "option scanning ended at first positional argument");
                break;
            }
        }
        Ok(positional)
    }

    fn long_option(&mut self, body: &str, remaining: &mut Args<'_>) -> Result<(), ParseErrorKind> {
        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        let index = self.resolve_long(name)?;
        let opt = self.opt(index);
        let supplied = match attached {
            Some(text) => Supplied::Text(text),
            None if opt.is_flag() => Supplied::Flag,
            None if opt.is_optional() => Supplied::Default,
            None => match remaining.next() {
                Some(text) => Supplied::Text(text),
                None => return Err(ParseErrorKind::MissingArgument(opt.name())),
            },
        };
        self.opt_mut(index).apply(supplied)
    }

    /// Resolves a long name exactly, or by a prefix shared with no other
    /// declared name.
    fn resolve_long(&self, name: &str) -> Result<usize, ParseErrorKind> {
        let longs = self.long_names();
        if let Some(index) = longs.get(name) {
            return Ok(*index);
        }
        let mut matches = longs
            .range::<str, _>((Bound::Included(name), Bound::Unbounded))
            .take_while(|(long, _)| long.starts_with(name));
        match (matches.next(), matches.next()) {
            (Some((_, index)), None) => Ok(*index),
            (None, _) => Err(ParseErrorKind::UnknownOption(format!("--{name}"))),
            (Some((first, _)), Some((second, _))) => {
                let candidates = [first, second]
                    .into_iter()
                    .chain(matches.map(|(long, _)| long))
                    .map(|long| format!("--{long}"))
                    .collect();
                Err(ParseErrorKind::AmbiguousOption {
                    given: format!("--{name}"),
                    candidates,
                })
            }
        }
    }

    fn short_cluster(&mut self, cluster: &str, remaining: &mut Args<'_>) -> Result<(), ParseErrorKind> {
        for (pos, short) in cluster.char_indices() {
            let index = self
                .short_index(short)
                .ok_or_else(|| ParseErrorKind::UnknownOption(format!("-{short}")))?;
            let opt = self.opt(index);
            if opt.is_flag() {
                self.opt_mut(index).apply(Supplied::Flag)?;
                continue;
            }
            let tail = cluster.get(pos + short.len_utf8()..).unwrap_or_default();
            let supplied = match tail {
                "" if opt.is_optional() => Supplied::Default,
                "" => match remaining.next() {
                    Some(text) => Supplied::Text(text),
                    None => return Err(ParseErrorKind::MissingArgument(format!("-{short}"))),
                },
                _ => Supplied::Text(tail.strip_prefix('=').unwrap_or(tail)),
            };
            return self.opt_mut(index).apply(supplied);
        }
        Ok(())
    }
}
