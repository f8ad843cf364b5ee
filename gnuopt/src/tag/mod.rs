//! The option tag mini-language.
//!
//! A tag describes one option in a single string:
//!
//! ```text
//! [--option[=PARAM]] [-o[=PARAM]] [-- | -] help text
//! ```
//!
//! The long and short names come first, separated by whitespace. `=PARAM`
//! may be attached to either (but only one) of them and names the argument
//! in usage output. Everything after the names is help text. A bare `-` or
//! `--` ends the names explicitly, which lets help text start with a dash:
//! `"-v -- -v means verbose"`.
//!
//! ```
//! use gnuopt::tag::{OptTag, parse_tag};
//!
//! let tag = parse_tag("--count -c=COUNT number of widgets")?;
//! assert_eq!(
//!     tag,
//!     Some(OptTag {
//!         long: Some("count".into()),
//!         short: Some('c'),
//!         param: Some("COUNT".into()),
//!         help: Some("number of widgets".into()),
//!     })
//! );
//! # Ok::<(), gnuopt::TagError>(())
//! ```

use crate::{Declaration, TagError};


/// The tag that marks a struct field as not being an option.
pub const IGNORE: &str = "-";

/// Everything a tag can say about an option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptTag {
    /// Long name, without the leading `--`.
    pub long: Option<String>,
    /// Short name, without the leading `-`.
    pub short: Option<char>,
    /// Argument name shown in usage output.
    pub param: Option<String>,
    /// Free-form help text.
    pub help: Option<String>,
}

impl OptTag {
    /// Derives a tag from a field identifier when no tag was written.
    ///
    /// A single-letter identifier becomes a short option; anything longer
    /// becomes a lower-cased long option.
    ///
    /// ```
    /// use gnuopt::tag::OptTag;
    ///
    /// assert_eq!(OptTag::for_field("N").short, Some('n'));
    /// assert_eq!(OptTag::for_field("Lazy").long.as_deref(), Some("lazy"));
    /// ```
    #[must_use]
    pub fn for_field(ident: &str) -> Self {
        let lowered = ident.to_lowercase();
        let mut chars = lowered.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => Self {
                short: Some(short),
                ..Self::default()
            },
            _ => Self {
                long: Some(lowered),
                ..Self::default()
            },
        }
    }

    /// Converts the tag into a declaration ready for [`Set::declare`](crate::Set::declare).
    #[must_use]
    pub fn into_declaration(self) -> Declaration {
        let mut decl = Declaration::new();
        if let Some(long) = self.long {
            decl = decl.long(long);
        }
        if let Some(short) = self.short {
            decl = decl.short(short);
        }
        if let Some(param) = self.param {
            decl = decl.param(param);
        }
        if let Some(help) = self.help {
            decl = decl.help(help);
        }
        decl
    }
}

/// Parses `tag`.
///
/// Returns `Ok(None)` when the tag is empty, whitespace, or a lone
/// terminator; the caller should then fall back to
/// [`OptTag::for_field`].
///
/// # Errors
///
/// Returns a [`TagError`] when the tag violates the grammar described in the
/// [module documentation](self).
pub fn parse_tag(tag: &str) -> Result<Option<OptTag>, TagError> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let mut out = OptTag::default();
    let mut remaining = trimmed;
    loop {
        let token = Token::next(remaining);
        remaining = token.rest;
        if matches!(token.option, "" | "-" | "--") {
            return finish(out, &token, trimmed);
        }
        if let Some(param) = token.param {
            if out.param.is_some() {
                return Err(TagError::MultipleParamNames(trimmed.to_owned()));
            }
            out.param = Some(param.to_owned());
        }
        match dashes(token.option) {
            1 => out.short = Some(short_name(&out, token.option, trimmed)?),
            2 => {
                if out.long.is_some() {
                    return Err(TagError::TooManyLongNames(trimmed.to_owned()));
                }
                out.long = token.option.strip_prefix("--").map(str::to_owned);
            }
            _ => return Err(TagError::TooManyDashes(trimmed.to_owned())),
        }
    }
}

fn finish(mut out: OptTag, token: &Token<'_>, tag: &str) -> Result<Option<OptTag>, TagError> {
    if token.param.is_some() {
        return Err(TagError::MissingName(tag.to_owned()));
    }
    if out.long.is_none() && out.short.is_none() {
        if token.rest.is_empty() {
            return Ok(None);
        }
        return Err(TagError::MissingName(tag.to_owned()));
    }
    out.help = (!token.rest.is_empty()).then(|| token.rest.to_owned());
    Ok(Some(out))
}

fn short_name(out: &OptTag, option: &str, tag: &str) -> Result<char, TagError> {
    if out.short.is_some() {
        return Err(TagError::TooManyShortNames(tag.to_owned()));
    }
    let mut chars = option.chars().skip(1);
    match (chars.next(), chars.next()) {
        (Some(short), None) => Ok(short),
        _ => Err(TagError::InvalidShortName(tag.to_owned())),
    }
}

fn dashes(option: &str) -> usize {
    option.len() - option.trim_start_matches('-').len()
}

/// One whitespace-delimited option token and whatever follows it.
struct Token<'t> {
    /// The `-x` or `--name` part; empty when the text does not start with `-`.
    option: &'t str,
    param: Option<&'t str>,
    rest: &'t str,
}

impl<'t> Token<'t> {
    fn next(text: &'t str) -> Self {
        if !text.starts_with('-') {
            return Self {
                option: "",
                param: None,
                rest: text,
            };
        }
        let (word, rest) = text
            .split_once(char::is_whitespace)
            .map_or((text, ""), |(word, rest)| (word, rest.trim()));
        let (option, param) = match word.split_once('=') {
            Some((option, param)) => (option, Some(param).filter(|p| !p.is_empty())),
            None => (word, None),
        };
        Self {
            option,
            param,
            rest,
        }
    }
}
