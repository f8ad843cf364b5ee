//! Tests for argument scanning.

use super::Ordering;
use crate::{Counter, Declaration, ParseError, ParseErrorKind, Set};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

#[derive(Debug, Default, PartialEq)]
struct Widgets {
    all: bool,
    brief: bool,
    count: u32,
    color: String,
    level: u8,
    verbose: Counter,
}

impl Widgets {
    fn parse(&mut self, args: &[&str]) -> Result<Vec<String>, ParseError> {
        self.parse_with(args, Ordering::Permute)
    }

    #[expect(clippy::expect_used, reason = "the fixture declarations never clash")]
    fn parse_with(&mut self, args: &[&str], ordering: Ordering) -> Result<Vec<String>, ParseError> {
        self.level = 1;
        let mut set = Set::default();
        set.set_ordering(ordering);
        declare_all(&mut set, self).expect("widget declarations are valid");
        set.parse(args.iter().copied())
    }
}

fn declare_all<'a>(set: &mut Set<'a>, widgets: &'a mut Widgets) -> Result<(), crate::DeclareError> {
    set.declare(Declaration::new().short('a').long("all"), &mut widgets.all)?;
    set.declare(Declaration::new().short('b').long("brief"), &mut widgets.brief)?;
    set.declare(Declaration::new().short('c').long("count").param("N"), &mut widgets.count)?;
    set.declare(Declaration::new().long("color").param("WHEN"), &mut widgets.color)?;
    set.declare(
        Declaration::new().short('l').long("level").param("L").optional(),
        &mut widgets.level,
    )?;
    set.declare(Declaration::new().short('v'), &mut widgets.verbose)?;
    Ok(())
}

fn kind_of(result: Result<Vec<String>, ParseError>) -> Result<ParseErrorKind> {
    match result {
        Ok(rest) => Err(anyhow!("parse unexpectedly succeeded with {rest:?}")),
        Err(err) => Ok(err.kind().clone()),
    }
}

#[rstest]
#[case::separate(&["test", "-c", "5"])]
#[case::attached(&["test", "-c5"])]
#[case::attached_equals(&["test", "-c=5"])]
#[case::long_separate(&["test", "--count", "5"])]
#[case::long_equals(&["test", "--count=5"])]
#[case::long_prefix(&["test", "--cou", "5"])]
#[case::last_wins(&["test", "-c", "1", "--count=5"])]
fn accepts_every_argument_form(#[case] args: &[&str]) -> Result<()> {
    let mut widgets = Widgets::default();
    let rest = widgets.parse(args)?;
    ensure!(rest.is_empty(), "unexpected positionals {rest:?}");
    ensure!(widgets.count == 5, "count was {}", widgets.count);
    Ok(())
}

#[test]
fn bundles_flags_before_a_value_option() -> Result<()> {
    let mut widgets = Widgets::default();
    widgets.parse(&["test", "-abc7"])?;
    ensure!(widgets.all && widgets.brief, "flags not applied: {widgets:?}");
    ensure!(widgets.count == 7, "attached value lost: {widgets:?}");

    let mut separate = Widgets::default();
    separate.parse(&["test", "-bac", "9"])?;
    ensure!(separate.all && separate.brief && separate.count == 9, "{separate:?}");
    Ok(())
}

#[test]
fn counts_repeated_flags() -> Result<()> {
    let mut widgets = Widgets::default();
    widgets.parse(&["test", "-vv", "-v"])?;
    ensure!(widgets.verbose.get() == 3, "verbose was {:?}", widgets.verbose);
    Ok(())
}

#[test]
fn long_flags_accept_explicit_values() -> Result<()> {
    let mut widgets = Widgets::default();
    widgets.parse(&["test", "--all", "--all=false", "--brief=on"])?;
    ensure!(!widgets.all, "--all=false should clear the flag");
    ensure!(widgets.brief, "--brief=on should set the flag");
    Ok(())
}

#[rstest]
#[case::long_attached(&["test", "--level=3"], 3, &[])]
#[case::short_attached(&["test", "-l3"], 3, &[])]
#[case::long_bare(&["test", "--level", "3"], 1, &["3"])]
#[case::short_bare(&["test", "-l", "3"], 1, &["3"])]
fn optional_arguments_must_be_attached(
    #[case] args: &[&str],
    #[case] level: u8,
    #[case] rest: &[&str],
) -> Result<()> {
    let mut widgets = Widgets::default();
    let positional = widgets.parse(args)?;
    ensure!(widgets.level == level, "level was {}", widgets.level);
    ensure!(positional == rest, "positionals were {positional:?}");
    Ok(())
}

#[test]
fn permutes_positionals_by_default() -> Result<()> {
    let mut widgets = Widgets::default();
    let rest = widgets.parse(&["test", "one", "-a", "two", "-", "--count", "2", "three"])?;
    ensure!(rest == ["one", "two", "-", "three"], "positionals were {rest:?}");
    ensure!(widgets.all && widgets.count == 2, "{widgets:?}");
    Ok(())
}

#[test]
fn require_order_stops_at_first_positional() -> Result<()> {
    let mut widgets = Widgets::default();
    let rest = widgets.parse_with(&["test", "-a", "one", "-b", "two"], Ordering::RequireOrder)?;
    ensure!(rest == ["one", "-b", "two"], "positionals were {rest:?}");
    ensure!(widgets.all && !widgets.brief, "{widgets:?}");
    Ok(())
}

#[test]
fn terminator_ends_option_scanning() -> Result<()> {
    let mut widgets = Widgets::default();
    let rest = widgets.parse(&["test", "-a", "--", "-b", "--count", "--"])?;
    ensure!(rest == ["-b", "--count", "--"], "positionals were {rest:?}");
    ensure!(widgets.all && !widgets.brief, "{widgets:?}");
    Ok(())
}

#[rstest]
#[case::unknown_short(&["test", "-x"], "test: unknown option: -x")]
#[case::unknown_in_cluster(&["test", "-ax"], "test: unknown option: -x")]
#[case::unknown_long(&["test", "--bogus"], "test: unknown option: --bogus")]
#[case::ambiguous(&["test", "--co"], "test: ambiguous option: --co (could be --color, --count)")]
#[case::missing_short(&["test", "-c"], "test: missing argument for option -c")]
#[case::missing_long(&["test", "--count"], "test: missing argument for option --count")]
#[case::invalid(&["test", "--count", "abc"], "test: invalid value for option --count: abc")]
#[case::invalid_flag(&["test", "--all=maybe"], "test: invalid value for option --all: maybe")]
fn reports_scan_errors(#[case] args: &[&str], #[case] message: &str) -> Result<()> {
    let mut widgets = Widgets::default();
    let Err(err) = widgets.parse(args) else {
        return Err(anyhow!("{args:?} unexpectedly parsed"));
    };
    ensure!(err.to_string() == message, "got {err}, want {message}");
    Ok(())
}

#[test]
fn rejected_values_are_not_applied() -> Result<()> {
    let mut widgets = Widgets::default();
    let kind = kind_of(widgets.parse(&["test", "-c", "4", "-c", "four"]))?;
    ensure!(
        matches!(kind, ParseErrorKind::InvalidValue { .. }),
        "unexpected error {kind:?}"
    );
    ensure!(widgets.count == 4, "count was {}", widgets.count);
    Ok(())
}

#[test]
fn program_defaults_to_basename_of_first_argument() -> Result<()> {
    let mut flag = false;
    let mut set = Set::default();
    set.declare(Declaration::new().short('q'), &mut flag)?;
    let Err(err) = set.parse(["/usr/local/bin/widget", "-z"]) else {
        return Err(anyhow!("-z unexpectedly parsed"));
    };
    ensure!(err.program() == "widget", "program was {:?}", err.program());

    set.set_program("configured");
    let Err(again) = set.parse(["/usr/local/bin/widget", "-z"]) else {
        return Err(anyhow!("-z unexpectedly parsed"));
    };
    ensure!(again.program() == "configured", "program was {:?}", again.program());
    Ok(())
}
