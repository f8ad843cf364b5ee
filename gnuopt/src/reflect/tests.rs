//! Tests for struct-driven declarations, using a hand-written `Options`
//! impl so the runtime rules are checked independently of the derive.

use super::{FieldInfo, Options, duplicate, lookup, lookup_value, parse_fresh, register, validate};
use crate::{Counter, DeclareError, GnuoptError, ParseErrorKind, Set, TagError, Value};
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

#[derive(Debug, Clone, Default, PartialEq)]
struct Widget {
    name: String,
    count: i32,
    verbose: Counter,
    n: u8,
    lazy: String,
    skipped: bool,
}

static WIDGET_FIELDS: [FieldInfo; 6] = [
    FieldInfo::new("name", Some("--name=NAME name of the widget")),
    FieldInfo::new("count", Some("--count -c=COUNT number of widgets")),
    FieldInfo::new("verbose", Some("-v be verbose")),
    FieldInfo::new("N", None),
    FieldInfo::new("lazy", Some("")),
    FieldInfo::new("skipped", Some("-")),
];

impl Options for Widget {
    fn fields() -> &'static [FieldInfo] {
        &WIDGET_FIELDS
    }

    fn value(&self, index: usize) -> Option<&dyn Value> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.count),
            2 => Some(&self.verbose),
            3 => Some(&self.n),
            4 => Some(&self.lazy),
            5 => Some(&self.skipped),
            _ => None,
        }
    }

    fn values_mut(&mut self) -> Vec<&mut dyn Value> {
        vec![
            &mut self.name,
            &mut self.count,
            &mut self.verbose,
            &mut self.n,
            &mut self.lazy,
            &mut self.skipped,
        ]
    }
}

#[derive(Debug, Clone, Default)]
struct Broken {
    first: bool,
    second: bool,
}

static BROKEN_FIELDS: [FieldInfo; 2] = [
    FieldInfo::new("first", Some("-x first")),
    FieldInfo::new("second", Some("-x second")),
];

impl Options for Broken {
    fn fields() -> &'static [FieldInfo] {
        &BROKEN_FIELDS
    }

    fn value(&self, index: usize) -> Option<&dyn Value> {
        match index {
            0 => Some(&self.first),
            1 => Some(&self.second),
            _ => None,
        }
    }

    fn values_mut(&mut self) -> Vec<&mut dyn Value> {
        vec![&mut self.first, &mut self.second]
    }
}

fn template() -> Widget {
    Widget {
        count: 42,
        ..Widget::default()
    }
}

#[test]
fn registers_tagged_derived_and_skipped_fields() -> Result<()> {
    let mut widget = template();
    let mut set = Set::new("widget");
    register(&mut widget, &mut set)?;

    let names: Vec<String> = set.iter().map(crate::Opt::name).collect();
    ensure!(
        names == ["--name", "--count", "-v", "-n", "--lazy"],
        "unexpected options {names:?}"
    );
    let count = set.lookup('c').ok_or_else(|| anyhow!("-c missing"))?;
    ensure!(count.default_text() == "42", "default was {}", count.default_text());
    ensure!(count.help() == Some("number of widgets"), "help lost");
    ensure!(set.lookup("skipped").is_none(), "ignored field was declared");
    ensure!(
        set.lookup("lazy").is_some_and(|opt| opt.site().contains("field `lazy`")),
        "declaration site should name the field"
    );
    Ok(())
}

#[test]
fn reports_tag_errors_with_the_field() {
    let err = FieldInfo::new("broken", Some("---broken")).resolve();
    assert_eq!(
        err,
        Err(DeclareError::Tag {
            field: String::from("broken"),
            source: TagError::TooManyDashes(String::from("---broken")),
        })
    );
}

#[test]
fn validate_reports_clashes_without_side_effects() -> Result<()> {
    let broken = Broken::default();
    let Err(err) = validate(&broken) else {
        return Err(anyhow!("clashing short names passed validation"));
    };
    ensure!(
        matches!(err, DeclareError::DuplicateShort { short: 'x', .. }),
        "unexpected error {err:?}"
    );
    ensure!(duplicate(&broken).is_err(), "duplicate must validate first");
    validate(&template())?;
    Ok(())
}

#[test]
fn duplicate_is_independent() -> Result<()> {
    let original = template();
    let mut copy = duplicate(&original)?;
    let mut set = Set::default();
    register(&mut copy, &mut set)?;
    set.parse(["widget", "--count", "7", "-vv"])?;
    drop(set);
    ensure!(copy.count == 7 && copy.verbose.get() == 2, "{copy:?}");
    ensure!(original == template(), "template changed: {original:?}");
    Ok(())
}

#[rstest]
#[case::long("name", "--name")]
#[case::short("c", "--count")]
#[case::derived_short("n", "-n")]
#[case::derived_long("lazy", "--lazy")]
fn looks_up_fields_by_option_name(#[case] name: &str, #[case] option: &str) -> Result<()> {
    let widget = template();
    let value = lookup_value(&widget, name).ok_or_else(|| anyhow!("{name} not found"))?;
    let mut set = Set::default();
    let mut scratch = widget.clone();
    register(&mut scratch, &mut set)?;
    let declared = set
        .iter()
        .find(|opt| opt.name() == option)
        .ok_or_else(|| anyhow!("{option} not declared"))?;
    ensure!(
        declared.default_text() == value.render(),
        "{name} resolved to the wrong field"
    );
    Ok(())
}

#[test]
fn typed_lookup_checks_the_field_type() {
    let widget = template();
    assert_eq!(lookup::<i32, _>(&widget, "count"), Some(&42));
    assert_eq!(lookup::<u8, _>(&widget, "count"), None);
    assert!(lookup_value(&widget, "skipped").is_none());
    assert!(lookup_value(&widget, "missing").is_none());
}

#[test]
fn parse_fresh_leaves_the_template_untouched() -> Result<()> {
    let shared = template();
    let parsed = parse_fresh(&shared, ["widget", "-c", "3", "--name", "gear", "rest"])?;
    ensure!(parsed.options.count == 3, "count was {}", parsed.options.count);
    ensure!(parsed.options.name == "gear", "name was {}", parsed.options.name);
    ensure!(parsed.args == ["rest"], "positionals were {:?}", parsed.args);
    ensure!(shared == template(), "template changed: {shared:?}");
    Ok(())
}

#[test]
fn parse_fresh_separates_error_tiers() -> Result<()> {
    match parse_fresh(&Broken::default(), ["broken"]) {
        Err(GnuoptError::Declare(_)) => {}
        other => return Err(anyhow!("expected a declaration error, got {other:?}")),
    }
    match parse_fresh(&template(), ["widget", "--count", "many"]) {
        Err(GnuoptError::Parse(err)) => ensure!(
            matches!(err.kind(), ParseErrorKind::InvalidValue { .. }),
            "unexpected parse error {err}"
        ),
        other => return Err(anyhow!("expected a parse error, got {other:?}")),
    }
    Ok(())
}
