use gnuopt::{Options, reflect};

/// `#[getopt(crate = "...")]` with the real crate name as a self-referential
/// alias, so no workspace reconfiguration is needed.
#[derive(Clone, Default, Options)]
#[getopt(crate = "gnuopt")]
struct Aliased {
    #[getopt("--level -l=LEVEL verbosity level")]
    level: u8,
}

fn main() {
    let parsed = reflect::parse_fresh(&Aliased::default(), ["aliased", "-l", "3"]);
    assert!(matches!(parsed, Ok(ref p) if p.options.level == 3));
}
