use gnuopt::{Counter, Options, Set, Value, reflect};

#[derive(Clone, Default, Options)]
struct Plain {
    #[getopt("--name=NAME -N name of the widget")]
    name: String,
    #[getopt("-v be verbose")]
    verbose: Counter,
    #[getopt("-")]
    scratch: Vec<u8>,
    dry_run: bool,
}

#[derive(Clone, Default, Options)]
struct Generic<T>
where
    T: Value + Clone + Default,
{
    value: T,
}

#[derive(Options)]
struct Empty {}

fn main() {
    let mut plain = Plain::default();
    let mut set = Set::new("plain");
    if let Err(err) = reflect::register(&mut plain, &mut set) {
        panic!("{err}");
    }
    drop(set);
    assert_eq!(Plain::fields().len(), 3);
    assert!(plain.scratch.is_empty());

    let generic = Generic::<u16>::default();
    assert!(reflect::lookup::<u16, _>(&generic, "value").is_some());
    assert!(Empty::fields().is_empty());
}
