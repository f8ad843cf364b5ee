//! trybuild coverage for `#[derive(Options)]`.
//!
//! Ensures the generated impl compiles for plain, generic and renamed-crate
//! structs when used from outside the crate.

#[test]
fn derive_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/derive_success.rs");
    t.pass("tests/trybuild/crate_path_alias.rs");
}
