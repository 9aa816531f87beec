//! UI tests for the Operation derive using trybuild.
//!
//! Each file under `tests/ui/pass` must expand and compile against the real
//! runtime crate.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
