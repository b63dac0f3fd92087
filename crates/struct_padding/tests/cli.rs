use assert_cmd::Command;
use predicates::prelude::*;
use struct_padding::{
  demo::{ArrayExample, BadLayout, ComplexStruct, GoodLayout, Person},
  LayoutReport
};

fn expected_stdout() -> String {
  [
    (BadLayout::NAME, BadLayout::SIZE),
    (GoodLayout::NAME, GoodLayout::SIZE),
    (ComplexStruct::NAME, ComplexStruct::SIZE),
    (Person::NAME, Person::SIZE),
    (ArrayExample::NAME, ArrayExample::SIZE)
  ]
  .iter()
  .map(|(name, size)| format!("{name} size: {size}\n"))
  .collect()
}

fn struct_padding() -> Command {
  Command::new(env!("CARGO_BIN_EXE_struct-padding"))
}

#[test]
fn prints_five_size_lines() {
  struct_padding()
    .env_remove("RUST_LOG")
    .assert()
    .success()
    .stdout(expected_stdout())
    .stderr("");
}

#[test]
fn debug_breakdown_goes_to_stderr() {
  struct_padding()
    .env("RUST_LOG", "debug")
    .assert()
    .success()
    .stdout(expected_stdout())
    .stderr(
      predicate::str::contains("field placed")
        .and(predicate::str::contains("struct measured"))
        .and(predicate::str::contains("struct_name=\"BadLayout\""))
        .and(predicate::str::contains("\u{1b}[").not())
    );
}
