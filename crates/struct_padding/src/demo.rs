//! The structs being measured.
//!
//! Field types mirror a classic padding walkthrough: strings are borrowed
//! `&'static str` (pointer + length), growable sequences are `Vec` (pointer +
//! length + capacity), and reference-like members sit behind one pointer.

use std::{any::Any, collections::HashMap, io};

use crate::layout_report;

/// Small and wide fields interleaved, so every `i64` drags padding in front of it.
#[layout_report]
#[derive(Clone, Copy, Debug, Default)]
pub struct BadLayout {
  pub a: bool,
  pub b: i64,
  pub c: bool,
  pub d: i64,
  pub e: i32,
  pub f: bool
}

/// The same fields as [`BadLayout`], widest first.
#[layout_report]
#[derive(Clone, Copy, Debug, Default)]
pub struct GoodLayout {
  pub b: i64,
  pub d: i64,
  pub e: i32,
  pub a: bool,
  pub c: bool,
  pub f: bool
}

#[layout_report]
#[allow(clippy::box_collection)]
pub struct ComplexStruct {
  pub id:       u64,
  pub name:     &'static str,
  pub tags:     Vec<String>,
  pub metadata: Option<Box<HashMap<String, Box<dyn Any>>>>,
  pub handler:  fn() -> io::Result<()>,
  pub data:     Option<Box<Vec<u8>>>,
  pub active:   bool,
  pub count:    i32
}

#[layout_report]
#[derive(Clone, Copy, Debug, Default)]
pub struct Address {
  pub street: &'static str,
  pub city:   &'static str,
  pub zip:    i32
}

/// Embeds an [`Address`] by value; its trailing padding comes along.
#[layout_report]
#[derive(Clone, Copy, Debug, Default)]
pub struct Person {
  pub name:    &'static str,
  pub age:     i32,
  pub address: Address,
  pub email:   &'static str
}

#[layout_report]
#[derive(Clone, Debug, Default)]
pub struct ArrayExample {
  pub fixed_array: [i32; 10],
  pub slice:       Vec<i32>,
  pub matrix:      [[isize; 3]; 3]
}
