//! Struct padding, measured.
//!
//! A handful of structs whose only difference is the order of their fields,
//! each annotated with [`layout_report`] so the compiler's own size, alignment
//! and field offsets can be printed next to each other.

pub use struct_padding_derive::layout_report;

pub mod demo;
mod error;
mod layout;
pub mod report;

pub use error::ReportError;
pub use layout::{FieldLayout, LayoutReport};
pub use report::{write_size_line, write_sizes, LayoutSummary};

#[cfg(test)]
mod tests {
  use core::mem::{align_of, size_of};

  use crate::{layout_report, LayoutReport};

  #[test]
  fn test_size() {
    #[layout_report]
    #[allow(dead_code)]
    pub struct Foo {
      pub a: u8,
      pub b: u32,
      pub c: u8
    }

    assert_eq!(size_of::<Foo>(), 12, "`Foo` should be 12 bytes long");
    assert_eq!(Foo::SIZE, size_of::<Foo>());
    assert_eq!(Foo::ALIGN, align_of::<u32>());
    assert_eq!(Foo::padding_bytes(), 6);
  }

  #[test]
  fn test_display_name() {
    #[layout_report("Renamed")]
    #[allow(dead_code)]
    pub struct Foo {
      pub a: u8
    }

    assert_eq!(Foo::NAME, "Renamed");
  }
}
