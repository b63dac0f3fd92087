//! Turns [`LayoutReport`] constants into text.
//!
//! Stdout only ever receives the one-line size summaries. The per-field
//! breakdown goes out as `debug` events, visible with `RUST_LOG=debug`.

use std::{fmt, io::Write};

use tracing::debug;

use crate::{
  demo::{ArrayExample, BadLayout, ComplexStruct, GoodLayout, Person},
  FieldLayout, LayoutReport, ReportError
};

/// One field together with the gap the compiler left in front of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRow {
  pub field:          FieldLayout,
  pub padding_before: usize
}

/// Per-field breakdown of a struct's layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutSummary {
  pub name:             &'static str,
  pub size:             usize,
  pub align:            usize,
  pub rows:             Vec<FieldRow>,
  pub trailing_padding: usize
}

impl LayoutSummary {
  pub fn of<T: LayoutReport>() -> Self {
    let mut previous: Option<&FieldLayout> = None;
    let rows = T::FIELDS
      .iter()
      .map(|field| {
        let row = FieldRow {
          field:          *field,
          padding_before: field.padding_before(previous)
        };
        previous = Some(field);
        row
      })
      .collect::<Vec<_>>();

    let end = T::FIELDS.last().map_or(0, FieldLayout::end);

    LayoutSummary {
      name: T::NAME,
      size: T::SIZE,
      align: T::ALIGN,
      rows,
      trailing_padding: T::SIZE.saturating_sub(end)
    }
  }

  pub fn padding_bytes(&self) -> usize {
    self.rows.iter().map(|row| row.padding_before).sum::<usize>() + self.trailing_padding
  }
}

impl fmt::Display for LayoutSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "{}: size {}, align {}, padding {}",
      self.name,
      self.size,
      self.align,
      self.padding_bytes()
    )?;
    writeln!(f, "  offset  size  pad  field")?;
    for row in &self.rows {
      writeln!(
        f,
        "  {:>6}  {:>4}  {:>3}  {}: {}",
        row.field.offset, row.field.size, row.padding_before, row.field.name, row.field.type_name
      )?;
    }
    write!(f, "  trailing padding {}", self.trailing_padding)
  }
}

/// Writes `"<Name> size: <N>"` for `T`.
pub fn write_size_line<T: LayoutReport, W: Write>(out: &mut W) -> Result<(), ReportError> {
  let summary = LayoutSummary::of::<T>();
  for row in &summary.rows {
    debug!(
      struct_name = summary.name,
      field = row.field.name,
      ty = row.field.type_name,
      offset = row.field.offset,
      size = row.field.size,
      padding_before = row.padding_before,
      "field placed"
    );
  }
  debug!(
    struct_name = summary.name,
    size = summary.size,
    align = summary.align,
    padding = summary.padding_bytes(),
    trailing_padding = summary.trailing_padding,
    "struct measured"
  );

  writeln!(out, "{} size: {}", T::NAME, T::SIZE).map_err(|source| {
    ReportError::Write {
      name: T::NAME,
      source
    }
  })
}

/// Writes the size line of every demo struct, poorly ordered first.
pub fn write_sizes<W: Write>(out: &mut W) -> Result<(), ReportError> {
  write_size_line::<BadLayout, _>(out)?;
  write_size_line::<GoodLayout, _>(out)?;
  write_size_line::<ComplexStruct, _>(out)?;
  write_size_line::<Person, _>(out)?;
  write_size_line::<ArrayExample, _>(out)?;
  out.flush().map_err(ReportError::Flush)
}
