/// Where the compiler placed one field of a struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
  pub name:      &'static str,
  pub type_name: &'static str,
  pub offset:    usize,
  pub size:      usize,
  pub align:     usize
}

impl FieldLayout {
  /// First byte past the field.
  pub const fn end(&self) -> usize {
    self.offset + self.size
  }

  /// Bytes between the end of `previous` (or the start of the struct) and this field.
  pub fn padding_before(&self, previous: Option<&FieldLayout>) -> usize {
    let start = previous.map_or(0, FieldLayout::end);
    self.offset.saturating_sub(start)
  }
}

/// Compile-time layout facts of a struct, implemented by `#[layout_report]`.
///
/// `FIELDS` is in declaration order. Since the attribute also applies
/// `repr(C)`, that is the order the fields sit in memory.
pub trait LayoutReport {
  /// Name the struct is reported under.
  const NAME: &'static str;
  const SIZE: usize;
  const ALIGN: usize;
  const FIELDS: &'static [FieldLayout];

  /// Bytes actually occupied by field data.
  fn field_bytes() -> usize {
    Self::FIELDS.iter().map(|field| field.size).sum()
  }

  /// Bytes the struct spends on padding, both between fields and at its tail.
  fn padding_bytes() -> usize {
    Self::SIZE - Self::field_bytes()
  }

  fn field(name: &str) -> Option<&'static FieldLayout> {
    Self::FIELDS.iter().find(|field| field.name == name)
  }
}
