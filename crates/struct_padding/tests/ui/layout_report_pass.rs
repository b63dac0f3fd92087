use struct_padding::{layout_report, LayoutReport, LayoutSummary};

#[layout_report("Tagged")]
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, Default)]
struct Tagged {
  tag:   u8,
  value: u32
}

fn main() {
  assert_eq!(Tagged::NAME, "Tagged");
  assert_eq!(Tagged::SIZE, 8);
  assert_eq!(Tagged::FIELDS[1].offset, 4);
  assert_eq!(Tagged::padding_bytes(), 3);

  let summary = LayoutSummary::of::<Tagged>();
  assert_eq!(summary.rows[1].padding_before, 3);
  assert_eq!(summary.trailing_padding, 0);

  let _ = Tagged::default();
}
