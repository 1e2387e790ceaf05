//! Snapshot tests for the row structure the layout layer produces.
//!
//! A compact text dump of the row table makes regressions in grouping,
//! tops, and open-row placement easy to spot in review.

use cardgrid::config::Metrics;
use cardgrid::layout::{RowIndex, RowKind, RowModel, ViewMode};
use std::fmt::Write as _;

fn dump(model: &RowModel) -> String {
    let mut out = String::new();
    for (index, row) in model.rows().iter().enumerate() {
        let kind = match row.kind {
            RowKind::Dense => "dense",
            RowKind::Open => "open ",
        };
        writeln!(
            out,
            "row {index} | {kind} | items {}..{} | top {} | h {}",
            row.items.start,
            row.items.end,
            model.row_top(RowIndex::new(index)),
            row.height,
        )
        .unwrap();
    }
    write!(out, "content {}", model.content_height()).unwrap();
    out
}

#[test]
fn grid_with_open_row_in_the_middle() {
    let model = RowModel::build(7, Some(3), 3, &Metrics::default(), ViewMode::Grid, 500);
    insta::assert_snapshot!(dump(&model), @r"
    row 0 | dense | items 0..3 | top 8 | h 193
    row 1 | open  | items 3..4 | top 209 | h 500
    row 2 | dense | items 4..7 | top 717 | h 193
    content 918
    ");
}

#[test]
fn open_item_at_a_dense_row_boundary() {
    let model = RowModel::build(6, Some(0), 3, &Metrics::default(), ViewMode::Grid, 500);
    insta::assert_snapshot!(dump(&model), @r"
    row 0 | open  | items 0..1 | top 8 | h 500
    row 1 | dense | items 1..4 | top 516 | h 193
    row 2 | dense | items 4..6 | top 717 | h 193
    content 918
    ");
}

#[test]
fn list_rows_have_no_gaps() {
    let model = RowModel::build(4, Some(2), 1, &Metrics::default(), ViewMode::List, 300);
    insta::assert_snapshot!(dump(&model), @r"
    row 0 | dense | items 0..1 | top 0 | h 28
    row 1 | dense | items 1..2 | top 28 | h 28
    row 2 | open  | items 2..3 | top 56 | h 300
    row 3 | dense | items 3..4 | top 356 | h 28
    content 384
    ");
}
