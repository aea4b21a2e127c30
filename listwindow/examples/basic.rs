// Example: compute a window for a large list and jump to an item.
use listwindow::{Align, ViewportState, WindowConfig};

fn main() -> listwindow::Result<()> {
    let rows: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();
    let config = WindowConfig::new(24.0)?.with_overscan(3);

    let mut viewport = ViewportState::new(120_000.0, 480.0);
    let range = config.range(viewport, rows.len());
    let window = config.materialize(&rows, range);
    println!("total_extent={}", window.total_extent);
    println!("range={range:?}");
    println!("first={:?}", window.descriptors.first());

    viewport.scroll_offset =
        config.scroll_offset_for_index(rows.len() - 1, Align::End, viewport, rows.len());
    let range = config.range(viewport, rows.len());
    println!("after scroll to last: offset={} range={range:?}", viewport.scroll_offset);
    Ok(())
}
