// Simulates a host scroll container driving the adapter.
use listwindow::{Align, WindowConfig};
use listwindow_adapter::{Overflow, ViewportAdapter};

fn main() -> listwindow::Result<()> {
    let mut products: Vec<String> = (0..5_000).map(|i| format!("product #{i}")).collect();

    let config = WindowConfig::new(48.0)?.with_overscan(4);
    let mut adapter = ViewportAdapter::new(config, 480.0)?.with_overflow(Overflow::Scroll);

    println!("container: {}", adapter.container_style());
    println!("content: {}", adapter.content_style(products.len()));

    // A burst of scroll notifications; each one recomputes the window once.
    for offset in [0.0, 96.0, 1_440.0, 12_000.5] {
        let range = adapter.on_scroll(offset, products.len());
        println!("scroll={offset} range={range:?}");
    }

    let frame = adapter.render(&products, |name: &String, index: usize| {
        format!("<li data-index=\"{index}\">{name}</li>")
    });
    for item in frame.items.iter().take(3) {
        println!("{} -> {}", item.style, item.node);
    }

    // The host applies the target to the real container, which reports it back.
    let target = adapter.scroll_target(4_000, Align::Center, products.len());
    adapter.on_scroll(target, products.len());
    println!("after scroll_target: offset={}", adapter.scroll_offset());

    // The collection shrinks; the next render reads the new length.
    products.truncate(3_000);
    let range = adapter.on_resize(600.0, products.len())?;
    println!("after shrink + resize: range={range:?}");
    Ok(())
}
