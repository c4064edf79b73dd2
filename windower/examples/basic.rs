// Example: minimal usage of the windowing engine.
use windower::{Align, Layout};

fn main() {
    let layout = Layout::new(50, 20).expect("valid geometry");
    let count = 1_000_000;

    let offset = layout.clamp_scroll_offset(123_456, count);
    let window = layout.window(offset, count);
    println!("total_extent={}", window.total_extent);
    println!("window={window:?}");

    let mut slots = Vec::new();
    layout.collect_slots(offset, count, &mut slots);
    println!("first_slot={:?}", slots.first());

    let offset = layout.scroll_to_offset(999_999, Align::End, count, offset);
    println!("after scroll_to_offset: offset={offset}");
}
