use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use windower::{Align, LayoutError};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Ticket {
    id: u32,
    title: String,
    description: String,
}

impl Row for Ticket {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn tickets(count: usize) -> Vec<Ticket> {
    (0..count)
        .map(|i| Ticket {
            id: i as u32 + 1,
            title: format!("Item {}", i + 1),
            description: format!("Description {}", i + 1),
        })
        .collect()
}

fn rendered_titles<S>(list: &RenderedList<u32, String, S>) -> Vec<&str> {
    list.rows.iter().map(|r| r.content.as_str()).collect()
}

#[test]
fn renders_visible_items() {
    let v: Viewport<Ticket> = Viewport::new(50, 5, tickets(10)).unwrap();
    let list = v.render_with(|t, _| t.title.clone());
    // capacity 5 + 1 trailing overscan row
    assert_eq!(list.rows.len(), 6);
    let titles = rendered_titles(&list);
    assert!(titles.contains(&"Item 1"));
    assert!(titles.contains(&"Item 5"));
    assert!(titles.contains(&"Item 6"));
    assert!(!titles.contains(&"Item 10"));
}

#[test]
fn scroll_event_changes_the_slice() {
    let mut v: Viewport<Ticket> = Viewport::new(50, 5, tickets(100)).unwrap();
    v.on_scroll(250);
    let list = v.render_with(|t, _| t.title.clone());
    let titles = rendered_titles(&list);
    assert!(titles.contains(&"Item 6"));
    assert!(!titles.contains(&"Item 1"));
    assert_eq!(list.rows.first().unwrap().index, 5);
    assert_eq!(list.rows.last().unwrap().index, 10);
}

#[test]
fn rows_are_absolutely_positioned() {
    let mut v: Viewport<Ticket> = Viewport::new(50, 5, tickets(100)).unwrap();
    v.on_scroll(250);
    let list = v.render_with(|t, _| t.title.clone());
    for row in &list.rows {
        assert_eq!(row.top, row.index as u64 * 50);
        assert_eq!(row.height, 50);
        assert_eq!(row.key, row.index as u32 + 1);
    }
}

#[test]
fn spacer_extent_tracks_dataset_not_scroll() {
    let mut v: Viewport<Ticket> = Viewport::new(50, 5, tickets(10)).unwrap();
    let settled = v.render_with(|t, _| t.title.clone());
    v.on_scroll(123);
    let scrolled = v.render_with(|t, _| t.title.clone());
    assert_eq!(settled.spacer_extent, 500);
    assert_eq!(scrolled.spacer_extent, 500);
    // outer scroll region keeps its fixed height
    assert_eq!(settled.viewport_extent, 250);
    assert_eq!(scrolled.viewport_extent, 250);
}

#[test]
fn offsets_beyond_extent_are_clamped() {
    let mut v: Viewport<Ticket> = Viewport::new(50, 5, tickets(100)).unwrap();
    let applied = v.on_scroll(1_000_000);
    assert_eq!(applied, 4750);
    assert_eq!(v.scroll_offset(), 4750);
    assert!(!v.window().is_empty());
}

#[test]
fn empty_dataset_renders_empty_spacer() {
    let v: Viewport<Ticket> = Viewport::new(50, 5, Vec::new()).unwrap();
    let list = v.render_with(|t, _| t.title.clone());
    assert!(list.rows.is_empty());
    assert_eq!(list.spacer_extent, 0);
    assert_eq!(list.viewport_extent, 250);
}

#[test]
fn construction_rejects_zero_geometry() {
    assert_eq!(
        Viewport::<Ticket>::new(0, 5, tickets(1)).unwrap_err(),
        LayoutError::ZeroRowHeight
    );
    assert_eq!(
        Viewport::<Ticket>::new(50, 0, tickets(1)).unwrap_err(),
        LayoutError::ZeroViewportRows
    );
}

#[test]
fn style_hooks_pass_through_untouched() {
    let v = Viewport::new(50, 5, tickets(5))
        .unwrap()
        .with_style("list")
        .with_row_style("row");
    let list = v.render_with(|t: &Ticket, _| t.title.clone());
    assert_eq!(list.style, Some("list"));
    assert!(list.rows.iter().all(|r| r.style == Some("row")));
}

#[test]
fn duplicate_keys_render_without_collapsing() {
    let rows = alloc::vec![
        Ticket {
            id: 7,
            title: String::from("first"),
            description: String::new(),
        },
        Ticket {
            id: 7,
            title: String::from("second"),
            description: String::new(),
        },
    ];
    let v: Viewport<Ticket> = Viewport::new(50, 5, rows).unwrap();
    let list = v.render_with(|t, _| t.title.clone());
    assert_eq!(list.rows.len(), 2);
    assert_eq!(list.rows[0].key, 7);
    assert_eq!(list.rows[1].key, 7);
}

#[test]
fn scroll_offset_resets_only_on_construction() {
    let mut v: Viewport<Ticket> = Viewport::new(50, 5, tickets(100)).unwrap();
    v.on_scroll(300);
    assert_eq!(v.scroll_offset(), 300);

    // reconfiguration: a new instance starts settled at the top
    let rebuilt: Viewport<Ticket> = Viewport::new(50, 5, v.into_rows()).unwrap();
    assert_eq!(rebuilt.scroll_offset(), 0);
}

#[test]
fn scroll_to_row_uses_engine_alignment() {
    let mut v: Viewport<Ticket> = Viewport::new(50, 5, tickets(100)).unwrap();
    assert_eq!(v.scroll_to_row(10, Align::Start), 500);
    assert_eq!(v.window().start_index, 10);
    assert_eq!(v.scroll_to_row(99, Align::End), v.max_scroll_offset());
}

#[test]
fn for_each_visible_matches_render_list() {
    let mut v: Viewport<Ticket> = Viewport::new(50, 5, tickets(100)).unwrap();
    v.on_scroll(250);
    let mut seen = Vec::new();
    v.for_each_visible(|record, slot| seen.push((record.id, slot.index, slot.top)));

    let list = v.render_with(|t, _| t.id);
    let rendered: Vec<_> = list.rows.iter().map(|r| (r.key, r.index, r.top)).collect();
    assert_eq!(seen, rendered);
}

#[test]
fn header_exposes_titles_in_order() {
    let h: Header = Header::new(["Title 1", "Title 2"]);
    assert_eq!(h.titles(), ["Title 1", "Title 2"]);
    let cells = h.cells();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].index, 0);
    assert_eq!(cells[0].title, "Title 1");
    assert_eq!(cells[1].title, "Title 2");
}

#[test]
fn header_style_hooks_surface_on_cells() {
    let h = Header::new(["Title"])
        .with_style("custom-header")
        .with_cell_style("custom-cell");
    assert_eq!(h.style(), Some(&"custom-header"));
    let cells = h.cells();
    assert_eq!(cells[0].style, Some(&"custom-cell"));
}

#[test]
fn header_and_viewport_compose_independently() {
    let header: Header = Header::new(["Title", "Description"]);
    let v: Viewport<Ticket> = Viewport::new(50, 5, tickets(10)).unwrap();
    let list = v.render_with(|t, _| (t.title.clone(), t.description.clone()));

    assert_eq!(header.titles().len(), 2);
    let first = &list.rows[0];
    assert_eq!(first.content.0, "Item 1");
    assert_eq!(first.content.1, "Description 1");
}
