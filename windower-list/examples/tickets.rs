// Demo: an 11,000-row ticket table composed of a header over a 20-row viewport.
//
// Nothing here draws; the render list is printed to show which rows a real UI
// would materialize at each scroll position.
use windower_list::{Header, Row, Viewport};

struct Ticket {
    id: String,
    title: String,
    description: String,
    status: &'static str,
}

impl Row for Ticket {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

fn main() {
    let tickets: Vec<Ticket> = (0..11_000)
        .map(|i| Ticket {
            id: format!("id{}", i + 1),
            title: format!("Ticket #{}", i + 1),
            description: format!("Description for ticket #{}", i + 1),
            status: if i % 2 == 0 { "In Progress" } else { "Done" },
        })
        .collect();

    let header = Header::new(["Title", "Description", "Status"])
        .with_style("header")
        .with_cell_style("cell");

    let mut viewport = Viewport::new(50, 20, tickets)
        .expect("valid geometry")
        .with_style("list")
        .with_row_style("row");

    let titles: Vec<&str> = header.titles().iter().map(String::as_str).collect();
    println!("{}", titles.join(" | "));

    for offset in [0u64, 250, 10_000, 9_999_999] {
        viewport.on_scroll(offset);
        let list =
            viewport.render_with(|t, _| format!("{} | {} | {}", t.title, t.description, t.status));
        println!(
            "\nscroll={}px spacer={}px rows {}..{}",
            viewport.scroll_offset(),
            list.spacer_extent,
            list.rows.first().map_or(0, |r| r.index),
            list.rows.last().map_or(0, |r| r.index + 1),
        );
        for row in list.rows.iter().take(3) {
            println!("  [{:>6}px] {}", row.top, row.content);
        }
        if list.rows.len() > 3 {
            println!("  ... {} more rows", list.rows.len() - 3);
        }
    }
}
