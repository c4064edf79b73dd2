use alloc::string::String;
use alloc::vec::Vec;

/// A static row of column titles composed above a viewport.
///
/// Stateless and free of algorithmic content; it exists so a list can carry
/// labeled columns. The optional container and per-cell hooks of
/// caller-chosen type `S` are carried through to the output untouched, the
/// same way the viewport treats its style hooks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header<S = ()> {
    titles: Vec<String>,
    style: Option<S>,
    cell_style: Option<S>,
}

impl<S> Header<S> {
    pub fn new(titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            style: None,
            cell_style: None,
        }
    }

    pub fn with_style(mut self, style: S) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_cell_style(mut self, cell_style: S) -> Self {
        self.cell_style = Some(cell_style);
        self
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn style(&self) -> Option<&S> {
        self.style.as_ref()
    }

    pub fn cell_style(&self) -> Option<&S> {
        self.cell_style.as_ref()
    }

    pub fn for_each_cell<'a>(&'a self, mut f: impl FnMut(HeaderCell<'a, S>)) {
        for (index, title) in self.titles.iter().enumerate() {
            f(HeaderCell {
                index,
                title,
                style: self.cell_style.as_ref(),
            });
        }
    }

    /// Collects the cells in column order.
    pub fn cells(&self) -> Vec<HeaderCell<'_, S>> {
        let mut out = Vec::with_capacity(self.titles.len());
        self.for_each_cell(|cell| out.push(cell));
        out
    }
}

/// One header cell: a column title plus the pass-through cell hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderCell<'a, S = ()> {
    pub index: usize,
    pub title: &'a str,
    pub style: Option<&'a S>,
}
