//! Search box state for the landing page.

/// Popular ticker shortcuts shown under the search box.
pub const POPULAR_SYMBOLS: [&str; 6] = ["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "TSLA"];

/// State of the stub search box.
///
/// Searching is not wired to any data source; submitting only records a
/// placeholder status message with the query.
#[derive(Debug, Default)]
pub struct SearchBox {
    /// Current input text.
    pub input: String,
    /// Whether keystrokes go to the input.
    pub focused: bool,
    /// Status line text from the last submit.
    pub status: Option<String>,
    /// Highlighted popular symbol, cycled with Tab.
    selected: Option<usize>,
}

impl SearchBox {
    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Move the highlight to the next popular symbol, wrapping around,
    /// and copy it into the input.
    pub fn cycle_popular(&mut self) {
        let next = match self.selected {
            None => 0,
            Some(i) => (i + 1) % POPULAR_SYMBOLS.len(),
        };
        self.selected = Some(next);
        self.input = POPULAR_SYMBOLS[next].to_string();
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Submit the current query, if any. Trims whitespace; an empty
    /// query is ignored.
    pub fn submit(&mut self) -> Option<String> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.status = Some(format!("Searching for {query}… search is coming soon"));
        Some(query)
    }
}
