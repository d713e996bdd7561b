/// Append-only record of every line read, one entry per read cycle.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
    }

    /// Visits entries in order with their 1-based sequence number.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(usize, &str),
    {
        for (idx, line) in self.entries.iter().enumerate() {
            f(idx + 1, line);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
