/// Sliding windows over `tokens`, stepped by one.
///
/// The window width is clamped to `tokens.len()`, so a sequence no longer than
/// the window yields itself once. An empty sequence yields nothing.
pub struct ShingleIter<'a, T> {
    tokens: &'a [T],
    window_size: usize,
    position: usize,
}

impl<'a, T> ShingleIter<'a, T> {
    pub fn new(tokens: &'a [T], window_size: usize) -> Self {
        debug_assert!(window_size >= 1);
        Self {
            tokens,
            window_size: window_size.min(tokens.len()),
            position: 0,
        }
    }
}

impl<'a, T> Iterator for ShingleIter<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.tokens.is_empty() || self.tokens.len() < self.position + self.window_size {
            return None;
        }
        let window = &self.tokens[self.position..self.position + self.window_size];
        self.position += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.tokens.is_empty() {
            0
        } else {
            (self.tokens.len() + 1).saturating_sub(self.position + self.window_size)
        };
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for ShingleIter<'a, T> {}
