use crate::finder::Match;

/// Wrap-around cursor over the matches of one completed search.
///
/// A navigator is built once per search and replaced, never updated in
/// place, when a new search finishes. Navigation on an empty list is a
/// no-op rather than an error.
#[derive(Debug, Clone, Default)]
pub struct MatchNavigator {
    matches: Vec<Match>,
    current: Option<usize>,
}

impl MatchNavigator {
    /// Starts positioned on the first match when the list is non-empty.
    pub fn new(matches: Vec<Match>) -> Self {
        let current = if matches.is_empty() { None } else { Some(0) };
        Self { matches, current }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// The focused match, without moving.
    pub fn current(&self) -> Option<&Match> {
        self.current.and_then(|i| self.matches.get(i))
    }

    /// 1-based position of the focused match, for "n of m" displays.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current.map(|i| (i + 1, self.matches.len()))
    }

    pub fn first(&mut self) -> Option<&Match> {
        if self.matches.is_empty() {
            return None;
        }
        self.current = Some(0);
        self.matches.first()
    }

    pub fn next(&mut self) -> Option<&Match> {
        if self.matches.is_empty() {
            return None;
        }
        let next_index = match self.current {
            Some(i) => (i + 1) % self.matches.len(),
            None => 0,
        };
        self.current = Some(next_index);
        self.matches.get(next_index)
    }

    pub fn previous(&mut self) -> Option<&Match> {
        if self.matches.is_empty() {
            return None;
        }
        let prev_index = match self.current {
            Some(i) => {
                if i == 0 {
                    self.matches.len() - 1
                } else {
                    i - 1
                }
            }
            None => self.matches.len() - 1,
        };
        self.current = Some(prev_index);
        self.matches.get(prev_index)
    }
}
