//! Title lookups.
//!
//! Titles are matched case-insensitively with SQL `LIKE` semantics: `%`
//! matches any run of characters and `_` matches exactly one.

/// Options for [`EntityStore::find_by_title`](crate::EntityStore::find_by_title).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleQuery {
    /// Match titles starting with the query.
    pub autocomplete: bool,
    /// Also match alternative labels.
    pub include_aliases: bool,
}

impl Default for TitleQuery {
    fn default() -> Self {
        Self {
            autocomplete: false,
            include_aliases: true,
        }
    }
}

impl TitleQuery {
    /// Creates the default query: exact title or alias match.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable prefix matching.
    #[must_use]
    pub fn with_autocomplete(mut self, autocomplete: bool) -> Self {
        self.autocomplete = autocomplete;
        self
    }

    /// Builder method to include or exclude alternative labels.
    #[must_use]
    pub fn with_aliases(mut self, include_aliases: bool) -> Self {
        self.include_aliases = include_aliases;
        self
    }

    /// Compiles `title` into a pattern according to these options.
    #[must_use]
    pub(crate) fn pattern(&self, title: &str) -> LikePattern {
        let mut pattern = LikePattern::new(title);
        if self.autocomplete {
            pattern.chars.push(Token::AnyRun);
        }
        pattern
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Char(char),
    AnyOne,
    AnyRun,
}

/// A compiled, case-insensitive `LIKE` pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LikePattern {
    chars: Vec<Token>,
}

impl LikePattern {
    pub(crate) fn new(pattern: &str) -> Self {
        let chars = pattern
            .chars()
            .flat_map(char::to_lowercase)
            .map(|c| match c {
                '%' => Token::AnyRun,
                '_' => Token::AnyOne,
                c => Token::Char(c),
            })
            .collect();
        Self { chars }
    }

    /// Returns true if `text` matches the whole pattern.
    pub(crate) fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();

        // Greedy matching with backtracking to the last `%`.
        let (mut p, mut t) = (0, 0);
        let mut backtrack: Option<(usize, usize)> = None;
        while t < text.len() {
            match self.chars.get(p) {
                Some(Token::AnyRun) => {
                    backtrack = Some((p, t));
                    p += 1;
                }
                Some(Token::AnyOne) => {
                    p += 1;
                    t += 1;
                }
                Some(Token::Char(c)) if *c == text[t] => {
                    p += 1;
                    t += 1;
                }
                _ => match backtrack {
                    Some((bp, bt)) => {
                        p = bp + 1;
                        t = bt + 1;
                        backtrack = Some((bp, bt + 1));
                    }
                    None => return false,
                },
            }
        }
        self.chars[p..].iter().all(|token| *token == Token::AnyRun)
    }
}
