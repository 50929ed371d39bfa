use itertools::Itertools;

/// A property path split into its tokens.
///
/// Splitting never fails: `""` is a single empty token and the separator
/// cannot be escaped, so `"a..b"` is `["a", "", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    tokens: Vec<&'a str>,
    separator: char,
}

/// One position of a walk along a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub index: usize,
    pub token: &'a str,
    pub is_last: bool,
}

impl<'a> Path<'a> {
    pub fn parse(input: &'a str, separator: char) -> Self {
        Self {
            tokens: input.split(separator).collect(),
            separator,
        }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn steps(&self) -> impl Iterator<Item = Step<'a>> + '_ {
        let last = self.tokens.len() - 1;
        self.tokens.iter().enumerate().map(move |(index, token)| Step {
            index,
            token: *token,
            is_last: index == last,
        })
    }

    /// The path up to and including token `index`, joined back with the separator.
    pub fn prefix(&self, index: usize) -> String {
        let end = (index + 1).min(self.tokens.len());
        self.tokens[..end].iter().join(&self.separator.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_separator() {
        let p = Path::parse("a.b.c", '.');
        assert_eq!(p.tokens(), &["a", "b", "c"]);
    }

    #[test]
    fn empty_input_is_one_empty_token() {
        let p = Path::parse("", '.');
        assert_eq!(p.tokens(), &[""]);
        assert_eq!(p.tokens().len(), 1);
    }

    #[test]
    fn no_escaping_of_separator() {
        let p = Path::parse("a..b", '.');
        assert_eq!(p.tokens(), &["a", "", "b"]);
    }

    #[test]
    fn custom_separator_keeps_dots() {
        let p = Path::parse("service.name/version", '/');
        assert_eq!(p.tokens(), &["service.name", "version"]);
    }

    #[test]
    fn only_the_final_step_is_last() {
        let p = Path::parse("x.y.z", '.');
        let flags: Vec<bool> = p.steps().map(|s| s.is_last).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn prefix_rejoins_tokens() {
        let p = Path::parse("a/b/c", '/');
        assert_eq!(p.prefix(0), "a");
        assert_eq!(p.prefix(1), "a/b");
        assert_eq!(p.prefix(9), "a/b/c");
    }
}
