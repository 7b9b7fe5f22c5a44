/// Read-only view over the raw argument vector which answers the matching questions posed by
/// flag declarations.
///
/// The token at index `0` is the program name and never participates in matching.
pub(crate) struct Scanner<'a> {
    tokens: &'a [String],
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(tokens: &'a [String]) -> Self {
        Self { tokens }
    }

    /// Iterate the option statements: tokens whose first character is `-`.
    fn statements(&self) -> impl Iterator<Item = (usize, &'a String)> {
        self.tokens
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, token)| token.starts_with('-'))
    }

    /// A switch matches when any option statement carries the identifier anywhere after the
    /// leading dash (so `-vV` matches both `v` and `V`).
    pub(crate) fn switch_present(&self, identifier: char) -> bool {
        self.statements()
            .any(|(_, token)| token[1..].contains(identifier))
    }

    /// Find every option statement whose second character equals the identifier, paired with its
    /// trailing value tokens.
    ///
    /// Value flags deliberately do not participate in concatenation — the identifier must sit
    /// immediately after the dash.
    /// Each site resolves to `Some` slice of exactly `arity` tokens immediately following the
    /// statement, or `None` when the token list ends before supplying them all.
    pub(crate) fn value_sites(&self, identifier: char, arity: usize) -> Vec<Option<&'a [String]>> {
        self.statements()
            .filter(|(_, token)| token.chars().nth(1) == Some(identifier))
            .map(|(index, _)| {
                if index + arity >= self.tokens.len() {
                    None
                } else {
                    Some(&self.tokens[index + 1..=index + arity])
                }
            })
            .collect()
    }
}
