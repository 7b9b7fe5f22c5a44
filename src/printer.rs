use terminal_size::{terminal_size, Width};

pub(crate) const DEFAULT_WIDTH: usize = 80;

#[derive(Debug)]
pub(crate) struct TotalWidth(pub(crate) usize);

/// Snapshot of a declared flag, taken at declaration time, in declaration order.
/// This is everything usage rendering needs; `arity` is `0` for a plain switch.
#[derive(Debug)]
pub(crate) struct UsageEntry {
    pub(crate) identifier: char,
    pub(crate) description: String,
    pub(crate) required: bool,
    pub(crate) error: bool,
    pub(crate) arity: usize,
}

impl UsageEntry {
    /// The command template fragment: ` [-c]`, or ` [-c x .. x]` with one `x` per arity slot.
    fn template(&self) -> String {
        let mut fragment = format!(" [-{}", self.identifier);
        for _ in 0..self.arity {
            fragment.push_str(" x");
        }
        fragment.push(']');
        fragment
    }

    /// The per-flag detail line; erroneous flags are marked with a leading `*`.
    fn detail(&self) -> String {
        let marker = if self.error { " *\t" } else { "\t" };
        let requirement = if self.required { "Required" } else { "Optional" };
        format!(
            "{marker}-{identifier} : {description} ({requirement}).",
            identifier = self.identifier,
            description = self.description,
        )
    }
}

/// Renders the usage message from declaration-time state.
/// Pure presentation; performs no matching logic.
pub(crate) struct Printer {
    width: TotalWidth,
}

impl Printer {
    /// A printer sized to the current terminal, falling back to 80 columns.
    pub(crate) fn terminal() -> Self {
        match terminal_size() {
            Some((Width(width), _)) => Self::new(TotalWidth(width as usize)),
            None => Self::new(TotalWidth(DEFAULT_WIDTH)),
        }
    }

    pub(crate) fn new(width: TotalWidth) -> Self {
        Self { width }
    }

    /// Render the full usage message.
    /// The output is deterministic over `program`, `about`, the entries, and this printer's
    /// width.
    pub(crate) fn render(&self, program: &str, about: &str, entries: &[UsageEntry]) -> String {
        let mut lines: Vec<String> = Vec::default();
        lines.push(format!("Utility {program}:"));
        lines.push(String::default());

        if !about.is_empty() {
            lines.extend(wrap_paragraph(about, self.width.0));
            lines.push(String::default());
        }

        lines.push("Usage:".to_string());
        let mut template = format!(" [shell]$ {program}");

        for entry in entries {
            template.push_str(&entry.template());
        }

        lines.push(template);
        lines.push(String::default());

        for entry in entries {
            lines.push(entry.detail());
        }

        lines.push("* indicate(s) wrong argument(s).".to_string());
        lines.join("\n")
    }
}

/// Greedy word wrap, hyphenating words longer than the width.
fn wrap_paragraph(paragraph: &str, width: usize) -> Vec<String> {
    // A width of 1 leaves no room to hyphenate.
    let width = std::cmp::max(width, 2);
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = String::default();
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let mut left = 0;

    while left + width < word.len() {
        lines.push(format!("{}-", &word[left..left + increment]));
        left += increment;
    }

    current.push_str(&word[left..]);
}
