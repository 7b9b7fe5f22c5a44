use std::rc::Rc;

use crate::flag::{Flag, FlagState, ValueFlag};
use crate::interface::{ConsoleInterface, UserInterface};
use crate::matcher::Scanner;
use crate::printer::{Printer, UsageEntry};
use crate::value::FlagValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The owner of all declared flags.
///
/// A `FlagSet` is built over the raw argument vector (the token at index `0` is the program
/// name and never participates in matching).
/// Declaration and matching are fused: each `add_*` call scans the full token list exactly
/// once, settles the flag's state, and returns a queryable handle.
/// Errors accumulate — on the offending flag and on this set's aggregate — instead of
/// interrupting the declarations; poll [`FlagSet::is_valid`] once all flags are declared.
///
/// ### Example
/// ```
/// use monodash::FlagSet;
///
/// let mut set = FlagSet::new(
///     vec!["program", "-i", "in.txt", "-s", ".558", ".558", "0.89"],
///     "An example program.",
/// );
/// let input = set.add_value_flag::<String, 1>('i', "Input file", true);
/// let spacing = set.add_value_flag::<f64, 3>('s', "Spacing: x y z", true);
/// let help = set.add_flag('h', "Display a brief help", false);
///
/// assert!(set.is_valid());
/// assert!(!help.exists());
/// assert_eq!(input.value(0), "in.txt");
/// assert_eq!(spacing.values(), &[0.558, 0.558, 0.89]);
/// ```
pub struct FlagSet {
    tokens: Vec<String>,
    description: String,
    entries: Vec<UsageEntry>,
    error: bool,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl FlagSet {
    /// Build a flag set over the process argument vector (`std::env::args`).
    pub fn from_env(description: impl Into<String>) -> Self {
        Self::new(std::env::args(), description)
    }

    /// Build a flag set over an explicit token list.
    ///
    /// The token at index `0` is taken to be the program name: it is excluded from matching
    /// and re-used in the usage message.
    pub fn new<I, S>(tokens: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_io(
            tokens,
            description,
            Printer::terminal(),
            Box::new(ConsoleInterface::default()),
        )
    }

    pub(crate) fn with_io<I, S>(
        tokens: I,
        description: impl Into<String>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            description: description.into(),
            entries: Vec::default(),
            error: false,
            printer,
            user_interface,
        }
    }

    /// Declare a plain boolean switch and match it against the token list.
    ///
    /// Any option statement carrying the identifier after its leading dash marks the flag
    /// present, so switches may be concatenated (`-vV` matches both `v` and `V`).
    /// A required switch that never appears records an error; no other error is possible for
    /// a plain switch.
    ///
    /// Identifier uniqueness across declarations is the caller's responsibility.
    ///
    /// ### Example
    /// ```
    /// use monodash::FlagSet;
    ///
    /// let mut set = FlagSet::new(vec!["program", "-vV"], "");
    /// let verbose = set.add_flag('v', "Verbose output", false);
    /// let version = set.add_flag('V', "Display version", false);
    ///
    /// assert!(verbose.exists());
    /// assert!(version.exists());
    /// ```
    pub fn add_flag(
        &mut self,
        identifier: char,
        description: impl Into<String>,
        required: bool,
    ) -> Flag {
        let mut state = FlagState::new(identifier, description, required);
        let scanner = Scanner::new(&self.tokens);

        if scanner.switch_present(identifier) {
            state.present = true;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched switch '-{identifier}'.");
            }
        }

        if state.required && !state.present {
            state.error = true;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Required switch '-{identifier}' is absent.");
            }
        }

        self.register(&state, 0);
        Flag::new(Rc::new(state))
    }

    /// Declare a flag that consumes `N` typed trailing tokens and match it against the token
    /// list.
    ///
    /// Unlike a plain switch, the identifier must sit immediately after the dash (`-s`); value
    /// flags do not participate in concatenation since they consume trailing tokens.
    /// On a match the next `N` tokens are converted via [`FlagValue`] into the value slots.
    /// An error is recorded when fewer than `N` tokens remain (no conversion is attempted),
    /// when any single conversion fails (the remaining slots are still attempted), or when a
    /// required flag never appears.
    /// The value tokens must immediately follow the flag's statement; when the statement
    /// repeats, later occurrences overwrite the slots.
    ///
    /// ### Example
    /// ```
    /// use monodash::FlagSet;
    ///
    /// let mut set = FlagSet::new(vec!["program", "-e", "0", "127", "0", "127"], "");
    /// let extent = set.add_value_flag::<i64, 4>('e', "Extent: xmin xmax ymin ymax", true);
    ///
    /// assert!(set.is_valid());
    /// assert_eq!(extent.values(), &[0, 127, 0, 127]);
    /// ```
    pub fn add_value_flag<T, const N: usize>(
        &mut self,
        identifier: char,
        description: impl Into<String>,
        required: bool,
    ) -> ValueFlag<T, N>
    where
        T: FlagValue,
    {
        let mut state = FlagState::new(identifier, description, required);
        let mut values: [T; N] = std::array::from_fn(|_| T::default());
        let scanner = Scanner::new(&self.tokens);

        for site in scanner.value_sites(identifier, N) {
            state.present = true;

            match site {
                Some(trailing) => {
                    for (slot, token) in trailing.iter().enumerate() {
                        match T::convert(token) {
                            Ok(value) => values[slot] = value,
                            Err(_error) => {
                                state.error = true;

                                #[cfg(feature = "tracing_debug")]
                                {
                                    debug!("Flag '-{identifier}' slot {slot}: {_error}");
                                }
                            }
                        }
                    }
                }
                None => {
                    state.error = true;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Flag '-{identifier}' is missing trailing tokens (arity {arity}).",
                            arity = N
                        );
                    }
                }
            }
        }

        if state.required && !state.present {
            state.error = true;
        }

        self.register(&state, N);
        ValueFlag::new(Rc::new(state), Rc::new(values))
    }

    // Append the declaration-order snapshot for usage rendering and fold the flag's error into
    // the aggregate (monotone: false -> true only).
    fn register(&mut self, state: &FlagState, arity: usize) {
        self.entries.push(UsageEntry {
            identifier: state.identifier,
            description: state.description.clone(),
            required: state.required,
            error: state.error,
            arity,
        });
        self.error |= state.error;
    }

    /// Whether every declared flag matched cleanly.
    ///
    /// `false` as soon as any declaration records an error: a required flag was absent, a
    /// value flag was short of trailing tokens, or a conversion failed.
    /// With no flags declared, the set is trivially valid.
    pub fn is_valid(&self) -> bool {
        !self.error
    }

    /// Replace the banner description.
    /// Takes effect on any subsequent usage rendering.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Render the usage message.
    ///
    /// Deterministic over the declared flags' settled state, the banner description, and the
    /// printer width.
    pub fn usage(&self) -> String {
        self.printer
            .render(self.program(), &self.description, &self.entries)
    }

    /// Write the usage message to the user interface (stdout by default).
    pub fn print_usage(&self) {
        self.user_interface.print(self.usage());
    }

    fn program(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }
}

impl std::fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field("tokens", &self.tokens)
            .field("declared", &self.entries.len())
            .field("error", &self.error)
            .finish()
    }
}
