use std::rc::Rc;

use crate::value::FlagValue;

/// The state shared by every flag kind.
///
/// Mutable only during the declaration scan; frozen behind `Rc` once the owning
/// [`FlagSet`](crate::FlagSet) hands out the query handle.
#[derive(Debug)]
pub(crate) struct FlagState {
    pub(crate) identifier: char,
    pub(crate) description: String,
    pub(crate) required: bool,
    pub(crate) present: bool,
    pub(crate) error: bool,
}

impl FlagState {
    pub(crate) fn new(identifier: char, description: impl Into<String>, required: bool) -> Self {
        Self {
            identifier,
            description: description.into(),
            required,
            present: false,
            error: false,
        }
    }
}

/// A declared boolean switch.
///
/// Handle returned by [`FlagSet::add_flag`](crate::FlagSet::add_flag); clones share the same
/// underlying state.
/// The state is settled at declaration time and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Flag {
    state: Rc<FlagState>,
}

impl Flag {
    pub(crate) fn new(state: Rc<FlagState>) -> Self {
        Self { state }
    }

    /// The single-character key this flag was declared under.
    pub fn identifier(&self) -> char {
        self.state.identifier
    }

    /// Whether the flag appeared in the token list.
    pub fn exists(&self) -> bool {
        self.state.present
    }

    /// Whether the flag was declared required.
    pub fn is_required(&self) -> bool {
        self.state.required
    }

    /// Whether matching recorded an error for this flag.
    /// For a plain switch the only possible error is required-but-absent.
    pub fn has_error(&self) -> bool {
        self.state.error
    }

    /// The human-readable description given at declaration.
    pub fn description(&self) -> &str {
        &self.state.description
    }
}

/// A declared flag that consumes `N` typed trailing tokens.
///
/// Handle returned by [`FlagSet::add_value_flag`](crate::FlagSet::add_value_flag).
/// The value slots always number exactly `N`; slots left untouched by matching hold
/// `T::default()`.
/// When [`ValueFlag::has_error`] is true the slot contents are contractually unusable —
/// a failed match may leave partial values behind.
#[derive(Debug, Clone)]
pub struct ValueFlag<T, const N: usize> {
    state: Rc<FlagState>,
    values: Rc<[T; N]>,
}

impl<T: FlagValue, const N: usize> ValueFlag<T, N> {
    pub(crate) fn new(state: Rc<FlagState>, values: Rc<[T; N]>) -> Self {
        Self { state, values }
    }

    /// The single-character key this flag was declared under.
    pub fn identifier(&self) -> char {
        self.state.identifier
    }

    /// Whether the flag appeared in the token list.
    pub fn exists(&self) -> bool {
        self.state.present
    }

    /// Whether the flag was declared required.
    pub fn is_required(&self) -> bool {
        self.state.required
    }

    /// Whether matching recorded an error for this flag: required-but-absent, fewer than `N`
    /// trailing tokens, or a failed conversion.
    pub fn has_error(&self) -> bool {
        self.state.error
    }

    /// The human-readable description given at declaration.
    pub fn description(&self) -> &str {
        &self.state.description
    }

    /// The typed value at the zero-based `slot`.
    ///
    /// Only meaningful when `exists() && !has_error()`.
    ///
    /// ### Panics
    /// When `slot >= N`.
    pub fn value(&self, slot: usize) -> T {
        self.values[slot].clone()
    }

    /// All `N` value slots, in token order.
    pub fn values(&self) -> &[T; N] {
        &self.values
    }
}
