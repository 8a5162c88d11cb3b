//! Text modifiers (bold, underline etc.) and their sets.

use core::{fmt, ops};

/// Text attribute switched on and off by a pair of SGR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Resets all attributes.
    Reset,
    /// Bold or increased intensity.
    Bold,
    /// Faint or decreased intensity (aka dim).
    Faint,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Swapped foreground and background colors.
    Reverse,
    /// Hidden text.
    Conceal,
    /// Crossed-out text (aka strikethrough).
    CrossedOut,
}

impl Modifier {
    /// All modifiers in the declaration order, which is also the order their codes are emitted in.
    pub const ALL: [Self; 8] = [
        Self::Reset,
        Self::Bold,
        Self::Faint,
        Self::Italic,
        Self::Underline,
        Self::Reverse,
        Self::Conceal,
        Self::CrossedOut,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Returns the SGR code switching this modifier on.
    pub const fn open_code(self) -> &'static str {
        match self {
            Self::Reset => "\u{1b}[0m",
            Self::Bold => "\u{1b}[1m",
            Self::Faint => "\u{1b}[2m",
            Self::Italic => "\u{1b}[3m",
            Self::Underline => "\u{1b}[4m",
            Self::Reverse => "\u{1b}[7m",
            Self::Conceal => "\u{1b}[8m",
            Self::CrossedOut => "\u{1b}[9m",
        }
    }

    /// Returns the SGR code switching this modifier off.
    pub const fn close_code(self) -> &'static str {
        match self {
            Self::Reset => "\u{1b}[0m",
            // `21` is doubly underlined text in ECMA-48, so normal intensity is used instead.
            Self::Bold | Self::Faint => "\u{1b}[22m",
            Self::Italic => "\u{1b}[23m",
            Self::Underline => "\u{1b}[24m",
            Self::Reverse => "\u{1b}[27m",
            Self::Conceal => "\u{1b}[28m",
            Self::CrossedOut => "\u{1b}[29m",
        }
    }

    /// Returns the canonical name of this modifier as used in style specs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Bold => "bold",
            Self::Faint => "faint",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Reverse => "reverse",
            Self::Conceal => "conceal",
            Self::CrossedOut => "crossed-out",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "reset" => Self::Reset,
            "bold" | "b" => Self::Bold,
            "faint" | "dim" | "dimmed" => Self::Faint,
            "italic" | "i" => Self::Italic,
            "underline" | "ul" | "u" => Self::Underline,
            "reverse" | "invert" | "inv" => Self::Reverse,
            "conceal" | "hidden" | "hide" => Self::Conceal,
            "crossed-out" | "strikethrough" | "strike" | "s" => Self::CrossedOut,
            _ => return None,
        })
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Set of [`Modifier`]s.
///
/// Stored as a bitmask, so iteration always follows the declaration order of `Modifier`
/// regardless of the insertion order.
///
/// # Examples
///
/// ```
/// use term_chalk::{Modifier, Modifiers};
///
/// let modifiers = Modifiers::new()
///     .insert(Modifier::Underline)
///     .insert(Modifier::Bold)
///     .insert(Modifier::Underline);
/// assert_eq!(modifiers.len(), 2);
/// let all: Vec<_> = modifiers.iter().collect();
/// assert_eq!(all, [Modifier::Bold, Modifier::Underline]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Checks whether this set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of modifiers in this set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks whether this set contains the specified modifier.
    pub const fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    /// Adds a modifier to this set. Adding a modifier already in the set is a no-op.
    pub const fn insert(self, modifier: Modifier) -> Self {
        Self(self.0 | modifier.bit())
    }

    /// Removes a modifier from this set.
    pub const fn remove(self, modifier: Modifier) -> Self {
        Self(self.0 & !modifier.bit())
    }

    /// Iterates over the modifiers in this set in the declaration order.
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL
            .into_iter()
            .filter(move |&modifier| self.contains(modifier))
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        Self::new().insert(modifier)
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::insert)
    }
}

impl ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOr<Modifier> for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Modifier) -> Self {
        self.insert(rhs)
    }
}
