//! States and transitions of a deterministic transition table.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use bincode::{Decode, Encode};

// define type alias for state-id and input symbol
pub type StateId = u32;
pub type Symbol = u32;

/// An explicit edge taken on one input symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub struct Transition {
    pub input: Symbol,
    pub to: StateId,
}

impl Transition {
    pub fn new(input: Symbol, to: StateId) -> Self {
        Self { input, to }
    }
}

/// Independent marker bits attached to a [`State`].
///
/// `ACCEPTING` and `REJECTING` are supplied by the caller. `REACHABLE` and
/// `REPRESENTATIVE` are recomputed during minimization and ignored on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Encode, Decode)]
pub struct StateFlags(u8);

impl StateFlags {
    pub const NONE: Self = Self(0);
    pub const ACCEPTING: Self = Self(0x1);
    pub const REJECTING: Self = Self(0x2);
    pub const REACHABLE: Self = Self(0x4);
    pub const REPRESENTATIVE: Self = Self(0x8);

    const COMPUTED: Self = Self(Self::REACHABLE.0 | Self::REPRESENTATIVE.0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub const fn is_accepting(self) -> bool {
        self.contains(Self::ACCEPTING)
    }

    pub const fn is_rejecting(self) -> bool {
        self.contains(Self::REJECTING)
    }

    /// The caller-supplied part of the flags, with computed bits cleared.
    pub const fn semantic(self) -> Self {
        Self(self.0 & !Self::COMPUTED.0)
    }
}

impl BitOr for StateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for StateFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for StateFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct State {
    pub id: StateId,
    /// Target for every input without an explicit transition.
    pub default_to: StateId,
    pub transitions: Vec<Transition>,
    pub flags: StateFlags,
}

impl State {
    pub fn new(id: StateId, default_to: StateId, flags: StateFlags) -> Self {
        Self {
            id,
            default_to,
            transitions: Vec::new(),
            flags,
        }
    }

    /// Appends an explicit transition, builder style.
    pub fn on(mut self, input: Symbol, to: StateId) -> Self {
        self.transitions.push(Transition::new(input, to));
        self
    }

    pub fn with_transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// The state reached on `input`. When several transitions share the input,
    /// the first declared one wins.
    pub fn target(&self, input: Symbol) -> StateId {
        self.transitions
            .iter()
            .find(|tr| tr.input == input)
            .map_or(self.default_to, |tr| tr.to)
    }

    pub fn is_accepting(&self) -> bool {
        self.flags.is_accepting()
    }

    pub fn is_rejecting(&self) -> bool {
        self.flags.is_rejecting()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{:#04x}] _ -> {}", self.id, self.flags.bits(), self.default_to)?;
        for tr in &self.transitions {
            write!(f, ", {} -> {}", tr.input, tr.to)?;
        }
        Ok(())
    }
}
