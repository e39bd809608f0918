//! Die types and face definitions.

use core::fmt;

use rand::Rng;

/// Number of faces on every die.
pub const FACES_PER_DIE: usize = 6;

/// Outcome shown by a rolled die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// The zombie ate a brain.
    Brain,
    /// The victim fought back.
    Shot,
    /// The victim escaped (footprints).
    Run,
}

impl Face {
    /// Parses a face from its configuration symbol (`b`, `s` or `f`).
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'b' => Some(Self::Brain),
            's' => Some(Self::Shot),
            'f' => Some(Self::Run),
            _ => None,
        }
    }

    /// Returns the configuration symbol for this face.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Brain => 'b',
            Self::Shot => 's',
            Self::Run => 'f',
        }
    }
}

/// Die color, which determines its odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieType {
    /// Green die, brain-heavy.
    Weak,
    /// Yellow die, balanced.
    Tough,
    /// Red die, shot-heavy.
    Strong,
}

impl DieType {
    /// All die types in configuration order.
    pub const ALL: [Self; 3] = [Self::Weak, Self::Tough, Self::Strong];

    /// Returns the configuration key prefix (`weak`, `tough` or `strong`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Tough => "tough",
            Self::Strong => "strong",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Weak => 0,
            Self::Tough => 1,
            Self::Strong => 2,
        }
    }
}

/// The six faces of a die, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Faces(pub [Face; FACES_PER_DIE]);

impl Faces {
    /// Parses a face sequence such as `"bbbffs"`.
    ///
    /// Returns `None` unless the input is exactly six characters drawn
    /// from `b`, `s` and `f`.
    #[must_use]
    pub fn parse(symbols: &str) -> Option<Self> {
        let mut faces = [Face::Run; FACES_PER_DIE];
        let mut count = 0;

        for symbol in symbols.chars() {
            let slot = faces.get_mut(count)?;
            *slot = Face::from_symbol(symbol)?;
            count += 1;
        }

        (count == FACES_PER_DIE).then_some(Self(faces))
    }

    /// Returns the number of faces showing the given outcome.
    #[must_use]
    pub fn count(&self, face: Face) -> usize {
        self.0.iter().filter(|&&f| f == face).count()
    }
}

impl fmt::Display for Faces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.0 {
            write!(f, "{}", face.symbol())?;
        }
        Ok(())
    }
}

/// A single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    kind: DieType,
    faces: Faces,
    face: Option<Face>,
}

impl Die {
    /// Creates a new, unrolled die.
    #[must_use]
    pub const fn new(kind: DieType, faces: Faces) -> Self {
        Self {
            kind,
            faces,
            face: None,
        }
    }

    /// Returns the die type.
    #[must_use]
    pub const fn kind(&self) -> DieType {
        self.kind
    }

    /// Returns the face sequence.
    #[must_use]
    pub const fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Returns the face showing after the last roll, if rolled.
    #[must_use]
    pub const fn face(&self) -> Option<Face> {
        self.face
    }

    /// Rolls the die, picking one of its faces uniformly.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Face {
        let face = self.faces.0[rng.random_range(0..FACES_PER_DIE)];
        self.face = Some(face);
        face
    }
}
