//! Game configuration options.

use crate::die::{DieType, Face, Faces};

/// Default number of brains needed to win.
pub const DEFAULT_BRAINS_TO_WIN: usize = 13;

/// One row of the dice table: how many dice of a type go into the bag and
/// which faces they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieSpec {
    /// The die type.
    pub kind: DieType,
    /// Number of dice of this type.
    pub count: usize,
    /// Face sequence shared by every die of this type.
    pub faces: Faces,
}

/// Configuration options for a Zombie Dice game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use zombie_dice::{DieType, GameOptions};
///
/// let options = GameOptions::default()
///     .with_brains_to_win(10)
///     .with_dice(DieType::Strong, 2);
/// assert_eq!(options.total_dice(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Brains a player needs to trigger the end of the game.
    pub brains_to_win: usize,
    /// Dice table, indexed in [`DieType::ALL`] order.
    dice: [DieSpec; 3],
}

impl Default for GameOptions {
    fn default() -> Self {
        use Face::{Brain as B, Run as F, Shot as S};

        Self {
            brains_to_win: DEFAULT_BRAINS_TO_WIN,
            dice: [
                DieSpec {
                    kind: DieType::Weak,
                    count: 6,
                    faces: Faces([B, B, B, F, F, S]),
                },
                DieSpec {
                    kind: DieType::Tough,
                    count: 3,
                    faces: Faces([B, F, F, S, S, S]),
                },
                DieSpec {
                    kind: DieType::Strong,
                    count: 4,
                    faces: Faces([B, B, F, F, S, S]),
                },
            ],
        }
    }
}

impl GameOptions {
    /// Sets the number of brains needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use zombie_dice::GameOptions;
    ///
    /// let options = GameOptions::default().with_brains_to_win(20);
    /// assert_eq!(options.brains_to_win, 20);
    /// ```
    #[must_use]
    pub const fn with_brains_to_win(mut self, brains: usize) -> Self {
        self.brains_to_win = brains;
        self
    }

    /// Sets how many dice of a type go into the bag.
    ///
    /// # Example
    ///
    /// ```
    /// use zombie_dice::{DieType, GameOptions};
    ///
    /// let options = GameOptions::default().with_dice(DieType::Weak, 8);
    /// assert_eq!(options.die(DieType::Weak).count, 8);
    /// ```
    #[must_use]
    pub const fn with_dice(mut self, kind: DieType, count: usize) -> Self {
        self.dice[kind.index()].count = count;
        self
    }

    /// Sets the face sequence for a die type.
    ///
    /// # Example
    ///
    /// ```
    /// use zombie_dice::{DieType, Faces, GameOptions};
    ///
    /// let faces = Faces::parse("bbbbbs").unwrap();
    /// let options = GameOptions::default().with_faces(DieType::Tough, faces);
    /// assert_eq!(options.die(DieType::Tough).faces, faces);
    /// ```
    #[must_use]
    pub const fn with_faces(mut self, kind: DieType, faces: Faces) -> Self {
        self.dice[kind.index()].faces = faces;
        self
    }

    /// Returns the table row for a die type.
    #[must_use]
    pub const fn die(&self, kind: DieType) -> &DieSpec {
        &self.dice[kind.index()]
    }

    /// Returns the whole dice table.
    #[must_use]
    pub const fn dice(&self) -> &[DieSpec; 3] {
        &self.dice
    }

    /// Returns the number of dice a full bag holds.
    #[must_use]
    pub fn total_dice(&self) -> usize {
        self.dice.iter().map(|spec| spec.count).sum()
    }

    /// Applies one named setting.
    ///
    /// Recognized keys are `brains_to_win`, `{weak,tough,strong}_dice` and
    /// `{weak,tough,strong}_die_faces`. Returns `false` when the key is
    /// unknown or the value is malformed; the option keeps its previous
    /// value in that case.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        if key == "brains_to_win" {
            return match parse_count(value) {
                Some(brains) if brains > 0 => {
                    self.brains_to_win = brains;
                    true
                }
                _ => false,
            };
        }

        for kind in DieType::ALL {
            let Some(suffix) = key
                .strip_prefix(kind.key())
                .and_then(|rest| rest.strip_prefix('_'))
            else {
                continue;
            };

            let spec = &mut self.dice[kind.index()];
            match suffix {
                "dice" => {
                    if let Some(count) = parse_count(value) {
                        spec.count = count;
                        return true;
                    }
                }
                "die_faces" => {
                    if let Some(faces) = Faces::parse(value) {
                        spec.faces = faces;
                        return true;
                    }
                }
                _ => {}
            }
            return false;
        }

        false
    }
}

/// Parses a plain run of ASCII digits.
pub(crate) fn parse_count(value: &str) -> Option<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
