// Enharmonic spelling: the other name for a black key, and the sharp/flat
// names that share a natural's letter.
//
// `alternative_name` is an involution. Naturals are its fixed points because
// the model has no B♯/C♭/E♯/F♭ spellings.

use crate::note::{Natural, NoteName};

impl NoteName {
    /// The other spelling of the same pitch class, or `self` for a natural.
    ///
    /// ```
    /// use randnote_core::note::NoteName;
    /// assert_eq!(NoteName::CSharp.alternative_name(), NoteName::DFlat);
    /// assert_eq!(NoteName::C.alternative_name(), NoteName::C);
    /// ```
    pub fn alternative_name(self) -> NoteName {
        match self {
            NoteName::AFlat => NoteName::GSharp,
            NoteName::ASharp => NoteName::BFlat,
            NoteName::BFlat => NoteName::ASharp,
            NoteName::CSharp => NoteName::DFlat,
            NoteName::DFlat => NoteName::CSharp,
            NoteName::DSharp => NoteName::EFlat,
            NoteName::EFlat => NoteName::DSharp,
            NoteName::FSharp => NoteName::GFlat,
            NoteName::GFlat => NoteName::FSharp,
            NoteName::GSharp => NoteName::AFlat,

            NoteName::A
            | NoteName::B
            | NoteName::C
            | NoteName::D
            | NoteName::E
            | NoteName::F
            | NoteName::G => self,
        }
    }
}

impl Natural {
    /// The sharp spelled with this letter. `None` for B and E.
    pub fn sharp(self) -> Option<NoteName> {
        match self {
            Natural::A => Some(NoteName::ASharp),
            Natural::C => Some(NoteName::CSharp),
            Natural::D => Some(NoteName::DSharp),
            Natural::F => Some(NoteName::FSharp),
            Natural::G => Some(NoteName::GSharp),
            Natural::B | Natural::E => None,
        }
    }

    /// The flat spelled with this letter. `None` for C and F.
    pub fn flat(self) -> Option<NoteName> {
        match self {
            Natural::A => Some(NoteName::AFlat),
            Natural::B => Some(NoteName::BFlat),
            Natural::D => Some(NoteName::DFlat),
            Natural::E => Some(NoteName::EFlat),
            Natural::G => Some(NoteName::GFlat),
            Natural::C | Natural::F => None,
        }
    }
}
