/*
    Two-channel base calling
        every base is read by a red and a green laser
        G -> neither laser
        T -> green only
        C -> red only
        A -> both lasers
*/

/// Nucleotide accepted in an index sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

/// Laser triggers caused by a single base. Each channel is 0 or 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Activation {
    pub red: u8,
    pub green: u8,
}

impl Base {
    /// Red/green activation of this base under the two-channel chemistry.
    pub const fn activation(self) -> Activation {
        match self {
            Base::G => Activation { red: 0, green: 0 },
            Base::T => Activation { red: 0, green: 1 },
            Base::C => Activation { red: 1, green: 0 },
            Base::A => Activation { red: 1, green: 1 },
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            other => Err(other),
        }
    }
}
