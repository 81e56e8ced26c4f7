/// Species tag of a cell.
///
/// The discriminants are the bulk-load codebook: matrices passed to
/// [`Grid::initialize`](crate::Grid::initialize) and
/// [`Grid::snapshot`](crate::Grid::snapshot) carry one code per cell.
/// A new species extends the enum and the codebook together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Identity {
    #[default]
    Inactive = 0,
    Live = 1,
    Fire = 2,
    Water = 3,
}

impl Identity {
    /// Number of species in the codebook.
    pub const COUNT: usize = 4;

    pub const ALL: [Self; Self::COUNT] = [Self::Inactive, Self::Live, Self::Fire, Self::Water];

    /// Decodes a codebook value; `None` for codes outside the codebook.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Inactive),
            1 => Some(Self::Live),
            2 => Some(Self::Fire),
            3 => Some(Self::Water),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
