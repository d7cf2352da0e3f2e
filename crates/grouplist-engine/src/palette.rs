use grouplist_types::{GroupId, Rgb};

/// Accent used when a group id has no palette slot (non-positive ids).
pub const NEUTRAL_ACCENT: Rgb = Rgb::from_hex(0x888888);

const DEFAULT_ACCENTS: [Rgb; 6] = [
    Rgb::from_hex(0xB0D9FF), // light blue
    Rgb::from_hex(0xC8FFB0), // light green
    Rgb::from_hex(0xFFF7B0), // light yellow
    Rgb::from_hex(0xFFB0D9), // light pink
    Rgb::from_hex(0xB0FFFF), // light cyan
    Rgb::from_hex(0xE0B0FF), // light purple
];

/// Fixed, ordered set of group accents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    accents: Vec<Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accents: DEFAULT_ACCENTS.to_vec(),
        }
    }
}

impl Palette {
    /// Palette with custom accents. An empty list yields a palette where
    /// every group gets [`NEUTRAL_ACCENT`].
    pub fn new(accents: Vec<Rgb>) -> Self {
        Self { accents }
    }

    pub fn len(&self) -> usize {
        self.accents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accents.is_empty()
    }

    /// `palette[(group_id - 1) mod N]`, falling back to [`NEUTRAL_ACCENT`]
    /// for group ids below 1.
    pub fn accent_for(&self, group_id: GroupId) -> Rgb {
        if group_id < 1 || self.accents.is_empty() {
            return NEUTRAL_ACCENT;
        }
        let slot = (group_id - 1) % self.accents.len() as i64;
        usize::try_from(slot)
            .ok()
            .and_then(|slot| self.accents.get(slot))
            .copied()
            .unwrap_or(NEUTRAL_ACCENT)
    }
}

/// Accent of a group under the default palette.
pub fn accent_color(group_id: GroupId) -> Rgb {
    Palette::default().accent_for(group_id)
}
