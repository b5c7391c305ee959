//! Fixed word lists used for name composition.

/// A named, fixed list of candidate words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularySet {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

impl VocabularySet {
    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is one of this set's words (exact match).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }
}

pub const ADJECTIVES: VocabularySet = VocabularySet {
    name: "adjectives",
    words: &[
        "Blue", "Silent", "Golden", "Crimson", "Electric", "Crystal", "Shadow", "Thunder",
        "Mystic", "Cosmic", "Quantum", "Neon", "Phantom", "Titanium", "Obsidian", "Aurora",
        "Vortex", "Zenith", "Nova", "Pulse", "Echo", "Frost", "Blaze", "Storm", "Dawn",
        "Midnight", "Crimson", "Amber", "Jade", "Ruby", "Sapphire", "Emerald", "Diamond",
    ],
};

pub const NOUNS: VocabularySet = VocabularySet {
    name: "nouns",
    words: &[
        "Elephant", "Thunder", "Mountain", "River", "Forest", "Ocean", "Star", "Moon",
        "Phoenix", "Dragon", "Wolf", "Eagle", "Tiger", "Panda", "Falcon", "Whale",
        "Lightning", "Comet", "Galaxy", "Nebula", "Aurora", "Volcano", "Canyon", "Glacier",
        "Tempest", "Horizon", "Summit", "Cascade", "Monsoon", "Tsunami", "Eclipse", "Meteor",
    ],
};

pub const TECH_TERMS: VocabularySet = VocabularySet {
    name: "tech_terms",
    words: &[
        "Quantum", "Neural", "Cyber", "Digital", "Matrix", "Vector", "Pixel", "Byte",
        "Circuit", "Algorithm", "Protocol", "Interface", "Framework", "Engine", "Core",
        "Network", "System", "Platform", "Module", "Component", "Service", "API",
    ],
};

pub const ACTIONS: VocabularySet = VocabularySet {
    name: "actions",
    words: &[
        "Launch", "Quest", "Journey", "Mission", "Expedition", "Voyage", "Sprint", "Dash",
        "Climb", "Flow", "Rise", "Fall", "Dance", "Storm", "Hunt", "Chase", "Race", "Flight",
    ],
};

pub const NATURAL_ELEMENTS: VocabularySet = VocabularySet {
    name: "natural_elements",
    words: &[
        "Oak", "Pine", "Maple", "Birch", "Willow", "Cedar", "Spruce", "Elm",
        "Rose", "Lily", "Orchid", "Daisy", "Tulip", "Sunflower", "Iris", "Lotus",
        "Stone", "Boulder", "Pebble", "Sand", "Wave", "Tide", "Current", "Stream",
    ],
};
