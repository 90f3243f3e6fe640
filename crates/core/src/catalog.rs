//! Static room-type catalog: names, display colours, glyphs and word pools.
//!
//! Catalog order is significant. Bit `i` of the external filter bitmask
//! selects the `i`-th entry of [`RoomType::ALL`].

mod words;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Prison Room")]
    PrisonRoom,
    #[serde(rename = "Treasure Room")]
    TreasureRoom,
    #[serde(rename = "Trap Room")]
    TrapRoom,
    #[serde(rename = "Monster Lair")]
    MonsterLair,
    #[serde(rename = "Secret Room")]
    SecretRoom,
    Armory,
    Library,
    #[serde(rename = "Alchemy Lab")]
    AlchemyLab,
    #[serde(rename = "Puzzle Room")]
    PuzzleRoom,
    #[serde(rename = "Magic Chamber")]
    MagicChamber,
}

/// Word lists a description draws from, one per placeholder category.
#[derive(Debug)]
pub struct RoomWords {
    pub adjectives: &'static [&'static str],
    pub features: &'static [&'static str],
    pub sounds: &'static [&'static str],
    pub actions: &'static [&'static str],
}

impl RoomWords {
    pub fn pool(&self, category: WordCategory) -> &'static [&'static str] {
        match category {
            WordCategory::Adjective => self.adjectives,
            WordCategory::Feature => self.features,
            WordCategory::Sound => self.sounds,
            WordCategory::Action => self.actions,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordCategory {
    Adjective,
    Feature,
    Sound,
    Action,
}

impl WordCategory {
    pub const ALL: [WordCategory; 4] =
        [WordCategory::Adjective, WordCategory::Feature, WordCategory::Sound, WordCategory::Action];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Placeholder name used inside sentence templates.
    pub fn placeholder(self) -> &'static str {
        match self {
            WordCategory::Adjective => "adjective",
            WordCategory::Feature => "feature",
            WordCategory::Sound => "sound",
            WordCategory::Action => "action",
        }
    }

    pub fn from_placeholder(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.placeholder() == name)
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WordCategory::Adjective => "adjectives",
            WordCategory::Feature => "features",
            WordCategory::Sound => "sounds",
            WordCategory::Action => "actions",
        })
    }
}

impl RoomType {
    pub const ALL: [RoomType; 10] = [
        RoomType::PrisonRoom,
        RoomType::TreasureRoom,
        RoomType::TrapRoom,
        RoomType::MonsterLair,
        RoomType::SecretRoom,
        RoomType::Armory,
        RoomType::Library,
        RoomType::AlchemyLab,
        RoomType::PuzzleRoom,
        RoomType::MagicChamber,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RoomType::PrisonRoom => "Prison Room",
            RoomType::TreasureRoom => "Treasure Room",
            RoomType::TrapRoom => "Trap Room",
            RoomType::MonsterLair => "Monster Lair",
            RoomType::SecretRoom => "Secret Room",
            RoomType::Armory => "Armory",
            RoomType::Library => "Library",
            RoomType::AlchemyLab => "Alchemy Lab",
            RoomType::PuzzleRoom => "Puzzle Room",
            RoomType::MagicChamber => "Magic Chamber",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|room_type| room_type.name() == name)
    }

    pub fn color_name(self) -> &'static str {
        match self {
            RoomType::PrisonRoom => "Dark Grey",
            RoomType::TreasureRoom => "Gold",
            RoomType::TrapRoom => "Orange",
            RoomType::MonsterLair => "Blue",
            RoomType::SecretRoom => "Pink",
            RoomType::Armory => "Silver",
            RoomType::Library => "Brown",
            RoomType::AlchemyLab => "Dark Green",
            RoomType::PuzzleRoom => "Cyan",
            RoomType::MagicChamber => "Purple",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            RoomType::PrisonRoom => [80, 80, 80],
            RoomType::TreasureRoom => [255, 215, 0],
            RoomType::TrapRoom => [255, 140, 0],
            RoomType::MonsterLair => [30, 144, 255],
            RoomType::SecretRoom => [255, 105, 180],
            RoomType::Armory => [192, 192, 192],
            RoomType::Library => [139, 69, 19],
            RoomType::AlchemyLab => [0, 100, 0],
            RoomType::PuzzleRoom => [0, 255, 255],
            RoomType::MagicChamber => [138, 43, 226],
        }
    }

    // 'S' and 'E' belong to the start and exit markers.
    pub fn glyph(self) -> char {
        match self {
            RoomType::PrisonRoom => 'P',
            RoomType::TreasureRoom => 'T',
            RoomType::TrapRoom => 'X',
            RoomType::MonsterLair => 'M',
            RoomType::SecretRoom => 'H',
            RoomType::Armory => 'A',
            RoomType::Library => 'B',
            RoomType::AlchemyLab => 'L',
            RoomType::PuzzleRoom => 'Z',
            RoomType::MagicChamber => 'C',
        }
    }

    pub fn words(self) -> &'static RoomWords {
        match self {
            RoomType::PrisonRoom => &words::PRISON_ROOM,
            RoomType::TreasureRoom => &words::TREASURE_ROOM,
            RoomType::TrapRoom => &words::TRAP_ROOM,
            RoomType::MonsterLair => &words::MONSTER_LAIR,
            RoomType::SecretRoom => &words::SECRET_ROOM,
            RoomType::Armory => &words::ARMORY,
            RoomType::Library => &words::LIBRARY,
            RoomType::AlchemyLab => &words::ALCHEMY_LAB,
            RoomType::PuzzleRoom => &words::PUZZLE_ROOM,
            RoomType::MagicChamber => &words::MAGIC_CHAMBER,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of room types eligible for placement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomFilter {
    members: BTreeSet<RoomType>,
}

impl RoomFilter {
    pub fn all() -> Self {
        RoomType::ALL.into_iter().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Decode the external bitmask; bits beyond the catalog are ignored.
    pub fn from_bits(bits: u32) -> Self {
        RoomType::ALL
            .into_iter()
            .filter(|room_type| (bits >> room_type.index()) & 1 == 1)
            .collect()
    }

    pub fn bits(&self) -> u32 {
        self.members.iter().fold(0, |bits, room_type| bits | (1 << room_type.index()))
    }

    pub fn contains(&self, room_type: RoomType) -> bool {
        self.members.contains(&room_type)
    }

    pub fn insert(&mut self, room_type: RoomType) -> bool {
        self.members.insert(room_type)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Members in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = RoomType> + '_ {
        self.members.iter().copied()
    }
}

impl FromIterator<RoomType> for RoomFilter {
    fn from_iter<I: IntoIterator<Item = RoomType>>(iter: I) -> Self {
        Self { members: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_entries_in_wire_order() {
        assert_eq!(RoomType::ALL.len(), 10);
        for (index, room_type) in RoomType::ALL.into_iter().enumerate() {
            assert_eq!(room_type.index(), index);
            assert_eq!(RoomType::from_name(room_type.name()), Some(room_type));
        }
        assert_eq!(RoomType::from_name("Ballroom"), None);
    }

    #[test]
    fn every_word_pool_is_populated() {
        for room_type in RoomType::ALL {
            for category in WordCategory::ALL {
                assert!(
                    !room_type.words().pool(category).is_empty(),
                    "{room_type} has an empty {category} pool"
                );
            }
        }
    }

    #[test]
    fn filter_bits_map_to_catalog_order() {
        let filter = RoomFilter::from_bits(0b101);
        let members: Vec<_> = filter.iter().collect();
        assert_eq!(members, vec![RoomType::PrisonRoom, RoomType::TrapRoom]);
        assert_eq!(filter.bits(), 0b101);
    }

    #[test]
    fn filter_ignores_bits_beyond_the_catalog() {
        let filter = RoomFilter::from_bits(u32::MAX);
        assert_eq!(filter, RoomFilter::all());
        assert_eq!(filter.bits(), 0b11_1111_1111);
        assert!(RoomFilter::from_bits(0).is_empty());
    }

    #[test]
    fn filter_serializes_as_room_names() {
        let filter: RoomFilter = [RoomType::Library, RoomType::Armory].into_iter().collect();
        let json = serde_json::to_string(&filter).expect("serialize");
        assert_eq!(json, r#"["Armory","Library"]"#);
        let decoded: RoomFilter = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, filter);
    }

    #[test]
    fn placeholders_resolve_to_categories() {
        for category in WordCategory::ALL {
            assert_eq!(WordCategory::from_placeholder(category.placeholder()), Some(category));
        }
        assert_eq!(WordCategory::from_placeholder("smell"), None);
    }
}
