//! Seeded room descriptions composed from word pools and sentence templates.
//!
//! A [`DescriptionSession`] owns all the mutable state (random stream, word
//! bags, template rotation) for one generation pass, so two sessions with the
//! same seed produce the same sequence of descriptions regardless of what any
//! other session does.

mod bag;
mod format;
mod templates;

use std::collections::BTreeMap;

use log::debug;

pub use bag::{ReshufflePolicy, ShuffleBag};
pub use format::normalize_sentence;
pub use templates::{SENTENCE_TEMPLATES, SentenceTemplate, TemplateRotation};

use crate::catalog::{RoomType, WordCategory};
use crate::error::ConfigError;
use crate::rng::RandomSource;

pub const FALLBACK_DESCRIPTION: &str = "A room with indistinct features.";

/// One bag per word category, indexed in [`WordCategory::ALL`] order.
#[derive(Clone, Debug)]
struct RoomBags {
    bags: [ShuffleBag<&'static str>; 4],
}

impl RoomBags {
    fn new(room_type: RoomType, policy: ReshufflePolicy) -> Result<Self, ConfigError> {
        let words = room_type.words();
        let bag = |category: WordCategory| {
            ShuffleBag::new(words.pool(category).iter().copied(), policy)
                .map_err(|_| ConfigError::EmptyWordPool { room_type, category })
        };
        Ok(Self {
            bags: [
                bag(WordCategory::Adjective)?,
                bag(WordCategory::Feature)?,
                bag(WordCategory::Sound)?,
                bag(WordCategory::Action)?,
            ],
        })
    }

    fn draw(&mut self, category: WordCategory, rng: &mut RandomSource) -> &'static str {
        self.bags[category.index()].draw(rng)
    }
}

#[derive(Clone, Debug)]
pub struct DescriptionSession {
    rng: RandomSource,
    templates: TemplateRotation,
    bags: BTreeMap<RoomType, RoomBags>,
    composed: usize,
}

impl DescriptionSession {
    pub fn new(seed: u32) -> Result<Self, ConfigError> {
        Self::with_policy(seed, ReshufflePolicy::default())
    }

    /// Bags for every catalog entry are built up front; an empty pool fails here.
    /// Building a bag draws nothing from the stream.
    pub fn with_policy(seed: u32, policy: ReshufflePolicy) -> Result<Self, ConfigError> {
        Self::with_templates(seed, policy, TemplateRotation::builtin()?)
    }

    pub fn with_templates(
        seed: u32,
        policy: ReshufflePolicy,
        templates: TemplateRotation,
    ) -> Result<Self, ConfigError> {
        let bags = RoomType::ALL
            .into_iter()
            .map(|room_type| RoomBags::new(room_type, policy).map(|bags| (room_type, bags)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self { rng: RandomSource::new(seed), templates, bags, composed: 0 })
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Descriptions produced so far in this session.
    pub fn composed(&self) -> usize {
        self.composed
    }

    pub fn compose(&mut self, room_type: RoomType) -> String {
        let Some(bags) = self.bags.get_mut(&room_type) else {
            return FALLBACK_DESCRIPTION.to_owned();
        };
        let template = self.templates.next_template();

        // Fixed draw order keeps the stream independent of slot order in the template.
        let mut drawn: [&str; 4] = [""; 4];
        for (slot, category) in drawn.iter_mut().zip(WordCategory::ALL) {
            *slot = bags.draw(category, &mut self.rng);
        }
        let raw = template.fill(|category| drawn[category.index()].to_owned());

        self.composed += 1;
        let text = normalize_sentence(&raw);
        debug!(target: "maze_core::describe", "{room_type}: {text}");
        text
    }

    /// Look a room type up by catalog name; unknown names get the fallback text.
    pub fn compose_named(&mut self, name: &str) -> String {
        match RoomType::from_name(name) {
            Some(room_type) => self.compose(room_type),
            None => {
                debug!(target: "maze_core::describe", "no catalog entry for {name:?}");
                FALLBACK_DESCRIPTION.to_owned()
            }
        }
    }
}

/// One description from a fresh session seeded with `seed`.
pub fn describe_room(name: &str, seed: u32) -> Result<String, ConfigError> {
    Ok(DescriptionSession::new(seed)?.compose_named(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_descriptions() {
        let mut left = DescriptionSession::new(42).expect("session");
        let mut right = DescriptionSession::new(42).expect("session");
        for room_type in RoomType::ALL.into_iter().cycle().take(40) {
            assert_eq!(left.compose(room_type), right.compose(room_type));
        }
        assert_eq!(left.composed(), 40);
    }

    #[test]
    fn sessions_do_not_share_word_state() {
        let mut reference = DescriptionSession::new(9).expect("session");
        let expected: Vec<String> = (0..5).map(|_| reference.compose(RoomType::Library)).collect();

        let mut busy = DescriptionSession::new(9).expect("session");
        let mut other = DescriptionSession::new(1_000).expect("session");
        let mut actual = Vec::new();
        for _ in 0..5 {
            other.compose(RoomType::Library);
            actual.push(busy.compose(RoomType::Library));
        }
        assert_eq!(actual, expected);
    }

    #[test]
    fn unknown_room_name_falls_back() {
        let mut session = DescriptionSession::new(1).expect("session");
        assert_eq!(session.compose_named("Ballroom"), FALLBACK_DESCRIPTION);
        assert_eq!(session.composed(), 0);
        assert_eq!(describe_room("", 3).expect("builtin catalog"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn known_room_name_composes_text() {
        let text = describe_room("Treasure Room", 5).expect("builtin catalog");
        assert_ne!(text, FALLBACK_DESCRIPTION);
        assert!(text.chars().next().is_some_and(char::is_uppercase));
        assert!(!text.contains('{'));
    }

    #[test]
    fn consecutive_descriptions_do_not_repeat_adjectives() {
        let rotation =
            TemplateRotation::new(["{adjective}|{feature}|{sound}|{action}"]).expect("valid template");
        let mut session =
            DescriptionSession::with_templates(11, ReshufflePolicy::OnExhaustion, rotation)
                .expect("session");
        let first = session.compose(RoomType::Armory);
        let second = session.compose(RoomType::Armory);
        let first_adjective = first.split('|').next().map(str::to_lowercase);
        let second_adjective = second.split('|').next().map(str::to_lowercase);
        assert_ne!(first_adjective, second_adjective, "adjective repeated back to back");
    }
}
