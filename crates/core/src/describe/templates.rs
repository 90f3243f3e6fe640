//! Sentence templates and their round-robin rotation.

use std::collections::VecDeque;

use crate::catalog::WordCategory;
use crate::error::ConfigError;

pub const SENTENCE_TEMPLATES: [&str; 24] = [
    "You go into a {adjective} chamber. {feature} line the walls, while {sound} fills the air, {action}.",
    "This {adjective} hall is filled with {feature}. The sound of {sound} echoes around you, {action}.",
    "A {adjective} passage stretches before you, adorned with {feature}. The air is thick with {sound}, {action}.",
    "You find yourself in a {adjective} room where {feature} stand ominously. {sound} can be heard, {action}.",
    "An unsettling, {adjective} aura lingers in the air. {feature} surround the room, while {sound} fills the silence, {action}.",
    "As you enter the {adjective} room, {feature} cast eerie shadows along the walls. The presence of {sound} is overwhelming, {action}.",
    "The {adjective} corridor twists ahead, lined with {feature}. A faint echo of {sound} follows you, {action}.",
    "A {adjective} archway looms before you, leading into a space filled with {feature}. In the distance, {sound} resonates, {action}.",
    "The {adjective} chamber hums with energy. {feature} flicker in the dim light as {sound} reverberates through the space, {action}.",
    "You cautiously walk into a {adjective} vault. The floor is littered with {feature}, while {sound} slowly disappears in the distance, {action}.",
    "A {adjective} energy is in the air. {feature} surround the room, while {sound} echoes in the distance, {action}.",
    "You quickly step into a {adjective} room. The floor is covered with {feature}, while {sound} grows louder, {action}.",
    "You stumble into a {adjective} room. It contains numerous {feature}, while {sound} follows closely behind you, {action}.",
    "This {adjective} area is hoarded with {feature}. The sound of {sound} stops as you enter, {action}.",
    "You fall into a {adjective} room. It is filled with numerous {feature}. You no longer hear {sound}, {action}.",
    "You hear the sound of {sound} chasing closely behind you. You escape into a {adjective} room containing {feature}, {action}.",
    "As you enter, you see {feature} inside this {adjective} space, {action}. {sound} softens the longer you are in here.",
    "As you walk in, you see {feature} inside this {adjective} area, {action}. {sound} starts playing.",
    "As you enter the {adjective} space, you notice {feature}, {action}. {sound} grows louder the longer you are in here.",
    "You follow the sound of {sound} and discover a {adjective} area. It is occupied with {feature}, {action}.",
    "You cautiously walk through the door into a {adjective} room. It is packed with {feature}. In the corner, a speaker is playing {sound}, {action}.",
    "You carelessly stumble into a {adjective} area. After hearing {sound}, the doors lock behind you, {action}. Ahead lie {feature}.",
    "After falling through a hole, you find yourself in a {adjective} space. You hear {sound} before you notice the {feature} surround you, {action}.",
    "Face to face with a {adjective} door, {sound} being heard behind it.{action}. Upon entering, you first notice the {feature}.",
];

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(WordCategory),
}

/// A template split into literal text and placeholder slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceTemplate {
    segments: Vec<Segment>,
}

impl SentenceTemplate {
    /// Every category must appear at least once; braces only delimit placeholders.
    pub fn parse(index: usize, text: &str) -> Result<Self, ConfigError> {
        let malformed = |reason: String| ConfigError::MalformedTemplate { index, reason };
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(open) = rest.find(['{', '}']) {
            if rest[open..].starts_with('}') {
                return Err(malformed(format!("unmatched '}}' at byte {}", text.len() - rest.len() + open)));
            }
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_owned()));
            }
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| malformed("unclosed '{'".to_owned()))?;
            let name = &after[..close];
            let category = WordCategory::from_placeholder(name)
                .ok_or_else(|| malformed(format!("unknown placeholder '{name}'")))?;
            segments.push(Segment::Slot(category));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_owned()));
        }

        let template = Self { segments };
        if let Some(missing) =
            WordCategory::ALL.into_iter().find(|category| !template.uses(*category))
        {
            return Err(malformed(format!("missing placeholder '{}'", missing.placeholder())));
        }
        Ok(template)
    }

    pub fn uses(&self, category: WordCategory) -> bool {
        self.segments.iter().any(|segment| *segment == Segment::Slot(category))
    }

    /// Substitute each slot verbatim; no post-processing.
    pub fn fill(&self, mut word: impl FnMut(WordCategory) -> String) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(category) => out.push_str(&word(*category)),
            }
        }
        out
    }
}

/// Strict round-robin over a fixed, ordered template list.
#[derive(Clone, Debug)]
pub struct TemplateRotation {
    queue: VecDeque<SentenceTemplate>,
}

impl TemplateRotation {
    pub fn new<'a>(texts: impl IntoIterator<Item = &'a str>) -> Result<Self, ConfigError> {
        let queue = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| SentenceTemplate::parse(index, text))
            .collect::<Result<VecDeque<_>, _>>()?;
        if queue.is_empty() {
            return Err(ConfigError::NoTemplates);
        }
        Ok(Self { queue })
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(SENTENCE_TEMPLATES)
    }

    /// Pop the front template, move it to the back and return it.
    pub fn next_template(&mut self) -> &SentenceTemplate {
        self.queue.rotate_left(1);
        &self.queue[self.queue.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
