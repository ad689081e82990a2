use std::ops::Range;

use crate::animation::keyframe::{Keyframe, KeyframeSummary, Lane};
use crate::errors::Result;

/// A named contiguous run of keyframes, e.g. one showcased variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineSection {
    pub name: String,
    pub range: Range<usize>,
}

/// Ordered keyframe sequence.
///
/// Order is authoring order, not sorted by `point_time`; duplicate times
/// are valid and mean simultaneous effects. Built once, read-only after.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    keyframes: Vec<Keyframe>,
    sections: Vec<TimelineSection>,
}

impl Timeline {
    #[must_use]
    pub fn new(keyframes: Vec<Keyframe>) -> Self {
        Self {
            keyframes,
            sections: Vec::new(),
        }
    }

    /// Appends keyframes as a named section.
    pub fn push_section(&mut self, name: &str, keyframes: impl IntoIterator<Item = Keyframe>) {
        let start = self.keyframes.len();
        self.keyframes.extend(keyframes);
        self.sections.push(TimelineSection {
            name: name.to_string(),
            range: start..self.keyframes.len(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.keyframes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keyframes.iter()
    }

    #[must_use]
    pub fn sections(&self) -> &[TimelineSection] {
        &self.sections
    }

    /// Keyframes of the section called `name`.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&[Keyframe]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| &self.keyframes[s.range.clone()])
    }

    pub fn lane(&self, lane: Lane) -> impl Iterator<Item = &Keyframe> {
        self.keyframes.iter().filter(move |k| k.lane == lane)
    }

    /// Time at which the last tween finishes.
    #[must_use]
    pub fn duration(&self, default_duration: f32) -> f32 {
        self.keyframes
            .iter()
            .map(|k| k.point_time + k.effective_duration(default_duration))
            .fold(0.0_f32, f32::max)
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<KeyframeSummary> {
        self.keyframes.iter().map(Keyframe::summary).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summaries())?)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.keyframes.iter()
    }
}
