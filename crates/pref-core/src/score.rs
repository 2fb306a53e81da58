//! Per-category score totals and the decision policy over them.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Non-negative score per category, computed fresh for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    pub visual: u32,
    pub text: u32,
    pub mixed: u32,
}

impl ScoreVector {
    pub fn new(visual: u32, text: u32, mixed: u32) -> Self {
        Self { visual, text, mixed }
    }

    pub fn is_zero(&self) -> bool {
        self.visual == 0 && self.text == 0 && self.mixed == 0
    }

    /// Pick exactly one category. Rules are evaluated in order:
    ///
    /// 1. mixed, visual and text all non-zero -> `Mixed`
    /// 2. mixed strictly above both others -> `Mixed`
    /// 3. visual strictly above text and mixed -> `Visual`
    /// 4. text strictly above visual and mixed -> `Text`
    /// 5. anything else (ties, all zero) -> `NoPreference`
    ///
    /// Rule 1 fires even when `mixed` is tiny next to a dominant visual or
    /// text score, so a stray "and" beside one visual and one text term
    /// yields `Mixed`.
    pub fn decide(&self) -> Category {
        let Self { visual, text, mixed } = *self;
        let co_present = mixed > 0 && visual > 0 && text > 0;
        if co_present || mixed > visual.max(text) {
            Category::Mixed
        } else if visual > text && visual > mixed {
            Category::Visual
        } else if text > visual && text > mixed {
            Category::Text
        } else {
            Category::NoPreference
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Visual => self.visual,
            Category::Text => self.text,
            Category::Mixed => self.mixed,
            Category::NoPreference => 0,
        }
    }

    /// Add `points` to one category. `NoPreference` is ignored.
    pub fn bump(&mut self, category: Category, points: u32) {
        match category {
            Category::Visual => self.visual += points,
            Category::Text => self.text += points,
            Category::Mixed => self.mixed += points,
            Category::NoPreference => {}
        }
    }
}

impl Add for ScoreVector {
    type Output = ScoreVector;

    fn add(self, rhs: Self) -> Self::Output {
        ScoreVector {
            visual: self.visual + rhs.visual,
            text: self.text + rhs.text,
            mixed: self.mixed + rhs.mixed,
        }
    }
}

impl AddAssign for ScoreVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
