//! Palettes of A/B slot pairs and the editor context around them.
//!
//! Each slot keeps two complete descriptions ("tracks") so a before/after
//! comparison never throws either variant away. Exactly one track is active
//! at a time, and only the active one is rendered.
//!
//! ## Rust Lesson #13: No Global State
//!
//! Which slot is selected is UI state, but there is no `static mut` for it:
//! [`EditorContext`] owns the palette and the selection and is passed to
//! whatever reads or writes them. The pattern code never sees it.

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::definition::{build, PatternDefinition};
use crate::error::{Error, Result};
use crate::fill::{resolve, FillReference};
use crate::slot::SlotDescription;

pub const MIN_SLOTS: usize = 2;
pub const MAX_SLOTS: usize = 12;
pub const DEFAULT_SLOTS: usize = 8;

/// Default series colours, one per possible slot.
pub const SERIES_COLORS: [HexColor; MAX_SLOTS] = [
    HexColor::rgb(0x4E, 0x79, 0xA7),
    HexColor::rgb(0xF2, 0x8E, 0x2B),
    HexColor::rgb(0xE1, 0x57, 0x59),
    HexColor::rgb(0x76, 0xB7, 0xB2),
    HexColor::rgb(0x59, 0xA1, 0x4F),
    HexColor::rgb(0xED, 0xC9, 0x48),
    HexColor::rgb(0xB0, 0x7A, 0xA1),
    HexColor::rgb(0xFF, 0x9D, 0xA7),
    HexColor::rgb(0x9C, 0x75, 0x5F),
    HexColor::rgb(0xBA, 0xB0, 0xAC),
    HexColor::rgb(0x1F, 0x77, 0xB4),
    HexColor::rgb(0x2C, 0xA0, 0x2C),
];

/// Default description for the slot at `index`.
pub fn default_slot(index: usize) -> SlotDescription {
    SlotDescription::solid(
        &format!("Series {}", index + 1),
        SERIES_COLORS[index % SERIES_COLORS.len()],
    )
}

/// Which of a slot's two descriptions is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    A,
    B,
}

impl Track {
    pub fn other(self) -> Track {
        match self {
            Track::A => Track::B,
            Track::B => Track::A,
        }
    }
}

/// One palette position with its two tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSlot {
    pub a: SlotDescription,
    pub b: SlotDescription,
    #[serde(default)]
    pub active: Track,
}

impl PaletteSlot {
    /// Both tracks start out identical.
    pub fn new(slot: SlotDescription) -> Self {
        Self { a: slot.clone(), b: slot, active: Track::A }
    }

    pub fn track(&self, track: Track) -> &SlotDescription {
        match track {
            Track::A => &self.a,
            Track::B => &self.b,
        }
    }

    pub fn track_mut(&mut self, track: Track) -> &mut SlotDescription {
        match track {
            Track::A => &mut self.a,
            Track::B => &mut self.b,
        }
    }

    pub fn active(&self) -> &SlotDescription {
        self.track(self.active)
    }

    pub fn active_mut(&mut self) -> &mut SlotDescription {
        self.track_mut(self.active)
    }
}

/// An ordered, bounded sequence of slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    slots: Vec<PaletteSlot>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS)
    }
}

impl Palette {
    /// A palette of default slots; `count` is clamped to the allowed range.
    pub fn new(count: usize) -> Self {
        let count = count.clamp(MIN_SLOTS, MAX_SLOTS);
        Self {
            slots: (0..count).map(|i| PaletteSlot::new(default_slot(i))).collect(),
        }
    }

    /// Wrap existing slots, rejecting counts outside the allowed range.
    pub fn from_slots(slots: Vec<PaletteSlot>) -> Result<Self> {
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&slots.len()) {
            return Err(Error::SlotCount { found: slots.len(), min: MIN_SLOTS, max: MAX_SLOTS });
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[PaletteSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&PaletteSlot> {
        self.slots.get(index)
    }

    /// The description currently in use at `index`.
    pub fn active(&self, index: usize) -> Option<&SlotDescription> {
        self.slots.get(index).map(PaletteSlot::active)
    }

    pub fn active_mut(&mut self, index: usize) -> Option<&mut SlotDescription> {
        self.slots.get_mut(index).map(PaletteSlot::active_mut)
    }

    /// Active descriptions in palette order.
    pub fn active_slots(&self) -> impl Iterator<Item = &SlotDescription> {
        self.slots.iter().map(PaletteSlot::active)
    }

    pub fn set_track(&mut self, index: usize, track: Track) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.active = track;
                true
            }
            None => false,
        }
    }

    pub fn toggle_track(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.active = slot.active.other();
                true
            }
            None => false,
        }
    }

    /// Make every slot use `track`.
    pub fn set_all_tracks(&mut self, track: Track) {
        for slot in &mut self.slots {
            slot.active = track;
        }
    }

    /// Overwrite the other track of slot `index` with `from`.
    pub fn copy_track(&mut self, index: usize, from: Track) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                let source = slot.track(from).clone();
                *slot.track_mut(from.other()) = source;
                true
            }
            None => false,
        }
    }

    /// Reset the active description of slot `index` to its default.
    pub fn reset(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot.active_mut() = default_slot(index);
                true
            }
            None => false,
        }
    }

    /// Append a default slot, unless the palette is full.
    pub fn push_slot(&mut self) -> bool {
        if self.slots.len() >= MAX_SLOTS {
            return false;
        }
        let index = self.slots.len();
        self.slots.push(PaletteSlot::new(default_slot(index)));
        true
    }

    /// Drop the last slot, unless the palette is at its minimum size.
    pub fn pop_slot(&mut self) -> bool {
        if self.slots.len() <= MIN_SLOTS {
            return false;
        }
        self.slots.pop().is_some()
    }

    /// Move a slot to a new position, shifting the ones in between.
    pub fn move_slot(&mut self, from: usize, to: usize) -> bool {
        if from >= self.slots.len() || to >= self.slots.len() {
            return false;
        }
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
        true
    }

    /// Fill references for every active slot, in order.
    pub fn fills(&self) -> Vec<FillReference> {
        self.active_slots()
            .enumerate()
            .map(|(i, slot)| resolve(slot, i))
            .collect()
    }

    /// Definitions of every pattern in use; register these before rendering
    /// anything that references them.
    pub fn pattern_definitions(&self) -> Vec<PatternDefinition> {
        self.active_slots()
            .enumerate()
            .filter_map(|(i, slot)| build(slot, i))
            .collect()
    }
}

/// A palette plus the slot currently being edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorContext {
    pub palette: Palette,
    selected: usize,
}

impl EditorContext {
    pub fn new(palette: Palette) -> Self {
        Self { palette, selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select slot `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.palette.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn selected_slot(&self) -> Option<&SlotDescription> {
        self.palette.active(self.selected)
    }

    /// Edit the selected slot's active description in place.
    pub fn update_selected<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut SlotDescription),
    {
        match self.palette.active_mut(self.selected) {
            Some(slot) => {
                edit(slot);
                true
            }
            None => false,
        }
    }

    pub fn toggle_selected_track(&mut self) -> bool {
        self.palette.toggle_track(self.selected)
    }

    /// Drop the last slot, keeping the selection in range.
    pub fn pop_slot(&mut self) -> bool {
        let removed = self.palette.pop_slot();
        if self.selected >= self.palette.len() {
            self.selected = self.palette.len().saturating_sub(1);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{PatternFill, SlotKind};

    #[test]
    fn new_clamps_slot_count() {
        assert_eq!(Palette::new(0).len(), MIN_SLOTS);
        assert_eq!(Palette::new(100).len(), MAX_SLOTS);
        assert_eq!(Palette::default().len(), DEFAULT_SLOTS);
    }

    #[test]
    fn from_slots_enforces_bounds() {
        let one = vec![PaletteSlot::new(default_slot(0))];
        assert!(matches!(Palette::from_slots(one), Err(Error::SlotCount { found: 1, .. })));
    }

    #[test]
    fn tracks_are_independent() {
        let mut palette = Palette::new(3);
        palette.set_track(1, Track::B);
        *palette.active_mut(1).unwrap() = SlotDescription::pattern("B", PatternFill::default());

        assert_eq!(palette.slot(1).unwrap().a.kind(), SlotKind::Solid);
        assert_eq!(palette.active(1).unwrap().kind(), SlotKind::Pattern);

        palette.toggle_track(1);
        assert_eq!(palette.active(1).unwrap().kind(), SlotKind::Solid);
    }

    #[test]
    fn copy_track_overwrites_other() {
        let mut palette = Palette::new(2);
        palette.slots[0].b = SlotDescription::pattern("B", PatternFill::default());
        assert!(palette.copy_track(0, Track::B));
        assert_eq!(palette.slot(0).unwrap().a, palette.slot(0).unwrap().b);
    }

    #[test]
    fn reset_restores_default() {
        let mut palette = Palette::new(4);
        *palette.active_mut(2).unwrap() = SlotDescription::pattern("x", PatternFill::default());
        assert!(palette.reset(2));
        assert_eq!(palette.active(2), Some(&default_slot(2)));
    }

    #[test]
    fn grows_and_shrinks_within_bounds() {
        let mut palette = Palette::new(MAX_SLOTS);
        assert!(!palette.push_slot());
        let mut small = Palette::new(MIN_SLOTS);
        assert!(!small.pop_slot());
        assert!(small.push_slot());
        assert_eq!(small.active(MIN_SLOTS), Some(&default_slot(MIN_SLOTS)));
        assert!(small.pop_slot());
    }

    #[test]
    fn move_slot_reorders() {
        let mut palette = Palette::new(4);
        let moved = palette.active(0).unwrap().clone();
        assert!(palette.move_slot(0, 3));
        assert_eq!(palette.active(3), Some(&moved));
        assert!(!palette.move_slot(0, 9));
    }

    #[test]
    fn fills_and_definitions_line_up() {
        let mut palette = Palette::new(4);
        *palette.active_mut(1).unwrap() = SlotDescription::pattern("p", PatternFill::default());
        *palette.active_mut(3).unwrap() = SlotDescription::pattern("q", PatternFill::default());

        let fills = palette.fills();
        let defs = palette.pattern_definitions();
        let referenced: Vec<&str> = fills.iter().filter_map(|f| f.pattern_id()).collect();
        let registered: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(referenced, registered);
        assert_eq!(registered, vec!["pattern-slot-1", "pattern-slot-3"]);
    }

    #[test]
    fn editor_edits_selected_slot() {
        let mut editor = EditorContext::new(Palette::new(3));
        assert!(editor.select(2));
        assert!(!editor.select(7));
        editor.update_selected(|slot| slot.set_label("Renamed"));
        assert_eq!(editor.selected_slot().unwrap().label, "Renamed");
        assert_eq!(editor.palette.active(0).unwrap().label, "Series 1");
    }

    #[test]
    fn editor_selection_follows_shrink() {
        let mut editor = EditorContext::new(Palette::new(3));
        editor.select(2);
        assert!(editor.pop_slot());
        assert_eq!(editor.selected(), 1);
    }
}
