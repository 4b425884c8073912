//! Filler synthesis for stack arrangements.
//!
//! Arrangements are realized by splicing weighted fillers between the visible
//! elements. The result is a derived list of [`ArrangedSlot`]s built fresh on
//! every pass; the caller's element list is never extended, and fillers never
//! alias caller content.

use super::element::StackElement;
use super::length::{RelativeAxis, StackArrangement, StackSize};

/// Main-axis policy of an engine filler.
pub const FILLER_MAIN_SIZE: StackSize = StackSize::Weighted(1.0);
/// Cross-axis policy of an engine filler.
pub const FILLER_CROSS_SIZE: StackSize = StackSize::Relative {
    ratio: 1.0,
    axis: RelativeAxis::Current,
};

/// One entry of the arranged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrangedSlot {
    /// Index into the caller's element list.
    Element(usize),
    /// Engine-synthesized filler.
    Filler,
}

impl ArrangedSlot {
    pub fn is_filler(&self) -> bool {
        matches!(self, ArrangedSlot::Filler)
    }

    pub fn main_size<C>(&self, elements: &[StackElement<C>]) -> StackSize {
        match self {
            ArrangedSlot::Element(i) => elements[*i].main_size,
            ArrangedSlot::Filler => FILLER_MAIN_SIZE,
        }
    }

    pub fn cross_size<C>(&self, elements: &[StackElement<C>]) -> StackSize {
        match self {
            ArrangedSlot::Element(i) => elements[*i].cross_size,
            ArrangedSlot::Filler => FILLER_CROSS_SIZE,
        }
    }
}

/// Indices of the elements that take part in the pass, in input order.
pub fn visible_indices<C>(elements: &[StackElement<C>]) -> Vec<usize> {
    elements
        .iter()
        .enumerate()
        .filter(|(_, el)| !el.hidden)
        .map(|(i, _)| i)
        .collect()
}

/// Build the arranged list for the visible elements.
///
/// If any visible element is weighted the arrangement is ignored: that
/// element already absorbs all remaining space.
pub fn arrange<C>(
    elements: &[StackElement<C>],
    visible: &[usize],
    arrangement: StackArrangement,
) -> Vec<ArrangedSlot> {
    let slots: Vec<ArrangedSlot> = visible.iter().map(|&i| ArrangedSlot::Element(i)).collect();

    if visible.iter().any(|&i| elements[i].main_size.is_weighted()) {
        return slots;
    }

    let filler = || ArrangedSlot::Filler;
    match arrangement {
        StackArrangement::Start => {
            let mut arranged = slots;
            arranged.push(ArrangedSlot::Filler);
            arranged
        }
        StackArrangement::End => {
            let mut arranged = Vec::with_capacity(slots.len() + 1);
            arranged.push(ArrangedSlot::Filler);
            arranged.extend(slots);
            arranged
        }
        StackArrangement::Center => {
            let mut arranged = Vec::with_capacity(slots.len() + 2);
            arranged.push(ArrangedSlot::Filler);
            arranged.extend(slots);
            arranged.push(ArrangedSlot::Filler);
            arranged
        }
        StackArrangement::SpaceBetween => insert_between(&slots, filler),
        StackArrangement::SpaceAround => insert_around(&slots, filler),
        StackArrangement::SpaceEvenly => insert_evenly(&slots, filler),
    }
}

/// `[a, b]` -> `[a, x, b]`. Empty stays empty.
pub fn insert_between<T: Clone>(items: &[T], mut make: impl FnMut() -> T) -> Vec<T> {
    let mut out = Vec::with_capacity((items.len() * 2).saturating_sub(1));
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(make());
        }
        out.push(item.clone());
    }
    out
}

/// `[a, b]` -> `[x, a, x, x, b, x]`. Empty stays empty.
pub fn insert_around<T: Clone>(items: &[T], mut make: impl FnMut() -> T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * 3);
    for item in items {
        out.push(make());
        out.push(item.clone());
        out.push(make());
    }
    out
}

/// `[a, b]` -> `[x, a, x, b, x]`. Empty stays empty.
pub fn insert_evenly<T: Clone>(items: &[T], mut make: impl FnMut() -> T) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(items.len() * 2 + 1);
    for item in items {
        out.push(make());
        out.push(item.clone());
    }
    out.push(make());
    out
}
