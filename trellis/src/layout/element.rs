//! Layout elements: a content handle plus the rules for placing it.

use serde::{Deserialize, Serialize};

use crate::primitives::Color;

use super::length::{BoxAlignment, BoxSize, StackAlignment, StackSize};

/// Origin of a stack element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Wraps caller content.
    #[default]
    UserCreated,
    /// Weighted spacer realizing an arrangement.
    Filler,
    /// Fixed-length spacer.
    Gap,
    /// Thin fixed-length rule with a tint.
    Separator,
}

impl ElementKind {
    /// Whether the element only exists for its geometry.
    pub fn is_synthetic(self) -> bool {
        !matches!(self, ElementKind::UserCreated)
    }
}

/// An element placed by the stack layout.
///
/// Defaults: weighted main size of 1, full cross size, container alignment,
/// visible.
#[derive(Debug, Clone)]
pub struct StackElement<C> {
    kind: ElementKind,
    /// Caller-owned content handle.
    pub content: C,
    /// Overrides the container's cross-axis alignment.
    pub alignment: Option<StackAlignment>,
    pub main_size: StackSize,
    pub cross_size: StackSize,
    /// Hidden elements take no space and have their content hidden.
    pub hidden: bool,
    /// Rendering hint for separators. Never read by the layout.
    pub tint: Option<Color>,
}

impl<C> StackElement<C> {
    /// Wrap caller content with default sizing.
    pub fn new(content: C) -> Self {
        Self {
            kind: ElementKind::UserCreated,
            content,
            alignment: None,
            main_size: StackSize::Weighted(1.0),
            cross_size: StackSize::fill(),
            hidden: false,
            tint: None,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Set the cross-axis alignment override.
    pub fn alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the main-axis sizing mode.
    pub fn main_size(mut self, size: StackSize) -> Self {
        self.main_size = size;
        self
    }

    /// Set the cross-axis sizing mode.
    pub fn cross_size(mut self, size: StackSize) -> Self {
        self.cross_size = size;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Replace the content, keeping every placement rule.
    pub fn with_content<D>(self, content: D) -> StackElement<D> {
        StackElement {
            kind: self.kind,
            content,
            alignment: self.alignment,
            main_size: self.main_size,
            cross_size: self.cross_size,
            hidden: self.hidden,
            tint: self.tint,
        }
    }
}

impl<C: Default> StackElement<C> {
    /// A weighted spacer (weight 1) over fresh, empty content.
    ///
    /// Being weighted, a caller-placed filler disables the container's
    /// arrangement like any other weighted element.
    pub fn filler() -> Self {
        let mut filler = Self::new(C::default());
        filler.kind = ElementKind::Filler;
        filler
    }

    /// A fixed-length spacer with zero cross length.
    pub fn gap(length: f32) -> Self {
        let mut gap = Self::new(C::default())
            .main_size(StackSize::Fixed(length))
            .cross_size(StackSize::Fixed(0.0));
        gap.kind = ElementKind::Gap;
        gap
    }

    /// A one-unit rule spanning the cross axis, tinted with `color`.
    pub fn separator(color: Color) -> Self {
        let mut separator = Self::new(C::default()).main_size(StackSize::Fixed(1.0));
        separator.kind = ElementKind::Separator;
        separator.tint = Some(color);
        separator
    }
}

/// An element placed by the box layout.
///
/// Defaults: full parent width and height, container alignment, visible.
#[derive(Debug, Clone)]
pub struct BoxElement<C> {
    /// Caller-owned content handle.
    pub content: C,
    /// Overrides the container's 9-point alignment.
    pub alignment: Option<BoxAlignment>,
    pub width: BoxSize,
    pub height: BoxSize,
    pub hidden: bool,
}

impl<C> BoxElement<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            alignment: None,
            width: BoxSize::relative(1.0),
            height: BoxSize::relative(1.0),
            hidden: false,
        }
    }

    pub fn alignment(mut self, alignment: BoxAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn width(mut self, width: BoxSize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: BoxSize) -> Self {
        self.height = height;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_content<D>(self, content: D) -> BoxElement<D> {
        BoxElement {
            content,
            alignment: self.alignment,
            width: self.width,
            height: self.height,
            hidden: self.hidden,
        }
    }
}
