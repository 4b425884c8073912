//! Declarative layout documents.
//!
//! A document describes one stack or box: the parent frame, the layout
//! configuration and the elements, each with an optional starting frame for
//! `copy` sizing. Running a document lays it out over [`Surface`] content and
//! produces a serializable [`LayoutReport`].
//!
//! ```json
//! {
//!   "mode": "stack",
//!   "frame": { "x": 0, "y": 0, "width": 320, "height": 44 },
//!   "direction": "horizontal",
//!   "arrangement": "space_between",
//!   "elements": [
//!     { "name": "back", "main_size": { "fixed": 44 } },
//!     { "kind": "separator" },
//!     { "name": "title", "main_size": "copy",
//!       "content": { "frame": { "x": 0, "y": 0, "width": 120, "height": 20 } } }
//!   ]
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::Surface;
use crate::error::{LayoutError, Result};
use crate::layout::{
    BoxAlignment, BoxElement, BoxLayout, BoxSize, ElementKind, StackAlignment, StackElement,
    StackLayout, StackSize,
};
use crate::primitives::{Color, Rect, Size};

/// A stack or box layout description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutDocument {
    Stack(StackDocument),
    Box(BoxDocument),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDocument {
    pub frame: Rect,
    #[serde(flatten)]
    pub layout: StackLayout,
    #[serde(default)]
    pub elements: Vec<StackElementSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackElementSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: ElementKind,
    /// Starting state of the content (frame read by `copy` sizing).
    #[serde(default)]
    pub content: Surface,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_size: Option<StackSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_size: Option<StackSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<StackAlignment>,
    #[serde(default)]
    pub hidden: bool,
    /// Gap length; only valid on `gap` elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
    /// Separator tint; only valid on `separator` elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDocument {
    pub frame: Rect,
    #[serde(default)]
    pub alignment: BoxAlignment,
    #[serde(default)]
    pub elements: Vec<BoxElementSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxElementSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Surface,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<BoxSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<BoxSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<BoxAlignment>,
    #[serde(default)]
    pub hidden: bool,
}

/// Which engine produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Stack,
    Box,
}

/// Outcome of running a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    pub mode: LayoutMode,
    /// Parent frame the pass ran in.
    pub frame: Rect,
    /// Stack only: size that hugs the visible elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitting_size: Option<Size>,
    /// One entry per document element, in document order.
    pub elements: Vec<ElementReport>,
    /// Stack only: frames of the engine fillers, in arranged order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fillers: Vec<Rect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementReport {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: ElementKind,
    pub hidden: bool,
    /// Frame after the pass. Hidden elements keep their starting frame.
    pub frame: Rect,
}

impl LayoutDocument {
    /// Parse and validate a JSON document.
    pub fn parse(json: &str) -> Result<Self> {
        let document: LayoutDocument = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Read, parse and validate a JSON document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading layout document");
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }

    pub fn mode(&self) -> LayoutMode {
        match self {
            LayoutDocument::Stack(_) => LayoutMode::Stack,
            LayoutDocument::Box(_) => LayoutMode::Box,
        }
    }

    /// Reject values the engines would turn into NaN or infinite frames and
    /// fields that do not apply to an element's kind.
    ///
    /// Negative and out-of-range values are legal and pass through.
    pub fn validate(&self) -> Result<()> {
        match self {
            LayoutDocument::Stack(doc) => {
                check_rect("frame", doc.frame)?;
                for (i, spec) in doc.elements.iter().enumerate() {
                    check_rect(&format!("elements[{i}].content.frame"), spec.content.frame)?;
                    if let Some(size) = spec.main_size {
                        check_stack_size(&format!("elements[{i}].main_size"), size)?;
                    }
                    if let Some(size) = spec.cross_size {
                        check_stack_size(&format!("elements[{i}].cross_size"), size)?;
                    }
                    if let Some(length) = spec.length {
                        if spec.kind != ElementKind::Gap {
                            return Err(LayoutError::Invalid(format!(
                                "elements[{i}]: `length` only applies to gap elements"
                            )));
                        }
                        check_finite(&format!("elements[{i}].length"), length)?;
                    }
                    if spec.tint.is_some() && spec.kind != ElementKind::Separator {
                        return Err(LayoutError::Invalid(format!(
                            "elements[{i}]: `tint` only applies to separator elements"
                        )));
                    }
                }
            }
            LayoutDocument::Box(doc) => {
                check_rect("frame", doc.frame)?;
                for (i, spec) in doc.elements.iter().enumerate() {
                    check_rect(&format!("elements[{i}].content.frame"), spec.content.frame)?;
                    if let Some(size) = spec.width {
                        check_box_size(&format!("elements[{i}].width"), size)?;
                    }
                    if let Some(size) = spec.height {
                        check_box_size(&format!("elements[{i}].height"), size)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate and lay out the document.
    pub fn run(&self) -> Result<LayoutReport> {
        self.validate()?;
        let report = match self {
            LayoutDocument::Stack(doc) => doc.run(),
            LayoutDocument::Box(doc) => doc.run(),
        };
        Ok(report)
    }
}

impl FromStr for LayoutDocument {
    type Err = LayoutError;

    fn from_str(json: &str) -> Result<Self> {
        Self::parse(json)
    }
}

impl StackDocument {
    /// Build the engine elements described by this document.
    pub fn elements(&self) -> Vec<StackElement<Surface>> {
        self.elements.iter().map(StackElementSpec::build).collect()
    }

    fn run(&self) -> LayoutReport {
        let mut elements = self.elements();
        let fitting_size = self.layout.fitting_size(&elements, self.frame);
        let pass = self.layout.apply(&mut elements, self.frame);

        let reports = elements
            .iter()
            .zip(&self.elements)
            .enumerate()
            .map(|(index, (element, spec))| ElementReport {
                index,
                name: spec.name.clone(),
                kind: element.kind(),
                hidden: element.hidden,
                frame: element.content.frame,
            })
            .collect();

        LayoutReport {
            mode: LayoutMode::Stack,
            frame: self.frame,
            fitting_size: Some(fitting_size),
            elements: reports,
            fillers: pass.filler_frames().collect(),
        }
    }
}

impl StackElementSpec {
    fn build(&self) -> StackElement<Surface> {
        let base = match self.kind {
            ElementKind::UserCreated => StackElement::new(Surface::default()),
            ElementKind::Filler => StackElement::filler(),
            ElementKind::Gap => StackElement::gap(self.length.unwrap_or(0.0)),
            ElementKind::Separator => {
                StackElement::separator(self.tint.unwrap_or(Color::SYSTEM_GRAY))
            }
        };

        let mut element = base.with_content(self.content).hidden(self.hidden);
        if let Some(size) = self.main_size {
            element = element.main_size(size);
        }
        if let Some(size) = self.cross_size {
            element = element.cross_size(size);
        }
        if let Some(alignment) = self.alignment {
            element = element.alignment(alignment);
        }
        element
    }
}

impl BoxDocument {
    pub fn elements(&self) -> Vec<BoxElement<Surface>> {
        self.elements.iter().map(BoxElementSpec::build).collect()
    }

    fn run(&self) -> LayoutReport {
        let mut elements = self.elements();
        BoxLayout::new(self.alignment).apply(&mut elements, self.frame);

        let reports = elements
            .iter()
            .zip(&self.elements)
            .enumerate()
            .map(|(index, (element, spec))| ElementReport {
                index,
                name: spec.name.clone(),
                kind: ElementKind::UserCreated,
                hidden: element.hidden,
                frame: element.content.frame,
            })
            .collect();

        LayoutReport {
            mode: LayoutMode::Box,
            frame: self.frame,
            fitting_size: None,
            elements: reports,
            fillers: Vec::new(),
        }
    }
}

impl BoxElementSpec {
    fn build(&self) -> BoxElement<Surface> {
        let mut element = BoxElement::new(self.content).hidden(self.hidden);
        if let Some(width) = self.width {
            element = element.width(width);
        }
        if let Some(height) = self.height {
            element = element.height(height);
        }
        if let Some(alignment) = self.alignment {
            element = element.alignment(alignment);
        }
        element
    }
}

impl LayoutReport {
    /// Frames moved from parent-local coordinates into the parent's own
    /// coordinate space (offset by the parent frame's origin).
    pub fn to_absolute(&self) -> LayoutReport {
        let origin = self.frame.origin();
        let mut report = self.clone();
        for element in &mut report.elements {
            if !element.hidden {
                element.frame = element.frame.translate(origin);
            }
        }
        for filler in &mut report.fillers {
            *filler = filler.translate(origin);
        }
        report
    }
}

fn check_finite(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}

fn check_rect(field: &str, rect: Rect) -> Result<()> {
    if rect.is_finite() {
        return Ok(());
    }
    let value = [rect.x, rect.y, rect.width, rect.height]
        .into_iter()
        .find(|v| !v.is_finite())
        .unwrap_or(f32::NAN);
    Err(LayoutError::NonFinite {
        field: field.to_string(),
        value,
    })
}

fn check_stack_size(field: &str, size: StackSize) -> Result<()> {
    match size {
        StackSize::Fixed(value) | StackSize::Weighted(value) => check_finite(field, value),
        StackSize::Relative { ratio, .. } => check_finite(field, ratio),
        StackSize::Copy => Ok(()),
    }
}

fn check_box_size(field: &str, size: BoxSize) -> Result<()> {
    match size {
        BoxSize::Fixed(value) => check_finite(field, value),
        BoxSize::Relative { multiplier, .. } => check_finite(field, multiplier),
        BoxSize::Copy => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Direction, StackArrangement};

    const TOOLBAR: &str = r#"{
        "mode": "stack",
        "frame": { "x": 10, "y": 20, "width": 100, "height": 20 },
        "direction": "horizontal",
        "arrangement": "space_between",
        "elements": [
            { "name": "back", "main_size": { "fixed": 20 } },
            { "kind": "separator" },
            { "name": "title", "main_size": "copy",
              "content": { "frame": { "x": 0, "y": 0, "width": 40, "height": 10 } },
              "cross_size": "copy", "alignment": "end" },
            { "name": "menu", "main_size": { "fixed": 20 }, "hidden": true }
        ]
    }"#;

    #[test]
    fn test_parse_stack_document() {
        let doc = LayoutDocument::parse(TOOLBAR).unwrap();
        let LayoutDocument::Stack(stack) = &doc else {
            panic!("expected stack document");
        };
        assert_eq!(stack.layout.direction, Direction::Horizontal);
        assert_eq!(stack.layout.arrangement, StackArrangement::SpaceBetween);
        assert_eq!(stack.layout.alignment, StackAlignment::Center);
        assert_eq!(stack.elements.len(), 4);
        assert_eq!(stack.elements[1].kind, ElementKind::Separator);
        assert_eq!(doc.mode(), LayoutMode::Stack);
    }

    #[test]
    fn test_run_stack_document() {
        let report = LayoutDocument::parse(TOOLBAR).unwrap().run().unwrap();

        // back 20 + separator 1 + title 40 = 61 fixed; 39 split over 2 fillers.
        let frames: Vec<Rect> = report.elements.iter().map(|e| e.frame).collect();
        assert_eq!(frames[0], Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(frames[1], Rect::new(39.5, 0.0, 1.0, 20.0));
        assert_eq!(frames[2], Rect::new(60.0, 10.0, 40.0, 10.0));
        assert!(report.elements[3].hidden);
        assert_eq!(report.elements[1].kind, ElementKind::Separator);
        assert_eq!(report.fillers.len(), 2);
        assert_eq!(report.fitting_size, Some(Size::new(61.0, 20.0)));
    }

    #[test]
    fn test_report_to_absolute() {
        let report = LayoutDocument::parse(TOOLBAR).unwrap().run().unwrap().to_absolute();
        assert_eq!(report.elements[0].frame, Rect::new(10.0, 20.0, 20.0, 20.0));
        // Hidden elements keep their own frame.
        assert_eq!(report.elements[3].frame, Rect::ZERO);
    }

    #[test]
    fn test_box_document() {
        let json = r#"{
            "mode": "box",
            "frame": { "x": 0, "y": 0, "width": 100, "height": 50 },
            "alignment": "top_start",
            "elements": [
                { "width": { "fixed": 20 }, "height": { "fixed": 10 }, "alignment": "bottom_end" },
                { "width": { "relative": { "multiplier": 0.5, "side": "opposite" } },
                  "height": { "relative": { "multiplier": 0.5 } } }
            ]
        }"#;
        let report = LayoutDocument::parse(json).unwrap().run().unwrap();
        assert_eq!(report.mode, LayoutMode::Box);
        assert_eq!(report.elements[0].frame, Rect::new(80.0, 40.0, 20.0, 10.0));
        assert_eq!(report.elements[1].frame, Rect::new(0.0, 0.0, 25.0, 25.0));
        assert!(report.fitting_size.is_none());
    }

    #[test]
    fn test_gap_length_requires_gap_kind() {
        let json = r#"{
            "mode": "stack",
            "frame": { "x": 0, "y": 0, "width": 10, "height": 10 },
            "elements": [ { "length": 4 } ]
        }"#;
        let err = LayoutDocument::parse(json).unwrap_err();
        assert!(matches!(err, LayoutError::Invalid(_)));
    }

    #[test]
    fn test_gap_document() {
        let json = r#"{
            "mode": "stack",
            "frame": { "x": 0, "y": 0, "width": 10, "height": 100 },
            "direction": "vertical",
            "arrangement": "start",
            "elements": [ { "kind": "gap", "length": 8 }, { "main_size": { "fixed": 5 } } ]
        }"#;
        let report = LayoutDocument::parse(json).unwrap().run().unwrap();
        assert_eq!(report.elements[0].kind, ElementKind::Gap);
        assert_eq!(report.elements[0].frame, Rect::new(5.0, 0.0, 0.0, 8.0));
        assert_eq!(report.elements[1].frame.y, 8.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let doc = LayoutDocument::Stack(StackDocument {
            frame: Rect::new(0.0, 0.0, f32::INFINITY, 10.0),
            layout: StackLayout::default(),
            elements: Vec::new(),
        });
        let err = doc.run().unwrap_err();
        assert!(matches!(err, LayoutError::NonFinite { ref field, .. } if field == "frame"));
    }

    #[test]
    fn test_from_str() {
        let doc: LayoutDocument = TOOLBAR.parse().unwrap();
        assert_eq!(doc, LayoutDocument::parse(TOOLBAR).unwrap());
    }

    #[test]
    fn test_malformed_json() {
        let err = LayoutDocument::parse("{ \"mode\": \"grid\" }").unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn test_weighted_not_a_box_size() {
        let json = r#"{
            "mode": "box",
            "frame": { "x": 0, "y": 0, "width": 10, "height": 10 },
            "elements": [ { "width": { "weighted": 1 } } ]
        }"#;
        assert!(matches!(LayoutDocument::parse(json), Err(LayoutError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LayoutDocument::load("/nonexistent/trellis/layout.json").unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }
}
