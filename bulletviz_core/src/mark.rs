// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphic primitives with stable identity.

use kurbo::{Point, Rect};
use peniko::Brush;

/// A stable mark identifier.
///
/// Identity is what lets a [`crate::Scene`] restyle a primitive in place
/// instead of destroying and recreating it. Callers are responsible for
/// keeping ids unique within a scene; chart layers typically derive them as
/// deterministic offsets from a per-component base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// The kind of primitive a mark renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkKind {
    /// An axis-aligned filled rectangle.
    Rect,
    /// A stroked line segment.
    Line,
    /// A text label (unshaped string).
    Text,
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Vertical text baseline relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the vertical midline.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the top of the text.
    Hanging,
}

/// Payload of a rect mark.
#[derive(Clone, Debug)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Payload of a line mark.
#[derive(Clone, Debug)]
pub struct LineMark {
    /// Start point in scene coordinates.
    pub p0: Point,
    /// End point in scene coordinates.
    pub p1: Point,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

/// Payload of a text mark.
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// The label string (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
}

/// Kind-specific mark data.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectMark),
    /// A stroked line segment.
    Line(LineMark),
    /// A text label.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the geometric bounds of the payload.
    ///
    /// Text bounds are anchored at the position only; renderers that need
    /// real text extents must measure with their own font metrics.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => r.rect,
            Self::Line(l) => Rect::from_points(l.p0, l.p1),
            Self::Text(t) => Rect::from_points(t.pos, t.pos),
        }
    }
}

/// A retained graphic primitive.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable identity within a scene.
    pub id: MarkId,
    /// Render ordering hint; ties break by insertion sequence.
    pub z_index: i32,
    /// Whether the mark should be painted.
    pub visible: bool,
    /// Kind-specific data.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a rect mark with a default (black) fill.
    pub fn rect(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            z_index: 0,
            visible: true,
            payload: MarkPayload::Rect(RectMark {
                rect,
                fill: Brush::default(),
            }),
        }
    }

    /// Creates a line mark with a default (black) stroke at width 1.
    pub fn line(id: MarkId, p0: Point, p1: Point) -> Self {
        Self {
            id,
            z_index: 0,
            visible: true,
            payload: MarkPayload::Line(LineMark {
                p0,
                p1,
                stroke: Brush::default(),
                stroke_width: 1.0,
            }),
        }
    }

    /// Creates a text mark with default styling.
    pub fn text(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            z_index: 0,
            visible: true,
            payload: MarkPayload::Text(TextMark {
                pos,
                text: text.into(),
                font_size: 10.0,
                fill: Brush::default(),
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Alphabetic,
                angle: 0.0,
            }),
        }
    }

    /// Returns the mark kind.
    pub fn kind(&self) -> MarkKind {
        match self.payload {
            MarkPayload::Rect(_) => MarkKind::Rect,
            MarkPayload::Line(_) => MarkKind::Line,
            MarkPayload::Text(_) => MarkKind::Text,
        }
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets mark visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the fill paint. No-op for line marks.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        match &mut self.payload {
            MarkPayload::Rect(r) => r.fill = fill.into(),
            MarkPayload::Text(t) => t.fill = fill.into(),
            MarkPayload::Line(_) => {}
        }
        self
    }

    /// Sets stroke paint and width. No-op for rect and text marks.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        if let MarkPayload::Line(l) = &mut self.payload {
            l.stroke = stroke.into();
            l.stroke_width = stroke_width;
        }
        self
    }

    /// Sets the font size. No-op for non-text marks.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.font_size = font_size;
        }
        self
    }

    /// Sets the text anchor. No-op for non-text marks.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.anchor = anchor;
        }
        self
    }

    /// Sets the text baseline. No-op for non-text marks.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.baseline = baseline;
        }
        self
    }

    /// Sets the text rotation angle in degrees. No-op for non-text marks.
    pub fn with_angle(mut self, angle: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.angle = angle;
        }
        self
    }
}
