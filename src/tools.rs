use serde::{Deserialize, Serialize};

/// All drawing tools selectable from the toolbar.
///
/// `Magnifier` is a reserved id: it can be selected but pointer events with
/// it active are ignored by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Brush,
    Pencil,
    Eraser,
    PaintBucket,
    Rectangle,
    Circle,
    Line,
    Triangle,
    Star,
    Heart,
    Text,
    Magnifier,
}

impl ToolKind {
    pub const ALL: [ToolKind; 12] = [
        ToolKind::Brush,
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::PaintBucket,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
        ToolKind::Triangle,
        ToolKind::Star,
        ToolKind::Heart,
        ToolKind::Text,
        ToolKind::Magnifier,
    ];

    /// Stable string id, as supplied by the UI layer.
    pub fn id(&self) -> &'static str {
        match self {
            ToolKind::Brush => "brush",
            ToolKind::Pencil => "pencil",
            ToolKind::Eraser => "eraser",
            ToolKind::PaintBucket => "paintbucket",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Line => "line",
            ToolKind::Triangle => "triangle",
            ToolKind::Star => "star",
            ToolKind::Heart => "heart",
            ToolKind::Text => "text",
            ToolKind::Magnifier => "magnifier",
        }
    }

    /// Resolve a tool from its string id.
    pub fn from_id(id: &str) -> Option<ToolKind> {
        ToolKind::ALL.iter().copied().find(|tool| tool.id() == id)
    }

    /// Human-readable name for the toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Brush => "Brush",
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::PaintBucket => "Paint Bucket",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Line => "Line",
            ToolKind::Triangle => "Triangle",
            ToolKind::Star => "Star",
            ToolKind::Heart => "Heart",
            ToolKind::Text => "Text",
            ToolKind::Magnifier => "Magnifier",
        }
    }

    /// Freehand tools render incrementally on every pointer move.
    pub fn is_freehand(&self) -> bool {
        matches!(self, ToolKind::Brush | ToolKind::Pencil | ToolKind::Eraser)
    }

    /// Shape tools render once, at gesture end, from start and end points.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            ToolKind::Rectangle
                | ToolKind::Circle
                | ToolKind::Line
                | ToolKind::Triangle
                | ToolKind::Star
                | ToolKind::Heart
        )
    }
}

impl Default for ToolKind {
    fn default() -> Self {
        ToolKind::Brush
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for tool in ToolKind::ALL {
            assert_eq!(ToolKind::from_id(tool.id()), Some(tool));
        }
        assert_eq!(ToolKind::from_id("lasso"), None);
    }

    #[test]
    fn classification_is_disjoint() {
        for tool in ToolKind::ALL {
            assert!(!(tool.is_freehand() && tool.is_shape()), "{tool:?}");
        }
    }
}
