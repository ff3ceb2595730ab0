//! Canvas entity types consumed by the email layout editor.
//!
//! A document is a strict ownership tree:
//! `Canvas → Section → Row → Column → ColumnRow`. Entities are built once by
//! the functions in [`crate::builders`] and expose read-only accessors; there
//! is no mutation API.
//!
//! The JSON shape (type tags, camelCase keys, the derived `numOfColumns`) is
//! produced by the serde impls in `wire.rs`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::EntityId;

/// Entity type tags (`STRUCTURE_ENTITY` in the editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StructureEntity {
    /// Document root
    Canvas,
    /// Top-level band of rows
    Section,
    /// Horizontal group of columns
    Row,
    /// Vertical stack of content nodes
    Column,
    /// Content leaf inside a column
    ColumnRow,
}

impl StructureEntity {
    /// Tag as written in the editor's JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            StructureEntity::Canvas => "canvas",
            StructureEntity::Section => "section",
            StructureEntity::Row => "row",
            StructureEntity::Column => "column",
            StructureEntity::ColumnRow => "columnRow",
        }
    }
}

impl fmt::Display for StructureEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component discriminator of a content leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// Styled text block
    Text,
}

// ---------------------------------------------------------------------------
// Text style and property bag
// ---------------------------------------------------------------------------

/// Base text color of every preset leaf.
pub const DEFAULT_TEXT_COLOR: &str = "#111827";

/// Base font size (px) of every preset leaf.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Style keys of a text leaf.
///
/// `Default` is the base style every leaf starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// CSS color string, passed through unchecked.
    pub color: String,
    /// Font size in px
    pub font_size: u32,
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
    /// Underline decoration
    pub underline: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_TEXT_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

/// Partial style applied over [`TextStyle::default`].
///
/// Restricted to the style key set, so only values (never keys) can be
/// malformed. Values are not validated: a bogus color string ends up in the
/// property bag as-is.
///
/// ```
/// use email_presets::TextOverrides;
///
/// let heading = TextOverrides::new().font_size(28).bold(true);
/// assert_eq!(heading.font_size, Some(28));
/// assert_eq!(heading.color, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOverrides {
    /// Replaces `color` when set
    pub color: Option<String>,
    /// Replaces `fontSize` when set
    pub font_size: Option<u32>,
    /// Replaces `bold` when set
    pub bold: Option<bool>,
    /// Replaces `italic` when set
    pub italic: Option<bool>,
    /// Replaces `underline` when set
    pub underline: Option<bool>,
}

impl TextOverrides {
    /// Empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color override.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the font size override.
    pub fn font_size(mut self, font_size: u32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the bold override.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Sets the italic override.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Sets the underline override.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Returns `true` if no key is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges these overrides over `base`; set keys win.
    pub fn apply(&self, base: TextStyle) -> TextStyle {
        TextStyle {
            color: self.color.clone().unwrap_or(base.color),
            font_size: self.font_size.unwrap_or(base.font_size),
            bold: self.bold.unwrap_or(base.bold),
            italic: self.italic.unwrap_or(base.italic),
            underline: self.underline.unwrap_or(base.underline),
        }
    }
}

/// Property bag of a text leaf: `{title, text, ...style}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProps {
    /// Display label in the editor's layer list; equals `text` for presets.
    pub title: String,
    /// Text content
    pub text: String,
    /// Style keys, flattened into the bag
    #[serde(flatten)]
    pub style: TextStyle,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Column width (percent) used by every builder.
pub const COLUMN_WIDTH: u32 = 100;

/// Gap between row columns (px) used by every builder.
pub const ROW_GAP: u32 = 10;

/// Provenance tag stored on preset sections.
pub const PRESET_SECTION_DATA: &str = "preset";

/// Column settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSettings {
    /// Width in percent of the row
    pub width: u32,
}

/// Row settings as stored.
///
/// `numOfColumns` is not stored here. It is derived from the row's children
/// whenever the row is serialized (see [`Row::num_of_columns`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RowSettings {
    /// Gap between columns (px)
    pub gap: u32,
    /// Column layout; empty for every preset and carries no behaviour here.
    #[serde(default)]
    pub layout: Vec<serde_json::Value>,
}

/// Section settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSettings {
    /// Provenance tag (`"preset"` for preset sections)
    pub data: String,
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Text content leaf.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::wire::ColumnRowRepr")]
pub struct ColumnRow {
    pub(crate) id: EntityId,
    pub(crate) component: Component,
    pub(crate) props: TextProps,
}

impl ColumnRow {
    /// Entity id
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Always [`StructureEntity::ColumnRow`].
    pub fn kind(&self) -> StructureEntity {
        StructureEntity::ColumnRow
    }

    /// Component discriminator
    pub fn component(&self) -> Component {
        self.component
    }

    /// Property bag
    pub fn props(&self) -> &TextProps {
        &self.props
    }
}

/// Column of content leaves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::wire::ColumnRepr")]
pub struct Column {
    pub(crate) id: EntityId,
    pub(crate) settings: ColumnSettings,
    pub(crate) children: Vec<ColumnRow>,
}

impl Column {
    /// Entity id
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Always [`StructureEntity::Column`].
    pub fn kind(&self) -> StructureEntity {
        StructureEntity::Column
    }

    /// Column settings
    pub fn settings(&self) -> &ColumnSettings {
        &self.settings
    }

    /// Content leaves in order
    pub fn children(&self) -> &[ColumnRow] {
        &self.children
    }
}

/// Row of columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::wire::RowRepr")]
pub struct Row {
    pub(crate) id: EntityId,
    pub(crate) settings: RowSettings,
    pub(crate) children: Vec<Column>,
}

impl Row {
    /// Entity id
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Always [`StructureEntity::Row`].
    pub fn kind(&self) -> StructureEntity {
        StructureEntity::Row
    }

    /// Stored row settings (without the derived column count)
    pub fn settings(&self) -> &RowSettings {
        &self.settings
    }

    /// Columns in order
    pub fn children(&self) -> &[Column] {
        &self.children
    }

    /// `numOfColumns`, always the number of child columns.
    pub fn num_of_columns(&self) -> usize {
        self.children.len()
    }
}

/// Section of rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::wire::SectionRepr")]
pub struct Section {
    pub(crate) id: EntityId,
    pub(crate) settings: SectionSettings,
    pub(crate) children: Vec<Row>,
}

impl Section {
    /// Entity id
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Always [`StructureEntity::Section`].
    pub fn kind(&self) -> StructureEntity {
        StructureEntity::Section
    }

    /// Section settings
    pub fn settings(&self) -> &SectionSettings {
        &self.settings
    }

    /// Rows in order
    pub fn children(&self) -> &[Row] {
        &self.children
    }
}

/// Document root.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "crate::wire::CanvasRepr")]
pub struct Canvas {
    pub(crate) id: EntityId,
    pub(crate) children: Vec<Section>,
}

impl Canvas {
    /// Entity id
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Always [`StructureEntity::Canvas`].
    pub fn kind(&self) -> StructureEntity {
        StructureEntity::Canvas
    }

    /// Sections in order
    pub fn children(&self) -> &[Section] {
        &self.children
    }

    /// Consumes the canvas and hands its sections to the caller, e.g. to
    /// splice them into an existing document.
    pub fn into_sections(self) -> Vec<Section> {
        self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_matches_base() {
        let style = TextStyle::default();
        assert_eq!(style.color, "#111827");
        assert_eq!(style.font_size, 16);
        assert!(!style.bold);
        assert!(!style.italic);
        assert!(!style.underline);
    }

    #[test]
    fn test_empty_overrides_keep_base() {
        let overrides = TextOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(overrides.apply(TextStyle::default()), TextStyle::default());
    }

    #[test]
    fn test_overrides_win_on_collision() {
        let style = TextOverrides::new()
            .color("#DC2626")
            .italic(true)
            .apply(TextStyle::default());
        assert_eq!(style.color, "#DC2626");
        assert!(style.italic);
        assert_eq!(style.font_size, DEFAULT_FONT_SIZE);
        assert!(!style.bold);
        assert!(!style.underline);
    }

    #[test]
    fn test_override_can_reset_to_false() {
        let base = TextStyle {
            bold: true,
            ..TextStyle::default()
        };
        let style = TextOverrides::new().bold(false).apply(base);
        assert!(!style.bold);
    }

    #[test]
    fn test_malformed_color_passes_through() {
        let style = TextOverrides::new()
            .color("not-a-color")
            .apply(TextStyle::default());
        assert_eq!(style.color, "not-a-color");
    }

    #[test]
    fn test_structure_entity_tags() {
        assert_eq!(StructureEntity::Canvas.to_string(), "canvas");
        assert_eq!(StructureEntity::ColumnRow.to_string(), "columnRow");
        let json = serde_json::to_string(&StructureEntity::ColumnRow)
            .expect("failed to serialize StructureEntity");
        assert_eq!(json, "\"columnRow\"");
    }

    #[test]
    fn test_text_props_flatten_style() {
        let props = TextProps {
            title: "X".to_string(),
            text: "X".to_string(),
            style: TextStyle::default(),
        };
        let value = serde_json::to_value(&props).expect("failed to serialize TextProps");
        assert_eq!(
            value,
            serde_json::json!({
                "title": "X",
                "text": "X",
                "color": "#111827",
                "fontSize": 16,
                "bold": false,
                "italic": false,
                "underline": false
            })
        );
    }
}
