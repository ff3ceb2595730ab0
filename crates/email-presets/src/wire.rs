//! JSON encoding of entity trees in the editor's shape.
//!
//! Serialization goes through borrowed views so the `type` tag and the
//! row's `numOfColumns` are written from the entity itself and never stored.
//! Deserialization goes through owned representations that check the tag of
//! every node; an incoming `numOfColumns` is ignored and re-derived.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::error::Result;
use crate::id::EntityId;
use crate::types::{
    Canvas, Column, ColumnRow, ColumnSettings, Component, Row, RowSettings, Section,
    SectionSettings, StructureEntity, TextProps,
};

/// A node carried the wrong `type` tag for its position in the tree.
#[derive(Debug, Error)]
#[error("expected entity type `{expected}`, found `{found}`")]
pub struct TagMismatch {
    expected: StructureEntity,
    found: StructureEntity,
}

fn check_tag(
    expected: StructureEntity,
    found: StructureEntity,
) -> std::result::Result<(), TagMismatch> {
    if expected == found {
        Ok(())
    } else {
        Err(TagMismatch { expected, found })
    }
}

// ---------------------------------------------------------------------------
// Serialization views
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ColumnRowView<'a> {
    id: &'a EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    component: Component,
    props: &'a TextProps,
}

#[derive(Serialize)]
struct ColumnView<'a> {
    id: &'a EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    settings: &'a ColumnSettings,
    children: &'a [ColumnRow],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RowSettingsView<'a> {
    gap: u32,
    layout: &'a [serde_json::Value],
    num_of_columns: usize,
}

#[derive(Serialize)]
struct RowView<'a> {
    id: &'a EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    settings: RowSettingsView<'a>,
    children: &'a [Column],
}

#[derive(Serialize)]
struct SectionView<'a> {
    id: &'a EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    settings: &'a SectionSettings,
    children: &'a [Row],
}

#[derive(Serialize)]
struct CanvasView<'a> {
    id: &'a EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    children: &'a [Section],
}

impl Serialize for ColumnRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ColumnRowView {
            id: &self.id,
            kind: self.kind(),
            component: self.component,
            props: &self.props,
        }
        .serialize(serializer)
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ColumnView {
            id: &self.id,
            kind: self.kind(),
            settings: &self.settings,
            children: &self.children,
        }
        .serialize(serializer)
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RowView {
            id: &self.id,
            kind: self.kind(),
            settings: RowSettingsView {
                gap: self.settings.gap,
                layout: &self.settings.layout,
                num_of_columns: self.num_of_columns(),
            },
            children: &self.children,
        }
        .serialize(serializer)
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SectionView {
            id: &self.id,
            kind: self.kind(),
            settings: &self.settings,
            children: &self.children,
        }
        .serialize(serializer)
    }
}

impl Serialize for Canvas {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        CanvasView {
            id: &self.id,
            kind: self.kind(),
            children: &self.children,
        }
        .serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Deserialization representations
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub(crate) struct ColumnRowRepr {
    id: EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    component: Component,
    props: TextProps,
}

impl TryFrom<ColumnRowRepr> for ColumnRow {
    type Error = TagMismatch;

    fn try_from(repr: ColumnRowRepr) -> std::result::Result<Self, Self::Error> {
        check_tag(StructureEntity::ColumnRow, repr.kind)?;
        Ok(ColumnRow {
            id: repr.id,
            component: repr.component,
            props: repr.props,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct ColumnRepr {
    id: EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    settings: ColumnSettings,
    #[serde(default)]
    children: Vec<ColumnRow>,
}

impl TryFrom<ColumnRepr> for Column {
    type Error = TagMismatch;

    fn try_from(repr: ColumnRepr) -> std::result::Result<Self, Self::Error> {
        check_tag(StructureEntity::Column, repr.kind)?;
        Ok(Column {
            id: repr.id,
            settings: repr.settings,
            children: repr.children,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct RowRepr {
    id: EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    // numOfColumns is an unknown field to RowSettings and is dropped here
    settings: RowSettings,
    #[serde(default)]
    children: Vec<Column>,
}

impl TryFrom<RowRepr> for Row {
    type Error = TagMismatch;

    fn try_from(repr: RowRepr) -> std::result::Result<Self, Self::Error> {
        check_tag(StructureEntity::Row, repr.kind)?;
        Ok(Row {
            id: repr.id,
            settings: repr.settings,
            children: repr.children,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct SectionRepr {
    id: EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    settings: SectionSettings,
    #[serde(default)]
    children: Vec<Row>,
}

impl TryFrom<SectionRepr> for Section {
    type Error = TagMismatch;

    fn try_from(repr: SectionRepr) -> std::result::Result<Self, Self::Error> {
        check_tag(StructureEntity::Section, repr.kind)?;
        Ok(Section {
            id: repr.id,
            settings: repr.settings,
            children: repr.children,
        })
    }
}

#[derive(Deserialize)]
pub(crate) struct CanvasRepr {
    id: EntityId,
    #[serde(rename = "type")]
    kind: StructureEntity,
    #[serde(default)]
    children: Vec<Section>,
}

impl TryFrom<CanvasRepr> for Canvas {
    type Error = TagMismatch;

    fn try_from(repr: CanvasRepr) -> std::result::Result<Self, Self::Error> {
        check_tag(StructureEntity::Canvas, repr.kind)?;
        Ok(Canvas {
            id: repr.id,
            children: repr.children,
        })
    }
}

// ---------------------------------------------------------------------------
// Canvas JSON helpers
// ---------------------------------------------------------------------------

impl Canvas {
    /// Encodes the tree as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the tree as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a tree previously produced by [`Canvas::to_json`] or the editor.
    ///
    /// # Errors
    /// * `Error::Json` - Malformed JSON, missing keys, or a node whose `type`
    ///   does not match its position
    pub fn from_json(json: &str) -> Result<Canvas> {
        Ok(serde_json::from_str(json)?)
    }
}
