//! Entity builders.
//!
//! Each builder allocates one fresh id, sets the entity's fixed tags and
//! settings, and takes ownership of the given children. [`TreeBuilder`] draws
//! ids from any [`IdSource`]; the `create_*` functions use [`RandomIds`].

use crate::id::{IdSource, RandomIds};
use crate::types::{
    Canvas, Column, ColumnRow, ColumnSettings, Component, Row, RowSettings, Section,
    SectionSettings, TextOverrides, TextProps, TextStyle, COLUMN_WIDTH, PRESET_SECTION_DATA,
    ROW_GAP,
};

/// Builds entities with ids drawn from a borrowed [`IdSource`].
///
/// ```
/// use email_presets::{SequentialIds, TextOverrides, TreeBuilder};
///
/// let ids = SequentialIds::new("doc");
/// let b = TreeBuilder::new(&ids);
/// let canvas = b.canvas(vec![b.section(vec![b.row(vec![b.column(vec![
///     b.text_row("Hello", TextOverrides::new()),
/// ])])])]);
/// assert_eq!(canvas.id().as_str(), "doc-5");
/// ```
#[derive(Clone, Copy)]
pub struct TreeBuilder<'a> {
    ids: &'a dyn IdSource,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder over `ids`.
    pub fn new(ids: &'a dyn IdSource) -> Self {
        Self { ids }
    }

    /// Text leaf with props `{title: text, text, ...base style, ...overrides}`.
    pub fn text_row(&self, text: impl Into<String>, overrides: TextOverrides) -> ColumnRow {
        let text = text.into();
        ColumnRow {
            id: self.ids.next_id(),
            component: Component::Text,
            props: TextProps {
                title: text.clone(),
                text,
                style: overrides.apply(TextStyle::default()),
            },
        }
    }

    /// Full-width column owning `rows`.
    pub fn column(&self, rows: Vec<ColumnRow>) -> Column {
        Column {
            id: self.ids.next_id(),
            settings: ColumnSettings {
                width: COLUMN_WIDTH,
            },
            children: rows,
        }
    }

    /// Row owning `columns`, with the default gap and an empty layout.
    pub fn row(&self, columns: Vec<Column>) -> Row {
        Row {
            id: self.ids.next_id(),
            settings: RowSettings {
                gap: ROW_GAP,
                layout: Vec::new(),
            },
            children: columns,
        }
    }

    /// Section owning `rows`, tagged as preset-originated.
    pub fn section(&self, rows: Vec<Row>) -> Section {
        Section {
            id: self.ids.next_id(),
            settings: SectionSettings {
                data: PRESET_SECTION_DATA.to_string(),
            },
            children: rows,
        }
    }

    /// Canvas root owning `sections`.
    pub fn canvas(&self, sections: Vec<Section>) -> Canvas {
        Canvas {
            id: self.ids.next_id(),
            children: sections,
        }
    }
}

/// [`TreeBuilder::text_row`] with random ids.
pub fn create_text_row(text: impl Into<String>, overrides: TextOverrides) -> ColumnRow {
    TreeBuilder::new(&RandomIds).text_row(text, overrides)
}

/// [`TreeBuilder::column`] with random ids.
pub fn create_column(rows: Vec<ColumnRow>) -> Column {
    TreeBuilder::new(&RandomIds).column(rows)
}

/// [`TreeBuilder::row`] with random ids.
pub fn create_row(columns: Vec<Column>) -> Row {
    TreeBuilder::new(&RandomIds).row(columns)
}

/// [`TreeBuilder::section`] with random ids.
pub fn create_section(rows: Vec<Row>) -> Section {
    TreeBuilder::new(&RandomIds).section(rows)
}

/// [`TreeBuilder::canvas`] with random ids.
pub fn create_canvas(sections: Vec<Section>) -> Canvas {
    TreeBuilder::new(&RandomIds).canvas(sections)
}
