//! Canned content presets for the email layout editor
//!
//! This crate provides a catalog of starter templates. Each preset is a
//! named factory that builds a fresh entity tree
//! (`Canvas → Section → Row → Column → ColumnRow`) filled with example copy
//! and styling, ready to be spliced into a document.
//!
//! # Scope
//!
//! - Builders and the catalog are total; nothing here can fail
//! - Produced trees are not validated
//! - No lookup-by-id: selecting a preset is the consumer's job
//!
//! # Examples
//!
//! ```
//! use email_presets::email_presets;
//!
//! let preset = &email_presets()[0];
//! assert_eq!(preset.id, "newsletter");
//!
//! let canvas = preset.build();
//! assert_eq!(canvas.children().len(), 1);
//!
//! let json = canvas.to_json_pretty()?;
//! assert!(json.contains("\"numOfColumns\": 1"));
//! # Ok::<(), email_presets::Error>(())
//! ```

#![warn(missing_docs)]

mod builders;
mod error;
mod id;
mod presets;
mod tree;
mod types;
mod wire;

// Re-export all public types
pub use builders::{
    create_canvas, create_column, create_row, create_section, create_text_row, TreeBuilder,
};
pub use error::{Error, Result};
pub use id::{EntityId, IdSource, RandomIds, SequentialIds};
pub use presets::{email_presets, EmailPreset};
pub use tree::TreeStats;
pub use types::{
    Canvas, Column, ColumnRow, ColumnSettings, Component, Row, RowSettings, Section,
    SectionSettings, StructureEntity, TextOverrides, TextProps, TextStyle, COLUMN_WIDTH,
    DEFAULT_FONT_SIZE, DEFAULT_TEXT_COLOR, PRESET_SECTION_DATA, ROW_GAP,
};
pub use wire::TagMismatch;
