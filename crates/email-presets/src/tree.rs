//! Read-only traversal of a built canvas.

use crate::id::EntityId;
use crate::types::{Canvas, Column, ColumnRow, Row, Section};

/// Entity counts per kind, excluding the canvas itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of sections
    pub sections: usize,
    /// Number of rows across all sections
    pub rows: usize,
    /// Number of columns across all rows
    pub columns: usize,
    /// Number of text leaves across all columns
    pub text_rows: usize,
}

impl Canvas {
    /// Every row in document order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.children.iter().flat_map(|section| section.children.iter())
    }

    /// Every column in document order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.rows().flat_map(|row| row.children.iter())
    }

    /// Every text leaf in document order.
    pub fn text_rows(&self) -> impl Iterator<Item = &ColumnRow> {
        self.columns().flat_map(|column| column.children.iter())
    }

    /// All ids in depth-first pre-order, starting with the canvas.
    pub fn entity_ids(&self) -> Vec<&EntityId> {
        let mut ids = vec![&self.id];
        for section in &self.children {
            ids.push(&section.id);
            for row in &section.children {
                ids.push(&row.id);
                for column in &row.children {
                    ids.push(&column.id);
                    ids.extend(column.children.iter().map(|leaf| &leaf.id));
                }
            }
        }
        ids
    }

    /// Counts entities per kind.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            sections: self.children.len(),
            rows: self.rows().count(),
            columns: self.columns().count(),
            text_rows: self.text_rows().count(),
        }
    }

    /// Structural and content equality that ignores every id.
    ///
    /// Two builds of the same preset always compare equal here even though
    /// `==` fails on their ids.
    pub fn same_content(&self, other: &Canvas) -> bool {
        all_pairs(&self.children, &other.children, section_content_eq)
    }
}

fn all_pairs<T>(a: &[T], b: &[T], eq: fn(&T, &T) -> bool) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y))
}

fn section_content_eq(a: &Section, b: &Section) -> bool {
    a.settings == b.settings && all_pairs(&a.children, &b.children, row_content_eq)
}

fn row_content_eq(a: &Row, b: &Row) -> bool {
    a.settings == b.settings && all_pairs(&a.children, &b.children, column_content_eq)
}

fn column_content_eq(a: &Column, b: &Column) -> bool {
    a.settings == b.settings && all_pairs(&a.children, &b.children, leaf_content_eq)
}

fn leaf_content_eq(a: &ColumnRow, b: &ColumnRow) -> bool {
    a.component == b.component && a.props == b.props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TreeBuilder;
    use crate::id::SequentialIds;
    use crate::types::TextOverrides;

    fn two_rows(prefix: &str, last_text: &str) -> Canvas {
        let ids = SequentialIds::new(prefix);
        let b = TreeBuilder::new(&ids);
        let first = b.row(vec![
            b.column(vec![b.text_row("a", TextOverrides::new())]),
            b.column(vec![b.text_row("b", TextOverrides::new())]),
        ]);
        let second = b.row(vec![b.column(vec![b.text_row(last_text, TextOverrides::new())])]);
        b.canvas(vec![b.section(vec![first, second])])
    }

    #[test]
    fn test_stats_counts_every_level() {
        let canvas = two_rows("s", "c");
        assert_eq!(
            canvas.stats(),
            TreeStats {
                sections: 1,
                rows: 2,
                columns: 3,
                text_rows: 3,
            }
        );
    }

    #[test]
    fn test_text_rows_in_document_order() {
        let canvas = two_rows("s", "c");
        let texts: Vec<&str> = canvas
            .text_rows()
            .map(|leaf| leaf.props().text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_entity_ids_preorder() {
        let canvas = two_rows("s", "c");
        let ids: Vec<&str> = canvas.entity_ids().iter().map(|id| id.as_str()).collect();
        // leaves and columns are allocated before their parents
        assert_eq!(
            ids,
            vec!["s-10", "s-9", "s-5", "s-2", "s-1", "s-4", "s-3", "s-8", "s-7", "s-6"]
        );
    }

    #[test]
    fn test_same_content_ignores_ids() {
        let left = two_rows("l", "c");
        let right = two_rows("r", "c");
        assert_ne!(left, right);
        assert!(left.same_content(&right));
    }

    #[test]
    fn test_same_content_detects_text_change() {
        let left = two_rows("l", "c");
        let right = two_rows("r", "changed");
        assert!(!left.same_content(&right));
    }
}
