//! `show`: preset metadata plus an indented outline of a fresh build.

use std::fmt::Write as _;
use std::io::Write;

use email_presets::{Canvas, ColumnRow, TextStyle};

use crate::commands::{find_preset, CommandError};

/// Writes the preset's metadata and outline to `out`.
pub fn run(id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let preset = find_preset(id)?;
    let canvas = preset.build();
    tracing::debug!(preset = preset.id, stats = ?canvas.stats(), "Built preset for display");

    writeln!(out, "{}: {}", preset.id, preset.name).map_err(CommandError::Stdout)?;
    writeln!(out, "{}", preset.description).map_err(CommandError::Stdout)?;
    writeln!(out).map_err(CommandError::Stdout)?;
    write!(out, "{}", render_outline(&canvas)).map_err(CommandError::Stdout)?;
    Ok(())
}

/// Renders the tree one entity per line, two spaces per level. Ids are left
/// out since they change on every build.
pub fn render_outline(canvas: &Canvas) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "{}", canvas.kind());
    for section in canvas.children() {
        let _ = writeln!(s, "  {} (data: {})", section.kind(), section.settings().data);
        for row in section.children() {
            let count = row.num_of_columns();
            let _ = writeln!(
                s,
                "    {} ({} column{}, gap {})",
                row.kind(),
                count,
                if count == 1 { "" } else { "s" },
                row.settings().gap
            );
            for column in row.children() {
                let _ = writeln!(s, "      {} (width {})", column.kind(), column.settings().width);
                for leaf in column.children() {
                    let _ = writeln!(s, "        {}", describe_leaf(leaf));
                }
            }
        }
    }
    s
}

/// `text "Copy" [24px bold #DC2626]`; keys at their base value are omitted.
fn describe_leaf(leaf: &ColumnRow) -> String {
    let props = leaf.props();
    let base = TextStyle::default();
    let mut style = vec![format!("{}px", props.style.font_size)];
    if props.style.bold {
        style.push("bold".to_string());
    }
    if props.style.italic {
        style.push("italic".to_string());
    }
    if props.style.underline {
        style.push("underline".to_string());
    }
    if props.style.color != base.color {
        style.push(props.style.color.clone());
    }
    format!("text {:?} [{}]", props.text, style.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use email_presets::{
        create_canvas, create_column, create_row, create_section, create_text_row, TextOverrides,
    };

    #[test]
    fn outline_of_hand_built_tree() {
        let canvas = create_canvas(vec![create_section(vec![create_row(vec![
            create_column(vec![
                create_text_row("Hi", TextOverrides::new()),
                create_text_row(
                    "Go",
                    TextOverrides::new().font_size(18).bold(true).color("#2563EB"),
                ),
            ]),
            create_column(Vec::new()),
        ])])]);

        let expected = "\
canvas
  section (data: preset)
    row (2 columns, gap 10)
      column (width 100)
        text \"Hi\" [16px]
        text \"Go\" [18px bold #2563EB]
      column (width 100)
";
        assert_eq!(render_outline(&canvas), expected);
    }

    #[test]
    fn describe_leaf_lists_italic_and_underline() {
        let leaf = create_text_row("x", TextOverrides::new().italic(true).underline(true));
        assert_eq!(describe_leaf(&leaf), "text \"x\" [16px italic underline]");
    }

    #[test]
    fn show_password_reset() {
        let mut buf = Vec::new();
        run("password-reset", &mut buf).expect("show should succeed");
        let output = String::from_utf8(buf).expect("output should be UTF-8");

        assert!(output.starts_with("password-reset: Password Reset\n"));
        assert!(output.contains("Simple reset email with clear instructions."));
        assert!(output.contains("row (1 column, gap 10)"));
        assert!(output.contains("text \"Reset password\" [18px bold #DC2626]"));
        assert_eq!(output.matches("        text ").count(), 4);
    }

    #[test]
    fn show_unknown_preset_fails() {
        let mut buf = Vec::new();
        let err = run("nope", &mut buf).expect_err("unknown preset");
        assert!(matches!(err, CommandError::UnknownPreset { .. }));
        assert!(buf.is_empty(), "nothing should be written on failure");
    }
}
