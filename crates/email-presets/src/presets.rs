//! Built-in email preset catalog.
//!
//! Five presets ship with the editor, in display order:
//! - **newsletter**: header, hero and three highlights
//! - **product-launch**: headline, feature list and CTA
//! - **event-invite**: invitation with agenda and RSVP
//! - **password-reset**: reset instructions with an action line
//! - **receipt**: order summary and total
//!
//! Every preset is one section holding one row holding one full-width column
//! of text leaves.

use std::fmt;

use crate::builders::TreeBuilder;
use crate::id::{IdSource, RandomIds};
use crate::types::{Canvas, ColumnRow, TextOverrides};

/// Muted grey used for footers and detail lines.
const MUTED: &str = "#6B7280";

/// A catalog entry: display metadata plus a factory for a fresh tree.
///
/// The descriptor holds no tree; every call to [`build`](Self::build)
/// materializes a new one with fresh ids.
#[derive(Clone, Copy)]
pub struct EmailPreset {
    /// Stable identifier used for selection and persistence references.
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line display description
    pub description: &'static str,
    compose: fn(&TreeBuilder<'_>) -> Canvas,
}

impl EmailPreset {
    /// Builds a fresh tree with random ids.
    pub fn build(&self) -> Canvas {
        self.build_with(&RandomIds)
    }

    /// Builds a fresh tree drawing ids from `ids`.
    pub fn build_with(&self, ids: &dyn IdSource) -> Canvas {
        log::debug!("Building email preset {}", self.id);
        (self.compose)(&TreeBuilder::new(ids))
    }
}

impl fmt::Debug for EmailPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailPreset")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Returns the preset catalog in display order.
pub fn email_presets() -> &'static [EmailPreset] {
    &EMAIL_PRESETS
}

static EMAIL_PRESETS: [EmailPreset; 5] = [
    EmailPreset {
        id: "newsletter",
        name: "Weekly Newsletter",
        description: "Header, hero, and three content highlights.",
        compose: newsletter,
    },
    EmailPreset {
        id: "product-launch",
        name: "Product Launch",
        description: "Bold headline with feature list and CTA.",
        compose: product_launch,
    },
    EmailPreset {
        id: "event-invite",
        name: "Event Invite",
        description: "Invitation with agenda and details.",
        compose: event_invite,
    },
    EmailPreset {
        id: "password-reset",
        name: "Password Reset",
        description: "Simple reset email with clear instructions.",
        compose: password_reset,
    },
    EmailPreset {
        id: "receipt",
        name: "Purchase Receipt",
        description: "Order summary and total amount.",
        compose: receipt,
    },
];

/// canvas → section → row → column(leaves)
fn single_column(b: &TreeBuilder<'_>, leaves: Vec<ColumnRow>) -> Canvas {
    let column = b.column(leaves);
    b.canvas(vec![b.section(vec![b.row(vec![column])])])
}

fn heading(size: u32) -> TextOverrides {
    TextOverrides::new().font_size(size).bold(true)
}

fn call_to_action(color: &str) -> TextOverrides {
    TextOverrides::new().font_size(18).bold(true).color(color)
}

fn footnote() -> TextOverrides {
    TextOverrides::new().font_size(14).color(MUTED)
}

fn newsletter(b: &TreeBuilder<'_>) -> Canvas {
    let header = b.text_row("Your Weekly Update", heading(28));
    let intro = b.text_row(
        "Catch up on the biggest stories, tips, and product news.",
        TextOverrides::new().font_size(16),
    );
    let highlight1 = b.text_row("1) Feature Spotlight: New editor tools", TextOverrides::new());
    let highlight2 = b.text_row("2) Case Study: Faster design handoffs", TextOverrides::new());
    let highlight3 = b.text_row("3) Tips: 5 ways to speed up reviews", TextOverrides::new());
    let footer = b.text_row("Thanks for reading. See you next week!", footnote());

    single_column(
        b,
        vec![header, intro, highlight1, highlight2, highlight3, footer],
    )
}

fn product_launch(b: &TreeBuilder<'_>) -> Canvas {
    let headline = b.text_row("Introducing Aurora 2.0", heading(30));
    let sub = b.text_row(
        "Smarter layouts, faster exports, and a brand-new component library.",
        TextOverrides::new(),
    );
    let features = b.text_row(
        "Highlights: Smart grids, responsive presets, and inline editing",
        TextOverrides::new(),
    );
    let cta = b.text_row("Try it today →", call_to_action("#2563EB"));

    single_column(b, vec![headline, sub, features, cta])
}

fn event_invite(b: &TreeBuilder<'_>) -> Canvas {
    let title = b.text_row("You’re Invited: Design Jam", heading(26));
    let details = b.text_row(
        "Thursday, 6 PM · Downtown Studio",
        TextOverrides::new().color(MUTED),
    );
    let agenda = b.text_row(
        "Agenda: Lightning talks, live demos, and networking",
        TextOverrides::new(),
    );
    let rsvp = b.text_row("RSVP now →", call_to_action("#16A34A"));

    single_column(b, vec![title, details, agenda, rsvp])
}

fn password_reset(b: &TreeBuilder<'_>) -> Canvas {
    let title = b.text_row("Reset your password", heading(24));
    let body = b.text_row(
        "We received a request to reset your password. Click below to continue.",
        TextOverrides::new(),
    );
    let action = b.text_row("Reset password", call_to_action("#DC2626"));
    let note = b.text_row(
        "If you didn’t request this, you can safely ignore this email.",
        footnote(),
    );

    single_column(b, vec![title, body, action, note])
}

fn receipt(b: &TreeBuilder<'_>) -> Canvas {
    let title = b.text_row("Thanks for your purchase!", heading(24));
    let order = b.text_row(
        "Order #4921 · June 14, 2024",
        TextOverrides::new().color(MUTED),
    );
    let items = b.text_row("Items: Pro Plan (x1) · Team Pack (x2)", TextOverrides::new());
    let total = b.text_row("Total: $149.00", heading(18));
    let footer = b.text_row("Need help? Reply to this email.", footnote());

    single_column(b, vec![title, order, items, total, footer])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;

    fn texts(canvas: &Canvas) -> Vec<String> {
        canvas
            .text_rows()
            .map(|leaf| leaf.props().text.clone())
            .collect()
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<&str> = email_presets().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                "newsletter",
                "product-launch",
                "event-invite",
                "password-reset",
                "receipt"
            ]
        );
    }

    #[test]
    fn test_newsletter_content() {
        let canvas = email_presets()[0].build();
        assert_eq!(
            texts(&canvas),
            vec![
                "Your Weekly Update",
                "Catch up on the biggest stories, tips, and product news.",
                "1) Feature Spotlight: New editor tools",
                "2) Case Study: Faster design handoffs",
                "3) Tips: 5 ways to speed up reviews",
                "Thanks for reading. See you next week!",
            ]
        );
        let leaves: Vec<_> = canvas.text_rows().collect();
        assert_eq!(leaves[0].props().style.font_size, 28);
        assert!(leaves[0].props().style.bold);
        assert_eq!(leaves[5].props().style.font_size, 14);
        assert_eq!(leaves[5].props().style.color, MUTED);
    }

    #[test]
    fn test_product_launch_cta_style() {
        let canvas = email_presets()[1].build();
        let cta = canvas.text_rows().last().expect("preset has leaves");
        assert_eq!(cta.props().text, "Try it today →");
        assert_eq!(cta.props().style.color, "#2563EB");
        assert_eq!(cta.props().style.font_size, 18);
        assert!(cta.props().style.bold);
    }

    #[test]
    fn test_event_invite_details_are_muted() {
        let canvas = email_presets()[2].build();
        let leaves: Vec<_> = canvas.text_rows().collect();
        assert_eq!(leaves.len(), 4);
        assert_eq!(leaves[1].props().style.color, MUTED);
        assert_eq!(leaves[1].props().style.font_size, 16);
        assert_eq!(leaves[3].props().style.color, "#16A34A");
    }

    #[test]
    fn test_receipt_total_keeps_default_color() {
        let canvas = email_presets()[4].build();
        let leaves: Vec<_> = canvas.text_rows().collect();
        assert_eq!(leaves.len(), 5);
        assert_eq!(leaves[3].props().text, "Total: $149.00");
        assert_eq!(leaves[3].props().style.color, "#111827");
        assert!(leaves[3].props().style.bold);
    }

    #[test]
    fn test_build_with_sequential_ids_is_reproducible() {
        let preset = &email_presets()[3];
        let first = preset.build_with(&SequentialIds::new("p"));
        let second = preset.build_with(&SequentialIds::new("p"));
        assert_eq!(first, second);
        assert_eq!(first.id().as_str(), "p-8");
    }
}
