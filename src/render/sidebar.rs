//! Sidebar markup
//!
//! One menu tab and one pane of checkboxes per fixed category. Pane
//! contents are derived from the catalog:
//!
//! - CSPM: every item name across all categories
//! - Images: every category's image reference, with a thumbnail
//! - Ticket: every item text across all categories

use crate::board::SelectionKind;
use crate::catalog::Catalog;

use super::html::escape;

/// How a pane entry is labelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneLabel {
    Text(String),
    Thumbnail { src: String, alt: String },
}

/// A single checkable entry in a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneEntry {
    pub value: String,
    pub label: PaneLabel,
}

/// Entries of one pane, in catalog order
pub fn pane_entries(catalog: &Catalog, kind: SelectionKind) -> Vec<PaneEntry> {
    match kind {
        SelectionKind::Cspm => catalog
            .items()
            .map(|item| PaneEntry {
                value: item.name.clone(),
                label: PaneLabel::Text(item.name.clone()),
            })
            .collect(),
        SelectionKind::Images => catalog
            .categories
            .iter()
            .map(|category| PaneEntry {
                value: category.graph.clone(),
                label: PaneLabel::Thumbnail {
                    src: category.graph.clone(),
                    alt: category.name.clone(),
                },
            })
            .collect(),
        SelectionKind::Ticket => catalog
            .items()
            .map(|item| PaneEntry {
                value: item.text.clone(),
                label: PaneLabel::Text(item.text.clone()),
            })
            .collect(),
    }
}

/// Element id of a category's pane
pub fn pane_id(kind: SelectionKind) -> String {
    format!("category-{}", kind.index())
}

/// Menu tabs and panes.
///
/// With no catalog the menu and content containers are rendered empty.
pub fn render_sidebar<F>(catalog: Option<&Catalog>, active: SelectionKind, is_checked: F) -> String
where
    F: Fn(SelectionKind, &str) -> bool,
{
    let mut menu = String::new();
    let mut panes = String::new();

    if let Some(catalog) = catalog {
        for kind in SelectionKind::ALL {
            let active_class = if kind == active { " active" } else { "" };

            menu.push_str(&format!(
                "<form method=\"post\" action=\"/ui/tabs/{kind}\">\
                 <button type=\"submit\" class=\"menu-item{active}\" data-target=\"{target}\">{kind}</button>\
                 </form>",
                kind = kind,
                active = active_class,
                target = pane_id(kind),
            ));

            panes.push_str(&format!(
                "<div class=\"widget-content{active}\" id=\"{id}\">\
                 <form method=\"post\" action=\"/ui/panes/{kind}\">",
                active = active_class,
                id = pane_id(kind),
                kind = kind,
            ));

            for (i, entry) in pane_entries(catalog, kind).iter().enumerate() {
                panes.push_str(&render_checkbox(i, kind, entry, is_checked(kind, &entry.value)));
            }

            panes.push_str("<button type=\"submit\" class=\"apply-button\">Apply</button></form></div>");
        }
    }

    format!(
        "<div class=\"widget-menu\">{}</div><div class=\"widget-content-container\">{}</div>",
        menu, panes
    )
}

fn render_checkbox(position: usize, kind: SelectionKind, entry: &PaneEntry, checked: bool) -> String {
    let label = match &entry.label {
        PaneLabel::Text(text) => escape(text),
        PaneLabel::Thumbnail { src, alt } => format!(
            "<img style=\"height:5rem\" src=\"{}\" alt=\"{}\">",
            escape(src),
            escape(alt)
        ),
    };

    format!(
        "<label><input type=\"checkbox\" name=\"item-{position}\" value=\"{value}\" \
         data-category=\"{kind}\"{checked}> {label}</label>",
        position = position,
        value = escape(&entry.value),
        kind = kind,
        checked = if checked { " checked" } else { "" },
        label = label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_json(
            r#"{"categories":[{"name":"A","graph":"g.png","widgets":[{"name":"W1","text":"T1"}]}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_pane_entries_per_category() {
        let catalog = sample_catalog();

        let cspm = pane_entries(&catalog, SelectionKind::Cspm);
        let images = pane_entries(&catalog, SelectionKind::Images);
        let ticket = pane_entries(&catalog, SelectionKind::Ticket);

        assert_eq!(cspm.len(), 1);
        assert_eq!(cspm[0].value, "W1");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].value, "g.png");
        assert_eq!(
            images[0].label,
            PaneLabel::Thumbnail {
                src: "g.png".to_string(),
                alt: "A".to_string()
            }
        );
        assert_eq!(ticket.len(), 1);
        assert_eq!(ticket[0].value, "T1");
    }

    #[test]
    fn test_pane_entries_flatten_across_categories() {
        let catalog = Catalog::from_json(
            r#"{"categories":[
                {"name":"A","graph":"a.png","widgets":[{"name":"W1","text":"T1"},{"name":"W2","text":"T2"}]},
                {"name":"B","graph":"b.png","widgets":[{"name":"W3","text":"T3"}]}
            ]}"#,
        )
        .unwrap();

        let values = |kind| -> Vec<String> {
            pane_entries(&catalog, kind)
                .into_iter()
                .map(|entry| entry.value)
                .collect()
        };

        assert_eq!(values(SelectionKind::Cspm), vec!["W1", "W2", "W3"]);
        assert_eq!(values(SelectionKind::Images), vec!["a.png", "b.png"]);
        assert_eq!(values(SelectionKind::Ticket), vec!["T1", "T2", "T3"]);

        let html = render_sidebar(Some(&catalog), SelectionKind::Cspm, |_, _| false);
        assert!(html.contains("name=\"item-2\" value=\"W3\" data-category=\"CSPM\""));
        assert!(html.contains("name=\"item-1\" value=\"b.png\" data-category=\"Images\""));
        assert!(html.contains("name=\"item-2\" value=\"T3\" data-category=\"Ticket\""));
    }

    #[test]
    fn test_render_marks_checked_and_active() {
        let catalog = sample_catalog();
        let html = render_sidebar(Some(&catalog), SelectionKind::Images, |kind, value| {
            kind == SelectionKind::Ticket && value == "T1"
        });

        assert!(html.contains(
            "<input type=\"checkbox\" name=\"item-0\" value=\"W1\" data-category=\"CSPM\"> W1"
        ));
        assert!(html.contains("value=\"T1\" data-category=\"Ticket\" checked>"));
        assert!(html.contains("<img style=\"height:5rem\" src=\"g.png\" alt=\"A\">"));
        assert_eq!(html.matches("class=\"widget-content active\"").count(), 1);
        assert!(html.contains("class=\"widget-content active\" id=\"category-1\""));
    }

    #[test]
    fn test_render_without_catalog_is_empty() {
        let html = render_sidebar(None, SelectionKind::Cspm, |_, _| false);
        assert_eq!(
            html,
            "<div class=\"widget-menu\"></div><div class=\"widget-content-container\"></div>"
        );
    }
}
