//! Widget card markup
//!
//! Card content is rendered in the fixed category order. The content
//! without removal controls is also the persisted form of a live widget.

use crate::board::{SelectionKind, Widget, WidgetContent};

use super::html::escape;

/// Whether per-item removal controls are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemControls {
    /// Emit a control for every unlocked entry
    Shown,
    /// Emit none
    Hidden,
}

/// Inner content of a widget card
pub fn render_widget_content(widget: &Widget, controls: ItemControls) -> String {
    let selection = match widget.content() {
        WidgetContent::Snapshot(markup) => return markup.clone(),
        WidgetContent::Live => widget.selection(),
    };

    let mut out = String::new();
    for kind in SelectionKind::ALL {
        for entry in selection.entries(kind) {
            out.push_str("<div class=\"widget-child\">");

            let value = escape(&entry.value);
            match kind {
                SelectionKind::Images => {
                    out.push_str(&format!("<img src=\"{}\" alt=\"widget\">", value));
                }
                SelectionKind::Cspm | SelectionKind::Ticket => {
                    out.push_str(&format!("<span>{}</span>", value));
                }
            }

            if controls == ItemControls::Shown && !entry.locked {
                out.push_str(&format!(
                    "<form class=\"remove-item\" method=\"post\" \
                     action=\"/ui/widgets/{widget}/items/{entry}/remove\" \
                     data-category=\"{kind}\" data-entry=\"{entry}\">\
                     <button type=\"submit\">&times;</button></form>",
                    widget = widget.id(),
                    entry = entry.id,
                    kind = kind,
                ));
            }

            out.push_str("</div>");
        }
    }
    out
}

/// Content as written to storage
pub fn persisted_content(widget: &Widget) -> String {
    render_widget_content(widget, ItemControls::Hidden)
}

/// Full card: header with widget controls around the content
pub fn render_widget_card(widget: &Widget, active: bool) -> String {
    let id = widget.id();
    let class = if active { "widget active" } else { "widget" };

    format!(
        "<div class=\"{class}\" data-widget=\"{id}\">\
         <h6>Widget \
         <form class=\"remove-widget\" method=\"post\" action=\"/ui/widgets/{id}/remove\">\
         <button type=\"submit\">&times;</button></form>\
         <form class=\"focus-widget\" method=\"post\" action=\"/ui/widgets/{id}/focus\">\
         <button type=\"submit\">Focus</button></form>\
         </h6>\
         <div class=\"widget-body\">{content}</div>\
         </div>",
        class = class,
        id = id,
        content = render_widget_content(widget, ItemControls::Shown),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{SelectionIndex, WidgetId};

    fn sample_widget() -> Widget {
        let mut selection = SelectionIndex::new();
        selection.add(SelectionKind::Ticket, "T1");
        selection.add(SelectionKind::Images, "g.png");
        selection.add(SelectionKind::Cspm, "W1");
        Widget::with_selection(WidgetId(4), selection)
    }

    #[test]
    fn test_content_follows_category_order() {
        let content = render_widget_content(&sample_widget(), ItemControls::Hidden);

        assert_eq!(
            content,
            "<div class=\"widget-child\"><span>W1</span></div>\
             <div class=\"widget-child\"><img src=\"g.png\" alt=\"widget\"></div>\
             <div class=\"widget-child\"><span>T1</span></div>"
        );
    }

    #[test]
    fn test_controls_tagged_with_category_and_entry() {
        let content = render_widget_content(&sample_widget(), ItemControls::Shown);

        assert_eq!(content.matches("class=\"remove-item\"").count(), 3);
        assert!(content.contains("data-category=\"Ticket\" data-entry=\"0\""));
        assert!(content.contains("action=\"/ui/widgets/4/items/1/remove\""));
    }

    #[test]
    fn test_locked_entries_have_no_control() {
        let mut widget = sample_widget();
        widget.selection_mut().unwrap().lock_all();
        widget.selection_mut().unwrap().add(SelectionKind::Cspm, "W2");

        let content = render_widget_content(&widget, ItemControls::Shown);
        assert_eq!(content.matches("class=\"remove-item\"").count(), 1);
        assert!(content.contains("data-entry=\"3\""));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut selection = SelectionIndex::new();
        selection.add(SelectionKind::Cspm, "<b>bold</b>");
        let widget = Widget::with_selection(WidgetId(0), selection);

        let content = persisted_content(&widget);
        assert!(content.contains("<span>&lt;b&gt;bold&lt;/b&gt;</span>"));
    }

    #[test]
    fn test_snapshot_replays_markup_verbatim() {
        let markup = "<div class=\"widget-child\"><span>W1</span></div>";
        let widget = Widget::from_markup(WidgetId(1), markup);

        assert_eq!(render_widget_content(&widget, ItemControls::Shown), markup);

        let card = render_widget_card(&widget, false);
        assert!(card.contains(markup));
        assert!(card.contains("class=\"remove-widget\""));
    }
}
