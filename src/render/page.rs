//! Page layout
//!
//! The page works without script: every control is a form post that
//! redirects back to `/`. The page-cover overlay follows the nav input's
//! focus through a CSS sibling selector.

/// Pieces of the page rendered by the controllers
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub sidebar: &'a str,
    pub sidebar_visible: bool,
    pub surface: &'a str,
}

const STYLE: &str = "\
.widget-content { display: none; }\n\
.widget-content.active { display: block; }\n\
.cover-the-page { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); }\n\
#nav-wala-input:focus ~ .cover-the-page { display: block; }\n\
.widget { width: fit-content; min-width: 35vh; height: 20vh; padding: 0.4rem; }\n\
.widget.active { outline: 2px solid #3b82f6; }\n\
.widget-child img { height: 3rem; }\n\
form { display: inline; }\n";

/// Complete HTML document
pub fn render_page(view: &PageView<'_>) -> String {
    let sidebar = if view.sidebar_visible {
        format!(
            "<aside class=\"overflow-container\">\
             <form method=\"post\" action=\"/ui/sidebar/hide\">\
             <button type=\"submit\" class=\"hide-sidebar\">Hide</button></form>\
             {sidebar}\
             <form method=\"post\" action=\"/ui/save\">\
             <button type=\"submit\" class=\"save-button\" style=\"background-color: yellow\">Save</button>\
             </form>\
             </aside>",
            sidebar = view.sidebar,
        )
    } else {
        "<form method=\"post\" action=\"/ui/sidebar/show\">\
         <button type=\"submit\" class=\"show-sidebar\">Show sidebar</button></form>"
            .to_string()
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Dashboard</title>\n\
         <style>\n{style}</style>\n\
         </head>\n\
         <body>\n\
         <nav><input id=\"nav-wala-input\" type=\"search\" placeholder=\"Search anything...\">\
         <div class=\"cover-the-page\"></div></nav>\n\
         <main>\n\
         <form method=\"post\" action=\"/ui/widgets\">\
         <button type=\"submit\" id=\"add-widget-btn\">+ Add Widget</button></form>\n\
         <div class=\"widget-container\">{surface}</div>\n\
         </main>\n\
         {sidebar}\n\
         </body>\n\
         </html>\n",
        style = STYLE,
        surface = view.surface,
        sidebar = sidebar,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_controls() {
        let html = render_page(&PageView {
            sidebar: "<div class=\"widget-menu\"></div>",
            sidebar_visible: true,
            surface: "<div class=\"widget\" data-widget=\"0\"></div>",
        });

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"add-widget-btn\""));
        assert!(html.contains("class=\"save-button\""));
        assert!(html.contains("id=\"nav-wala-input\""));
        assert!(html.contains("<div class=\"widget-container\"><div class=\"widget\" data-widget=\"0\"></div></div>"));
    }

    #[test]
    fn test_hidden_sidebar_offers_show_control() {
        let html = render_page(&PageView {
            sidebar: "<div class=\"widget-menu\"></div>",
            sidebar_visible: false,
            surface: "",
        });

        assert!(!html.contains("widget-menu"));
        assert!(!html.contains("save-button"));
        assert!(html.contains("action=\"/ui/sidebar/show\""));
    }
}
