use super::breadcrumb::Breadcrumb;
use super::html::escape_html;
use super::NAV_ITEMS;
use crate::i18n::t;

/// Navigation frame wrapped around every page.
#[derive(Debug, Clone)]
pub struct PageShell {
    title: String,
    active_path: String,
    breadcrumb: Breadcrumb,
}

impl PageShell {
    pub fn new(
        title: impl Into<String>,
        active_path: impl Into<String>,
        breadcrumb: Breadcrumb,
    ) -> Self {
        Self {
            title: title.into(),
            active_path: active_path.into(),
            breadcrumb,
        }
    }

    fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            self.active_path == "/"
        } else {
            self.active_path == href || self.active_path.starts_with(&format!("{href}/"))
        }
    }

    pub fn render(&self, body: &str) -> String {
        let mut html = String::from("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">");
        html.push_str(&format!(
            "<title>{} | {}</title></head><body>",
            escape_html(&self.title),
            t("app.title")
        ));

        html.push_str("<aside class=\"sidebar\"><nav aria-label=\"Main\"><ul>");
        for (_, key, href) in NAV_ITEMS {
            let current = if self.is_active(href) {
                " aria-current=\"page\" class=\"active\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<li><a href=\"{href}\"{current}>{}</a></li>",
                escape_html(t(key))
            ));
        }
        html.push_str("</ul></nav></aside>");

        html.push_str("<main>");
        html.push_str(&self.breadcrumb.render());
        html.push_str(&format!("<h1>{}</h1>", escape_html(&self.title)));
        html.push_str(body);
        html.push_str("</main></body></html>");
        html
    }
}
