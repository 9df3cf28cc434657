use super::html::escape_html;

pub(crate) const SEPARATOR_CLASS: &str = "breadcrumb-separator";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Ordered navigation trail. The last item is always the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    items: Vec<BreadcrumbItem>,
}

impl Breadcrumb {
    pub fn new(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let last = self.items.len() - 1;
        let mut html = String::from("<nav aria-label=\"Breadcrumb\"><ol class=\"breadcrumb\">");
        for (index, item) in self.items.iter().enumerate() {
            html.push_str("<li class=\"breadcrumb-item\">");
            if index > 0 {
                html.push_str(&format!(
                    "<span class=\"{SEPARATOR_CLASS}\" aria-hidden=\"true\">/</span>"
                ));
            }

            let label = escape_html(&item.label);
            match (&item.href, index == last) {
                (_, true) => html.push_str(&format!("<span aria-current=\"page\">{label}</span>")),
                (Some(href), false) => html.push_str(&format!(
                    "<a href=\"{}\">{label}</a>",
                    escape_html(href)
                )),
                (None, false) => html.push_str(&format!("<span>{label}</span>")),
            }
            html.push_str("</li>");
        }
        html.push_str("</ol></nav>");
        html
    }
}
