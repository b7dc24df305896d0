//! HTML snippet rendering for list panels.
//!
//! The portal injects these fragments into existing page containers. All
//! user- and backend-supplied text passes through [`escape_html`]; nothing
//! is interpolated raw.

use std::fmt::Write as _;

use crate::workflows::directory::CompanyCard;
use crate::workflows::testimonials::PublishedTestimonial;

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the company results grid. An empty slice yields an empty string;
/// the page keeps its own empty-state panel.
pub fn render_company_grid(companies: &[CompanyCard]) -> String {
    let mut html = String::new();
    for company in companies {
        render_company_card(&mut html, company);
    }
    html
}

fn render_company_card(html: &mut String, company: &CompanyCard) {
    html.push_str("<div class=\"col-12 col-md-6 col-lg-4\"><div class=\"card h-100\"><div class=\"card-body\">");
    if let Some(logo) = &company.logo_url {
        writeln!(
            html,
            "<img class=\"company-logo\" src=\"{}\" alt=\"{}\">",
            escape_html(logo),
            escape_html(&company.company_name)
        )
        .expect("write logo");
    }
    writeln!(
        html,
        "<h5 class=\"card-title\">{}</h5>",
        escape_html(&company.company_name)
    )
    .expect("write title");
    if let Some(label) = company.limit_label() {
        writeln!(
            html,
            "<div class=\"text-muted small\">{}</div>",
            escape_html(&label)
        )
        .expect("write limit");
    }
    writeln!(
        html,
        "<a class=\"btn btn-primary\" href=\"{}\">Apply with this company</a>",
        escape_html(&company.apply_url)
    )
    .expect("write cta");
    html.push_str("</div></div></div>");
}

/// Render a freshly accepted testimonial for prepending to the list.
pub fn render_testimonial(testimonial: &PublishedTestimonial) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"col-md-4 text-center\"><blockquote class=\"blockquote\">");
    writeln!(html, "<p>{}</p>", escape_html(&testimonial.body)).expect("write body");
    writeln!(
        html,
        "<footer class=\"blockquote-footer\">{}</footer>",
        escape_html(&testimonial.name)
    )
    .expect("write footer");
    html.push_str("</blockquote></div>");
    html
}
