//! Preview rendering: literal substitution of sample values for the known
//! Liquid tags, plus a crude textual resolution of loop and conditional
//! blocks. This is a visual aid for the editor, not a Liquid interpreter;
//! production rendering is the template engine's job.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Fixed sample values substituted for known output tags, verbatim match
/// against the canonical spacing used by the snippet catalogs.
pub const SAMPLE_DATA: &[(&str, &str)] = &[
    ("{{ shop.name }}", "Your Shopify Store"),
    (
        "{{ shop.email_logo_url }}",
        "https://placehold.co/150x50?text=Shop+Logo",
    ),
    ("{{ customer.first_name }}", "John"),
    ("{{ order.name }}", "#1001"),
    ("{{ order.created_at | date: \"%B %d, %Y\" }}", "March 27, 2025"),
    ("{{ order.transactions[0].gateway }}", "Credit Card"),
    ("{{ line_item.title }}", "Sample Product"),
    ("{{ line_item.variant.title }}", "Blue / Medium"),
    ("{{ line_item.quantity }}", "1"),
    ("{{ line_item.price | money }}", "$29.99"),
    ("{{ order.subtotal_price | money }}", "$29.99"),
    ("{{ order.shipping_price | money }}", "$5.00"),
    ("{{ order.tax_price | money }}", "$3.50"),
    ("{{ order.total_price | money }}", "$38.49"),
    ("{{ order.shipping_address.name }}", "John Doe"),
    ("{{ order.shipping_address.address1 }}", "123 Main Street"),
    ("{{ order.shipping_address.address2 }}", "Apt 4B"),
    ("{{ order.shipping_address.city }}", "New York"),
    ("{{ order.shipping_address.province_code }}", "NY"),
    ("{{ order.shipping_address.zip }}", "10001"),
    ("{{ order.shipping_address.country }}", "United States"),
    ("{{ order.shipping_lines[0].title }}", "Standard Shipping"),
    ("{{ shop.email }}", "support@yourstore.com"),
    ("{{ 'now' | date: \"%Y\" }}", "2025"),
];

/// Preview tunables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// How many times a `{% for %}` body is repeated in the preview
    pub loop_repeats: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self { loop_repeats: 3 }
    }
}

fn for_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\{%\s*for\s[^%]*?%\}(.*?)\{%\s*endfor\s*%\}")
            .expect("Invalid for-block regex")
    })
}

fn if_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\{%\s*if\s[^%]*?%\}(.*?)\{%\s*endif\s*%\}")
            .expect("Invalid if-block regex")
    })
}

/// Render a preview of the template with sample data substituted.
///
/// Output tags from [`SAMPLE_DATA`] are replaced literally, `{% for %}`
/// bodies are repeated, and `{% if %}` bodies are kept unconditionally.
/// Tags the table does not know stay visible in the preview, which is
/// deliberate: it shows the author what will not render.
pub fn render(html: &str, opts: &PreviewOptions) -> String {
    let mut preview = html.to_string();

    for (tag, value) in SAMPLE_DATA {
        preview = preview.replace(tag, value);
    }

    // Repeat loop bodies a fixed number of times (single pass; nested
    // loops are best effort, same as the tag protection)
    let preview = for_block_regex()
        .replace_all(&preview, |caps: &Captures| {
            caps[1].repeat(opts.loop_repeats)
        })
        .into_owned();

    // Keep conditional bodies unconditionally
    if_block_regex()
        .replace_all(&preview, |caps: &Captures| caps[1].to_string())
        .into_owned()
}
