//! XML sitemap rendering

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::Result;
use crate::routes::PageDescriptor;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render the page list as a sitemap XML document.
///
/// `base_url` must not carry a trailing slash (every path starts with one).
/// `lastmod` is captured once per generation run and applied to every entry;
/// the output is byte-identical for identical pages and date.
pub fn render(pages: &[PageDescriptor], base_url: &str, lastmod: NaiveDate) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    let date = lastmod.format("%Y-%m-%d").to_string();
    for page in pages {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &format!("{base_url}{}", page.path))?;
        write_text_element(&mut writer, "changefreq", page.change_frequency.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", page.priority))?;
        write_text_element(&mut writer, "lastmod", &date)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::routes::{self, ChangeFrequency, RouteCategory};

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn single_page() -> Vec<PageDescriptor> {
        vec![PageDescriptor {
            path: "/delhi".to_string(),
            priority: 0.8,
            change_frequency: ChangeFrequency::Weekly,
            category: RouteCategory::Destination,
            label: "Delhi Services".to_string(),
        }]
    }

    #[test]
    fn test_render_single_url() {
        let xml = render(&single_page(), "https://example.com", fixed_date()).unwrap();
        let expected = [
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
            "  <url>",
            "    <loc>https://example.com/delhi</loc>",
            "    <changefreq>weekly</changefreq>",
            "    <priority>0.8</priority>",
            "    <lastmod>2025-06-01</lastmod>",
            "  </url>",
            "</urlset>",
        ]
        .join("\n");
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_priority_keeps_one_fractional_digit() {
        let mut pages = single_page();
        pages[0].priority = 1.0;
        let xml = render(&pages, "https://example.com", fixed_date()).unwrap();
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let pages = routes::enumerate(&Catalog::bundled());
        let first = render(&pages, "https://trivenicabs.in", fixed_date()).unwrap();
        let second = render(&pages, "https://trivenicabs.in", fixed_date()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bundled_catalog_locs() {
        let pages = routes::enumerate(&Catalog::bundled());
        let xml = render(&pages, "https://example.com", fixed_date()).unwrap();
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<loc>https://example.com/tour-package/rajasthan-tour</loc>"));
        assert!(xml.contains("<loc>https://example.com/vehicle-details/tempo-traveller</loc>"));
        assert!(xml.contains("<loc>https://example.com/delhi/to/agra</loc>"));
        assert_eq!(xml.matches("<url>").count(), pages.len());
        assert_eq!(xml.matches("<lastmod>2025-06-01</lastmod>").count(), pages.len());
    }
}
