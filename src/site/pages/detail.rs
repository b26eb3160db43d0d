//! Per-listing detail pages.

use super::escape;
use crate::catalog::Listing;
use crate::config::SiteConfig;

/// Render the standalone page for one listing.
///
/// The page lives two levels below the site root, so asset and index
/// links climb back up with `../../`.
pub fn render_detail(listing: &Listing, config: &SiteConfig) -> String {
    let name = escape(&listing.name);
    let status_text = escape(listing.status.as_deref().unwrap_or("Status unavailable"));
    let hours_text = escape(listing.hours.as_deref().unwrap_or("Hours unavailable"));
    let map_url = escape(&listing.map_url);

    let feature_chips = if listing.features.is_empty() {
        r#"<span class="chip">No extra details provided</span>"#.to_string()
    } else {
        listing
            .features
            .iter()
            .map(|feature| format!(r#"<span class="chip">{}</span>"#, escape(feature)))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let phone_row = match &listing.phone {
        Some(phone) => format!(
            r#"<div class="meta-row">📞 <span><a class="back-link" href="tel:{0}">{0}</a></span></div>"#,
            escape(phone)
        ),
        None => r#"<div class="meta-row">📞 <span>Phone unavailable</span></div>"#.to_string(),
    };

    let call_button = match &listing.phone {
        Some(phone) => format!(
            r#"<a class="button-call" href="tel:{}">Call now</a>"#,
            escape(phone)
        ),
        None => String::new(),
    };

    let image = escape(
        listing
            .image_url
            .as_deref()
            .unwrap_or(&config.render.hero_image_placeholder),
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{name} | {site_title}</title>
  <link rel="stylesheet" href="../../{assets_dir}/style.css" />
</head>
<body>
  <main style="max-width: 1100px; margin: 0 auto; padding: 24px;">
    <a class="back-link" href="../../index.html">← Back to directory</a>
    <section class="hero">
      <div style="display: grid; grid-template-columns: 1.2fr 1fr; gap: 18px; align-items: center;">
        <img src="{image}" alt="{name}" style="width: 100%; border-radius: var(--radius); border: 1px solid var(--border);" loading="lazy" />
        <div>
          <p class="status {status_class}">{status_text}</p>
          <h1 style="margin: 10px 0 6px;">{name}</h1>
          <p class="meta">{category}</p>
          <p class="rating">{rating}</p>
          <div class="chips" style="margin-top: 10px;">{feature_chips}</div>
        </div>
      </div>
      <div class="actions" style="margin-top: 16px;">
        <a class="button" href="{map_url}" target="_blank" rel="noreferrer">Open in maps</a>
        {call_button}
      </div>
    </section>

    <section class="detail-layout">
      <div class="detail-card">
        <h3>Contact &amp; location</h3>
        <div class="detail-meta">
          <div class="meta-row">📍 <span>{address}</span></div>
          {phone_row}
          <div class="meta-row">⏱️ <span>{hours_text}</span></div>
          <div class="meta-row">🗺️ <span><a class="back-link" href="{map_url}" target="_blank" rel="noreferrer">View directions</a></span></div>
        </div>
      </div>
      <div class="detail-card">
        <h3>Highlights</h3>
        <div class="feature-list">{feature_chips}</div>
      </div>
    </section>
  </main>
</body>
</html>
"#,
        lang = escape(&config.site.language),
        name = name,
        site_title = escape(&config.site.title),
        assets_dir = config.output.assets_dir,
        image = image,
        status_class = listing.status_class(&config.data.open_markers),
        status_text = status_text,
        category = escape(&listing.category),
        rating = escape(&listing.formatted_rating()),
        feature_chips = feature_chips,
        map_url = map_url,
        call_button = call_button,
        address = escape(&listing.address),
        phone_row = phone_row,
        hours_text = hours_text,
    )
}
