//! The overview page: filter bar, stat card, and the card grid.

use super::escape;
use crate::catalog::{Catalog, Listing};
use crate::config::SiteConfig;
use crate::filter::{self, FilterState};

/// Render the index page for the whole catalog.
///
/// The `data-visible-count` seed is computed by running the filter engine
/// over the real cards with the default state, so the page and the engine
/// agree before the first input event ever fires.
pub fn render_index(catalog: &Catalog, config: &SiteConfig) -> String {
    let initial_count = filter::apply_all(&catalog.cards(), &FilterState::default()).visible_count;
    let tagline = config
        .site
        .tagline
        .replace("{count}", &catalog.len().to_string());

    let cards = catalog
        .listings
        .iter()
        .map(|listing| render_card(listing, config))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <link rel="stylesheet" href="./{assets_dir}/style.css" />
</head>
<body>
  <header>
    <div class="header-top">
      <div>
        <p class="tagline">{tagline}</p>
        <h1 class="title">{title}</h1>
        <p class="subtitle">{subtitle}</p>
      </div>
      <div class="stat-card">
        <div>Listings shown</div>
        <strong data-visible-count>{initial_count}</strong>
      </div>
    </div>
  </header>

  <main>
    <section class="filter-bar">
      <div class="filter-group">
        <label for="search">Search by name, address or service</label>
        <input id="search" type="search" placeholder="Type a keyword" />
      </div>
      <div class="filter-group">
        <label for="status-filter">Status</label>
        <select id="status-filter">
          <option value="">All</option>
          {status_options}
        </select>
      </div>
      <div class="filter-group">
        <label for="category-filter">Category</label>
        <select id="category-filter">
          <option value="">All</option>
          {category_options}
        </select>
      </div>
    </section>

    <section class="grid">
      {cards}
    </section>
  </main>
  <script src="./{assets_dir}/main.js"></script>
</body>
</html>
"#,
        lang = escape(&config.site.language),
        title = escape(&config.site.title),
        tagline = escape(&tagline),
        subtitle = escape(&config.site.subtitle),
        assets_dir = config.output.assets_dir,
        initial_count = initial_count,
        status_options = select_options(&catalog.statuses()),
        category_options = select_options(&catalog.categories()),
        cards = cards,
    )
}

/// One `<article>` card carrying the filterable fields as data attributes.
pub fn render_card(listing: &Listing, config: &SiteConfig) -> String {
    let card = listing.card();
    let name = escape(&card.name);
    let status_text = escape(listing.status.as_deref().unwrap_or("Status unavailable"));

    let feature_chips = listing
        .features
        .iter()
        .take(config.render.max_feature_chips)
        .map(|feature| format!(r#"<span class="chip">{}</span>"#, escape(feature)))
        .collect::<String>();

    let phone_link = match &listing.phone {
        Some(phone) => format!(
            r#"<a class="button-call" href="tel:{}">Call</a>"#,
            escape(phone)
        ),
        None => String::new(),
    };

    let image_url = listing
        .image_url
        .as_deref()
        .unwrap_or(&config.render.card_image_placeholder);

    format!(
        r#"<article class="card" data-name="{name}" data-category="{category}" data-address="{address}" data-features="{features}" data-status="{status}">
  <img src="{image}" alt="{name}" loading="lazy" />
  <div class="card-body">
    <div class="card-header">
      <span class="status {status_class}">{status_text}</span>
      <span class="rating">{rating}</span>
    </div>
    <h2>{name}</h2>
    <p class="meta">{category}</p>
    <p class="address">{address}</p>
    <div class="chips">{feature_chips}</div>
    <div class="actions">
      <a class="button" href="./{listings_dir}/{slug}/index.html">View page</a>
      <a class="button-ghost" href="{map_url}" target="_blank" rel="noreferrer">Open map</a>
      {phone_link}
    </div>
  </div>
</article>"#,
        name = name,
        category = escape(&card.category),
        address = escape(&card.address),
        features = escape(&card.features),
        status = escape(&card.status),
        image = escape(image_url),
        status_class = listing.status_class(&config.data.open_markers),
        status_text = status_text,
        rating = escape(&listing.formatted_rating()),
        feature_chips = feature_chips,
        listings_dir = config.output.listings_dir,
        slug = listing.slug,
        map_url = escape(&listing.map_url),
        phone_link = phone_link,
    )
}

fn select_options(values: &[String]) -> String {
    values
        .iter()
        .map(|value| {
            let escaped = escape(value);
            format!(r#"<option value="{escaped}">{escaped}</option>"#)
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}
