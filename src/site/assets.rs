//! Static assets embedded in the binary and written on every build.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Shared stylesheet for the index and detail pages.
pub const STYLE: &str = r#"
:root {
  --bg: #0f172a;
  --surface: #111827;
  --card: #131c2f;
  --accent: #38bdf8;
  --accent-strong: #0ea5e9;
  --text: #e2e8f0;
  --muted: #94a3b8;
  --border: #1f2937;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
  --radius: 14px;
  --radius-small: 10px;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: radial-gradient(circle at 20% 20%, rgba(56, 189, 248, 0.05), transparent 35%),
              radial-gradient(circle at 80% 0%, rgba(14, 165, 233, 0.07), transparent 30%),
              var(--bg);
  color: var(--text);
  font-family: 'Inter', 'Noto Sans TC', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  min-height: 100vh;
}

header {
  padding: 36px 24px 12px;
  max-width: 1200px;
  margin: 0 auto;
}

.header-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
  flex-wrap: wrap;
}

.title {
  margin: 0;
  font-size: 28px;
  letter-spacing: 0.5px;
}

.subtitle {
  margin: 6px 0 0;
  color: var(--muted);
}

.tagline {
  padding: 8px 12px;
  background: rgba(56, 189, 248, 0.08);
  border: 1px solid rgba(56, 189, 248, 0.25);
  border-radius: var(--radius-small);
  color: #bae6fd;
  font-size: 14px;
}

main {
  max-width: 1200px;
  margin: 0 auto 48px;
  padding: 0 24px 24px;
}

.filter-bar {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 18px;
  box-shadow: var(--shadow);
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 12px;
  position: sticky;
  top: 12px;
  z-index: 5;
}

.filter-group {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.filter-group label {
  color: var(--muted);
  font-size: 13px;
}

input[type="search"],
select {
  width: 100%;
  padding: 12px 14px;
  border-radius: var(--radius-small);
  border: 1px solid var(--border);
  background: #0b1220;
  color: var(--text);
  font-size: 15px;
}

input[type="search"]::placeholder {
  color: #60708c;
}

.grid {
  margin-top: 18px;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 16px;
}

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  display: flex;
  flex-direction: column;
  box-shadow: var(--shadow);
  transition: transform 150ms ease, box-shadow 150ms ease, border 150ms ease;
}

.card:hover {
  transform: translateY(-2px);
  border-color: rgba(56, 189, 248, 0.4);
  box-shadow: 0 14px 40px rgba(14, 165, 233, 0.15);
}

.card img {
  width: 100%;
  height: 180px;
  object-fit: cover;
  background: #0b1220;
}

.card-body {
  padding: 16px;
  display: grid;
  gap: 10px;
  height: 100%;
}

.card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 10px;
}

.status {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 6px 10px;
  border-radius: 999px;
  background: rgba(74, 222, 128, 0.12);
  color: #bbf7d0;
  font-weight: 600;
  font-size: 13px;
  border: 1px solid rgba(74, 222, 128, 0.35);
}

.status.neutral {
  background: rgba(148, 163, 184, 0.1);
  color: var(--muted);
  border-color: rgba(148, 163, 184, 0.3);
}

.status.open-24 {
  background: rgba(56, 189, 248, 0.14);
  color: #bae6fd;
  border-color: rgba(56, 189, 248, 0.35);
}

.rating {
  color: #fcd34d;
  font-weight: 700;
}

h2 {
  margin: 0;
  font-size: 20px;
  letter-spacing: 0.1px;
}

.meta,
.address {
  margin: 0;
  color: var(--muted);
  line-height: 1.6;
}

.chips {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.chip {
  padding: 6px 10px;
  background: rgba(56, 189, 248, 0.08);
  border: 1px solid rgba(56, 189, 248, 0.3);
  color: #c2e6fb;
  border-radius: 999px;
  font-size: 12px;
}

.actions {
  margin-top: auto;
  display: flex;
  gap: 10px;
  flex-wrap: wrap;
}

.button,
.button-ghost,
.button-call {
  padding: 10px 14px;
  border-radius: 10px;
  text-decoration: none;
  font-weight: 700;
  font-size: 14px;
  border: 1px solid transparent;
  transition: transform 120ms ease, box-shadow 120ms ease, opacity 120ms ease;
}

.button {
  background: linear-gradient(135deg, var(--accent), var(--accent-strong));
  color: #0b1220;
  box-shadow: 0 8px 20px rgba(14, 165, 233, 0.25);
}

.button-ghost {
  background: rgba(255, 255, 255, 0.04);
  border-color: rgba(255, 255, 255, 0.08);
  color: var(--text);
}

.button-call {
  background: rgba(74, 222, 128, 0.14);
  border-color: rgba(74, 222, 128, 0.3);
  color: #befae2;
}

.button:hover,
.button-ghost:hover,
.button-call:hover {
  transform: translateY(-1px);
  opacity: 0.95;
}

.stat-card {
  background: rgba(255, 255, 255, 0.04);
  border: 1px solid rgba(255, 255, 255, 0.08);
  padding: 12px 14px;
  border-radius: 12px;
  color: var(--muted);
  font-size: 14px;
}

.stat-card strong {
  color: var(--text);
  font-size: 16px;
}

.hero {
  background: linear-gradient(135deg, rgba(56, 189, 248, 0.1), rgba(14, 165, 233, 0.08)),
              radial-gradient(circle at 20% 20%, rgba(56, 189, 248, 0.14), transparent 40%),
              var(--surface);
  padding: 32px;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  box-shadow: var(--shadow);
}

.detail-layout {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 18px;
  margin-top: 18px;
}

.detail-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 18px;
  box-shadow: var(--shadow);
}

@media (max-width: 900px) {
  .detail-layout {
    grid-template-columns: 1fr;
  }
}

.detail-meta {
  display: grid;
  gap: 10px;
}

.meta-row {
  display: flex;
  align-items: flex-start;
  gap: 10px;
  color: var(--muted);
}

.meta-row span {
  color: var(--text);
}

.feature-list {
  display: flex;
  flex-wrap: wrap;
  gap: 10px;
}

.back-link {
  text-decoration: none;
  color: var(--muted);
  font-weight: 600;
  display: inline-flex;
  align-items: center;
  gap: 6px;
}

.back-link:hover {
  color: var(--text);
}
"#;

/// The in-page filter engine.
///
/// This script is the browser twin of [`crate::filter::engine`]: the same
/// corpus join, trimmed lower-cased substring keyword, exact select
/// equality, conjunction, full recompute per input event, and one eager
/// pass at load. Every DOM binding is guarded, so a page missing a
/// control or the count element degrades instead of throwing.
pub const SCRIPT: &str = r#"
(() => {
  const search = document.querySelector('#search');
  const statusFilter = document.querySelector('#status-filter');
  const categoryFilter = document.querySelector('#category-filter');
  const cards = Array.from(document.querySelectorAll('[data-name]'));
  const visibleCount = document.querySelector('[data-visible-count]');

  const normalize = (text) => text.toLowerCase();

  function matches(card) {
    const keyword = normalize(search ? search.value.trim() : '');
    const statusValue = statusFilter ? statusFilter.value : '';
    const categoryValue = categoryFilter ? categoryFilter.value : '';
    const haystack = [
      card.dataset.name,
      card.dataset.address,
      card.dataset.category,
      card.dataset.features,
    ].join(' ').toLowerCase();

    const keywordMatch = !keyword || haystack.includes(keyword);
    const statusMatch = !statusValue || card.dataset.status === statusValue;
    const categoryMatch = !categoryValue || card.dataset.category === categoryValue;

    return keywordMatch && statusMatch && categoryMatch;
  }

  function applyFilters() {
    let count = 0;
    cards.forEach((card) => {
      if (matches(card)) {
        card.style.display = '';
        count += 1;
      } else {
        card.style.display = 'none';
      }
    });

    if (visibleCount) {
      visibleCount.textContent = count;
    }
  }

  if (search) search.addEventListener('input', applyFilters);
  if (statusFilter) statusFilter.addEventListener('change', applyFilters);
  if (categoryFilter) categoryFilter.addEventListener('change', applyFilters);

  applyFilters();
})();
"#;

/// Write both assets into `assets_dir`, returning the bytes written.
pub fn write_assets(assets_dir: &Path) -> Result<u64> {
    fs::create_dir_all(assets_dir)
        .with_context(|| format!("failed to create {}", assets_dir.display()))?;

    let style_path = assets_dir.join("style.css");
    fs::write(&style_path, STYLE)
        .with_context(|| format!("failed to write {}", style_path.display()))?;

    let script_path = assets_dir.join("main.js");
    fs::write(&script_path, SCRIPT)
        .with_context(|| format!("failed to write {}", script_path.display()))?;

    Ok((STYLE.len() + SCRIPT.len()) as u64)
}
