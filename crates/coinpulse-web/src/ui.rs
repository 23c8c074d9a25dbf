//! DOM rendering for the market sections below the hero.
//!
//! Each section loads independently; a failed fetch renders a fallback
//! block in place of the section and logs the error.

use crate::dom::{append, clear, create};
use coinpulse_core::market::{
    format_currency, format_percentage, Category, CoinDetails, FetchError, MarketClient, Ohlc,
    Transport, Trend, TrendingCoins,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub const COIN_OVERVIEW_ID: &str = "coin-overview";
pub const TRENDING_ID: &str = "trending-coins";
pub const CATEGORIES_ID: &str = "categories";

const OVERVIEW_COIN: &str = "bitcoin";
const OVERVIEW_OHLC_DAYS: u32 = 1;
const CATEGORY_COLUMNS: [&str; 5] = ["Category", "Top Gainers", "24h Change", "Market Cap", "24h Volume"];
const TRENDING_COLUMNS: [&str; 3] = ["Name", "24h Change", "Price"];

/// Kick off every section fetch; they resolve in any order.
pub fn load_sections<T: Transport + 'static>(document: &web::Document, client: Rc<MarketClient<T>>) {
    {
        let (doc, client) = (document.clone(), client.clone());
        spawn_local(async move {
            let coin = client.coin(OVERVIEW_COIN).await;
            let candles = client.coin_ohlc(OVERVIEW_COIN, OVERVIEW_OHLC_DAYS).await;
            render_coin_overview(&doc, coin, candles.unwrap_or_default());
        });
    }
    {
        let (doc, client) = (document.clone(), client.clone());
        spawn_local(async move {
            render_trending(&doc, client.trending().await);
        });
    }
    {
        let doc = document.clone();
        spawn_local(async move {
            render_categories(&doc, client.categories().await);
        });
    }
}

fn section(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::debug!("[ui] #{id} not on this page");
    }
    el
}

fn render_fallback(document: &web::Document, root: &web::Element, title: &str, err: &FetchError) {
    log::error!("[ui] {title}: {err}");
    clear(root);
    if let Some(block) = create(document, "div", Some("fallback"), None) {
        if let Some(h) = create(document, "h4", None, Some(title)) {
            append(&block, &h);
        }
        if let Some(p) = create(document, "p", None, Some("Data is temporarily unavailable.")) {
            append(&block, &p);
        }
        append(root, &block);
    }
}

fn change_cell(document: &web::Document, change: f64) -> Option<web::Element> {
    let trend = Trend::of(change);
    let cell = create(document, "div", Some(&format!("change-cell {}", trend.css_class())), None)?;
    let arrow = match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    };
    let p = create(
        document,
        "p",
        Some("flex items-center"),
        Some(&format!("{} {arrow}", format_percentage(change))),
    )?;
    append(&cell, &p);
    Some(cell)
}

fn image(document: &web::Document, src: &str, alt: &str, size: u32) -> Option<web::Element> {
    let img = create(document, "img", None, None)?;
    let _ = img.set_attribute("src", src);
    let _ = img.set_attribute("alt", alt);
    let _ = img.set_attribute("width", &size.to_string());
    let _ = img.set_attribute("height", &size.to_string());
    let _ = img.set_attribute("loading", "lazy");
    Some(img)
}

fn table(document: &web::Document, columns: &[&str]) -> Option<(web::Element, web::Element)> {
    let table = create(document, "table", Some("mt-3"), None)?;
    let head = create(document, "thead", None, None)?;
    let row = create(document, "tr", None, None)?;
    for c in columns {
        if let Some(th) = create(document, "th", None, Some(c)) {
            append(&row, &th);
        }
    }
    append(&head, &row);
    append(&table, &head);
    let body = create(document, "tbody", None, None)?;
    append(&table, &body);
    Some((table, body))
}

fn cell(document: &web::Document, row: &web::Element, class: &str, content: CellContent) {
    let Some(td) = create(document, "td", Some(class), None) else {
        return;
    };
    match content {
        CellContent::Text(t) => td.set_text_content(Some(&t)),
        CellContent::Node(Some(el)) => append(&td, &el),
        CellContent::Nodes(els) => els.iter().for_each(|el| append(&td, el)),
        CellContent::Node(None) => {}
    }
    append(row, &td);
}

enum CellContent {
    Text(String),
    Node(Option<web::Element>),
    Nodes(Vec<web::Element>),
}

pub fn render_categories(document: &web::Document, result: Result<Vec<Category>, FetchError>) {
    let Some(root) = section(document, CATEGORIES_ID) else {
        return;
    };
    let categories = match result {
        Ok(c) => c,
        Err(e) => return render_fallback(document, &root, "Top Categories", &e),
    };
    clear(&root);
    if let Some(h) = create(document, "h4", None, Some("Top Categories")) {
        append(&root, &h);
    }
    let Some((table, body)) = table(document, &CATEGORY_COLUMNS) else {
        return;
    };
    for cat in &categories {
        let Some(row) = create(document, "tr", None, None) else {
            continue;
        };
        cell(document, &row, "category-cell", CellContent::Text(cat.name.clone()));
        let icons = cat
            .top_3_coins
            .iter()
            .filter_map(|src| image(document, src, src, 28))
            .collect();
        cell(document, &row, "top-gainers-cell", CellContent::Nodes(icons));
        cell(
            document,
            &row,
            "change-header-cell",
            CellContent::Node(change_cell(document, cat.market_cap_change_24h)),
        );
        cell(document, &row, "market-cap-cell", CellContent::Text(format_currency(cat.market_cap)));
        cell(document, &row, "volume-cell", CellContent::Text(format_currency(cat.volume_24h)));
        append(&body, &row);
    }
    append(&root, &table);
}

pub fn render_trending(document: &web::Document, result: Result<TrendingCoins, FetchError>) {
    let Some(root) = section(document, TRENDING_ID) else {
        return;
    };
    let trending = match result {
        Ok(t) => t,
        Err(e) => return render_fallback(document, &root, "Trending Coins", &e),
    };
    clear(&root);
    if let Some(h) = create(document, "h4", None, Some("Trending Coins")) {
        append(&root, &h);
    }
    let Some((table, body)) = table(document, &TRENDING_COLUMNS) else {
        return;
    };
    for coin in trending.coins.iter().take(6) {
        let item = &coin.item;
        let Some(row) = create(document, "tr", None, None) else {
            continue;
        };
        let name = create(document, "div", Some("name-cell"), None);
        if let Some(name) = &name {
            if let Some(img) = image(document, &item.thumb, &item.name, 36) {
                append(name, &img);
            }
            if let Some(p) = create(document, "p", None, Some(&item.name)) {
                append(name, &p);
            }
        }
        cell(document, &row, "name-cell", CellContent::Node(name));
        cell(
            document,
            &row,
            "change-header-cell",
            CellContent::Node(change_cell(document, item.data.price_change_percentage_24h.usd)),
        );
        cell(document, &row, "price-cell", CellContent::Text(format_currency(item.data.price)));
        append(&body, &row);
    }
    append(&root, &table);
}

/// Session range of the candles: (low, high, last close).
fn candle_range(candles: &[Ohlc]) -> Option<(f64, f64, f64)> {
    let last = candles.last()?.4;
    let (low, high) = candles
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| (lo.min(c.3), hi.max(c.2)));
    Some((low, high, last))
}

pub fn render_coin_overview(
    document: &web::Document,
    result: Result<CoinDetails, FetchError>,
    candles: Vec<Ohlc>,
) {
    let Some(root) = section(document, COIN_OVERVIEW_ID) else {
        return;
    };
    let coin = match result {
        Ok(c) => c,
        Err(e) => return render_fallback(document, &root, "Coin Overview", &e),
    };
    clear(&root);
    let Some(header) = create(document, "div", Some("header"), None) else {
        return;
    };
    if let Some(img) = image(document, &coin.image.large, &coin.name, 56) {
        append(&header, &img);
    }
    let info = create(document, "div", Some("info"), None);
    if let Some(info) = &info {
        let title = format!("{} / {}", coin.name, coin.symbol.to_uppercase());
        if let Some(p) = create(document, "p", None, Some(&title)) {
            append(info, &p);
        }
        let price = format_currency(coin.market_data.current_price.usd);
        if let Some(h) = create(document, "h1", None, Some(&price)) {
            append(info, &h);
        }
        if let Some(c) = change_cell(document, coin.market_data.price_change_percentage_24h_in_currency.usd) {
            append(info, &c);
        }
        append(&header, info);
    }
    append(&root, &header);

    if let Some((low, high, close)) = candle_range(&candles) {
        if let Some(stats) = create(document, "ul", Some("ohlc-stats"), None) {
            for (label, v) in [("24h Low", low), ("24h High", high), ("Last", close)] {
                let text = format!("{label}: {}", format_currency(v));
                if let Some(li) = create(document, "li", None, Some(&text)) {
                    append(&stats, &li);
                }
            }
            append(&root, &stats);
        }
    }
    if let Some(rank) = coin.market_cap_rank {
        let text = format!("Rank #{rank} · Market Cap {}", format_currency(coin.market_data.market_cap.usd));
        if let Some(p) = create(document, "p", Some("rank"), Some(&text)) {
            append(&root, &p);
        }
    }
}
