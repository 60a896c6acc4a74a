// src/leaderboard/parser.rs
//! Leaderboard table extraction.
//!
//! Every field is resolved by an ordered list of strategies. The first one
//! that yields a value wins; when all of them fail the field stays unset.
//! Missing structure never fails the document, it only shortens the result.

use scraper::{ElementRef, Html, Selector};

use super::money;
use crate::types::LeaderboardRow;

const TABLE_CONTAINER: &str = "#tableContainer";
const COMPANY_CELL: &str = "td.company-data-column";
const TITLE_CELL: &str = "td.d-none.d-sm-table-cell";
const TOTAL_COMP_TEXT: &str = ".total-comp-number";
const TOTAL_COMP_INPUT: &str = "input.total-comp";
const BASE_INPUT: &str = "input.base-salary";
const STOCK_INPUT: &str = "input.stock-grant";
const BONUS_INPUT: &str = "input.yearly-bonus";
const BASE_STOCK_BONUS_TEXT: &str = ".base-stock-bonus";

/// Parse one leaderboard document into rows ordered by rank.
pub fn parse(html: &str) -> Vec<LeaderboardRow> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let table = select_first(root, TABLE_CONTAINER)
        .and_then(|container| select_first(container, "table"))
        .or_else(|| select_first(root, "table"));
    let Some(table) = table else {
        return Vec::new();
    };
    let Some(body) = select_first(table, "tbody") else {
        return Vec::new();
    };

    let mut rows: Vec<LeaderboardRow> = select_all(body, "tr")
        .into_iter()
        .filter_map(|tr| {
            let cells = select_all(tr, "td");
            let last = *cells.last()?;
            Some((tr, cells, last))
        })
        .enumerate()
        .map(|(idx, (tr, cells, last))| parse_row(idx as u32 + 1, tr, &cells, last))
        .collect();

    rows.sort_by_key(|row| row.rank);
    rows
}

fn parse_row<'a>(
    rank: u32,
    tr: ElementRef<'a>,
    cells: &[ElementRef<'a>],
    last: ElementRef<'a>,
) -> LeaderboardRow {
    let company_cell = select_first(tr, COMPANY_CELL);
    let company_strategies: [&dyn Fn() -> Option<String>; 3] = [
        &|| company_cell.and_then(|td| select_first(td, "strong")).map(node_text),
        &|| company_cell.map(node_text),
        &|| cells.get(1).copied().map(node_text),
    ];
    let company = first_of(&company_strategies).unwrap_or_default();

    let title_strategies: [&dyn Fn() -> Option<String>; 2] = [
        &|| select_first(tr, TITLE_CELL).map(node_text),
        &|| cells.get(2).copied().map(node_text),
    ];
    let title = first_of(&title_strategies).unwrap_or_default();

    let total_text = select_first(last, TOTAL_COMP_TEXT);
    let total_strategies: [&dyn Fn() -> Option<i64>; 3] = [
        &|| hidden_number(last, TOTAL_COMP_INPUT),
        &|| total_text.and_then(|node| money::normalize(Some(&node_text(node)))),
        &|| match total_text {
            Some(_) => None,
            None => money::normalize(Some(&node_text(last))),
        },
    ];
    let comp_total = first_of(&total_strategies);

    let mut comp_base = hidden_number(last, BASE_INPUT);
    let mut comp_stock = hidden_number(last, STOCK_INPUT);
    let mut comp_bonus = hidden_number(last, BONUS_INPUT);

    if comp_base.is_none() || comp_stock.is_none() || comp_bonus.is_none() {
        if let Some([base, stock, bonus]) = split_base_stock_bonus(last) {
            comp_base = comp_base.or_else(|| money::normalize(Some(&base)));
            comp_stock = comp_stock.or_else(|| money::normalize(Some(&stock)));
            comp_bonus = comp_bonus.or_else(|| money::normalize(Some(&bonus)));
        }
    }

    LeaderboardRow {
        rank,
        company,
        title,
        comp_total,
        comp_base,
        comp_stock,
        comp_bonus,
    }
}

fn first_of<T>(strategies: &[&dyn Fn() -> Option<T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy())
}

/// Integer `value` attribute of a hidden input; absent or malformed gives `None`.
fn hidden_number(scope: ElementRef<'_>, css: &str) -> Option<i64> {
    select_first(scope, css)?
        .value()
        .attr("value")?
        .trim()
        .parse()
        .ok()
}

/// The first three parts of a `"191K | 110K | 0"` fragment. A `$` in front
/// of a `K` amount defeats the thousands rule, so `"$110K"` salvages to 110.
fn split_base_stock_bonus(scope: ElementRef<'_>) -> Option<[String; 3]> {
    let text = node_text(select_first(scope, BASE_STOCK_BONUS_TEXT)?);
    let mut parts = text.split('|').map(|p| p.trim().to_string());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(base), Some(stock), Some(bonus)) => Some([base, stock, bonus]),
        _ => None,
    }
}

fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    let mut matches = scope.select(&selector);
    matches.next()
}

fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => scope.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Trimmed text fragments joined by single spaces.
fn node_text(node: ElementRef<'_>) -> String {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS_PAGE: &str = r#"
        <html><body>
        <div id="tableContainer">
          <table>
            <thead><tr><th>#</th><th>Company</th><th>Title</th><th>Comp</th></tr></thead>
            <tbody>
              <tr>
                <td>1</td>
                <td class="company-data-column"><a href="/c/jane"><strong>Jane Street</strong></a> <span>NYC</span></td>
                <td class="d-none d-sm-table-cell">Software Engineer</td>
                <td>
                  <div class="total-comp-number">$501,000</div>
                  <div class="base-stock-bonus">$250K | $0 | $251K</div>
                  <input class="d-none total-comp" value="501000">
                  <input class="d-none base-salary" value="250000">
                  <input class="d-none stock-grant" value="0">
                  <input class="d-none yearly-bonus" value="251000">
                </td>
              </tr>
              <tr></tr>
              <tr>
                <td>2</td>
                <td class="company-data-column">Block Inc.</td>
                <td class="d-none d-sm-table-cell">Backend Engineer</td>
                <td>
                  <div class="total-comp-number">$301,000</div>
                  <div class="base-stock-bonus">191K | 110K | N/A</div>
                  <input class="d-none total-comp" value="oops">
                  <input class="d-none base-salary" value="191000">
                </td>
              </tr>
            </tbody>
          </table>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_hidden_inputs_preferred() {
        let rows = parse(LEVELS_PAGE);
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.rank, 1);
        assert_eq!(first.company, "Jane Street");
        assert_eq!(first.title, "Software Engineer");
        assert_eq!(first.comp_total, Some(501000));
        assert_eq!(first.comp_base, Some(250000));
        assert_eq!(first.comp_stock, Some(0));
        assert_eq!(first.comp_bonus, Some(251000));
    }

    #[test]
    fn test_text_fallbacks_fill_only_missing_fields() {
        let rows = parse(LEVELS_PAGE);
        let second = &rows[1];

        // the empty <tr> is skipped, so ranks stay contiguous
        assert_eq!(second.rank, 2);
        assert_eq!(second.company, "Block Inc.");
        assert_eq!(second.comp_total, Some(301000));
        assert_eq!(second.comp_base, Some(191000));
        assert_eq!(second.comp_stock, Some(110000));
        assert_eq!(second.comp_bonus, None);
    }

    #[test]
    fn test_positional_cells_without_container() {
        let html = r#"
            <table><tbody>
              <tr><td>1</td><td> Acme </td><td>Platform Engineer</td><td>$1,200 | weird</td></tr>
              <tr><td>only cell</td></tr>
            </tbody></table>
        "#;
        let rows = parse(html);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].company, "Acme");
        assert_eq!(rows[0].title, "Platform Engineer");
        assert_eq!(rows[0].comp_total, Some(1200));
        assert_eq!(rows[0].comp_base, None);

        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].company, "");
        assert_eq!(rows[1].title, "");
        assert_eq!(rows[1].comp_total, None);
    }

    #[test]
    fn test_total_text_node_blocks_cell_fallback() {
        let html = r#"
            <table><tbody>
              <tr><td>1</td><td>Acme</td><td>SWE</td>
                  <td><div class="total-comp-number">N/A</div><span>$99</span></td></tr>
            </tbody></table>
        "#;
        let rows = parse(html);
        assert_eq!(rows[0].comp_total, None);
    }

    #[test]
    fn test_dollar_prefixed_split_salvages_digits() {
        let html = r#"
            <table><tbody>
              <tr><td>1</td><td>Acme</td><td>SWE</td>
                  <td><div class="base-stock-bonus">$191K | $110K | $0</div></td></tr>
            </tbody></table>
        "#;
        let rows = parse(html);
        assert_eq!(rows[0].comp_base, Some(191));
        assert_eq!(rows[0].comp_stock, Some(110));
        assert_eq!(rows[0].comp_bonus, Some(0));
    }

    #[test]
    fn test_missing_structure_is_empty() {
        assert!(parse("").is_empty());
        assert!(parse("<html><body><p>No table here</p></body></html>").is_empty());
        assert!(parse("<table><thead><tr><th>x</th></tr></thead></table>").is_empty());
    }

    #[test]
    fn test_parse_is_repeatable() {
        assert_eq!(parse(LEVELS_PAGE), parse(LEVELS_PAGE));
    }
}
