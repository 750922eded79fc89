//! Column mapping: which sheet columns hold the title, price, and sales.
//!
//! Guessing is a convenience for the CLI layer — the pipeline itself only
//! ever sees a resolved `ColumnMap`.

use serde::Serialize;

use crate::error::{Result, TkscoutError};

/// Resolved column indices for one sheet.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnMap {
    pub title: usize,
    pub price: usize,
    pub sales: usize,
    pub image: Option<usize>,
}

/// Header aliases, matched as lowercase substrings. Seller exports name the
/// same column "Product Name", "商品标题", "Title", etc. depending on locale.
const TITLE_ALIASES: &[&str] = &["name", "title", "标题"];
const PRICE_ALIASES: &[&str] = &["price", "价"];
const SALES_ALIASES: &[&str] = &["sales", "sold", "量"];
const IMAGE_ALIASES: &[&str] = &["image", "img", "图"];

fn find_alias(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let lower = h.to_lowercase();
        aliases.iter().any(|a| lower.contains(a))
    })
}

impl ColumnMap {
    /// Guess the mapping from header names, with positional fallbacks
    /// (columns 0/1/2) when no alias matches — the same heuristic the
    /// seller dashboards use.
    pub fn guess(headers: &[String]) -> ColumnMap {
        let fallback = |idx: usize| if headers.len() > idx { idx } else { 0 };
        ColumnMap {
            title: find_alias(headers, TITLE_ALIASES).unwrap_or(0),
            price: find_alias(headers, PRICE_ALIASES).unwrap_or_else(|| fallback(1)),
            sales: find_alias(headers, SALES_ALIASES).unwrap_or_else(|| fallback(2)),
            image: find_alias(headers, IMAGE_ALIASES),
        }
    }

    /// Resolve one explicitly named column, case-insensitive exact match.
    pub fn resolve(headers: &[String], name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| TkscoutError::ColumnNotFound(name.to_string()))
    }

    /// Guess from headers, then apply any explicit overrides.
    pub fn guess_with_overrides(
        headers: &[String],
        title: Option<&str>,
        price: Option<&str>,
        sales: Option<&str>,
        image: Option<&str>,
    ) -> Result<ColumnMap> {
        let mut map = ColumnMap::guess(headers);
        if let Some(name) = title {
            map.title = Self::resolve(headers, name)?;
        }
        if let Some(name) = price {
            map.price = Self::resolve(headers, name)?;
        }
        if let Some(name) = sales {
            map.sales = Self::resolve(headers, name)?;
        }
        if let Some(name) = image {
            map.image = Some(Self::resolve(headers, name)?);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_guess_by_alias() {
        let h = headers(&["Product Name", "Unit Price", "Total Sales", "Image URL"]);
        let map = ColumnMap::guess(&h);
        assert_eq!(map.title, 0);
        assert_eq!(map.price, 1);
        assert_eq!(map.sales, 2);
        assert_eq!(map.image, Some(3));
    }

    #[test]
    fn test_guess_cjk_headers() {
        let h = headers(&["商品标题", "价格", "销量"]);
        let map = ColumnMap::guess(&h);
        assert_eq!(map.title, 0);
        assert_eq!(map.price, 1);
        assert_eq!(map.sales, 2);
        assert_eq!(map.image, None);
    }

    #[test]
    fn test_guess_positional_fallback() {
        let h = headers(&["col_a", "col_b", "col_c"]);
        let map = ColumnMap::guess(&h);
        assert_eq!(map.title, 0);
        assert_eq!(map.price, 1);
        assert_eq!(map.sales, 2);
    }

    #[test]
    fn test_guess_narrow_sheet() {
        let h = headers(&["only"]);
        let map = ColumnMap::guess(&h);
        assert_eq!(map.price, 0);
        assert_eq!(map.sales, 0);
    }

    #[test]
    fn test_resolve_override() {
        let h = headers(&["a", "b", "MyPrice"]);
        let map =
            ColumnMap::guess_with_overrides(&h, None, Some("myprice"), None, None).unwrap();
        assert_eq!(map.price, 2);
    }

    #[test]
    fn test_resolve_missing_column() {
        let h = headers(&["a", "b"]);
        let err = ColumnMap::resolve(&h, "nope").unwrap_err();
        assert!(matches!(err, TkscoutError::ColumnNotFound(_)));
    }
}
