//! Display tree construction from raw catalog records.
//!
//! Transforms the catalog API's nested record list into a display-ready
//! tree: every node gets a numeric sort order derived from its title, a
//! home-page visibility flag, and recursively mapped children. Each sibling
//! list is sorted in place before being returned.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::Category;

/// Below this many top-level siblings, every one of them is shown on home.
pub const SHOW_ON_HOME_THRESHOLD: usize = 5;

/// Top-level records at positions below this cap are shown on home.
pub const MAX_TOP_LEVEL_DISPLAY_COUNT: usize = 3;

/// Marker character in a title that forces home-page visibility.
pub const SHOW_ON_HOME_MARKER: char = '#';

// ============================================================================
// Public Types
// ============================================================================

/// A display-ready category node.
///
/// Freshly constructed from a [`Category`] record; shares no data with the
/// input tree. Serializes with the field names the storefront expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    pub id: i64,
    pub name: String,
    /// Copied from the record's `MetaTagDescription`.
    pub image: String,
    /// Sibling sort position; unrelated to category identity.
    pub order: i64,
    #[serde(rename = "showOnHome")]
    pub show_on_home: bool,
    pub children: Vec<CategoryNode>,
}

// ============================================================================
// Tree construction
// ============================================================================

/// Build the display tree from a decoded catalog payload.
///
/// `None` is the sentinel for "no data available" and maps to an empty
/// tree; `Some(&[])` is a catalog with zero categories and does the same,
/// for a different reason. Every record maps to exactly one node, depth
/// first; each finished sibling list is sorted via [`sort_categories`].
pub fn category_tree(data: Option<&[Category]>) -> Vec<CategoryNode> {
    map_level(data, true)
}

fn map_level(data: Option<&[Category]>, is_top_level: bool) -> Vec<CategoryNode> {
    let Some(data) = data else {
        return Vec::new();
    };

    let mut mapped = Vec::with_capacity(data.len());

    for (index, entry) in data.iter().enumerate() {
        // Visibility is a top-level-only concern: small catalogs show
        // everything, marked titles always show, and the first few
        // positions fill the home display slots.
        let show_on_home = is_top_level
            && (data.len() < SHOW_ON_HOME_THRESHOLD
                || entry.title.contains(SHOW_ON_HOME_MARKER)
                || index < MAX_TOP_LEVEL_DISPLAY_COUNT);

        // `hasChildren` is authoritative: attached children data on a
        // record that claims none is discarded.
        let children = if entry.has_children {
            map_level(entry.children.as_deref(), false)
        } else {
            Vec::new()
        };

        mapped.push(CategoryNode {
            id: entry.id,
            name: entry.name.clone(),
            image: entry.description.clone(),
            order: order_from_entry(entry),
            show_on_home,
            children,
        });
    }

    sort_categories(&mut mapped);
    mapped
}

// ============================================================================
// Order derivation
// ============================================================================

/// Derive the sort order for a record.
///
/// Parses the leading base-10 integer of the title (optional sign, trailing
/// junk ignored); a title with no numeric prefix falls back to the record
/// id. Never fails.
pub fn order_from_entry(entry: &Category) -> i64 {
    parse_leading_int(&entry.title).unwrap_or(entry.id)
}

/// Parse a leading base-10 integer: skip leading whitespace, accept an
/// optional sign, consume digits, ignore the rest. `None` if there are no
/// digits at all (or the value overflows i64).
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    for c in s.chars() {
        let Some(d) = c.to_digit(10) else {
            break;
        };
        value = value.checked_mul(10)?.checked_add(d as i64)?;
        digits += 1;
    }

    if digits == 0 {
        return None;
    }
    Some(if negative { -value } else { value })
}

// ============================================================================
// Sibling sort
// ============================================================================

/// Sort a sibling list in place, ascending by order.
///
/// A zero order wins every pairwise comparison it takes part in, which is
/// not a total order when several zero-order nodes are present. std sorts
/// leave non-total comparators unspecified, so this is a stable insertion
/// sort applying the pairwise rule verbatim: zero-order nodes end up in
/// front (keeping their input order), the rest ascend with ties stable.
pub fn sort_categories(categories: &mut [CategoryNode]) {
    for i in 1..categories.len() {
        let mut j = i;
        while j > 0 && compare_orders(&categories[j - 1], &categories[j]) == Ordering::Greater {
            categories.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn compare_orders(a: &CategoryNode, b: &CategoryNode) -> Ordering {
    if a.order == 0 {
        return Ordering::Less;
    }
    if b.order == 0 {
        return Ordering::Greater;
    }
    a.order.cmp(&b.order)
}
