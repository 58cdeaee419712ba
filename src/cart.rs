//! Cart View-Model Logic
//!
//! Reconciliation of server cart data with client-only selection state,
//! plus the derived aggregates the cart page renders from.

use std::collections::HashMap;

use crate::models::{BuyItem, Purchase};

/// A server purchase extended with client-only UI flags.
///
/// `checked` is the user's selection and must survive refetches;
/// `disabled` is set while an update request for this line is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub purchase: Purchase,
    pub checked: bool,
    pub disabled: bool,
}

impl CartLine {
    pub fn id(&self) -> &str {
        &self.purchase.id
    }

    /// Row subtotal: unit price times quantity
    pub fn total(&self) -> u64 {
        self.purchase.price * u64::from(self.purchase.buy_count)
    }
}

/// Merge freshly fetched server purchases into the previous extended
/// sequence.
///
/// The server owns membership and ordering; the client owns `checked`.
/// Per item: `checked` is forced true when its id matches `preselected`,
/// otherwise it carries over from the previous entry with the same id,
/// otherwise it defaults to false. `disabled` always resets to false once
/// fresh server data arrives. Entries the server no longer returns are
/// dropped.
pub fn reconcile(
    prev: &[CartLine],
    fresh: Vec<Purchase>,
    preselected: Option<&str>,
) -> Vec<CartLine> {
    let prev_checked: HashMap<&str, bool> = prev
        .iter()
        .map(|line| (line.id(), line.checked))
        .collect();
    fresh
        .into_iter()
        .map(|purchase| {
            let forced = preselected == Some(purchase.id.as_str());
            let carried = prev_checked
                .get(purchase.id.as_str())
                .copied()
                .unwrap_or(false);
            CartLine {
                checked: forced || carried,
                disabled: false,
                purchase,
            }
        })
        .collect()
}

/// True iff the sequence is non-empty and every line is checked
pub fn is_all_checked(lines: &[CartLine]) -> bool {
    !lines.is_empty() && lines.iter().all(|line| line.checked)
}

pub fn checked_count(lines: &[CartLine]) -> usize {
    lines.iter().filter(|line| line.checked).count()
}

pub fn checked_ids(lines: &[CartLine]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.checked)
        .map(|line| line.purchase.id.clone())
        .collect()
}

/// Σ(price × buy_count) over checked lines
pub fn total_checked_price(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .filter(|line| line.checked)
        .map(CartLine::total)
        .sum()
}

/// Σ((price_before_discount − price) × buy_count) over checked lines,
/// saturating per line
pub fn total_checked_savings(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .filter(|line| line.checked)
        .map(|line| {
            line.purchase
                .price_before_discount
                .saturating_sub(line.purchase.price)
                * u64::from(line.purchase.buy_count)
        })
        .sum()
}

/// Checkout request body: one `{product_id, buy_count}` per checked line.
/// Empty when nothing is checked, in which case no request may be issued.
pub fn checkout_body(lines: &[CartLine]) -> Vec<BuyItem> {
    lines
        .iter()
        .filter(|line| line.checked)
        .map(|line| BuyItem {
            product_id: line.purchase.product.id.clone(),
            buy_count: line.purchase.buy_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Product};

    fn make_product(id: &str, price: u64, price_before_discount: u64) -> Product {
        Product {
            id: format!("p-{id}"),
            name: format!("Product {id}"),
            image: String::new(),
            images: Vec::new(),
            description: String::new(),
            category: Category {
                id: "cat-1".to_string(),
                name: "Misc".to_string(),
            },
            price,
            price_before_discount,
            quantity: 100,
            rating: 0.0,
            sold: 0,
            view: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn make_purchase(id: &str, price: u64, before: u64, buy_count: u32) -> Purchase {
        Purchase {
            id: id.to_string(),
            buy_count,
            price,
            price_before_discount: before,
            status: crate::models::purchase_status::IN_CART,
            user: "u-1".to_string(),
            product: make_product(id, price, before),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn make_line(id: &str, checked: bool, disabled: bool) -> CartLine {
        CartLine {
            purchase: make_purchase(id, 100, 120, 1),
            checked,
            disabled,
        }
    }

    #[test]
    fn test_reconcile_follows_server_order() {
        let prev = vec![make_line("a", true, false), make_line("b", false, false)];
        let fresh = vec![
            make_purchase("b", 100, 120, 1),
            make_purchase("c", 100, 120, 1),
            make_purchase("a", 100, 120, 1),
        ];
        let merged = reconcile(&prev, fresh, None);
        let ids: Vec<&str> = merged.iter().map(CartLine::id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reconcile_preserves_checked_by_id() {
        let prev = vec![make_line("a", true, false), make_line("b", false, false)];
        let fresh = vec![make_purchase("a", 100, 120, 2), make_purchase("b", 100, 120, 1)];
        let merged = reconcile(&prev, fresh, None);
        assert!(merged[0].checked);
        assert!(!merged[1].checked);
        // server data wins for everything but the flags
        assert_eq!(merged[0].purchase.buy_count, 2);
    }

    #[test]
    fn test_reconcile_drops_absent_and_appends_new() {
        let prev = vec![make_line("a", true, false), make_line("gone", true, false)];
        let fresh = vec![make_purchase("a", 100, 120, 1), make_purchase("new", 100, 120, 1)];
        let merged = reconcile(&prev, fresh, None);
        let ids: Vec<&str> = merged.iter().map(CartLine::id).collect();
        assert_eq!(ids, vec!["a", "new"]);
        // fresh entries start unchecked
        assert!(!merged[1].checked);
    }

    #[test]
    fn test_reconcile_forces_preselected_checked() {
        let prev = Vec::new();
        let fresh = vec![make_purchase("a", 100, 120, 1), make_purchase("b", 100, 120, 1)];
        let merged = reconcile(&prev, fresh, Some("b"));
        assert!(!merged[0].checked);
        assert!(merged[1].checked);
    }

    #[test]
    fn test_reconcile_clears_disabled() {
        let prev = vec![make_line("a", true, true)];
        let fresh = vec![make_purchase("a", 100, 120, 3)];
        let merged = reconcile(&prev, fresh, None);
        assert!(!merged[0].disabled);
        assert!(merged[0].checked);
    }

    #[test]
    fn test_reconcile_empty_server_empties_cart() {
        let prev = vec![make_line("a", true, false)];
        let merged = reconcile(&prev, Vec::new(), None);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_refetch_after_noop_delete_preserves_state() {
        // deleting an id the server never had changes nothing: the refetch
        // returns the same sequence and reconciliation reproduces it
        let prev = vec![make_line("a", true, false), make_line("b", false, false)];
        let fresh = vec![make_purchase("a", 100, 120, 1), make_purchase("b", 100, 120, 1)];
        let merged = reconcile(&prev, fresh, None);
        assert_eq!(merged, prev);
    }

    #[test]
    fn test_all_checked_false_for_empty() {
        assert!(!is_all_checked(&[]));
    }

    #[test]
    fn test_all_checked_requires_every_line() {
        let lines = vec![make_line("a", true, false), make_line("b", true, false)];
        assert!(is_all_checked(&lines));
        let lines = vec![make_line("a", true, false), make_line("b", false, false)];
        assert!(!is_all_checked(&lines));
    }

    #[test]
    fn test_total_checked_price() {
        let lines = vec![
            CartLine {
                purchase: make_purchase("a", 100, 100, 2),
                checked: true,
                disabled: false,
            },
            CartLine {
                purchase: make_purchase("b", 200, 200, 1),
                checked: true,
                disabled: false,
            },
            CartLine {
                purchase: make_purchase("c", 999, 999, 5),
                checked: false,
                disabled: false,
            },
        ];
        assert_eq!(total_checked_price(&lines), 400);
        assert_eq!(checked_count(&lines), 2);
    }

    #[test]
    fn test_total_checked_savings() {
        let lines = vec![CartLine {
            purchase: make_purchase("a", 80, 100, 3),
            checked: true,
            disabled: false,
        }];
        assert_eq!(total_checked_savings(&lines), 60);
    }

    #[test]
    fn test_savings_saturate_when_not_discounted() {
        let lines = vec![CartLine {
            purchase: make_purchase("a", 100, 80, 2),
            checked: true,
            disabled: false,
        }];
        assert_eq!(total_checked_savings(&lines), 0);
    }

    #[test]
    fn test_checkout_body_empty_when_nothing_checked() {
        let lines = vec![make_line("a", false, false)];
        assert!(checkout_body(&lines).is_empty());
    }

    #[test]
    fn test_checkout_body_covers_checked_lines() {
        let lines = vec![
            CartLine {
                purchase: make_purchase("a", 100, 120, 2),
                checked: true,
                disabled: false,
            },
            make_line("b", false, false),
        ];
        let body = checkout_body(&lines);
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].product_id, "p-a");
        assert_eq!(body[0].buy_count, 2);
    }

    #[test]
    fn test_checked_ids() {
        let lines = vec![make_line("a", true, false), make_line("b", false, false)];
        assert_eq!(checked_ids(&lines), vec!["a".to_string()]);
    }
}
