//! End-to-end cart behaviour against a small catalog.

use std::sync::Arc;

use techgear_commerce::prelude::*;

fn catalog() -> Catalog {
    let usd = |cents| Money::new(cents, Currency::USD);
    Catalog::new(
        Currency::USD,
        vec![
            Product::new("a", "Product A", usd(5000)),
            Product::new("b", "Product B", usd(1999)),
            Product::new("c", "Product C", usd(250)),
        ],
        vec![],
    )
    .unwrap()
}

fn assert_invariants(cart: &CartStore) {
    let sum: u64 = cart.lines().iter().map(|l| u64::from(l.quantity())).sum();
    assert_eq!(cart.total_items(), sum);
    assert!(cart.lines().iter().all(|l| l.quantity() >= 1));

    let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id().as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), cart.line_count());
}

#[test]
fn add_set_remove_scenario() {
    let catalog = catalog();
    let a = Arc::clone(catalog.product("a").unwrap());
    let mut cart = CartStore::new(Currency::USD);

    cart.add(a.clone());
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.subtotal().display(), "$50.00");

    cart.add(a);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.subtotal().display(), "$100.00");
    assert_eq!(cart.line_count(), 1);

    cart.set_quantity("a", 5);
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.subtotal().display(), "$250.00");

    cart.remove("a");
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.subtotal().display(), "$0.00");
    assert!(cart.lines().is_empty());
}

#[test]
fn invariants_hold_across_mixed_operations() {
    let catalog = catalog();
    let ids = ["a", "b", "c", "missing"];
    let mut cart = CartStore::new(Currency::USD);

    // Deterministic linear congruential sequence drives the operation mix.
    let mut seed: u64 = 0x5eed;
    for _ in 0..2_000 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let id = ids[(seed >> 33) as usize % ids.len()];
        let quantity = ((seed >> 40) % 9) as i64 - 3; // -3..=5

        match (seed >> 20) % 5 {
            0 | 1 => {
                if let Some(product) = catalog.product(id) {
                    cart.add(Arc::clone(product));
                }
            }
            2 => {
                cart.remove(id);
            }
            3 => {
                let before = cart.quantity_of(id);
                cart.set_quantity(id, quantity);
                if before.is_none() {
                    assert!(cart.line(id).is_none(), "set_quantity created a line");
                }
            }
            _ => {
                cart.decrement(id);
            }
        }

        assert_invariants(&cart);
    }
}

#[test]
fn subtotal_reflects_every_line() {
    let catalog = catalog();
    let mut cart = CartStore::new(Currency::USD);
    for id in ["a", "b", "b", "c", "c", "c"] {
        cart.add(Arc::clone(catalog.product(id).unwrap()));
    }

    let totals = cart.totals();
    assert_eq!(totals.total_items, 6);
    assert_eq!(totals.distinct_lines, 3);
    assert_eq!(totals.subtotal.amount_cents, 5000 + 2 * 1999 + 3 * 250);
    assert_eq!(totals.lines[1].total.amount_cents, 3998);
    assert_eq!(totals.badge().as_deref(), Some("6"));
}

#[test]
fn decrement_path_removes_instead_of_clamping() {
    let catalog = catalog();
    let mut cart = CartStore::new(Currency::USD);
    let b = catalog.product("b").unwrap();
    cart.add(Arc::clone(b));
    cart.add(Arc::clone(b));

    cart.decrement("b");
    assert_eq!(cart.quantity_of("b"), Some(1));
    cart.decrement("b");
    assert_eq!(cart.quantity_of("b"), None);
    assert_eq!(cart.subtotal().display(), "$0.00");
}

#[test]
fn subtotal_never_mixes_currencies() {
    let mut cart = CartStore::new(Currency::USD);
    cart.add(Arc::new(Product::new(
        "eur",
        "Euro Headset",
        Money::new(10000, Currency::EUR),
    )));
    cart.add(Arc::new(Product::new(
        "jpy",
        "Yen Mouse",
        Money::new(500, Currency::JPY),
    )));

    assert!(cart.is_empty());
    assert_eq!(cart.subtotal().display(), "$0.00");

    let err = Catalog::new(
        Currency::USD,
        vec![
            Product::new("a", "Product A", Money::new(5000, Currency::USD)),
            Product::new("eur", "Euro Headset", Money::new(10000, Currency::EUR)),
        ],
        vec![],
    )
    .unwrap_err();
    assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
}
