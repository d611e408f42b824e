use proptest::prelude::*;
use wardrobe_commerce::ids::ProductId;
use wardrobe_store::Storefront;

#[derive(Debug, Clone)]
enum Op {
    Add(u8, u32),
    Update(u8, u32),
    Remove(u8),
    BuyNow(u8),
    PlaceOrder,
    Restock(u8, u32),
    Delete(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    let product = 1u8..=9;
    prop_oneof![
        4 => (product.clone(), 0u32..30).prop_map(|(p, q)| Op::Add(p, q)),
        3 => (product.clone(), 0u32..30).prop_map(|(p, q)| Op::Update(p, q)),
        1 => product.clone().prop_map(Op::Remove),
        1 => product.clone().prop_map(Op::BuyNow),
        2 => Just(Op::PlaceOrder),
        2 => (product.clone(), 0u32..30).prop_map(|(p, s)| Op::Restock(p, s)),
        1 => product.prop_map(Op::Delete),
    ]
}

fn id(n: u8) -> ProductId {
    ProductId::new(n.to_string())
}

fn apply(store: &mut Storefront, op: &Op) {
    // Rejections are expected; only the resulting state matters.
    let _ = match op {
        Op::Add(p, q) => store.add_to_cart(&id(*p), *q).map(|_| ()),
        Op::Update(p, q) => store.update_quantity(&id(*p), *q),
        Op::Remove(p) => {
            store.remove_from_cart(&id(*p));
            Ok(())
        }
        Op::BuyNow(p) => store.buy_now(&id(*p)),
        Op::PlaceOrder => store.place_order().map(|_| ()),
        Op::Restock(p, s) => match store.product(&id(*p)).cloned() {
            Some(product) => store.update_product(&id(*p), product.with_stock(*s)),
            None => Ok(()),
        },
        Op::Delete(p) => store.delete_product(&id(*p)).map(|_| ()),
    };
}

proptest! {
    /// Every cart line refers to a live product and never exceeds its stock.
    #[test]
    fn prop_cart_quantity_within_stock(ops in prop::collection::vec(arb_op(), 1..60)) {
        let mut store = Storefront::new();
        store.sign_in("prop@example.com", "pw").unwrap();
        store.admin_sign_in("admin", "admin123").unwrap();

        for op in &ops {
            let before_orders = store.orders().len();
            apply(&mut store, op);

            for item in store.cart().items() {
                let product = store.product(&item.product_id);
                prop_assert!(product.is_some(), "cart line for deleted product after {:?}", op);
                let stock = product.map(|p| p.stock).unwrap_or(0);
                prop_assert!(item.quantity > 0);
                prop_assert!(
                    item.quantity <= stock,
                    "quantity {} > stock {} after {:?}",
                    item.quantity,
                    stock,
                    op
                );
            }

            if store.orders().len() > before_orders {
                prop_assert!(store.cart().is_empty());
            }
        }
    }

    /// Stock never increases through shopper actions, and total units sold
    /// match the stock that disappeared.
    #[test]
    fn prop_orders_account_for_stock(ops in prop::collection::vec(arb_op(), 1..60)) {
        let mut store = Storefront::new();
        store.sign_in("prop@example.com", "pw").unwrap();
        let initial: u32 = store.products().iter().map(|p| p.stock).sum();

        for op in ops.iter().filter(|op| !matches!(op, Op::Restock(..) | Op::Delete(_))) {
            apply(&mut store, op);
        }

        let remaining: u32 = store.products().iter().map(|p| p.stock).sum();
        let sold: u32 = store.orders().iter().map(|o| o.item_count()).sum();
        prop_assert_eq!(initial - remaining, sold);
    }
}
