use lightbnb_db::query::properties;
use lightbnb_db::{FilterOptions, SqlValue, DEFAULT_LIMIT};
use proptest::prelude::*;
use rust_decimal::Decimal;

// Prices with up to two decimal places, in major units
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_options() -> impl Strategy<Value = FilterOptions> {
    (
        proptest::option::of(1i32..10_000),
        proptest::option::of("[A-Za-z ]{1,16}"),
        proptest::option::of(arb_price()),
        proptest::option::of(arb_price()),
        proptest::option::of(0.0f64..5.0),
    )
        .prop_map(|(owner_id, city, min_price, max_price, min_rating)| FilterOptions {
            owner_id,
            city,
            min_price,
            max_price,
            min_rating,
        })
}

proptest! {
    /// Property: placeholders are exactly $1..$n in order, n = params.len()
    #[test]
    fn prop_placeholders_match_params(options in arb_options(), limit in proptest::option::of(1i64..500)) {
        let statement = properties::search(&options, limit);
        let expected: Vec<usize> = (1..=statement.params().len()).collect();
        prop_assert_eq!(statement.placeholders(), expected);
    }

    /// Property: limit is always the final parameter
    #[test]
    fn prop_limit_is_last(options in arb_options(), limit in proptest::option::of(1i64..500)) {
        let statement = properties::search(&options, limit);
        prop_assert_eq!(
            statement.params().last(),
            Some(&SqlValue::Int(limit.unwrap_or(DEFAULT_LIMIT)))
        );
        let expected_suffix = format!("LIMIT ${}", statement.params().len());
        prop_assert!(statement.sql().ends_with(&expected_suffix));
    }

    /// Property: price bounds are bound ×100, rating unscaled
    #[test]
    fn prop_scaling_applies_to_prices_only(options in arb_options()) {
        let statement = properties::search(&options, None);
        let hundred = Decimal::from(100);

        let numerics: Vec<Decimal> = statement
            .params()
            .iter()
            .filter_map(|p| match p {
                SqlValue::Numeric(n) => Some(*n),
                _ => None,
            })
            .collect();
        let expected: Vec<Decimal> = options
            .min_price
            .into_iter()
            .chain(options.max_price)
            .map(|p| p * hundred)
            .collect();
        prop_assert_eq!(numerics, expected);

        let floats: Vec<f64> = statement
            .params()
            .iter()
            .filter_map(|p| match p {
                SqlValue::Float(f) => Some(*f),
                _ => None,
            })
            .collect();
        prop_assert_eq!(floats, options.min_rating.into_iter().collect::<Vec<_>>());
    }

    /// Property: WHERE appears at most once, and only with a row predicate
    #[test]
    fn prop_where_only_with_predicates(options in arb_options()) {
        let statement = properties::search(&options, None);
        let has_row_predicate = options.owner_id.is_some()
            || options.city.is_some()
            || options.min_price.is_some()
            || options.max_price.is_some();

        let where_count = statement.sql().matches("WHERE").count();
        prop_assert_eq!(where_count, usize::from(has_row_predicate));

        let group_by = statement.sql().find("GROUP BY").unwrap();
        if let Some(where_at) = statement.sql().find("WHERE") {
            prop_assert!(where_at < group_by);
        }
        prop_assert!(!statement.sql().contains("WHERE AND"));
        prop_assert!(!statement.sql().contains("AND\nGROUP BY"));
    }

    /// Property: building is deterministic
    #[test]
    fn prop_idempotent(options in arb_options(), limit in proptest::option::of(1i64..500)) {
        prop_assert_eq!(
            properties::search(&options, limit),
            properties::search(&options, limit)
        );
    }
}

#[test]
fn full_filter_parameter_order() {
    let options = FilterOptions::default()
        .owner(1)
        .city("Vancouver")
        .min_price(Decimal::from(100))
        .max_price(Decimal::from(200));

    let (_, params) = properties::search(&options, None).into_parts();
    assert_eq!(
        params,
        vec![
            SqlValue::Int(1),
            SqlValue::Text("%Vancouver%".to_string()),
            SqlValue::Numeric(Decimal::from(10_000)),
            SqlValue::Numeric(Decimal::from(20_000)),
            SqlValue::Int(10),
        ]
    );
}
