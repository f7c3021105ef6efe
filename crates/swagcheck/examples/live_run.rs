// Live run - the full scenario catalog against a real storefront
//
// Requires the `playwright` feature and the SWAGCHECK_* environment (a
// .env file works). Each scenario gets its own fresh browser; a failing
// scenario is reported and does not stop the rest.
//
// Run with: cargo run --example live_run --features playwright

use std::pin::Pin;

use swagcheck::scenarios::{auth, cart, checkout};
use swagcheck::{Config, PlaywrightFactory, Store, run_scenario};

type ScenarioFuture = Pin<Box<dyn Future<Output = swagcheck::Result<()>>>>;

fn boxed<F, Fut>(scenario: F) -> impl Fn(Store) -> ScenarioFuture
where
    F: Fn(Store) -> Fut,
    Fut: Future<Output = swagcheck::Result<()>> + 'static,
{
    move |store| Box::pin(scenario(store))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Fails fast before any browser is launched.
    let config = Config::from_env()?;
    let factory = PlaywrightFactory;

    let catalog: Vec<(&str, Box<dyn Fn(Store) -> ScenarioFuture>)> = vec![
        ("valid login", Box::new(boxed(auth::valid_login_lands_on_inventory))),
        ("empty username", Box::new(boxed(auth::empty_username_is_rejected))),
        ("unknown username", Box::new(boxed(auth::unknown_username_is_rejected))),
        ("wrong password", Box::new(boxed(auth::wrong_password_is_rejected))),
        ("single add", Box::new(boxed(cart::adding_one_product_sets_badge_to_one))),
        ("two distinct adds", Box::new(boxed(cart::badge_counts_distinct_products))),
        ("remove only product", Box::new(boxed(cart::removing_only_product_hides_badge))),
        ("insertion order", Box::new(boxed(cart::cart_lists_products_in_insertion_order))),
        ("catalog fidelity", Box::new(boxed(cart::cart_entry_matches_catalog))),
        ("add/remove round trip", Box::new(boxed(cart::add_then_remove_round_trips))),
        ("untouched cart", Box::new(boxed(cart::untouched_cart_is_empty))),
        ("continue shopping", Box::new(boxed(cart::continue_shopping_returns_to_inventory))),
        ("checkout control", Box::new(boxed(checkout::checkout_control_is_visible))),
        ("blank first name", Box::new(boxed(checkout::blank_first_name_is_rejected))),
        ("blank last name", Box::new(boxed(checkout::blank_last_name_is_rejected))),
        ("blank postal code", Box::new(boxed(checkout::blank_postal_code_is_rejected))),
        ("validation precedence", Box::new(boxed(checkout::first_blank_field_takes_precedence))),
        ("complete order", Box::new(boxed(checkout::completing_an_order_shows_confirmation))),
        ("cancel checkout", Box::new(boxed(checkout::cancelling_returns_to_cart_unchanged))),
    ];

    let total = catalog.len();
    let mut failures = 0;
    for (name, scenario) in catalog {
        match run_scenario(&factory, &config, name, scenario).await {
            Ok(()) => println!("PASS {name}"),
            Err(err) => {
                failures += 1;
                println!("FAIL {name}: {err}");
            }
        }
    }

    println!("{total} scenario(s), {failures} failure(s)");
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
