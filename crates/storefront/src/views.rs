//! Display data for templates.
//!
//! Every view is rebuilt from the current catalog, cart and filter controls
//! on each request. Nothing here is cached or diffed.

use mini_store_core::filter::{self, ALL};
use mini_store_core::{
    CartLineItem, CartStore, CartTotals, Catalog, CategoryFilter, KeyValueSlot, PRICE_BUCKETS,
    Product, ShopState,
};

use crate::models::FilterControls;
use crate::state::AppState;

/// Grid message when the filters exclude every product.
pub const NO_RESULTS_MESSAGE: &str = "No products found matching your criteria.";

/// Grid message when the catalog failed to load at startup.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load product data.";

/// Product card display data.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Product grid display data: either cards or a message.
#[derive(Clone)]
pub struct GridView {
    pub products: Vec<ProductView>,
    pub message: Option<&'static str>,
}

impl GridView {
    /// Apply the current filter controls to the catalog.
    #[must_use]
    pub fn build(state: &AppState, controls: &FilterControls) -> Self {
        if !state.catalog_available() {
            return Self {
                products: Vec::new(),
                message: Some(LOAD_ERROR_MESSAGE),
            };
        }

        let products: Vec<ProductView> = filter::apply(state.catalog(), &controls.criteria())
            .iter()
            .map(ProductView::from)
            .collect();
        let message = products.is_empty().then_some(NO_RESULTS_MESSAGE);

        Self { products, message }
    }
}

/// A `<select>` option.
#[derive(Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl OptionView {
    fn new(value: String, label: String, current: &str) -> Self {
        let selected = value == current;
        Self {
            value,
            label,
            selected,
        }
    }
}

/// Filter form display data.
#[derive(Clone)]
pub struct ControlsView {
    pub search: String,
    pub categories: Vec<OptionView>,
    pub prices: Vec<OptionView>,
}

impl ControlsView {
    /// Category options come from the catalog in first-seen order, after "All".
    ///
    /// A stored category the catalog doesn't carry is appended as the selected
    /// option, so the selector always shows what the grid is filtered by.
    #[must_use]
    pub fn build(catalog: &Catalog, controls: &FilterControls) -> Self {
        let mut categories: Vec<OptionView> = catalog
            .categories()
            .into_iter()
            .map(|category| {
                OptionView::new(category.to_string(), category.to_string(), &controls.category)
            })
            .collect();
        if let CategoryFilter::Only(current) = CategoryFilter::from_option(&controls.category)
            && !categories.iter().any(|option| option.selected)
        {
            categories.push(OptionView {
                label: current.clone(),
                value: current,
                selected: true,
            });
        }
        let categories = with_all_option(categories);
        let prices = with_all_option(
            PRICE_BUCKETS
                .iter()
                .map(|bucket| OptionView::new(bucket.option_value(), bucket.label(), &controls.price))
                .collect(),
        );

        Self {
            search: controls.search.clone(),
            categories,
            prices,
        }
    }
}

/// Prepend the "All" option, selected when no other option is.
fn with_all_option(options: Vec<OptionView>) -> Vec<OptionView> {
    let all = OptionView {
        value: ALL.to_string(),
        label: ALL.to_string(),
        selected: !options.iter().any(|option| option.selected),
    };
    std::iter::once(all).chain(options).collect()
}

/// Cart line display data.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub line_price: String,
}

impl From<&CartLineItem> for CartItemView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.id().as_i32(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            line_price: line.line_price().to_string(),
        }
    }
}

/// Cart panel display data.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_quantity: u32,
    /// Total without currency symbol (e.g., "24.00").
    pub total_price: String,
}

impl<S: KeyValueSlot> From<&CartStore<S>> for CartView {
    fn from(cart: &CartStore<S>) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total_quantity: totals.quantity,
            total_price: totals.price.amount_string(),
        }
    }
}

/// Checkout confirmation display data.
#[derive(Clone)]
pub struct ReceiptView {
    pub total_quantity: u32,
    /// Total without currency symbol (e.g., "24.00").
    pub total_price: String,
}

impl From<CartTotals> for ReceiptView {
    fn from(totals: CartTotals) -> Self {
        Self {
            total_quantity: totals.quantity,
            total_price: totals.price.amount_string(),
        }
    }
}

/// Everything the main region needs. Only one panel is populated:
/// the receipt, the cart, or (when both are `None`) the catalog.
#[derive(Clone)]
pub struct ShopView {
    pub controls: ControlsView,
    pub grid: GridView,
    pub cart_panel: Option<CartView>,
    pub receipt_panel: Option<ReceiptView>,
}

impl ShopView {
    #[must_use]
    pub fn build<S: KeyValueSlot>(
        state: &AppState,
        shop_state: ShopState,
        controls: &FilterControls,
        cart: &CartStore<S>,
    ) -> Self {
        let (cart_panel, receipt_panel) = match shop_state {
            ShopState::Browsing => (None, None),
            ShopState::CartOpen => (Some(CartView::from(cart)), None),
            ShopState::CheckoutComplete { totals } => (None, Some(ReceiptView::from(totals))),
        };

        Self {
            controls: ControlsView::build(state.catalog(), controls),
            grid: GridView::build(state, controls),
            cart_panel,
            receipt_panel,
        }
    }
}
