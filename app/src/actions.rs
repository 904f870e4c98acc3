//! User actions on product cards.
//!
//! Actions return an [`ActionOutcome`] so navigation is data the host
//! can act on, not a hidden side effect. Authenticated actions check
//! the injected [`AuthSession`] first; without a valid token they
//! produce a login redirect and issue no network call.

use serde::{Deserialize, Serialize};

use storefront_auth::AuthSession;
use storefront_commerce::Product;
use storefront_core::Route;
use storefront_data::{FetchError, StoreApi};

use crate::state::CardState;

/// Navigation state carried to the compare page: the product the user
/// picked on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareSelection {
    pub product: Product,
}

/// What the host should do after an action resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Navigate to a route.
    Navigate(Route),
    /// Navigate to the compare page carrying the selected product.
    Compare(CompareSelection),
    /// The backend call completed.
    Completed,
    /// Nothing to do.
    NoOp,
}

/// Add a product to the cart.
///
/// Without a valid session token this redirects to login and performs
/// no network call. A backend failure is returned to the caller, which
/// surfaces it as a blocking alert; there is no local cart state to
/// reconcile.
pub async fn add_to_cart(
    api: &dyn StoreApi,
    session: &AuthSession,
    product: &Product,
    quantity: i64,
) -> Result<ActionOutcome, FetchError> {
    let Some(token) = session.token() else {
        return Ok(ActionOutcome::Navigate(Route::Login));
    };

    api.add_to_cart(&token, &product.id, quantity).await?;
    Ok(ActionOutcome::Completed)
}

/// Toggle the wishlist membership of a product.
///
/// The card flag flips optimistically before the call; if the backend
/// rejects the change the flag is rolled back and the error returned.
pub async fn toggle_wishlist(
    api: &dyn StoreApi,
    session: &AuthSession,
    card: &mut CardState,
    product: &Product,
) -> Result<ActionOutcome, FetchError> {
    let Some(token) = session.token() else {
        return Ok(ActionOutcome::Navigate(Route::Login));
    };

    let adding = !card.wishlisted;
    card.wishlisted = adding;

    let result = if adding {
        api.add_to_wishlist(&token, &product.id).await
    } else {
        api.remove_from_wishlist(&token, &product.id).await
    };

    if let Err(e) = result {
        card.wishlisted = !adding;
        return Err(e);
    }
    Ok(ActionOutcome::Completed)
}

/// Quick view of a product.
// TODO: render a quick-view modal; only the affordance exists today.
pub fn quick_view(_product: &Product) -> ActionOutcome {
    ActionOutcome::NoOp
}

/// Open the comparison page with this product preselected.
pub fn compare(product: &Product) -> ActionOutcome {
    ActionOutcome::Compare(CompareSelection {
        product: product.clone(),
    })
}
