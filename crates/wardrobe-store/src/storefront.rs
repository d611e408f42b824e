//! The storefront state owner.

use crate::clock::{Clock, SystemClock};
use crate::error::StoreResult;
use tracing::{debug, info, warn};
use wardrobe_auth::{
    AdminCredentials, AdminSession, AuthError, CustomerProfile, CustomerSession, PasswordChange,
};
use wardrobe_commerce::cart::{Cart, DiscountCodeBook};
use wardrobe_commerce::catalog::{sample_catalog, Product};
use wardrobe_commerce::checkout::Order;
use wardrobe_commerce::ids::ProductId;
use wardrobe_commerce::settings::AdminSettings;
use wardrobe_commerce::wishlist::Wishlist;
use wardrobe_commerce::CommerceError;

/// Every piece of storefront state, mutated only through its methods.
///
/// Mutations take `&mut self` and either succeed completely or return an
/// error with nothing changed. Derived views borrow the current state and
/// are recomputed on every call.
pub struct Storefront {
    pub(crate) products: Vec<Product>,
    pub(crate) cart: Cart,
    pub(crate) wishlist: Wishlist,
    pub(crate) orders: Vec<Order>,
    pub(crate) discount_codes: DiscountCodeBook,
    pub(crate) settings: AdminSettings,
    pub(crate) admin_credentials: AdminCredentials,
    pub(crate) customer: Option<CustomerSession>,
    pub(crate) admin: Option<AdminSession>,
    pub(crate) checkout_open: bool,
    pub(crate) clock: Box<dyn Clock>,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    /// A storefront seeded with the demo catalog, demo discount codes and
    /// default settings.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Seeded storefront reading time from `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        let now = clock.now();
        Self {
            products: sample_catalog(),
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            orders: Vec::new(),
            discount_codes: DiscountCodeBook::seeded(now),
            settings: AdminSettings::default(),
            admin_credentials: AdminCredentials::default(),
            customer: None,
            admin: None,
            checkout_open: false,
            clock: Box::new(clock),
        }
    }

    /// Replace the catalog.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_settings(mut self, settings: AdminSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_discount_codes(mut self, codes: DiscountCodeBook) -> Self {
        self.discount_codes = codes;
        self
    }

    pub fn with_admin_credentials(mut self, credentials: AdminCredentials) -> Self {
        self.admin_credentials = credentials;
        self
    }

    pub(crate) fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    // Read access

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub(crate) fn product_index(&self, id: &ProductId) -> Result<usize, CommerceError> {
        self.products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Order history, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn discount_codes(&self) -> &DiscountCodeBook {
        &self.discount_codes
    }

    pub fn settings(&self) -> &AdminSettings {
        &self.settings
    }

    pub fn is_checkout_open(&self) -> bool {
        self.checkout_open
    }

    // Customer session

    pub fn customer(&self) -> Option<&CustomerProfile> {
        self.customer.as_ref().map(|s| &s.profile)
    }

    pub fn is_signed_in(&self) -> bool {
        self.customer.is_some()
    }

    pub(crate) fn require_customer(&self) -> Result<&CustomerSession, AuthError> {
        self.customer.as_ref().ok_or(AuthError::SignInRequired)
    }

    /// Sign in with any email and password; the display name is the
    /// email's local part.
    pub fn sign_in(&mut self, email: &str, password: &str) -> StoreResult<&CustomerProfile> {
        let session = CustomerSession::sign_in(email, password, self.now()).map_err(|e| {
            warn!(error = %e, "Customer sign-in rejected");
            e
        })?;
        info!(name = %session.name(), "Customer signed in");
        Ok(&self.customer.insert(session).profile)
    }

    /// Create an account and sign in with an explicit display name.
    pub fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> StoreResult<&CustomerProfile> {
        let session = CustomerSession::sign_up(email, password, name, self.now()).map_err(|e| {
            warn!(error = %e, "Customer sign-up rejected");
            e
        })?;
        info!(name = %session.name(), "Customer signed up");
        Ok(&self.customer.insert(session).profile)
    }

    /// Sign out and drop the cart, wishlist and order history.
    pub fn sign_out(&mut self) {
        if let Some(session) = self.customer.take() {
            info!(name = %session.name(), "Customer signed out");
        }
        self.cart.clear();
        self.wishlist.clear();
        self.orders.clear();
        self.checkout_open = false;
    }

    pub fn change_customer_password(&mut self, change: &PasswordChange) -> StoreResult<()> {
        let session = self.customer.as_mut().ok_or(AuthError::SignInRequired)?;
        session.change_password(change).map_err(|e| {
            warn!(error = %e, "Customer password change rejected");
            e
        })?;
        info!("Customer password changed");
        Ok(())
    }

    pub fn update_profile(&mut self, name: &str, phone: Option<String>) -> StoreResult<()> {
        let session = self.customer.as_mut().ok_or(AuthError::SignInRequired)?;
        session.update_profile(name, phone)?;
        debug!(name = %session.name(), "Customer profile updated");
        Ok(())
    }

    // Admin session

    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }

    pub fn admin(&self) -> Option<&AdminSession> {
        self.admin.as_ref()
    }

    pub(crate) fn require_admin(&self) -> Result<&AdminSession, AuthError> {
        self.admin.as_ref().ok_or(AuthError::AdminRequired)
    }

    pub fn admin_sign_in(&mut self, username: &str, password: &str) -> StoreResult<()> {
        match self.admin_credentials.sign_in(username, password, self.now()) {
            Ok(session) => {
                info!(username = %session.username, "Admin signed in");
                self.admin = Some(session);
                Ok(())
            }
            Err(e) => {
                warn!(username, "Admin sign-in rejected");
                Err(e.into())
            }
        }
    }

    pub fn admin_sign_out(&mut self) {
        if let Some(session) = self.admin.take() {
            info!(username = %session.username, "Admin signed out");
        }
    }

    /// Change the admin password. Later admin sign-ins must use the new one.
    pub fn change_admin_password(&mut self, change: &PasswordChange) -> StoreResult<()> {
        self.require_admin()?;
        self.admin_credentials.change_password(change).map_err(|e| {
            warn!(error = %e, "Admin password change rejected");
            e
        })?;
        info!("Admin password changed");
        Ok(())
    }
}

/// Find a product by id in a borrowed catalog.
pub(crate) fn lookup<'a>(products: &'a [Product], id: &ProductId) -> Result<&'a Product, CommerceError> {
    products
        .iter()
        .find(|p| &p.id == id)
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    #[test]
    fn test_new_storefront_is_seeded() {
        let store = Storefront::new();
        assert_eq!(store.products().len(), 8);
        assert_eq!(store.discount_codes().len(), 2);
        assert!(store.cart().is_empty());
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_sign_in_uses_email_local_part() {
        let mut store = Storefront::new();
        let profile = store.sign_in("riya@example.com", "pw").unwrap();
        assert_eq!(profile.name, "riya");
        assert!(store.is_signed_in());
    }

    #[test]
    fn test_admin_sign_in_and_password_change() {
        let mut store = Storefront::new();
        assert_eq!(
            store.admin_sign_in("admin", "nope"),
            Err(StoreError::Auth(AuthError::InvalidCredentials))
        );
        store.admin_sign_in("admin", "admin123").unwrap();
        assert!(store.is_admin());
        store
            .change_admin_password(&PasswordChange::new("admin123", "letmein", "letmein"))
            .unwrap();
        store.admin_sign_out();
        assert!(store.admin_sign_in("admin", "admin123").is_err());
        assert!(store.admin_sign_in("admin", "letmein").is_ok());
    }

    #[test]
    fn test_admin_password_change_requires_session() {
        let mut store = Storefront::new();
        let change = PasswordChange::new("admin123", "letmein", "letmein");
        assert_eq!(
            store.change_admin_password(&change),
            Err(StoreError::Auth(AuthError::AdminRequired))
        );
    }
}
