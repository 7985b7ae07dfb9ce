//! User catalogues: one ad list per listing state, plus the purchase
//! transaction between two users.
//!
//! A user's ads live in three independent [`AdList`]s keyed by [`AdState`].
//! Methods without a state or category parameter act on the list selected via
//! [`User::select_state`], further narrowed by that list's selected category.
//!
//! The full bidirectional iteration surface of [`AdList`] is forwarded:
//!
//! ```rust
//! use adboard::{Category, User};
//!
//! # fn main() -> adboard::Result<()> {
//! let mut user = User::new("Ali", "pw-ali")?;
//! user.post(Category::Vehicles, "City bike", 120)?;
//! user.post(Category::Vehicles, "Cargo trailer", 80)?;
//!
//! user.start_iteration();
//! while user.has_next() {
//!     println!("older: {}", user.next());
//! }
//! while user.has_previous() {
//!     println!("newer: {}", user.previous());
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::{AdList, AdRecord, Category, Identifiable, Timestamped};
use crate::utils::{validate_password, validate_user_name};
use crate::{AdBoardError, Result, INITIAL_CASH};

/// Listing state of an ad within a user's catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdState {
    /// Still available for purchase
    Open,
    /// Sold by its author
    Closed,
    /// Bought by the catalogue owner
    Purchased,
}

impl AdState {
    /// Get all listing states
    pub fn all() -> [Self; 3] {
        [Self::Open, Self::Closed, Self::Purchased]
    }
}

impl std::fmt::Display for AdState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Purchased => "purchased",
        };
        write!(f, "{}", s)
    }
}

/// A marketplace user and their ads catalogue.
///
/// Created with a cash endowment of [`INITIAL_CASH`], an empty list per
/// listing state, the open list selected and no category selected.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    id: Uuid,
    /// User name (non-blank)
    name: String,
    /// Password (non-blank)
    #[serde(skip_serializing)]
    password: String,
    /// Registration timestamp
    registered_at: DateTime<Utc>,
    /// Cash available for purchases
    cash: u64,
    /// Listing state unscoped operations act on
    selected_state: AdState,
    open: AdList,
    closed: AdList,
    purchased: AdList,
}

impl User {
    /// Register a new user with the default cash endowment.
    ///
    /// Name and password must be non-blank.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let password = password.into();
        validate_user_name(&name)?;
        validate_password(&password)?;

        debug!(user = %name, "user registered");
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            password,
            registered_at: Utc::now(),
            cash: INITIAL_CASH,
            selected_state: AdState::Open,
            open: AdList::new(),
            closed: AdList::new(),
            purchased: AdList::new(),
        })
    }

    /// User name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Registration timestamp
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Cash available for purchases
    pub fn available_cash(&self) -> u64 {
        self.cash
    }

    fn list(&self, state: AdState) -> &AdList {
        match state {
            AdState::Open => &self.open,
            AdState::Closed => &self.closed,
            AdState::Purchased => &self.purchased,
        }
    }

    fn list_mut(&mut self, state: AdState) -> &mut AdList {
        match state {
            AdState::Open => &mut self.open,
            AdState::Closed => &mut self.closed,
            AdState::Purchased => &mut self.purchased,
        }
    }

    fn active(&self) -> &AdList {
        self.list(self.selected_state)
    }

    fn active_mut(&mut self) -> &mut AdList {
        self.list_mut(self.selected_state)
    }

    /// Listing state unscoped operations currently act on
    pub fn selected_state(&self) -> AdState {
        self.selected_state
    }

    /// Select the listing state unscoped operations act on.
    ///
    /// Restarts the iteration on that list; its category selection is
    /// preserved.
    pub fn select_state(&mut self, state: AdState) {
        debug!(user = %self.name, state = %state, "ad state selected");
        self.selected_state = state;
        self.active_mut().start_iteration();
    }

    /// Select a category on the active list (see [`AdList::select_category`])
    pub fn select_category(&mut self, cat: Category) {
        self.active_mut().select_category(cat);
    }

    /// Category selected on the active list, if any
    pub fn selected_category(&self) -> Option<Category> {
        self.active().selected_category()
    }

    /// Clear the active list's category selection and restart its iteration
    pub fn clear_selected_category(&mut self) {
        self.active_mut().clear_selected_category();
    }

    /// Create a new ad timestamped now and file it under the open listings.
    ///
    /// The open list is the target regardless of the selected state; if the
    /// open list is the active one, the insert restarts its iteration.
    /// Returns a copy of the stored record.
    pub fn post(
        &mut self,
        category: Category,
        description: impl Into<String>,
        price: u32,
    ) -> Result<AdRecord> {
        let ad = AdRecord::new(category, description, price)?;
        self.open.add(ad.clone())?;
        debug!(user = %self.name, category = %category, price, "ad posted");
        Ok(ad)
    }

    /// Buy the item of `ad` from `vendor`.
    ///
    /// On success the ad moves from the vendor's open list to their closed
    /// list, a copy lands in this user's purchased list, the price moves from
    /// this user's cash to the vendor's, and both users' active iterations are
    /// restarted.
    ///
    /// All preconditions are validated before any mutation: the ad must be
    /// among the vendor's open listings and this user's cash must cover the
    /// price. On error neither catalogue is touched. Buying from oneself is
    /// unrepresentable: `self` and `vendor` are distinct `&mut` borrows.
    pub fn buy(&mut self, vendor: &mut User, ad: &AdRecord) -> Result<()> {
        if !vendor.open.contains(ad) {
            return Err(AdBoardError::not_for_sale(ad.description()));
        }
        if vendor.closed.contains(ad) || self.purchased.contains(ad) {
            return Err(AdBoardError::duplicate(ad.description()));
        }
        let price = u64::from(ad.price());
        if self.cash < price {
            return Err(AdBoardError::InsufficientCash {
                available: self.cash,
                required: price,
            });
        }

        vendor.open.remove(ad);
        vendor.closed.insert(ad.clone());
        vendor.cash += price;

        self.purchased.insert(ad.clone());
        self.cash -= price;

        vendor.active_mut().start_iteration();
        self.active_mut().start_iteration();

        info!(buyer = %self.name, vendor = %vendor.name, price, "purchase completed");
        Ok(())
    }

    /// Number of ads in the selected state, narrowed by the active list's
    /// selected category
    pub fn len(&self) -> usize {
        let list = self.active();
        match list.selected_category() {
            Some(cat) => list.len_in(cat),
            None => list.len(),
        }
    }

    /// Check whether the current state/category scope holds no ads
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of ads in an explicit state, optionally narrowed to one category
    pub fn len_of(&self, state: AdState, cat: Option<Category>) -> usize {
        let list = self.list(state);
        match cat {
            Some(c) => list.len_in(c),
            None => list.len(),
        }
    }

    /// The `i`-th newest ad in the selected state and category scope.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn get(&self, i: usize) -> &AdRecord {
        self.get_of(self.selected_state, self.selected_category(), i)
    }

    /// The `i`-th newest ad in an explicit state, optionally narrowed to one
    /// category.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len_of(state, cat)`.
    pub fn get_of(&self, state: AdState, cat: Option<Category>, i: usize) -> &AdRecord {
        let list = self.list(state);
        match cat {
            Some(c) => list.get_in(c, i),
            None => list.get(i),
        }
    }

    /// Check whether an equal ad is present among the listings of the given state
    pub fn contains_in(&self, state: AdState, ad: &AdRecord) -> bool {
        self.list(state).contains(ad)
    }

    /// Restart the iteration on the active list (see [`AdList::start_iteration`])
    pub fn start_iteration(&mut self) {
        self.active_mut().start_iteration();
    }

    /// Forwarded [`AdList::has_next`] on the active list
    pub fn has_next(&self) -> bool {
        self.active().has_next()
    }

    /// Forwarded [`AdList::next`] on the active list.
    ///
    /// # Panics
    ///
    /// Panics if `has_next()` is false.
    pub fn next(&mut self) -> &AdRecord {
        self.active_mut().next()
    }

    /// Forwarded [`AdList::next_index`] on the active list
    pub fn next_index(&self) -> isize {
        self.active().next_index()
    }

    /// Forwarded [`AdList::has_previous`] on the active list
    pub fn has_previous(&self) -> bool {
        self.active().has_previous()
    }

    /// Forwarded [`AdList::previous`] on the active list.
    ///
    /// # Panics
    ///
    /// Panics if `has_previous()` is false.
    pub fn previous(&mut self) -> &AdRecord {
        self.active_mut().previous()
    }

    /// Forwarded [`AdList::previous_index`] on the active list
    pub fn previous_index(&self) -> isize {
        self.active().previous_index()
    }

    /// Forwarded [`AdList::last_index`] on the active list
    pub fn last_index(&self) -> isize {
        self.active().last_index()
    }
}

impl Identifiable for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for User {
    fn created_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} open, {} closed, {} purchased ({} cash)",
            self.name,
            self.open.len(),
            self.closed.len(),
            self.purchased.len(),
            self.cash
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("Lamia", "pw-lamia").unwrap();
        assert_eq!(user.name(), "Lamia");
        assert_eq!(user.available_cash(), INITIAL_CASH);
        assert_eq!(user.selected_state(), AdState::Open);
        assert_eq!(user.selected_category(), None);
        assert_eq!(user.len(), 0);
        assert!(!user.has_next());
    }

    #[test]
    fn test_blank_credentials_rejected() {
        assert!(User::new("", "pw").is_err());
        assert!(User::new("  ", "pw").is_err());
        assert!(User::new("Yanis", "").is_err());
        assert!(User::new("Yanis", " \t").is_err());
    }

    #[test]
    fn test_post_targets_open_list() {
        let mut user = User::new("Idir", "pw-idir").unwrap();
        user.select_state(AdState::Purchased);

        user.post(Category::Clothing, "Wool coat", 60).unwrap();
        assert_eq!(user.len_of(AdState::Open, None), 1);
        // Purchased is still the active (empty) scope.
        assert_eq!(user.len(), 0);
    }

    #[test]
    fn test_select_state_preserves_category_selection() {
        let mut user = User::new("Chanez", "pw-chanez").unwrap();
        user.select_category(Category::Electronics);
        user.select_state(AdState::Closed);
        assert_eq!(user.selected_category(), None);

        user.select_state(AdState::Open);
        assert_eq!(user.selected_category(), Some(Category::Electronics));
    }

    #[test]
    fn test_display_counts_per_state() {
        let mut user = User::new("Mounir", "pw-mounir").unwrap();
        user.post(Category::Books, "Paperback lot", 5).unwrap();
        assert_eq!(
            user.to_string(),
            format!("Mounir: 1 open, 0 closed, 0 purchased ({} cash)", INITIAL_CASH)
        );
    }

    #[test]
    fn test_state_display_and_all() {
        assert_eq!(AdState::all().len(), 3);
        assert_eq!(AdState::Open.to_string(), "open");
        assert_eq!(AdState::Purchased.to_string(), "purchased");
    }
}
