use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopforge_core::{CatalogError, CatalogResult, Entity, ItemId};

use crate::fields::{EmailAddress, Price, SkuCode};

/// Longest accepted display name (after trimming).
pub const NAME_MAX_LEN: usize = 120;

/// Longest accepted free-text description.
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Derived stock classification. Boundaries are inclusive and pinned by
/// tests: 0, 1-9, 10-49, >= 50.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    MediumStock,
    InStock,
}

impl StockStatus {
    /// Pure classification of a quantity-on-hand.
    pub fn for_quantity(quantity: i64) -> Self {
        match quantity {
            q if q <= 0 => StockStatus::OutOfStock,
            1..=9 => StockStatus::LowStock,
            10..=49 => StockStatus::MediumStock,
            _ => StockStatus::InStock,
        }
    }
}

/// Unvalidated caller input for `create` and `apply_update`.
///
/// Fields arrive as raw wire values; validation happens in the engine so the
/// first violated constraint is reported as a structured error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: i64,
    pub sku: String,
    #[serde(default)]
    pub contact: Option<String>,
}

/// Entity: one stocked product.
///
/// Exclusively owned by the item store; the engine never retains a reference
/// across calls. Every operation takes the current state by `&self` and
/// returns the next state (or fails), leaving persistence to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    id: ItemId,
    name: String,
    price: Price,
    description: Option<String>,
    quantity: i64,
    sku: SkuCode,
    contact: Option<EmailAddress>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Entity for CatalogItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

impl CatalogItem {
    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn sku(&self) -> &SkuCode {
        &self.sku
    }

    pub fn contact(&self) -> Option<&EmailAddress> {
        self.contact.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Stock classification derived from the current quantity.
    pub fn status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }

    /// Create a new item from caller input.
    ///
    /// Validates every field constraint; the first violation is returned as
    /// a [`CatalogError::Validation`]. Both timestamps are set to `now`.
    pub fn create(draft: ItemDraft, now: DateTime<Utc>) -> CatalogResult<Self> {
        let (name, price, description, quantity, sku, contact) = validate_draft(&draft)?;
        Ok(Self {
            id: ItemId::new(),
            name,
            price,
            description,
            quantity,
            sku,
            contact,
            created_at: now,
            updated_at: now,
        })
    }

    /// Re-validate all fields and produce the updated item.
    ///
    /// `code_in_use` is the store's uniqueness predicate; it is only
    /// consulted when the SKU actually changes. The creation timestamp is
    /// preserved; `updated_at` becomes `now`.
    pub fn apply_update(
        &self,
        draft: ItemDraft,
        code_in_use: impl Fn(&SkuCode) -> bool,
        now: DateTime<Utc>,
    ) -> CatalogResult<Self> {
        let (name, price, description, quantity, sku, contact) = validate_draft(&draft)?;
        if sku != self.sku && code_in_use(&sku) {
            return Err(CatalogError::conflict("sku", sku.as_str()));
        }
        Ok(Self {
            id: self.id,
            name,
            price,
            description,
            quantity,
            sku,
            contact,
            created_at: self.created_at,
            updated_at: now,
        })
    }

    /// Replace the quantity-on-hand outright (administrative set).
    ///
    /// Refreshes `updated_at` even when the quantity is unchanged, so an
    /// explicit touch is always visible.
    pub fn with_stock(&self, quantity: i64, now: DateTime<Utc>) -> CatalogResult<Self> {
        if quantity < 0 {
            return Err(CatalogError::validation(
                "quantity",
                quantity.to_string(),
                "quantity cannot be negative",
            ));
        }
        let mut next = self.clone();
        next.quantity = quantity;
        next.updated_at = now;
        Ok(next)
    }

    /// Decrement quantity-on-hand to represent committed demand.
    ///
    /// Fails with [`CatalogError::InsufficientStock`] when `amount` exceeds
    /// what is on hand; the input state is untouched either way.
    pub fn reserve(&self, amount: i64, now: DateTime<Utc>) -> CatalogResult<Self> {
        if amount <= 0 {
            return Err(CatalogError::validation(
                "amount",
                amount.to_string(),
                "reserve amount must be positive",
            ));
        }
        if amount > self.quantity {
            return Err(CatalogError::insufficient_stock(
                self.id,
                amount,
                self.quantity,
            ));
        }
        let mut next = self.clone();
        next.quantity -= amount;
        next.updated_at = now;
        Ok(next)
    }

    /// Increment quantity-on-hand to represent replenishment.
    pub fn restock(&self, amount: i64, now: DateTime<Utc>) -> CatalogResult<Self> {
        if amount <= 0 {
            return Err(CatalogError::validation(
                "amount",
                amount.to_string(),
                "restock amount must be positive",
            ));
        }
        let quantity = self.quantity.checked_add(amount).ok_or_else(|| {
            CatalogError::validation("amount", amount.to_string(), "quantity overflows")
        })?;
        let mut next = self.clone();
        next.quantity = quantity;
        next.updated_at = now;
        Ok(next)
    }
}

type ValidatedDraft = (
    String,
    Price,
    Option<String>,
    i64,
    SkuCode,
    Option<EmailAddress>,
);

fn validate_draft(draft: &ItemDraft) -> CatalogResult<ValidatedDraft> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(CatalogError::validation(
            "name",
            &draft.name,
            "name cannot be empty",
        ));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(CatalogError::validation(
            "name",
            &draft.name,
            format!("name cannot exceed {NAME_MAX_LEN} characters"),
        ));
    }

    let price = Price::parse(&draft.price)?;

    let description = match draft.description.as_deref() {
        Some(d) if d.chars().count() > DESCRIPTION_MAX_LEN => {
            return Err(CatalogError::validation(
                "description",
                d,
                format!("description cannot exceed {DESCRIPTION_MAX_LEN} characters"),
            ));
        }
        other => other.map(str::to_string),
    };

    if draft.quantity < 0 {
        return Err(CatalogError::validation(
            "quantity",
            draft.quantity.to_string(),
            "quantity cannot be negative",
        ));
    }

    let sku = SkuCode::parse(&draft.sku)?;
    let contact = draft
        .contact
        .as_deref()
        .map(EmailAddress::parse)
        .transpose()?;

    Ok((
        name.to_string(),
        price,
        description,
        draft.quantity,
        sku,
        contact,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn draft() -> ItemDraft {
        ItemDraft {
            name: "Widget".to_string(),
            price: "19.99".to_string(),
            description: Some("A reliable widget".to_string()),
            quantity: 5,
            sku: "WID-000001".to_string(),
            contact: Some("ops@example.com".to_string()),
        }
    }

    fn item_with_quantity(quantity: i64) -> CatalogItem {
        let mut d = draft();
        d.quantity = quantity;
        CatalogItem::create(d, test_time()).unwrap()
    }

    #[test]
    fn create_sets_fields_from_input() {
        let now = test_time();
        let item = CatalogItem::create(draft(), now).unwrap();

        assert_eq!(item.name(), "Widget");
        assert_eq!(item.price().cents(), 1999);
        assert_eq!(item.description(), Some("A reliable widget"));
        assert_eq!(item.quantity(), 5);
        assert_eq!(item.sku().as_str(), "WID-000001");
        assert_eq!(item.contact().map(EmailAddress::as_str), Some("ops@example.com"));
        assert_eq!(item.created_at(), now);
        assert_eq!(item.updated_at(), now);
    }

    #[test]
    fn create_trims_the_name() {
        let mut d = draft();
        d.name = "  Widget  ".to_string();
        let item = CatalogItem::create(d, test_time()).unwrap();
        assert_eq!(item.name(), "Widget");
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        match CatalogItem::create(d, test_time()).unwrap_err() {
            CatalogError::Validation { field: "name", .. } => {}
            other => panic!("expected name validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_overlong_name() {
        let mut d = draft();
        d.name = "x".repeat(NAME_MAX_LEN + 1);
        match CatalogItem::create(d, test_time()).unwrap_err() {
            CatalogError::Validation { field: "name", .. } => {}
            other => panic!("expected name validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_overlong_description() {
        let mut d = draft();
        d.description = Some("x".repeat(DESCRIPTION_MAX_LEN + 1));
        match CatalogItem::create(d, test_time()).unwrap_err() {
            CatalogError::Validation { field: "description", .. } => {}
            other => panic!("expected description validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_allows_missing_description_and_contact() {
        let mut d = draft();
        d.description = None;
        d.contact = None;
        let item = CatalogItem::create(d, test_time()).unwrap();
        assert_eq!(item.description(), None);
        assert!(item.contact().is_none());
    }

    #[test]
    fn create_rejects_negative_quantity() {
        let mut d = draft();
        d.quantity = -1;
        match CatalogItem::create(d, test_time()).unwrap_err() {
            CatalogError::Validation { field: "quantity", .. } => {}
            other => panic!("expected quantity validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_reports_first_violation() {
        // Both the name and the SKU are bad; name is validated first.
        let mut d = draft();
        d.name = "".to_string();
        d.sku = "nope".to_string();
        match CatalogItem::create(d, test_time()).unwrap_err() {
            CatalogError::Validation { field: "name", .. } => {}
            other => panic!("expected name validation error, got {other:?}"),
        }
    }

    #[test]
    fn reserve_decrements_exactly() {
        let item = item_with_quantity(10);
        let later = item.updated_at() + Duration::seconds(1);
        let next = item.reserve(3, later).unwrap();

        assert_eq!(next.quantity(), 7);
        assert_eq!(next.updated_at(), later);
        // Input state untouched.
        assert_eq!(item.quantity(), 10);
    }

    #[test]
    fn reserve_rejects_non_positive_amounts() {
        let item = item_with_quantity(10);
        for amount in [0, -5] {
            match item.reserve(amount, test_time()).unwrap_err() {
                CatalogError::Validation { field: "amount", .. } => {}
                other => panic!("expected amount validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn reserve_beyond_stock_reports_the_numbers() {
        let item = item_with_quantity(5);
        match item.reserve(10, test_time()).unwrap_err() {
            CatalogError::InsufficientStock {
                item_id,
                requested,
                available,
            } => {
                assert_eq!(item_id, item.id_typed());
                assert_eq!(requested, 10);
                assert_eq!(available, 5);
            }
            other => panic!("expected insufficient stock error, got {other:?}"),
        }
        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn reserve_can_drain_to_zero() {
        let item = item_with_quantity(5);
        let next = item.reserve(5, test_time()).unwrap();
        assert_eq!(next.quantity(), 0);
        assert_eq!(next.status(), StockStatus::OutOfStock);
    }

    #[test]
    fn restock_increments_exactly() {
        let item = item_with_quantity(5);
        let next = item.restock(7, test_time()).unwrap();
        assert_eq!(next.quantity(), 12);
    }

    #[test]
    fn restock_rejects_non_positive_amounts() {
        let item = item_with_quantity(5);
        for amount in [0, -1] {
            match item.restock(amount, test_time()).unwrap_err() {
                CatalogError::Validation { field: "amount", .. } => {}
                other => panic!("expected amount validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn restock_rejects_quantity_overflow() {
        let item = item_with_quantity(1);
        assert!(item.restock(i64::MAX, test_time()).is_err());
    }

    #[test]
    fn with_stock_replaces_and_refreshes() {
        let item = item_with_quantity(5);
        let later = item.updated_at() + Duration::seconds(1);
        let next = item.with_stock(50, later).unwrap();

        assert_eq!(next.quantity(), 50);
        assert!(next.updated_at() >= item.updated_at());
    }

    #[test]
    fn with_stock_refreshes_even_when_unchanged() {
        let item = item_with_quantity(5);
        let later = item.updated_at() + Duration::seconds(1);
        let next = item.with_stock(5, later).unwrap();
        assert_eq!(next.updated_at(), later);
    }

    #[test]
    fn with_stock_rejects_negative_quantity() {
        let item = item_with_quantity(5);
        match item.with_stock(-1, test_time()).unwrap_err() {
            CatalogError::Validation { field: "quantity", .. } => {}
            other => panic!("expected quantity validation error, got {other:?}"),
        }
    }

    #[test]
    fn apply_update_revalidates_and_preserves_created_at() {
        let item = item_with_quantity(5);
        let later = item.created_at() + Duration::seconds(5);

        let mut d = draft();
        d.name = "Widget Mk II".to_string();
        let next = item.apply_update(d, |_| false, later).unwrap();

        assert_eq!(next.id_typed(), item.id_typed());
        assert_eq!(next.name(), "Widget Mk II");
        assert_eq!(next.created_at(), item.created_at());
        assert_eq!(next.updated_at(), later);
    }

    #[test]
    fn apply_update_conflicts_on_duplicate_sku() {
        let item = item_with_quantity(5);
        let mut d = draft();
        d.sku = "OTH-999999".to_string();

        match item.apply_update(d, |_| true, test_time()).unwrap_err() {
            CatalogError::Conflict { field: "sku", value } => {
                assert_eq!(value, "OTH-999999");
            }
            other => panic!("expected sku conflict, got {other:?}"),
        }
        // Original unaffected.
        assert_eq!(item.sku().as_str(), "WID-000001");
    }

    #[test]
    fn apply_update_skips_uniqueness_check_for_unchanged_sku() {
        let item = item_with_quantity(5);
        // The predicate would report the item's own code as taken; it must
        // not be consulted when the code is unchanged.
        let next = item.apply_update(draft(), |_| true, test_time()).unwrap();
        assert_eq!(next.sku().as_str(), "WID-000001");
    }

    #[test]
    fn stock_status_boundaries_are_pinned() {
        assert_eq!(StockStatus::for_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_quantity(1), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(9), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(10), StockStatus::MediumStock);
        assert_eq!(StockStatus::for_quantity(49), StockStatus::MediumStock);
        assert_eq!(StockStatus::for_quantity(50), StockStatus::InStock);
        assert_eq!(StockStatus::for_quantity(5000), StockStatus::InStock);
    }

    #[test]
    fn stock_status_is_idempotent() {
        for q in [0, 9, 10, 49, 50] {
            assert_eq!(StockStatus::for_quantity(q), StockStatus::for_quantity(q));
        }
    }

    #[test]
    fn create_then_over_reserve_end_to_end() {
        let mut d = draft();
        d.quantity = 5;
        d.sku = "LOW-123456".to_string();
        let item = CatalogItem::create(d, test_time()).unwrap();

        match item.reserve(10, test_time()).unwrap_err() {
            CatalogError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 10);
                assert_eq!(available, 5);
            }
            other => panic!("expected insufficient stock error, got {other:?}"),
        }
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: reserve either decrements exactly or reports the
            /// exact shortfall; quantity never goes negative.
            #[test]
            fn reserve_never_goes_negative(
                quantity in 0i64..1000,
                amount in 1i64..1000
            ) {
                let item = item_with_quantity(quantity);
                match item.reserve(amount, test_time()) {
                    Ok(next) => {
                        prop_assert!(amount <= quantity);
                        prop_assert_eq!(next.quantity(), quantity - amount);
                        prop_assert!(next.quantity() >= 0);
                    }
                    Err(CatalogError::InsufficientStock { requested, available, .. }) => {
                        prop_assert!(amount > quantity);
                        prop_assert_eq!(requested, amount);
                        prop_assert_eq!(available, quantity);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                }
            }

            /// Property: restock-then-reserve of the same amount round-trips
            /// back to the original quantity.
            #[test]
            fn restock_then_reserve_round_trips(
                quantity in 0i64..1000,
                amount in 1i64..1000
            ) {
                let item = item_with_quantity(quantity);
                let stocked = item.restock(amount, test_time()).unwrap();
                let drained = stocked.reserve(amount, test_time()).unwrap();
                prop_assert_eq!(drained.quantity(), quantity);
            }

            /// Property: any string matching the SKU pattern parses.
            #[test]
            fn well_formed_skus_parse(sku in "[A-Z]{3}-[0-9]{6}") {
                prop_assert!(SkuCode::parse(&sku).is_ok());
            }

            /// Property: price display/parse round-trips cent-exactly.
            #[test]
            fn price_display_round_trips(cents in 1u64..=Price::MAX) {
                let rendered = format!("{}.{:02}", cents / 100, cents % 100);
                prop_assert_eq!(Price::parse(&rendered).unwrap().cents(), cents);
            }
        }
    }
}
