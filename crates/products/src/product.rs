use stockroom_core::{DomainError, DomainResult, Entity};

use crate::record::{ProductRecord, TYPE_ELECTRONIC, TYPE_PERISHABLE};

/// Variant-specific payload of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Generic,
    Electronic { brand: String },
    /// Expiration date is kept verbatim; its format is not validated.
    Perishable { expiration_date: String },
}

impl ProductKind {
    /// The `tipo` tag written to records (`None` for generic products).
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            ProductKind::Generic => None,
            ProductKind::Electronic { .. } => Some(TYPE_ELECTRONIC),
            ProductKind::Perishable { .. } => Some(TYPE_PERISHABLE),
        }
    }
}

/// A single inventory item.
///
/// Price and quantity are never negative: constructors and setters reject
/// negative input with `DomainError::InvalidValue` and leave the product as
/// it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    quantity: i64,
    kind: ProductKind,
}

impl Product {
    /// Create a generic product.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> DomainResult<Self> {
        Self::with_kind(name, price, quantity, ProductKind::Generic)
    }

    /// Create an electronic product.
    pub fn electronic(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        brand: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_kind(
            name,
            price,
            quantity,
            ProductKind::Electronic {
                brand: brand.into(),
            },
        )
    }

    /// Create a perishable (food) product.
    pub fn perishable(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        expiration_date: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::with_kind(
            name,
            price,
            quantity,
            ProductKind::Perishable {
                expiration_date: expiration_date.into(),
            },
        )
    }

    pub fn with_kind(
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> DomainResult<Self> {
        let price = ensure_price(price)?;
        ensure_quantity(quantity)?;
        Ok(Self {
            name: name.into(),
            price,
            quantity,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn brand(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Electronic { brand } => Some(brand),
            _ => None,
        }
    }

    pub fn expiration_date(&self) -> Option<&str> {
        match &self.kind {
            ProductKind::Perishable { expiration_date } => Some(expiration_date),
            _ => None,
        }
    }

    pub fn type_tag(&self) -> Option<&'static str> {
        self.kind.type_tag()
    }

    pub fn set_price(&mut self, new_price: f64) -> DomainResult<()> {
        self.price = ensure_price(new_price)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, new_quantity: i64) -> DomainResult<()> {
        ensure_quantity(new_quantity)?;
        self.quantity = new_quantity;
        Ok(())
    }

    /// Flatten into the persisted record shape, tagged with the variant.
    pub fn to_record(&self) -> ProductRecord {
        let mut record = ProductRecord {
            name: Some(self.name.clone()),
            price: Some(self.price),
            quantity: Some(self.quantity),
            kind: self.type_tag().map(str::to_string),
            ..ProductRecord::default()
        };

        match &self.kind {
            ProductKind::Generic => {}
            ProductKind::Electronic { brand } => record.brand = Some(brand.clone()),
            ProductKind::Perishable { expiration_date } => {
                record.expiration_date = Some(expiration_date.clone())
            }
        }

        record
    }

    /// Rebuild a product from its record, picking the variant from `tipo`.
    ///
    /// An absent or unrecognized `tipo` yields a generic product; fields that
    /// belong to other variants are ignored.
    pub fn from_record(record: &ProductRecord) -> DomainResult<Self> {
        let name = required(&record.name, "nombre")?.clone();
        let price = *required(&record.price, "precio")?;
        let quantity = *required(&record.quantity, "cantidad")?;

        let kind = match record.kind.as_deref() {
            Some(TYPE_ELECTRONIC) => ProductKind::Electronic {
                brand: required(&record.brand, "marca")?.clone(),
            },
            Some(TYPE_PERISHABLE) => ProductKind::Perishable {
                expiration_date: required(&record.expiration_date, "fecha_caducidad")?.clone(),
            },
            _ => ProductKind::Generic,
        };

        Self::with_kind(name, price, quantity, kind)
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ProductKind::Generic => write!(
                f,
                "{}: ${} ({} available)",
                self.name, self.price, self.quantity
            ),
            ProductKind::Electronic { brand } => write!(
                f,
                "{} ({}): ${} ({} available)",
                self.name, brand, self.price, self.quantity
            ),
            ProductKind::Perishable { expiration_date } => write!(
                f,
                "{}: ${} ({} available, expires {})",
                self.name, self.price, self.quantity, expiration_date
            ),
        }
    }
}

/// Returns the accepted price; `-0.0` comes back as `0.0`.
fn ensure_price(price: f64) -> DomainResult<f64> {
    if !price.is_finite() {
        return Err(DomainError::invalid_value("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(DomainError::invalid_value("price cannot be negative"));
    }
    Ok(price + 0.0)
}

fn ensure_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::invalid_value("quantity cannot be negative"));
    }
    Ok(())
}

fn required<'a, T>(value: &'a Option<T>, field: &str) -> DomainResult<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| DomainError::malformed(format!("missing field `{field}`")))
}
