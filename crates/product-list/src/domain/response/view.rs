use crate::{
    abstract_trait::Translator,
    domain::{requests::DeleteRequest, route::Route},
    i18n::keys,
    model::Product,
};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use shared::utils::{format_grouped, format_relative};

/// Shown in place of a missing SKU or quantity.
pub const PLACEHOLDER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAction {
    pub label: String,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: i32,
    pub title: String,
    pub image: Option<ImageView>,
    pub sku: String,
    pub quantity: String,
    pub active_label: Option<String>,
    pub price: String,
    pub sale: Option<String>,
    pub created: String,
    pub updated: Option<String>,
    pub edit: EditAction,
    pub delete: DeleteRequest,
}

fn money(amount: f64) -> String {
    format!("${}", format_grouped(amount))
}

impl ProductRow {
    /// Timestamps are shown in the zone of `now`.
    pub fn project<T, Tz>(product: &Product, translator: &T, now: &DateTime<Tz>) -> Self
    where
        T: Translator + ?Sized,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let zone = now.timezone();

        let title = product.display_title().to_string();

        let image = product
            .image
            .as_deref()
            .filter(|src| !src.is_empty())
            .map(|src| ImageView {
                src: src.to_string(),
                alt: title.clone(),
            });

        let sku = product
            .sku
            .as_deref()
            .filter(|sku| !sku.is_empty())
            .unwrap_or(PLACEHOLDER)
            .to_string();

        // zero stock reads as "---" too
        let quantity = product
            .quantity
            .filter(|qty| *qty != 0)
            .map(|qty| qty.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let sale = product
            .price_sale
            .filter(|sale| *sale != 0.0 && !sale.is_nan())
            .map(money);

        Self {
            id: product.product_id,
            image,
            sku,
            quantity,
            active_label: product.is_active.then(|| translator.t(keys::ACTIVE)),
            price: money(product.price),
            sale,
            created: format_relative(&product.created_at.with_timezone(&zone), now),
            updated: product
                .was_updated()
                .map(|updated| format_relative(&updated.with_timezone(&zone), now)),
            edit: EditAction {
                label: translator.t(keys::EDIT),
                route: Route::EditProduct(product.product_id),
            },
            delete: DeleteRequest::from(product),
            title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductListView {
    Loading {
        label: String,
    },
    Empty {
        message: String,
        create_label: String,
        create: Route,
    },
    Populated {
        rows: Vec<ProductRow>,
    },
}

impl ProductListView {
    pub fn rows(&self) -> &[ProductRow] {
        match self {
            ProductListView::Populated { rows } => rows,
            _ => &[],
        }
    }
}
