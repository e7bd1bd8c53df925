use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::configurator::Configuration;
use crate::math::Rgb;
use crate::types::{Dimensions, FurnitureType, MaterialKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl ContactDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        let phone = phone.into();
        self.phone = (!phone.trim().is_empty()).then_some(phone);
        self
    }
}

/// `local@domain.tld`: one `@`, no whitespace, dotted domain without empty labels
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Payload sent to the quote endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub furniture_type: FurnitureType,
    pub dimensions: Dimensions,
    pub material: MaterialKind,
    pub color: Rgb,
    pub estimated_price: u64,
    pub message: String,
    pub requested_at: DateTime<Utc>,
}

impl QuoteRequest {
    pub fn from_configuration(configuration: &Configuration, contact: ContactDetails) -> Self {
        let input = &configuration.input;
        let dims = input.dimensions;
        let message = format!(
            "Quote request for:\n\n\
             Type: {}\n\
             Dimensions: {}x{}x{}cm\n\
             Material: {}\n\
             Estimated price: {}\n\n\
             Please send detailed information and availability.",
            input.furniture_type.label(),
            dims.width,
            dims.height,
            dims.depth,
            input.material.label(),
            configuration.price,
        );

        Self {
            customer_name: contact.name.trim().to_string(),
            customer_email: contact.email.trim().to_string(),
            customer_phone: contact.phone,
            furniture_type: input.furniture_type,
            dimensions: dims,
            material: input.material,
            color: input.color,
            estimated_price: configuration.price.amount(),
            message,
            requested_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.customer_name.is_empty() {
            bail!("quote request needs a customer name");
        }
        if !is_valid_email(&self.customer_email) {
            bail!("invalid email address '{}'", self.customer_email);
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
