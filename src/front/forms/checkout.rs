use crate::models;
use chrono::{Datelike, Utc};

/// Payload posted by the checkout form.
#[derive(serde::Deserialize, Debug, Default)]
pub struct CheckoutFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub card_number: String,
    pub exp_month: u32,
    pub exp_year: u32,
    pub cvc: String,
}

impl CheckoutFormData {
    pub fn billing_details(&self) -> models::billing::BillingDetails {
        models::billing::BillingDetails {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    pub fn card_details(&self) -> models::card::CardDetails {
        models::card::CardDetails {
            number: self.card_digits(),
            exp_month: self.exp_month,
            exp_year: self.exp_year,
            cvc: self.cvc.trim().to_string(),
        }
    }

    /// Validates the card fields into the state the checkout flow consumes.
    ///
    /// Empty fields mean the input is still incomplete; malformed values
    /// carry an inline error message.
    pub fn card_input_state(&self) -> models::card::CardInputState {
        let digits = self.card_digits();
        let cvc = self.cvc.trim();

        if digits.is_empty() || cvc.is_empty() || self.exp_month == 0 || self.exp_year == 0 {
            return models::card::CardInputState::default();
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) || !(12..=19).contains(&digits.len()) {
            return models::card::CardInputState::invalid("card number looks invalid");
        }

        if !(1..=12).contains(&self.exp_month) {
            return models::card::CardInputState::invalid("expiration month must be 1 to 12");
        }

        let now = Utc::now();
        let expired = self.exp_year < now.year() as u32
            || (self.exp_year == now.year() as u32 && self.exp_month < now.month());
        if expired {
            return models::card::CardInputState::invalid("card is expired");
        }

        if !(3..=4).contains(&cvc.len()) || !cvc.chars().all(|c| c.is_ascii_digit()) {
            return models::card::CardInputState::invalid("security code must be 3 or 4 digits");
        }

        models::card::CardInputState::complete()
    }

    fn card_digits(&self) -> String {
        self.card_number
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    }
}
