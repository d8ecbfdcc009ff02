/// Billing contact details collected by the checkout form.
///
/// Fields are plain strings updated field-by-field from the form and reset
/// to empty on a checkout restart.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl BillingDetails {
    /// True when every field is an empty string, the post-reset shape.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}
