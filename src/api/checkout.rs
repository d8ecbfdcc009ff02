//! # Checkout Flow
//!
//! Drives one payment attempt from the collected form input: checks the
//! card input state, exchanges the card data for a gateway token, then
//! posts the charge to the checkout backend. The two outbound calls are
//! strictly sequential and a submission runs to completion or failure.
//! There are no retries; a failed attempt needs an explicit [reset].
//!
//! [reset]: CheckoutFlow::reset

use log::{error, info};
use rust_decimal::Decimal;

use crate::{models, services, utils};

/// Flow states. The terminal states go back to
/// [Editing](CheckoutState::Editing) only through
/// [reset](CheckoutFlow::reset).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CheckoutState {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Immediate answer of [submit](CheckoutFlow::submit).
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The tokenization collaborator is not initialized, nothing happened
    GatewayNotReady,
    /// Card input is invalid or incomplete, focus belongs back on the card
    /// field; no network call was made
    FocusCardField,
    /// The submission ran; the flow is now `Succeeded` or `Failed`
    Settled,
}

/// One checkout attempt over the two external collaborators.
pub struct CheckoutFlow<'a> {
    tokenizer: Option<&'a services::ImplCardTokenizer>,
    charge_api: &'a services::ImplChargeApi,
    amount: Decimal,
    state: CheckoutState,
    billing: models::billing::BillingDetails,
    card: models::card::CardDetails,
    card_input: models::card::CardInputState,
    result: Option<models::payment::PaymentResult>,
}

impl<'a> CheckoutFlow<'a> {
    /// Fresh flow in `Editing` state for the given display `amount`.
    ///
    /// `tokenizer` is optional to model a gateway that has not finished
    /// loading (or was never configured): in that case submissions are
    /// rejected before any network traffic.
    pub fn new(
        tokenizer: Option<&'a services::ImplCardTokenizer>,
        charge_api: &'a services::ImplChargeApi,
        amount: Decimal,
    ) -> Self {
        Self {
            tokenizer,
            charge_api,
            amount,
            state: CheckoutState::default(),
            billing: models::billing::BillingDetails::default(),
            card: models::card::CardDetails::default(),
            card_input: models::card::CardInputState::default(),
            result: None,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn billing(&self) -> &models::billing::BillingDetails {
        &self.billing
    }

    pub fn card_input(&self) -> &models::card::CardInputState {
        &self.card_input
    }

    pub fn result(&self) -> Option<&models::payment::PaymentResult> {
        self.result.as_ref()
    }

    pub fn edit_billing(&mut self, billing: models::billing::BillingDetails) {
        self.billing = billing;
    }

    pub fn edit_card(
        &mut self,
        card: models::card::CardDetails,
        input_state: models::card::CardInputState,
    ) {
        self.card = card;
        self.card_input = input_state;
    }

    /// Runs one submission attempt.
    ///
    /// Local rejections (`GatewayNotReady`, `FocusCardField`) leave the
    /// flow in `Editing` and make no network call. Otherwise the flow
    /// moves to `Submitting`, requests a card token, and only after the
    /// token resolves posts exactly one charge with the amount in minor
    /// units. Any failure lands in `Failed` with the provided message.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(tokenizer) = self.tokenizer else {
            return SubmitOutcome::GatewayNotReady;
        };

        if self.card_input.has_error || !self.card_input.is_complete {
            return SubmitOutcome::FocusCardField;
        }

        self.state = CheckoutState::Submitting;
        self.result = None;

        let token = match tokenizer.create_card_token(&self.card, &self.billing).await {
            Ok(token) => token,
            Err(err) => {
                // tokenization failed: surface it, attempt no charge
                error!("tokenization failed: {err:#}");
                self.fail(None, err.to_string());
                return SubmitOutcome::Settled;
            }
        };

        let request = models::gateway::ChargeRequest {
            id: token.clone(),
            amount: utils::to_minor_units(self.amount),
        };

        let response = match self.charge_api.create_charge(&request).await {
            Ok(response) => response,
            Err(err) => {
                error!("charge request failed: {err:#}");
                self.fail(Some(token), err.to_string());
                return SubmitOutcome::Settled;
            }
        };

        if !response.status {
            let message = response
                .message
                .unwrap_or_else(|| "the payment was declined".to_string());
            self.fail(Some(token), message);
            return SubmitOutcome::Settled;
        }

        let (charge_id, amount, description) = match response.payment {
            Some(payment) => (
                Some(payment.id),
                utils::from_minor_units(payment.amount),
                payment.description,
            ),
            None => (None, self.amount, None),
        };

        info!(
            "charge settled: {id} for {amount}",
            id = charge_id.as_deref().unwrap_or("<no id>")
        );
        self.state = CheckoutState::Succeeded;
        self.result = Some(models::payment::PaymentResult::settled(
            token,
            charge_id,
            amount,
            description,
        ));

        SubmitOutcome::Settled
    }

    /// Clears all transient state and returns to `Editing`.
    pub fn reset(&mut self) {
        self.state = CheckoutState::Editing;
        self.billing = models::billing::BillingDetails::default();
        self.card = models::card::CardDetails::default();
        self.card_input = models::card::CardInputState::default();
        self.result = None;
    }

    fn fail(&mut self, token_id: Option<String>, message: String) {
        self.state = CheckoutState::Failed;
        self.result = Some(models::payment::PaymentResult::failed(
            token_id,
            self.amount,
            message,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MockCardTokenizer, MockChargeApi};
    use mockall::Sequence;
    use rust_decimal_macros::dec;

    fn boxed_tokenizer(mock: MockCardTokenizer) -> services::ImplCardTokenizer {
        Box::new(mock)
    }

    fn boxed_charge_api(mock: MockChargeApi) -> services::ImplChargeApi {
        Box::new(mock)
    }

    fn complete_card() -> (models::card::CardDetails, models::card::CardInputState) {
        (
            models::card::CardDetails {
                number: "4242424242424242".into(),
                exp_month: 11,
                exp_year: 2031,
                cvc: "314".into(),
            },
            models::card::CardInputState::complete(),
        )
    }

    fn test_billing() -> models::billing::BillingDetails {
        models::billing::BillingDetails {
            name: "Carlos Santander".into(),
            email: "carlos@example.com".into(),
            phone: "33 1104 1656".into(),
        }
    }

    fn success_response(charge_id: &str, amount: u64) -> models::gateway::ChargeResponse {
        models::gateway::ChargeResponse {
            status: true,
            payment: Some(models::gateway::ChargePayment {
                id: charge_id.to_string(),
                amount,
                description: Some("order 42".into()),
            }),
            message: None,
        }
    }

    #[ntex::test]
    async fn test_submit_is_noop_without_tokenizer() {
        // no expectations set: any call on the charge api would panic
        let charge_api = boxed_charge_api(MockChargeApi::new());

        let mut flow = CheckoutFlow::new(None, &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);

        let outcome = flow.submit().await;

        assert_eq!(outcome, SubmitOutcome::GatewayNotReady);
        assert_eq!(flow.state(), &CheckoutState::Editing);
        assert!(flow.result().is_none());
    }

    #[ntex::test]
    async fn test_submit_blocked_by_card_error() {
        let tokenizer = boxed_tokenizer(MockCardTokenizer::new());
        let charge_api = boxed_charge_api(MockChargeApi::new());

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        let (card, _) = complete_card();
        flow.edit_card(
            card,
            models::card::CardInputState::invalid("card number looks invalid"),
        );

        let outcome = flow.submit().await;

        assert_eq!(outcome, SubmitOutcome::FocusCardField);
        assert_eq!(flow.state(), &CheckoutState::Editing);
        assert!(flow.result().is_none());
    }

    #[ntex::test]
    async fn test_submit_blocked_by_incomplete_card() {
        let tokenizer = boxed_tokenizer(MockCardTokenizer::new());
        let charge_api = boxed_charge_api(MockChargeApi::new());

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        let (card, _) = complete_card();
        flow.edit_card(card, models::card::CardInputState::default());

        assert_eq!(flow.submit().await, SubmitOutcome::FocusCardField);
        assert_eq!(flow.state(), &CheckoutState::Editing);
    }

    #[ntex::test]
    async fn test_tokenization_failure_attempts_no_charge() {
        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("Your card number is invalid.")));
        let tokenizer = boxed_tokenizer(tokenizer);

        // charge mock without expectations panics if touched
        let charge_api = boxed_charge_api(MockChargeApi::new());

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);

        let outcome = flow.submit().await;

        assert_eq!(outcome, SubmitOutcome::Settled);
        assert_eq!(flow.state(), &CheckoutState::Failed);

        let result = flow.result().unwrap();
        assert!(!result.succeeded);
        assert!(result.token_id.is_none() && result.charge_id.is_none());
        assert_eq!(
            result.failure_message.as_deref(),
            Some("Your card number is invalid.")
        );
    }

    #[ntex::test]
    async fn test_charge_carries_amount_in_minor_units() {
        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .times(1)
            .returning(|_, _| Ok("tok_visa".to_string()));
        let tokenizer = boxed_tokenizer(tokenizer);

        let mut charge_api = MockChargeApi::new();
        charge_api
            .expect_create_charge()
            .withf(|request| request.id == "tok_visa" && request.amount == 280_000)
            .times(1)
            .returning(|_| Ok(success_response("ch_1FtCCS", 280_000)));
        let charge_api = boxed_charge_api(charge_api);

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);

        assert_eq!(flow.submit().await, SubmitOutcome::Settled);
        assert_eq!(flow.state(), &CheckoutState::Succeeded);
    }

    #[ntex::test]
    async fn test_charge_follows_tokenization() {
        let mut sequence = Sequence::new();

        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok("tok_visa".to_string()));
        let tokenizer = boxed_tokenizer(tokenizer);

        let mut charge_api = MockChargeApi::new();
        charge_api
            .expect_create_charge()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(success_response("ch_1FtCCS", 280_000)));
        let charge_api = boxed_charge_api(charge_api);

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);

        assert_eq!(flow.submit().await, SubmitOutcome::Settled);
    }

    #[ntex::test]
    async fn test_successful_charge_stores_payment_details() {
        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .returning(|_, _| Ok("tok_visa".to_string()));
        let tokenizer = boxed_tokenizer(tokenizer);

        let mut charge_api = MockChargeApi::new();
        charge_api
            .expect_create_charge()
            .returning(|_| Ok(success_response("ch_1FtCCS", 280_000)));
        let charge_api = boxed_charge_api(charge_api);

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);
        flow.submit().await;

        let result = flow.result().unwrap();
        assert!(result.succeeded);
        assert_eq!(result.token_id.as_deref(), Some("tok_visa"));
        assert_eq!(result.charge_id.as_deref(), Some("ch_1FtCCS"));
        assert_eq!(result.amount, dec!(2800.00));
        assert_eq!(result.description.as_deref(), Some("order 42"));
        assert!(result.failure_message.is_none());
    }

    #[ntex::test]
    async fn test_declined_charge_never_succeeds() {
        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .returning(|_, _| Ok("tok_visa".to_string()));
        let tokenizer = boxed_tokenizer(tokenizer);

        let mut charge_api = MockChargeApi::new();
        charge_api.expect_create_charge().returning(|_| {
            Ok(models::gateway::ChargeResponse {
                status: false,
                payment: None,
                message: Some("insufficient funds".into()),
            })
        });
        let charge_api = boxed_charge_api(charge_api);

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);
        flow.submit().await;

        assert_eq!(flow.state(), &CheckoutState::Failed);

        let result = flow.result().unwrap();
        assert!(!result.succeeded);
        assert_eq!(result.failure_message.as_deref(), Some("insufficient funds"));
        assert_eq!(result.token_id.as_deref(), Some("tok_visa"));
        assert!(result.charge_id.is_none());
    }

    #[ntex::test]
    async fn test_charge_transport_failure_lands_in_failed() {
        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .returning(|_, _| Ok("tok_visa".to_string()));
        let tokenizer = boxed_tokenizer(tokenizer);

        let mut charge_api = MockChargeApi::new();
        charge_api
            .expect_create_charge()
            .returning(|_| Err(anyhow::anyhow!("charge endpoint is unreachable")));
        let charge_api = boxed_charge_api(charge_api);

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);
        flow.submit().await;

        assert_eq!(flow.state(), &CheckoutState::Failed);
        assert!(flow.result().is_some_and(|r| !r.succeeded));
    }

    #[ntex::test]
    async fn test_reset_clears_billing_and_result() {
        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .returning(|_, _| Err(anyhow::anyhow!("gateway timeout")));
        let tokenizer = boxed_tokenizer(tokenizer);
        let charge_api = boxed_charge_api(MockChargeApi::new());

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card, input_state);
        flow.submit().await;

        assert_eq!(flow.state(), &CheckoutState::Failed);

        flow.reset();

        assert_eq!(flow.state(), &CheckoutState::Editing);
        assert!(flow.billing().is_empty());
        assert_eq!(flow.card_input(), &models::card::CardInputState::default());
        assert!(flow.result().is_none());
    }

    #[ntex::test]
    async fn test_new_attempt_replaces_previous_result() {
        let mut tokenizer = MockCardTokenizer::new();
        tokenizer
            .expect_create_card_token()
            .times(2)
            .returning(|_, _| Ok("tok_visa".to_string()));
        let tokenizer = boxed_tokenizer(tokenizer);

        let mut charge_api = MockChargeApi::new();
        let mut responses = vec![
            Ok(success_response("ch_2", 280_000)),
            Err(anyhow::anyhow!("charge endpoint is unreachable")),
        ];
        charge_api
            .expect_create_charge()
            .times(2)
            .returning(move |_| responses.pop().expect("two charge calls expected"));
        let charge_api = boxed_charge_api(charge_api);

        let mut flow = CheckoutFlow::new(Some(&tokenizer), &charge_api, dec!(2800.00));
        flow.edit_billing(test_billing());
        let (card, input_state) = complete_card();
        flow.edit_card(card.clone(), input_state.clone());

        flow.submit().await;
        assert_eq!(flow.state(), &CheckoutState::Failed);

        flow.reset();
        flow.edit_billing(test_billing());
        flow.edit_card(card, input_state);
        flow.submit().await;

        assert_eq!(flow.state(), &CheckoutState::Succeeded);
        assert!(flow.result().is_some_and(|r| r.succeeded));
    }
}
