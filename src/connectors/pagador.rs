// Pagador Connector Implementation

pub mod constants;
pub mod transformers;

use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};

use self::{
    constants::PagadorOperation,
    transformers::{PagadorAuthType, PagadorConfig},
};
use crate::{
    errors::{ConnectorError, CustomResult},
    request::{Method, Request, RequestContent},
    transport::HttpTransport,
    types::{Card, ConnectorDefaults, Environment, MinorUnit, PaymentOptions, PaymentOutcome},
};

/// Adapter for the Pagador XML-over-HTTP webservice. Stateless across
/// calls; credentials are immutable after construction, so one instance
/// is safe to share wherever the transport is.
#[derive(Debug, Clone)]
pub struct Pagador<C> {
    merchant_id: Secret<String>,
    environment: Environment,
    transport: C,
}

impl<C: HttpTransport> Pagador<C> {
    pub fn new(
        config: PagadorConfig,
        defaults: &ConnectorDefaults,
        transport: C,
    ) -> CustomResult<Self, ConnectorError> {
        let auth = PagadorAuthType::try_from(&config)?;
        Ok(Self {
            merchant_id: auth.merchant_id,
            environment: config.environment.unwrap_or(defaults.environment),
            transport,
        })
    }

    pub fn id(&self) -> &'static str {
        "pagador"
    }

    pub fn common_get_content_type(&self) -> &'static str {
        "application/x-www-form-urlencoded"
    }

    pub fn base_url(&self) -> &'static str {
        constants::get_base_url(self.environment)
    }

    fn build_url(&self, operation: PagadorOperation) -> String {
        format!("{}/{}", self.base_url(), constants::get_endpoint(operation))
    }

    /// Authorizes `amount` against `card`. Requires an order id in the
    /// options; its absence fails before any network activity.
    pub fn authorize(
        &self,
        amount: MinorUnit,
        card: &Card,
        options: &PaymentOptions,
    ) -> CustomResult<PaymentOutcome, ConnectorError> {
        let order_id = options.require_order_id()?.to_owned();

        let mut payload = transformers::invoice_fields(&order_id);
        payload.extend(transformers::amount_fields(amount)?);
        payload.extend(transformers::card_fields(card)?);
        payload.extend(transformers::customer_fields(card));
        payload.extend(transformers::extra_fields());

        self.commit(PagadorOperation::Authorize, order_id, payload)
    }

    /// Captures a previously authorized transaction. A failed prior
    /// outcome is returned unchanged without touching the network. The
    /// capture call carries no amount on the wire; the service settles
    /// the full authorized value.
    pub fn capture(
        &self,
        _amount: MinorUnit,
        prior: PaymentOutcome,
        options: &PaymentOptions,
    ) -> CustomResult<PaymentOutcome, ConnectorError> {
        if !prior.is_success() {
            return Ok(prior);
        }
        let order_id = options.require_order_id()?.to_owned();
        let payload = transformers::invoice_fields(&order_id);
        self.commit(PagadorOperation::Capture, order_id, payload)
    }

    /// Authorize followed by capture with the same arguments. A failed
    /// authorize is returned as-is; capture's network path is never
    /// reached.
    pub fn purchase(
        &self,
        amount: MinorUnit,
        card: &Card,
        options: &PaymentOptions,
    ) -> CustomResult<PaymentOutcome, ConnectorError> {
        let authorized = self.authorize(amount, card, options)?;
        self.capture(amount, authorized, options)
    }

    /// Voids a prior transaction, carrying only the order id. Same
    /// short-circuit as capture on a failed prior outcome.
    pub fn void(
        &self,
        prior: PaymentOutcome,
        options: &PaymentOptions,
    ) -> CustomResult<PaymentOutcome, ConnectorError> {
        if !prior.is_success() {
            return Ok(prior);
        }
        let order_id = options.require_order_id()?.to_owned();
        let payload = transformers::invoice_fields(&order_id);
        self.commit(PagadorOperation::Void, order_id, payload)
    }

    /// Injects the merchant id, posts the form payload and normalizes the
    /// response. Exactly one outbound call.
    fn commit(
        &self,
        operation: PagadorOperation,
        order_id: String,
        mut payload: Vec<(&'static str, String)>,
    ) -> CustomResult<PaymentOutcome, ConnectorError> {
        payload.push((
            transformers::MERCHANT_ID_FIELD,
            self.merchant_id.peek().clone(),
        ));

        let url = self.build_url(operation);
        let mut request = Request::new(Method::Post, &url);
        request.set_body(RequestContent::FormUrlEncoded(payload));

        tracing::debug!(connector = self.id(), %operation, "dispatching payment operation");

        let response = self
            .transport
            .send(request)
            .change_context(ConnectorError::ProcessingStepFailed)?;

        let fields = transformers::flatten_return_document(
            &response.response,
            constants::get_root_element(operation),
        );
        if fields.is_empty() {
            tracing::debug!(connector = self.id(), %operation, "response document had no usable root element");
        }

        Ok(transformers::build_outcome(order_id, fields))
    }
}
