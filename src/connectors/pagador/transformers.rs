use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};
use quick_xml::{events::Event, Reader};
use rust_decimal::{prelude::FromPrimitive, Decimal};

use super::constants;
use crate::{
    errors::{ConnectorError, CustomResult, ParsingError},
    types::{
        AmountConvertor, Card, Currency, Environment, MinorUnit, PaymentOutcome, ResponseFields,
        StringMajorUnit,
    },
};

/// Field name of the merchant identifier injected at send time.
pub(crate) const MERCHANT_ID_FIELD: &str = "merchantId";

// Construction-time configuration
#[derive(Debug, Clone)]
pub struct PagadorConfig {
    pub merchant_id: Secret<String>,
    /// Falls back to the injected environment default when absent.
    pub environment: Option<Environment>,
}

// Authentication Type Definition
#[derive(Debug, Clone)]
pub struct PagadorAuthType {
    pub merchant_id: Secret<String>,
}

impl TryFrom<&PagadorConfig> for PagadorAuthType {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(config: &PagadorConfig) -> Result<Self, Self::Error> {
        if config.merchant_id.peek().trim().is_empty() {
            return Err(ConnectorError::FailedToObtainAuthType.into());
        }
        Ok(Self {
            merchant_id: config.merchant_id.clone(),
        })
    }
}

/// Major-unit wire format used by the service: truncating integer
/// division by 100 with a decimal comma. Cents are discarded, so the
/// fraction is always `,00` (1500 -> "15,00", 99 -> "0,00").
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PagadorStringMajorUnit;

impl AmountConvertor for PagadorStringMajorUnit {
    type Output = StringMajorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        _currency: Currency,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>> {
        let amount_decimal = Decimal::from_i64(amount.get_amount_as_i64())
            .ok_or(ParsingError::I64ToDecimalConversionFailure)?;
        let major = (amount_decimal / Decimal::from(100)).trunc();
        Ok(StringMajorUnit::new(format!("{major},00")))
    }
}

// Payload builders. Each concern contributes its own ordered slice of
// (name, value) pairs; callers concatenate before serialization.

pub(crate) fn invoice_fields(order_id: &str) -> Vec<(&'static str, String)> {
    vec![("orderId", order_id.to_owned())]
}

pub(crate) fn amount_fields(
    amount: MinorUnit,
) -> CustomResult<Vec<(&'static str, String)>, ConnectorError> {
    let wire_amount = PagadorStringMajorUnit
        .convert(amount, Currency::BRL)
        .change_context(ConnectorError::AmountConversionFailed)?;
    Ok(vec![("amount", wire_amount.get_amount_as_string().to_owned())])
}

pub(crate) fn card_fields(
    card: &Card,
) -> CustomResult<Vec<(&'static str, String)>, ConnectorError> {
    let processor_code = constants::processor_code(card.card_network).unwrap_or_default();
    let expiration = card.expiry_mm_yy()?;
    Ok(vec![
        ("paymentMethod", processor_code.to_owned()),
        ("holder", card.card_holder_name.peek().clone()),
        ("cardNumber", card.card_number.peek().clone()),
        ("expiration", expiration.peek().clone()),
        ("securityCode", card.card_cvc.peek().clone()),
    ])
}

pub(crate) fn customer_fields(card: &Card) -> Vec<(&'static str, String)> {
    vec![("customerName", card.card_holder_name.peek().clone())]
}

pub(crate) fn extra_fields() -> Vec<(&'static str, String)> {
    vec![
        ("numberPayments", constants::NUMBER_PAYMENTS.to_owned()),
        ("typePayment", constants::TYPE_PAYMENT.to_owned()),
    ]
}

/// Flattens the immediate children of the expected root element into a
/// field mapping keyed by element local name. Namespaces are ignored; a
/// malformed or rootless document flattens to an empty mapping, never a
/// hard error.
pub(crate) fn flatten_return_document(body: &[u8], root: &str) -> ResponseFields {
    let text = match std::str::from_utf8(body) {
        Ok(text) => text,
        Err(_) => return ResponseFields::default(),
    };
    let mut reader = Reader::from_str(text);

    let mut fields = Vec::new();
    let mut in_root = false;
    let mut current: Option<String> = None;
    let mut value = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                if !in_root {
                    if name == root {
                        in_root = true;
                    }
                } else if current.is_none() {
                    current = Some(name);
                    value.clear();
                }
                // nesting below an immediate child is not part of the schema
            }
            Ok(Event::Empty(element)) => {
                if in_root && current.is_none() {
                    let name =
                        String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                    fields.push((name, String::new()));
                }
            }
            Ok(Event::Text(text)) => {
                if current.is_some() {
                    if let Ok(unescaped) = text.unescape() {
                        value.push_str(&unescaped);
                    }
                }
            }
            Ok(Event::End(element)) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                match &current {
                    Some(field) if *field == name => {
                        fields.push((field.clone(), value.trim().to_owned()));
                        current = None;
                        value.clear();
                    }
                    None if in_root && name == root => break,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            // an unparseable document flattens to nothing; fields seen
            // before the error must not leak into the outcome
            Err(_) => return ResponseFields::default(),
            Ok(_) => {}
        }
    }

    ResponseFields::new(fields)
}

/// Evaluates the service status and builds the normalized outcome. The
/// status codes "0" and "1" are the service's opaque success set; the
/// order id is echoed from the outbound payload, not read back from the
/// response.
pub(crate) fn build_outcome(order_id: String, fields: ResponseFields) -> PaymentOutcome {
    let success = matches!(fields.get("status"), Some("0") | Some("1"));
    let message = fields.get("message").unwrap_or_default().to_owned();
    if success {
        PaymentOutcome::Succeeded {
            authorization: fields.get("authorisationNumber").map(str::to_owned),
            order_id,
            message,
            fields,
        }
    } else {
        PaymentOutcome::Failed {
            order_id,
            message,
            fields,
        }
    }
}
