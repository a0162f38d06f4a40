//! Domain types shared by the connector: amounts, card data, environments
//! and the per-call payment outcome.

use std::fmt::Display;

use hyperswitch_masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

use crate::errors::{ConnectorError, CustomResult, ParsingError};

/// Currencies the connector accepts. The service settles in a single
/// default currency.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum Currency {
    #[default]
    BRL,
}

/// Amount convertor trait for connector-specific wire formats.
pub trait AmountConvertor: Send {
    /// Output type required by the connector.
    type Output;
    /// Converts the core minor-unit amount into the connector type.
    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>>;
}

/// Amount in the smallest currency subdivision (e.g. cents).
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// Forms a new minor unit from amount.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Gets the amount as an i64 value.
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }

    /// Checks if the amount is greater than the given value.
    pub fn is_greater_than(&self, value: i64) -> bool {
        self.0 > value
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Major-unit amount already rendered in the connector's wire format.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringMajorUnit(String);

impl StringMajorUnit {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Gets the rendered amount string.
    pub fn get_amount_as_string(&self) -> &str {
        &self.0
    }
}

impl Display for StringMajorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card networks seen on inbound payment data. Only a subset carries a
/// processor code on the wire; the rest is rejected by the service itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum CardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    DinersClub,
    Elo,
    Hipercard,
}

/// Raw card data handed to the connector by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub card_number: Secret<String>,
    pub card_exp_month: Secret<String>,
    pub card_exp_year: Secret<String>,
    pub card_cvc: Secret<String>,
    pub card_holder_name: Secret<String>,
    pub card_network: CardBrand,
}

impl Card {
    /// Renders the expiry as the two-digit zero-padded `MM/YY` form the
    /// service expects.
    pub fn expiry_mm_yy(&self) -> CustomResult<Secret<String>, ConnectorError> {
        let month: u32 = self
            .card_exp_month
            .peek()
            .trim()
            .parse()
            .map_err(|_| ConnectorError::InvalidDataFormat {
                field_name: "card_exp_month",
            })?;
        let year: u32 = self
            .card_exp_year
            .peek()
            .trim()
            .parse()
            .map_err(|_| ConnectorError::InvalidDataFormat {
                field_name: "card_exp_year",
            })?;
        Ok(Secret::new(format!("{:02}/{:02}", month, year % 100)))
    }
}

/// Caller-supplied options correlating the calls of one logical
/// transaction.
#[derive(Clone, Debug, Default)]
pub struct PaymentOptions {
    /// Merchant-assigned identifier, unique per transaction. Required for
    /// invoice-bearing operations.
    pub order_id: Option<String>,
}

impl PaymentOptions {
    pub(crate) fn require_order_id(&self) -> CustomResult<&str, ConnectorError> {
        self.order_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                ConnectorError::MissingRequiredField {
                    field_name: "order_id",
                }
                .into()
            })
    }
}

/// Environment the connector points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Test,
    Live,
}

/// Defaults injected at construction for settings the caller left unset.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorDefaults {
    pub environment: Environment,
}

/// Flat field mapping parsed out of a service response document, keyed by
/// element local name. Order of appearance is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFields(Vec<(String, String)>);

impl ResponseFields {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self(fields)
    }

    /// Looks up the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Outcome of one connector call. Created per call, never persisted; the
/// caller carries it forward between authorize, capture and void.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Succeeded {
        /// Authorisation reference returned by the service, when present.
        authorization: Option<String>,
        /// Order id echoed back from the outbound payload.
        order_id: String,
        message: String,
        fields: ResponseFields,
    },
    Failed {
        order_id: String,
        message: String,
        fields: ResponseFields,
    },
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Succeeded { message, .. } | Self::Failed { message, .. } => message,
        }
    }

    pub fn order_id(&self) -> &str {
        match self {
            Self::Succeeded { order_id, .. } | Self::Failed { order_id, .. } => order_id,
        }
    }

    pub fn authorization(&self) -> Option<&str> {
        match self {
            Self::Succeeded { authorization, .. } => authorization.as_deref(),
            Self::Failed { .. } => None,
        }
    }

    /// Raw response fields preserved for caller inspection.
    pub fn fields(&self) -> &ResponseFields {
        match self {
            Self::Succeeded { fields, .. } | Self::Failed { fields, .. } => fields,
        }
    }
}
