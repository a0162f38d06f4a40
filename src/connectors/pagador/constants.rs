use crate::types::{CardBrand, Currency, Environment};

pub const SUPPORTED_CURRENCIES: &[Currency] = &[Currency::BRL];

pub const TEST_BASE_URL: &str = "https://homologacao.pagador.com.br/webservice/pagador.asmx";
pub const LIVE_BASE_URL: &str = "https://www.pagador.com.br/webservice/pagador.asmx";

// Fixed extras appended to every payment payload
pub const NUMBER_PAYMENTS: &str = "1";
pub const TYPE_PAYMENT: &str = "0";

/// Operations exposed by the Pagador webservice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PagadorOperation {
    Authorize,
    Capture,
    Void,
}

pub fn get_base_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Test => TEST_BASE_URL,
        Environment::Live => LIVE_BASE_URL,
    }
}

/// Path suffix appended to the base URL, PascalCase as published by the
/// service.
pub fn get_endpoint(operation: PagadorOperation) -> &'static str {
    match operation {
        PagadorOperation::Authorize => "Authorize",
        PagadorOperation::Capture => "Capture",
        PagadorOperation::Void => "VoidTransaction",
    }
}

/// Root element of the response document. Void responses use a dedicated
/// root; every other operation shares one.
pub fn get_root_element(operation: PagadorOperation) -> &'static str {
    match operation {
        PagadorOperation::Authorize | PagadorOperation::Capture => "PagadorReturn",
        PagadorOperation::Void => "PagadorVoidReturn",
    }
}

/// Service-specific integer code identifying a card brand on the wire.
/// Brands outside the mapped set serialize as empty and are rejected by
/// the service, not validated locally.
pub fn processor_code(brand: CardBrand) -> Option<&'static str> {
    match brand {
        CardBrand::Visa => Some("22"),
        CardBrand::Mastercard => Some("23"),
        CardBrand::AmericanExpress => Some("18"),
        CardBrand::DinersClub | CardBrand::Elo | CardBrand::Hipercard => None,
    }
}
