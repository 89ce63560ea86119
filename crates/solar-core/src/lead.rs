//! Lead message formatting
//!
//! Builds the prefilled WhatsApp text from whatever the visitor typed.
//! Empty fields are replaced by bracketed placeholders so the message always
//! reads as a complete sentence the visitor can edit before sending.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::estimator::EstimatorOutput;

pub const NAME_PLACEHOLDER: &str = "[Tu nombre]";
pub const NEIGHBORHOOD_PLACEHOLDER: &str = "[colonia]";
pub const PHONE_PLACEHOLDER: &str = "[tel]";
pub const EMAIL_PLACEHOLDER: &str = "[email]";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    Casa,
    Negocio,
    Industria,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [PropertyType::Casa, PropertyType::Negocio, PropertyType::Industria];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Casa => "Casa",
            PropertyType::Negocio => "Negocio",
            PropertyType::Industria => "Industria",
        }
    }

    /// Read a `<select>` value; unknown values fall back to the default.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(label.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact fields as typed into the lead form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub neighborhood: String,
    pub property_type: PropertyType,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Prefilled message for a full lead
pub fn format_lead_message(contact: &LeadContact, monthly_spend: u32, output: &EstimatorOutput) -> String {
    format!(
        "Hola, soy {}. Me interesa una cotización de {} en {}. \
         Pago ~${} al mes de luz. Estimado de sistema: {} kWp, ahorro ~${}/mes. \
         Contacto: {} | {}",
        or_placeholder(&contact.name, NAME_PLACEHOLDER),
        contact.property_type,
        or_placeholder(&contact.neighborhood, NEIGHBORHOOD_PLACEHOLDER),
        monthly_spend,
        output.system_size_kwp,
        output.monthly_savings,
        or_placeholder(&contact.phone, PHONE_PLACEHOLDER),
        or_placeholder(&contact.email, EMAIL_PLACEHOLDER),
    )
}

/// Message behind the calculator's own WhatsApp button
pub fn quick_quote_message(monthly_spend: u32, output: &EstimatorOutput) -> String {
    format!(
        "Hola, quiero una cotización. Pago ~${}/mes, sistema estimado {} kWp.",
        monthly_spend, output.system_size_kwp
    )
}

/// Fixed texts for the WhatsApp links scattered around the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedMessage {
    /// Header button
    Quote,
    /// Contact block under the form
    ServicesInfo,
    /// Closing call to action
    Diagnosis,
    /// Footer link
    GeneralInfo,
}

impl CannedMessage {
    pub fn text(&self) -> &'static str {
        match self {
            CannedMessage::Quote => "Hola, deseo una cotización de energía solar.",
            CannedMessage::ServicesInfo => "Hola, quiero información de paneles/ calentadores/ mantenimiento.",
            CannedMessage::Diagnosis => "Hola, quiero agendar un diagnóstico sin costo.",
            CannedMessage::GeneralInfo => "Hola, deseo información.",
        }
    }
}
