//! Lead form submission
//!
//! The form has exactly one transition: `Editing -> Submitted`. Submitting
//! freezes the contact and the estimate the visitor was looking at, formats
//! the lead message and produces the WhatsApp link the page navigates to.
//! Nothing is retried or stored.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::estimator::EstimatorOutput;
use crate::handoff::HandOff;
use crate::lead::{format_lead_message, LeadContact};

/// Shown to the visitor once the form is sent
pub const ACKNOWLEDGMENT: &str = "¡Gracias! Hemos recibido tu solicitud. Te contactaremos a la brevedad.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

impl FormPhase {
    /// Move to `Submitted`. Returns false if the form was already sent.
    pub fn submit(&mut self) -> bool {
        match self {
            FormPhase::Editing => {
                *self = FormPhase::Submitted;
                true
            }
            FormPhase::Submitted => false,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, FormPhase::Submitted)
    }
}

/// Snapshot taken at submit time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub contact: LeadContact,
    pub monthly_spend: u32,
    pub estimate: EstimatorOutput,
    pub message: String,
    pub whatsapp_link: String,
}

impl LeadSubmission {
    pub fn capture(contact: LeadContact, monthly_spend: u32, estimate: EstimatorOutput, handoff: &HandOff) -> Self {
        let message = format_lead_message(&contact, monthly_spend, &estimate);
        let whatsapp_link = handoff.whatsapp_link(&message);

        info!(
            name = %contact.name,
            property_type = %contact.property_type,
            monthly_spend,
            system_size_kwp = estimate.system_size_kwp,
            "Lead captured"
        );

        Self {
            contact,
            monthly_spend,
            estimate,
            message,
            whatsapp_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusinessConfig;
    use crate::estimator::estimate;
    use crate::lead::PropertyType;

    #[test]
    fn test_single_transition() {
        let mut phase = FormPhase::default();
        assert!(!phase.is_submitted());
        assert!(phase.submit());
        assert!(phase.is_submitted());
        assert!(!phase.submit());
        assert_eq!(phase, FormPhase::Submitted);
    }

    #[test]
    fn test_capture_links_the_formatted_message() {
        let handoff = HandOff::new(&BusinessConfig::default()).unwrap();
        let contact = LeadContact {
            name: "Taller López".to_string(),
            email: "taller@example.com".to_string(),
            phone: "3300000000".to_string(),
            neighborhood: String::new(),
            property_type: PropertyType::Negocio,
        };
        let submission = LeadSubmission::capture(contact, 2400, estimate(2400.0), &handoff);

        assert!(submission.message.contains("[colonia]"));
        assert!(submission.message.contains("Pago ~$2400 al mes"));
        assert_eq!(
            HandOff::message_from_link(&submission.whatsapp_link).unwrap(),
            Some(submission.message.clone())
        );
    }

    #[test]
    fn test_submission_serializes() {
        let handoff = HandOff::new(&BusinessConfig::default()).unwrap();
        let submission = LeadSubmission::capture(LeadContact::default(), 1200, estimate(1200.0), &handoff);
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["monthly_spend"], 1200);
        assert_eq!(json["estimate"]["payback_months"], 71);
        assert_eq!(json["contact"]["property_type"], "Casa");
    }
}
