//! Site-wide context shared by every component

use solar_core::{BusinessConfig, CoreResult, EstimatorConstants, HandOff};

/// Immutable configuration provided once as Leptos context
#[derive(Debug, Clone)]
pub struct Site {
    pub config: BusinessConfig,
    pub handoff: HandOff,
    pub constants: EstimatorConstants,
}

impl Site {
    pub fn new(config: BusinessConfig, constants: EstimatorConstants) -> CoreResult<Self> {
        config.validate()?;
        let handoff = HandOff::new(&config)?;
        Ok(Self {
            config,
            handoff,
            constants,
        })
    }

    /// The shipped business block with the default estimator assumptions
    pub fn load() -> CoreResult<Self> {
        Self::new(BusinessConfig::default(), EstimatorConstants::default())
    }

    pub fn whatsapp(&self, message: &str) -> String {
        self.handoff.whatsapp_link(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_core::CannedMessage;

    #[test]
    fn test_load_default_site() {
        let site = Site::load().unwrap();
        assert_eq!(site.config.business_name, "Energía Solar GDL");
        assert_eq!(site.handoff.mailto_link(), "mailto:ventas@energiasolargdl.mx");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = BusinessConfig {
            email: "ventas".to_string(),
            ..Default::default()
        };
        assert!(Site::new(config, EstimatorConstants::default()).is_err());
    }

    #[test]
    fn test_canned_link() {
        let site = Site::load().unwrap();
        let link = site.whatsapp(CannedMessage::GeneralInfo.text());
        assert_eq!(
            HandOff::message_from_link(&link).unwrap().as_deref(),
            Some("Hola, deseo información.")
        );
    }
}
