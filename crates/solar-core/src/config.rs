//! Business configuration

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Contact block for the business; built once at startup and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessConfig {
    pub business_name: String,
    /// International format, used for WhatsApp (`+523312345678`)
    pub phone: String,
    /// Local format shown to visitors (`33 1234 5678`)
    pub phone_display: String,
    pub email: String,
    pub privacy_policy_url: String,
    /// Service area, e.g. "Guadalajara, Zapopan y alrededores"
    pub coverage: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            business_name: "Energía Solar GDL".to_string(),
            phone: "+523312345678".to_string(),
            phone_display: "33 1234 5678".to_string(),
            email: "ventas@energiasolargdl.mx".to_string(),
            privacy_policy_url: "https://tu-dominio.com/aviso-de-privacidad".to_string(),
            coverage: "Guadalajara, Zapopan y alrededores".to_string(),
        }
    }
}

impl BusinessConfig {
    /// Phone with every non-digit stripped, as WhatsApp expects it
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Check the fields the page cannot render without
    pub fn validate(&self) -> CoreResult<()> {
        if self.business_name.trim().is_empty() {
            return Err(CoreError::Config("business name is empty".to_string()));
        }
        if self.phone_digits().is_empty() {
            return Err(CoreError::Config(format!("phone {:?} has no digits", self.phone)));
        }
        if !self.email.contains('@') {
            return Err(CoreError::Config(format!("email {:?} is not an address", self.email)));
        }
        url::Url::parse(&self.privacy_policy_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_digits() {
        let config = BusinessConfig {
            phone: "+52 (33) 1234-5678".to_string(),
            ..Default::default()
        };
        assert_eq!(config.phone_digits(), "523312345678");
        assert_eq!(BusinessConfig::default().phone_digits(), "523312345678");
    }

    #[test]
    fn test_validate_rejects_phone_without_digits() {
        let config = BusinessConfig {
            phone: "call us".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_privacy_url() {
        let config = BusinessConfig {
            privacy_policy_url: "aviso-de-privacidad".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Url(_))));
    }

    #[test]
    fn test_config_deserializes() {
        let json = r#"{
            "business_name": "Sol Norte",
            "phone": "+52 81 0000 1111",
            "phone_display": "81 0000 1111",
            "email": "hola@solnorte.mx",
            "privacy_policy_url": "https://solnorte.mx/privacidad",
            "coverage": "Monterrey"
        }"#;
        let config: BusinessConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.phone_digits(), "528100001111");
    }
}
