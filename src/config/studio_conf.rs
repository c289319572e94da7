use std::env;
use tracing::info;

/// Studio identity and service-area settings shared by the page renderer
/// and the order pipeline.
///
/// Built once at startup and passed to the components that need it; nothing
/// here lives in module-level globals.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Display name used in page headers and the order email subject.
    pub name: String,
    /// Human-readable studio address shown on informational pages.
    pub location: String,
    /// District within which online orders are accepted.
    pub service_area: String,
    /// Common alternate spelling of the service area, accepted as well.
    pub service_area_alt: String,
    /// Operator inbox that receives every order email.
    pub order_inbox: String,
}

impl StudioConfig {
    pub fn from_env() -> Self {
        let name = env::var("STUDIO_NAME").unwrap_or_else(|_| "National Digital Studio".to_string());
        let location = env::var("STUDIO_LOCATION")
            .unwrap_or_else(|_| "Kunnamangalam, Kozhikode, Kerala".to_string());
        let service_area = env::var("SERVICE_AREA").unwrap_or_else(|_| "Kozhikode".to_string());
        let service_area_alt = env::var("SERVICE_AREA_ALT").unwrap_or_else(|_| "Calicut".to_string());
        let order_inbox =
            env::var("ORDER_INBOX").unwrap_or_else(|_| "thedeveloupershibin@gmail.com".to_string());

        info!("Studio configuration loaded: {} ({})", name, location);
        StudioConfig {
            name,
            location,
            service_area,
            service_area_alt,
            order_inbox,
        }
    }

    /// Informational note shown on every page and repeated in order emails.
    pub fn service_area_note(&self) -> String {
        format!(
            "Online orders currently available only within {} district.",
            self.service_area
        )
    }

    /// Message shown when an order's city fails the service-area check.
    pub fn service_area_rejection(&self) -> String {
        format!(
            "Online orders are currently available only within {} district. \
             Please enter a {} address or contact us directly.",
            self.service_area, self.service_area
        )
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            name: "National Digital Studio".to_string(),
            location: "Kunnamangalam, Kozhikode, Kerala".to_string(),
            service_area: "Kozhikode".to_string(),
            service_area_alt: "Calicut".to_string(),
            order_inbox: "thedeveloupershibin@gmail.com".to_string(),
        }
    }
}
