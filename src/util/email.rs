use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, instrument};

use crate::config::{ConfigError, EmailConfig, StudioConfig};
use crate::dto::order_dto::UploadedFile;
use crate::model::order::OrderSummary;

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("SMTP error: {0}")]
    SmtpError(String),

    #[error("Message building error: {0}")]
    MessageError(String),

    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// Sends the order email for one submission. The SMTP implementation is the
/// only one in production; tests substitute recording/failing doubles.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn send_order_email(
        &self,
        summary: &OrderSummary,
        files: &[UploadedFile],
    ) -> Result<(), EmailError>;
}

/// SMTP order notifier: composes one MIME multipart message per order and
/// transmits it to the studio inbox over a STARTTLS connection.
pub struct SmtpOrderNotifier {
    config: EmailConfig,
    studio: StudioConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpOrderNotifier {
    #[instrument(skip(config, studio), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig, studio: StudioConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP order notifier");

        config.validate().map_err(EmailError::from)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(std::time::Duration::from_secs(
                    config.connection_timeout_secs,
                )));

        if config.use_starttls {
            let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;
            transport_builder = transport_builder.tls(Tls::Required(tls_parameters));
        } else {
            transport_builder = transport_builder.tls(Tls::None);
        }

        let credentials = Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());
        let transport = transport_builder.credentials(credentials).build();

        info!("SMTP order notifier initialized successfully");
        Ok(Self {
            config,
            studio,
            transport,
        })
    }

    /// Plain-text body enumerating product and customer details, ending
    /// with the fixed service-area reminder.
    pub fn order_body(&self, summary: &OrderSummary) -> String {
        format!(
            r#"New order from {studio} website:

Product:
    Name   : {product_name}
    ID     : {product_id}
    Price  : {product_price} {product_unit}
    Quantity: {quantity}

Customer Details:
    Name       : {name}
    Email      : {email}
    Phone      : {phone}
    Address    : {address_line1}
                 {address_line2}
    Locality   : {locality}
    City       : {city}
    Pincode    : {pincode}
    Delivery   : {delivery_method}

Custom Notes / Instructions:
    {notes}

NOTE: Online orders are meant for {service_area} district only.
"#,
            studio = self.studio.name,
            product_name = summary.product_name,
            product_id = summary.product_id,
            product_price = summary.product_price,
            product_unit = summary.product_unit,
            quantity = summary.quantity,
            name = summary.name,
            email = summary.email,
            phone = summary.phone,
            address_line1 = summary.address_line1,
            address_line2 = summary.address_line2,
            locality = summary.locality,
            city = summary.city,
            pincode = summary.pincode,
            delivery_method = summary.delivery_method,
            notes = summary.notes,
            service_area = self.studio.service_area,
        )
    }

    /// Compose the full MIME message: plain-text body plus one binary
    /// attachment per uploaded file with a non-empty filename. Files with
    /// an empty filename are skipped.
    pub fn build_order_message(
        &self,
        summary: &OrderSummary,
        files: &[UploadedFile],
    ) -> Result<Message, EmailError> {
        let from_mailbox: Mailbox = self
            .config
            .smtp_user
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = self
            .studio
            .order_inbox
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid to address: {}", e)))?;

        let subject = format!(
            "New Online Order – {} from {} website",
            summary.product_name, self.studio.name
        );

        let mut multipart = MultiPart::mixed().singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_PLAIN)
                .body(self.order_body(summary)),
        );

        for file in files {
            if file.filename.is_empty() {
                continue;
            }
            let content_type = ContentType::parse("application/octet-stream")
                .map_err(|e| EmailError::MessageError(format!("Invalid content type: {}", e)))?;
            multipart = multipart.singlepart(
                Attachment::new(file.filename.clone()).body(file.content.clone(), content_type),
            );
        }

        Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(multipart)
            .map_err(|e| EmailError::MessageError(format!("Failed to build order message: {}", e)))
    }
}

#[async_trait]
impl OrderNotifier for SmtpOrderNotifier {
    #[instrument(skip(self, summary, files), fields(product = %summary.product_id, attachments = files.len()))]
    async fn send_order_email(
        &self,
        summary: &OrderSummary,
        files: &[UploadedFile],
    ) -> Result<(), EmailError> {
        info!("Sending order email to: {}", self.studio.order_inbox);

        let message = self.build_order_message(summary, files)?;

        self.transport.send(message).await.map_err(|e| {
            error!("Failed to send order email: {}", e);
            EmailError::SmtpError(format!("Failed to send order email: {}", e))
        })?;

        info!("Order email sent successfully");
        Ok(())
    }
}
