use gloo_net::http::Request;
use serde::Serialize;

use crate::config::{self, EmailJsConfig};

pub const MESSAGE_MAX_CHARS: usize = 2000;

#[derive(Debug, PartialEq)]
pub enum ContactError {
    NotConfigured,
    Validation(&'static str, &'static str),
    Network(String),
    Rejected { status: u16, body: String },
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::NotConfigured => write!(f, "Email service is not configured. Please contact us directly."),
            ContactError::Validation(field, reason) => write!(f, "{} {}", field, reason),
            ContactError::Network(msg) => write!(f, "Failed to send message: {}", msg),
            ContactError::Rejected { status, body } if body.is_empty() => {
                write!(f, "Failed to send message (status {})", status)
            }
            ContactError::Rejected { status, body } => {
                write!(f, "Failed to send message (status {}): {}", status, body)
            }
        }
    }
}

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub services: Vec<String>,
    pub message: String,
}

impl ContactForm {
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    pub fn message_chars(&self) -> usize {
        self.message.chars().count()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Validation("Name", "is required."));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::Validation("Email", "must be a valid address."));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Validation("Message", "is required."));
        }
        if self.message_chars() > MESSAGE_MAX_CHARS {
            return Err(ContactError::Validation("Message", "is too long (2000 characters max)."));
        }
        Ok(())
    }

    pub fn template_params(&self) -> TemplateParams {
        let or_dash = |s: String| if s.is_empty() { "—".to_string() } else { s };
        TemplateParams {
            from_name: self.name.trim().to_string(),
            from_email: self.email.trim().to_string(),
            company: or_dash(self.company.trim().to_string()),
            services: or_dash(self.services.join(", ")),
            message: self.message.trim().to_string(),
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
        }
        _ => false,
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub services: String,
    pub message: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams,
}

fn build_request(cfg: &EmailJsConfig, form: &ContactForm) -> Result<serde_json::Value, ContactError> {
    if !cfg.is_complete() {
        return Err(ContactError::NotConfigured);
    }
    form.validate()?;
    serde_json::to_value(SendRequest {
        service_id: cfg.service_id,
        template_id: cfg.template_id,
        user_id: cfg.public_key,
        template_params: form.template_params(),
    })
    .map_err(|e| ContactError::Network(e.to_string()))
}

/// Sends the form through EmailJS.
pub async fn send_contact(form: &ContactForm) -> Result<(), ContactError> {
    let body = build_request(&config::emailjs(), form)?;

    let response = Request::post(config::EMAILJS_ENDPOINT)
        .json(&body)
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        log::info!("Contact message sent");
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Alex Mercer".into(),
            email: "alex@example.com".into(),
            company: String::new(),
            services: vec![],
            message: "We need a new storefront.".into(),
        }
    }

    fn cfg() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "svc",
            template_id: "tpl",
            public_key: "key",
        }
    }

    #[test]
    fn validates_required_fields() {
        assert_eq!(filled().validate(), Ok(()));

        let mut f = filled();
        f.name = "  ".into();
        assert_eq!(f.validate(), Err(ContactError::Validation("Name", "is required.")));

        let mut f = filled();
        f.message = String::new();
        assert!(matches!(f.validate(), Err(ContactError::Validation("Message", _))));

        let mut f = filled();
        f.message = "x".repeat(MESSAGE_MAX_CHARS + 1);
        assert!(f.validate().is_err());
    }

    #[test]
    fn email_shapes() {
        for bad in ["", "alex", "alex@", "@example.com", "a@b", "a@b@c.com", "a b@c.com", "a@.com"] {
            let mut f = filled();
            f.email = bad.into();
            assert!(f.validate().is_err(), "{} should be rejected", bad);
        }
        let mut f = filled();
        f.email = "  team@studio.co.uk ".into();
        assert!(f.validate().is_ok());
    }

    #[test]
    fn toggling_services_keeps_order() {
        let mut f = filled();
        f.toggle_service("Web Design");
        f.toggle_service("Digital Marketing");
        f.toggle_service("Web Design");
        f.toggle_service("AI & ML Solutions");
        assert_eq!(f.services, vec!["Digital Marketing", "AI & ML Solutions"]);
    }

    #[test]
    fn empty_optional_fields_become_dashes() {
        let params = filled().template_params();
        assert_eq!(params.company, "—");
        assert_eq!(params.services, "—");

        let mut f = filled();
        f.company = "Acme".into();
        f.services = vec!["Web Design".into(), "Digital Marketing".into()];
        let params = f.template_params();
        assert_eq!(params.company, "Acme");
        assert_eq!(params.services, "Web Design, Digital Marketing");
    }

    #[test]
    fn request_body_shape() {
        let body = build_request(&cfg(), &filled()).expect("valid form");
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["user_id"], "key");
        assert_eq!(body["template_params"]["from_email"], "alex@example.com");
    }

    #[test]
    fn missing_configuration_is_reported_first() {
        let empty = EmailJsConfig {
            service_id: "",
            template_id: "tpl",
            public_key: "key",
        };
        assert_eq!(build_request(&empty, &ContactForm::default()), Err(ContactError::NotConfigured));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ContactError::Rejected { status: 400, body: "bad template".into() }.to_string(),
            "Failed to send message (status 400): bad template"
        );
        assert_eq!(ContactError::Validation("Name", "is required.").to_string(), "Name is required.");
    }
}
