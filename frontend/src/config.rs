
#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://flamixtechnologies.com"
}

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS credentials, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailJsConfig {
    pub fn is_complete(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

pub fn emailjs() -> EmailJsConfig {
    EmailJsConfig {
        service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or(""),
        template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(""),
        public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(""),
    }
}

/// Cal.com booking link in `user/event` form.
pub fn cal_link() -> &'static str {
    option_env!("CAL_LINK").unwrap_or("flamix-technologies-9ds0lc/30min")
}
