use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub app_key: String,
    pub contract_date_attribute: String,
    pub national_id_attribute: String,
    pub email_template_id: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            api_url: std::env::var("UCRM_API_URL")
                .map_err(|_| anyhow::anyhow!("UCRM_API_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("UCRM_API_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("UCRM_API_URL must start with http:// or https://");
                    }
                    Ok(url.trim_end_matches('/').to_string())
                })?,
            app_key: std::env::var("UCRM_APP_KEY")
                .map_err(|_| anyhow::anyhow!("UCRM_APP_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("UCRM_APP_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            contract_date_attribute: std::env::var("CONTRACT_DATE_ATTRIBUTE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "nextContractSign".to_string()),
            national_id_attribute: std::env::var("NATIONAL_ID_ATTRIBUTE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "cnp".to_string()),
            email_template_id: std::env::var("EMAIL_TEMPLATE_ID")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("EMAIL_TEMPLATE_ID must be a valid integer"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("UCRM API URL: {}", config.api_url);
        tracing::debug!(
            "Contract date attribute: {}",
            config.contract_date_attribute
        );
        tracing::debug!("National ID attribute: {}", config.national_id_attribute);
        tracing::debug!("Email template ID: {}", config.email_template_id);

        Ok(config)
    }
}
