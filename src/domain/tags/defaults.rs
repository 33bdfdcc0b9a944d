//! Built-in email tags

use super::context::{ContextValue, TagContext};
use super::registry::TagRegistry;
use crate::domain::Currency;
use crate::error::{MailtagsError, Result};
use crate::infrastructure::Config;

/// Register the built-in tags followed by the custom tags from `config`.
///
/// Called once by the composition root before any expansion.
pub fn initialize(registry: &mut TagRegistry, config: &Config) {
    let directory = config.directory();
    registry.register(
        "affiliate_name",
        "The name of the affiliate",
        move |ctx: &TagContext, _: &str| -> Result<String> {
            let id = ctx.require_id("affiliate_id")?;
            directory
                .get(id)
                .map(|affiliate| affiliate.name.clone())
                .ok_or(MailtagsError::AffiliateNotFound(id))
        },
    );

    let site_name = config.site.name.clone();
    registry.register(
        "site_name",
        "Your site name",
        move |_: &TagContext, _: &str| -> Result<String> { Ok(site_name.clone()) },
    );

    let site_url = config.site.url.clone();
    registry.register(
        "site_url",
        "Your site URL",
        move |_: &TagContext, _: &str| -> Result<String> { Ok(site_url.clone()) },
    );

    let login_url = config.login_url().to_string();
    registry.register(
        "login_url",
        "The affiliate login URL",
        move |_: &TagContext, _: &str| -> Result<String> { Ok(login_url.clone()) },
    );

    let currency = config.currency.clone();
    registry.register(
        "referral_amount",
        "The commission amount rewarded to the affiliate",
        move |ctx: &TagContext, _: &str| -> Result<String> {
            format_amount(&currency, ctx.require("amount")?)
        },
    );

    for tag in &config.tags {
        let value = tag.value.clone();
        registry.register(
            tag.name.clone(),
            tag.description.clone(),
            move |_: &TagContext, _: &str| -> Result<String> { Ok(value.clone()) },
        );
    }

    tracing::debug!("Initialized {} email tags", registry.len());
}

/// Integers are minor units; floats and numeric text are major units.
fn format_amount(currency: &Currency, amount: &ContextValue) -> Result<String> {
    let invalid = || MailtagsError::InvalidContextValue {
        key: "amount".to_string(),
        reason: format!("expected a number, got '{}'", amount),
    };
    currency.validate()?;

    match amount {
        ContextValue::Integer(minor) => Ok(currency.format_minor(*minor)),
        ContextValue::Float(major) => Ok(currency.format(*major)),
        ContextValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map(|major| currency.format(major))
            .map_err(|_| invalid()),
        ContextValue::Boolean(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_toml_str(
            r#"
[site]
name = "Acme"
url = "https://acme.test"
login_url = "https://acme.test/affiliate-area"

[[affiliates]]
id = 5
name = "Grace Hopper"
email = "grace@example.com"

[[tags]]
name = "support_email"
description = "Support address"
value = "help@acme.test"
"#,
        )
        .unwrap()
    }

    fn initialized() -> TagRegistry {
        let mut registry = TagRegistry::new();
        initialize(&mut registry, &config());
        registry
    }

    #[test]
    fn test_default_tags_in_order() {
        let registry = initialized();
        let names: Vec<&str> = registry.list().iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "affiliate_name",
                "site_name",
                "site_url",
                "login_url",
                "referral_amount",
                "support_email"
            ]
        );
    }

    #[test]
    fn test_site_tags() {
        let registry = initialized();
        let rendered = registry
            .expand(
                "{site_name} {site_url} {login_url} {support_email}",
                &TagContext::new(),
            )
            .unwrap();
        assert_eq!(
            rendered,
            "Acme https://acme.test https://acme.test/affiliate-area help@acme.test"
        );
    }

    #[test]
    fn test_affiliate_name_lookup() {
        let registry = initialized();
        let ctx = TagContext::new().with("affiliate_id", 5i64);
        assert_eq!(
            registry.expand("Hi {affiliate_name}", &ctx).unwrap(),
            "Hi Grace Hopper"
        );
    }

    #[test]
    fn test_affiliate_name_unknown_id_fails() {
        let registry = initialized();
        let ctx = TagContext::new().with("affiliate_id", 99i64);
        assert!(matches!(
            registry.expand("{affiliate_name}", &ctx).unwrap_err(),
            MailtagsError::AffiliateNotFound(99)
        ));
    }

    #[test]
    fn test_affiliate_name_missing_id_fails() {
        let registry = initialized();
        assert!(matches!(
            registry
                .expand("{affiliate_name}", &TagContext::new())
                .unwrap_err(),
            MailtagsError::MissingContext(_)
        ));
    }

    #[test]
    fn test_referral_amount_formats() {
        let registry = initialized();

        let cents = TagContext::new().with("amount", 1234i64);
        assert_eq!(
            registry.expand("You earned {referral_amount}.", &cents).unwrap(),
            "You earned $12.34."
        );

        let major = TagContext::new().with("amount", 12.5);
        assert_eq!(
            registry.expand("{referral_amount}", &major).unwrap(),
            "$12.50"
        );

        let text = TagContext::new().with("amount", "3.1");
        assert_eq!(registry.expand("{referral_amount}", &text).unwrap(), "$3.10");
    }

    #[test]
    fn test_referral_amount_rejects_non_numeric() {
        let registry = initialized();
        let ctx = TagContext::new().with("amount", "lots");
        assert!(matches!(
            registry.expand("{referral_amount}", &ctx).unwrap_err(),
            MailtagsError::InvalidContextValue { .. }
        ));
    }

    #[test]
    fn test_referral_amount_with_unrepresentable_decimals_fails() {
        let mut config = config();
        config.currency.decimals = 64;
        let mut registry = TagRegistry::new();
        initialize(&mut registry, &config);

        let ctx = TagContext::new().with("amount", 1234i64);
        assert!(matches!(
            registry.expand("{referral_amount}", &ctx).unwrap_err(),
            MailtagsError::Config(_)
        ));
    }

    #[test]
    fn test_custom_tag_overrides_builtin() {
        let mut config = config();
        config.tags.push(crate::infrastructure::config::CustomTag {
            name: "site_name".to_string(),
            description: "Branded name".to_string(),
            value: "ACME Inc.".to_string(),
        });

        let mut registry = TagRegistry::new();
        initialize(&mut registry, &config);

        assert_eq!(
            registry.expand("{site_name}", &TagContext::new()).unwrap(),
            "ACME Inc."
        );
        assert_eq!(registry.list()[1].description(), "Branded name");
    }
}
