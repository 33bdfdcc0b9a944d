//! Compose notification emails use case

use crate::domain::notification::{autop, body_footer, body_header, strip_html};
use crate::domain::tags::{initialize, render, FilterChain};
use crate::domain::{AffiliateStatus, Email, NotificationKind, TagContext, TagRegistry};
use crate::error::{MailtagsError, Result};
use crate::infrastructure::Config;

/// Service for composing affiliate notification emails
pub struct NotificationService {
    config: Config,
    registry: TagRegistry,
    filters: FilterChain,
}

impl NotificationService {
    /// Create a service with the built-in tags registered from `config`
    pub fn new(config: Config) -> Self {
        let mut registry = TagRegistry::new();
        initialize(&mut registry, &config);
        Self::with_registry(config, registry)
    }

    /// Create a service around an already populated registry
    pub fn with_registry(config: Config, registry: TagRegistry) -> Self {
        NotificationService {
            config,
            registry,
            filters: FilterChain::new(),
        }
    }

    /// Post-processing run after every tag expansion
    pub fn filters_mut(&mut self) -> &mut FilterChain {
        &mut self.filters
    }

    /// New affiliate registered; admins are told when registration
    /// notifications are enabled.
    pub fn on_registration(&self, affiliate_id: u64, name: &str) -> Result<Option<Email>> {
        if !self.config.emails.registration_notifications {
            tracing::debug!("Registration notifications disabled");
            return Ok(None);
        }

        let ctx = TagContext::new()
            .with("affiliate_id", affiliate_id)
            .with("name", name);
        self.compose(NotificationKind::Registration, &ctx).map(Some)
    }

    /// Affiliate status changed; only pending to active sends an email
    pub fn on_status_change(
        &self,
        affiliate_id: u64,
        status: AffiliateStatus,
        old_status: AffiliateStatus,
    ) -> Result<Option<Email>> {
        if status != AffiliateStatus::Active || old_status != AffiliateStatus::Pending {
            tracing::debug!(
                "No notification for status change {} -> {}",
                old_status,
                status
            );
            return Ok(None);
        }

        let ctx = TagContext::new().with("affiliate_id", affiliate_id);
        self.compose(NotificationKind::ApplicationAccepted, &ctx)
            .map(Some)
    }

    /// Referral accepted; sent only to affiliates who opted in.
    ///
    /// `amount` is in minor currency units.
    pub fn on_referral_accepted(&self, affiliate_id: u64, amount: i64) -> Result<Option<Email>> {
        let affiliate = self
            .config
            .affiliates
            .iter()
            .find(|a| a.id == affiliate_id)
            .ok_or(MailtagsError::AffiliateNotFound(affiliate_id))?;

        if !affiliate.referral_notifications {
            tracing::debug!("Affiliate {} has referral notifications off", affiliate_id);
            return Ok(None);
        }

        let ctx = TagContext::new()
            .with("affiliate_id", affiliate_id)
            .with("amount", amount);
        self.compose(NotificationKind::NewReferral, &ctx).map(Some)
    }

    /// Build the email for `kind` regardless of notification switches
    pub fn compose(&self, kind: NotificationKind, ctx: &TagContext) -> Result<Email> {
        let to = self.recipients(kind, ctx)?;

        let subject = self.render(&self.subject_template(kind), ctx)?;

        let mut body = body_header(self.config.site.rtl);
        body.push_str(&autop(&self.render(&self.body_template(kind, ctx), ctx)?));
        if kind == NotificationKind::Registration && self.config.emails.require_approval {
            body.push_str(&format!(
                "<p>Review pending applications: {}admin.php?page=affiliate-wp-affiliates&status=pending</p>\n",
                self.config.admin_url()
            ));
        }
        body.push_str(body_footer());

        tracing::info!("Composed {} email for {} recipient(s)", kind, to.len());

        Ok(Email {
            to,
            subject,
            body,
            headers: self.headers(),
        })
    }

    fn render(&self, content: &str, ctx: &TagContext) -> Result<String> {
        render(&self.registry, &self.filters, content, ctx)
    }

    fn recipients(&self, kind: NotificationKind, ctx: &TagContext) -> Result<Vec<String>> {
        match kind {
            NotificationKind::Registration => Ok(self.config.admin_recipients()),
            NotificationKind::ApplicationAccepted | NotificationKind::NewReferral => {
                let id = ctx.require_id("affiliate_id")?;
                let affiliate = self
                    .config
                    .affiliates
                    .iter()
                    .find(|a| a.id == id)
                    .ok_or(MailtagsError::AffiliateNotFound(id))?;
                Ok(vec![affiliate.email.clone()])
            }
        }
    }

    fn subject_template(&self, kind: NotificationKind) -> String {
        let emails = &self.config.emails;
        let configured = match kind {
            NotificationKind::Registration => &emails.admin_registration_subject,
            NotificationKind::ApplicationAccepted => &emails.affiliate_application_accepted_subject,
            NotificationKind::NewReferral => &emails.affiliate_new_referral_subject,
        };

        configured
            .as_deref()
            .map(strip_html)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| kind.default_subject().to_string())
    }

    fn body_template(&self, kind: NotificationKind, ctx: &TagContext) -> String {
        let emails = &self.config.emails;
        let configured = match kind {
            NotificationKind::Registration => &emails.admin_registration,
            NotificationKind::ApplicationAccepted => &emails.affiliate_application_accepted,
            NotificationKind::NewReferral => &emails.affiliate_new_referral,
        };

        match configured {
            Some(body) => body.clone(),
            None => {
                let name = ctx.get("name").map(|v| v.to_string()).unwrap_or_default();
                kind.default_body(&name)
            }
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            (
                "From".to_string(),
                format!("{} <{}>", self.config.site.name, self.config.site.admin_email),
            ),
            ("Reply-To".to_string(), self.config.reply_to().to_string()),
            (
                "Content-Type".to_string(),
                "text/html; charset=utf-8".to_string(),
            ),
        ]
    }
}
