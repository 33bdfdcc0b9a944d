use clap::Parser;
use mailtags::application::{
    ListTagsService, NotificationService, RenderService, TemplateSource,
};
use mailtags::cli::{format_email, format_tag_list, format_tag_list_html, Cli, Commands};
use mailtags::domain::{AffiliateStatus, NotificationKind, TagContext};
use mailtags::error::MailtagsError;
use mailtags::infrastructure::Config;
use std::str::FromStr;

fn main() {
    // Initialize tracing based on RUST_LOG env var, on stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MailtagsError> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Tags { html } => {
            let tags = ListTagsService::new(&config).execute();
            if html {
                println!("{}", format_tag_list_html(&tags));
            } else {
                print!("{}", format_tag_list(&tags));
            }
            Ok(())
        }
        Commands::Render {
            file,
            text,
            context,
            set,
        } => {
            let ctx = RenderService::build_context(context.as_deref(), &set)?;
            let source = match (&text, &file) {
                (Some(text), _) => TemplateSource::Text(text),
                (None, Some(path)) => TemplateSource::File(path),
                (None, None) => {
                    return Err(MailtagsError::Template(
                        "Nothing to render: pass a template file or --text".to_string(),
                    ))
                }
            };

            let output = RenderService::new(&config).execute(source, &ctx)?;
            println!("{}", output);
            Ok(())
        }
        Commands::Notify {
            kind,
            affiliate,
            amount,
            name,
            status,
            old_status,
            force,
        } => {
            let kind = NotificationKind::from_str(&kind)
                .map_err(MailtagsError::UnknownNotification)?;
            let service = NotificationService::new(config);

            let email = if force {
                let ctx = TagContext::new()
                    .with("affiliate_id", affiliate)
                    .with("amount", amount)
                    .with("name", name);
                Some(service.compose(kind, &ctx)?)
            } else {
                match kind {
                    NotificationKind::Registration => service.on_registration(affiliate, &name)?,
                    NotificationKind::ApplicationAccepted => {
                        let status =
                            AffiliateStatus::from_str(&status).map_err(MailtagsError::Config)?;
                        let old_status = AffiliateStatus::from_str(&old_status)
                            .map_err(MailtagsError::Config)?;
                        service.on_status_change(affiliate, status, old_status)?
                    }
                    NotificationKind::NewReferral => {
                        service.on_referral_accepted(affiliate, amount)?
                    }
                }
            };

            match email {
                Some(email) => print!("{}", format_email(&email)),
                None => println!("No {} email sent (notification suppressed)", kind),
            }
            Ok(())
        }
    }
}
