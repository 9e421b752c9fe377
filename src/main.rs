// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::sync::Arc;

use notify2user::{
    constants, dispatch, AppError, ChannelKind, CommandLineInput, ConsoleSink, Delivery,
    DispatchConfig, DispatchPlan, DispatchReport, EmailNotifier, Notifier, OutputSink,
    SmsNotifier, User,
};

/// Sets up logging configuration.
///
/// Log records go to stderr so stdout carries only the notification stream.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(constants::LOG_FILE_NAME);

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Wires the channel stubs and users, then runs the dispatch plan.
fn wire_and_dispatch(config: &DispatchConfig) -> DispatchReport {
    let sink: Arc<dyn OutputSink> = Arc::new(ConsoleSink::new());

    let email = EmailNotifier::new(
        config.smtp_host.clone(),
        config.smtp_port,
        Arc::clone(&sink),
    );
    let sms = SmsNotifier::new(
        config.sms_api_key.clone(),
        config.sms_phone.clone(),
        Arc::clone(&sink),
    );

    let mut plan = DispatchPlan::new();
    for entry in &config.roster {
        let notifier: &dyn Notifier = match entry.channel {
            ChannelKind::Email => &email,
            ChannelKind::Sms => &sms,
        };
        plan = plan.with_delivery(Delivery {
            user: User::new(
                entry.name.clone(),
                entry.email.clone(),
                notifier,
                Arc::clone(&sink),
            ),
            channel: entry.channel,
            message: entry.message.clone(),
        });
    }

    dispatch(plan)
}

/// Reports completion to the user with delivery confirmations.
fn report_completion(report: &DispatchReport) {
    for failure in &report.failed {
        eprintln!(
            "⚠️  Delivery to {} over {} failed: {}",
            failure.recipient, failure.channel, failure.error
        );
    }

    if report.is_success() {
        println!(
            "✓ {} notification(s) dispatched.",
            report.stats.notifications_delivered
        );
    }
}

/// Executes the two-stage pipeline: wire → dispatch.
fn run(config: &DispatchConfig) -> Result<(), AppError> {
    let report = wire_and_dispatch(config);
    report_completion(&report);

    if !report.is_success() {
        return Err(AppError::DeliveryFailed {
            failures: report
                .failed
                .iter()
                .map(|f| format!("{}: {}", f.recipient, f.error))
                .collect(),
        });
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = DispatchConfig::resolve(cli)?;

    run(&config)?;

    Ok(())
}
