//! Refresh the content mirror from the command line, without going through
//! the HTTP endpoint.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use clap::Parser;
use tokio::runtime::Builder;

use zephyr_backend::config::Settings;
use zephyr_backend::domain::Error;
use zephyr_backend::domain::content::{Country, Locale};
use zephyr_backend::domain::refresh::{Examiner, ExaminerPorts, RefreshOutcome};
use zephyr_backend::outbound::cache::{RedisPool, RedisRefreshGate, RedisResponseCache};
use zephyr_backend::outbound::helpdesk::HelpdeskHttpSource;
use zephyr_backend::outbound::persistence::{DbPool, DieselMirrorSync};
use zephyr_backend::server::RESPONSE_CACHE_TTL;

/// `force-sync` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "force-sync",
    about = "Refresh the mirrored help-centre content for every country and locale",
    version
)]
struct CliArgs {
    /// Restrict the walk to these countries. Repeatable; all when omitted.
    #[arg(long = "country", value_name = "code", value_parser = parse_country)]
    countries: Vec<Country>,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = Settings::load().map_err(io::Error::other)?;
    let examiner = build_examiner(&settings).await?;

    let countries = if args.countries.is_empty() {
        Country::ALL.to_vec()
    } else {
        args.countries
    };

    let mut failures = 0;
    for country in countries {
        for &locale in country.supported_locales() {
            failures += report(
                "categories",
                country,
                locale,
                examiner.force_sync_categories(country, locale).await,
            );
            failures += report(
                "sections",
                country,
                locale,
                examiner.force_sync_sections(country, locale).await,
            );
            failures += report(
                "articles",
                country,
                locale,
                examiner.force_sync_articles(country, locale).await,
            );
        }
    }
    match examiner.force_sync_ticket_forms().await {
        Ok(outcome) => println!("partition=ticket_forms outcome={outcome:?}"),
        Err(error) => {
            eprintln!("partition=ticket_forms error={error}");
            failures += 1;
        }
    }
    examiner.close().await;

    if failures > 0 {
        return Err(io::Error::other(format!(
            "{failures} partition refreshes failed"
        )));
    }
    Ok(())
}

/// Build the refresh examiner over freshly constructed pools and adapters.
async fn build_examiner(settings: &Settings) -> io::Result<Arc<Examiner>> {
    let db_pool = DbPool::new(settings.store.pool_config())
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    let redis_pool = RedisPool::new(settings.cache.pool_config())
        .await
        .map_err(|error| io::Error::other(format!("create cache pool: {error}")))?;

    let mirror = Arc::new(DieselMirrorSync::new(
        db_pool,
        settings.store.transaction_deadline(),
    ));
    let gate = Arc::new(RedisRefreshGate::new(
        redis_pool.clone(),
        settings.cache.read_deadline(),
    ));
    let cache = Arc::new(
        RedisResponseCache::new(redis_pool, RESPONSE_CACHE_TTL)
            .with_read_deadline(settings.cache.read_deadline())
            .with_write_deadline(settings.cache.write_deadline()),
    );
    let helpdesk_config = settings
        .upstream
        .helpdesk_config()
        .map_err(io::Error::other)?;
    let source = Arc::new(
        HelpdeskHttpSource::new(helpdesk_config)
            .map_err(|error| io::Error::other(format!("create helpdesk client: {error}")))?,
    );

    Ok(Arc::new(Examiner::new(
        ExaminerPorts::new(source, mirror, gate, cache),
        settings.examiner.examiner_config(),
    )))
}

fn report(
    partition: &str,
    country: Country,
    locale: Locale,
    outcome: Result<RefreshOutcome, Error>,
) -> usize {
    match outcome {
        Ok(outcome) => {
            println!("partition={partition} country={country} locale={locale} outcome={outcome:?}");
            0
        }
        Err(error) => {
            eprintln!("partition={partition} country={country} locale={locale} error={error}");
            1
        }
    }
}

fn parse_country(raw: &str) -> Result<Country, String> {
    raw.parse::<Country>().map_err(|error| error.to_string())
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI parsing helpers.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn country_parser_accepts_known_codes() {
        assert_eq!(parse_country("tw"), Ok(Country::Tw));
    }

    #[rstest]
    fn country_parser_rejects_unknown_codes() {
        let error = parse_country("uk").expect_err("unknown code should fail");
        assert!(error.contains("uk"));
    }

    #[rstest]
    fn repeated_country_flags_accumulate() {
        let args = CliArgs::try_parse_from(["force-sync", "--country", "sg", "--country", "jp"])
            .expect("args should parse");
        assert_eq!(args.countries, vec![Country::Sg, Country::Jp]);
    }

    #[rstest]
    fn omitted_country_flag_means_every_country() {
        let args = CliArgs::try_parse_from(["force-sync"]).expect("args should parse");
        assert!(args.countries.is_empty());
    }
}
