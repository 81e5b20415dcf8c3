//! MoneyPulse CLI
//!
//! Loads a saved profile, runs the full assessment, and prints the
//! projection window, summary ratios, and (optionally) a purchase verdict.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use moneypulse::{
    advisory::AdvisoryContext,
    assess,
    profile::load_saved_state,
    projection::MASTER_HORIZON_DAYS,
    Assessment, PurchaseQuery, PurchaseVerdict, RunwayBand,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "moneypulse", about = "Cash-flow projection and affordability engine")]
struct Cli {
    /// Path to the saved state JSON (profile + navigation blob)
    state: PathBuf,

    /// Purchase price to evaluate
    #[arg(long)]
    price: Option<f64>,

    /// Label for the purchase
    #[arg(long, default_value = "purchase")]
    label: String,

    /// Earliest day the purchase may be realized (0 = now)
    #[arg(long, default_value_t = 0)]
    delay_days: u32,

    /// Projection horizon in days
    #[arg(long, default_value_t = MASTER_HORIZON_DAYS)]
    horizon_days: u32,

    /// Override "today" (YYYY-MM-DD) for reproducible runs
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Emit the full assessment as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Days of the projection window to print
    #[arg(long, default_value_t = 30)]
    table_days: usize,
}

fn print_report(assessment: &Assessment, table_days: usize) {
    println!("MoneyPulse v0.1.0");
    println!("=================\n");

    let s = &assessment.summary;
    println!("Summary:");
    println!("  Monthly Income:   {:>12.2}", s.monthly_income);
    println!("  Fixed Outflow:    {:>12.2}", s.fixed_monthly_total);
    println!("  Variable Outflow: {:>12.2}", s.variable_monthly_total);
    println!("  Monthly Surplus:  {:>12.2}", s.monthly_surplus);
    println!("  Savings Rate:     {:>11.1}%", s.savings_rate_pct);
    println!("  Fixed Load:       {:>11.1}%", s.fixed_load_ratio_pct);
    match s.survival_fund_months {
        Some(months) => println!("  Survival Fund:    {:>9.1} mo", months),
        None => println!("  Survival Fund:    {:>12}", "infinite"),
    }
    println!("  Daily Net:        {:>12.2}", s.daily_net);
    println!();

    match (assessment.depletion_day, assessment.depletion_date) {
        (Some(day), Some(date)) => {
            println!("Runway: depletes in {} days ({})", day, date)
        }
        _ => println!("Runway: growing (no depletion within horizon)"),
    }
    let band = match assessment.band {
        RunwayBand::Danger => "DANGER",
        RunwayBand::Warning => "WARNING",
        RunwayBand::Safe => "SAFE",
    };
    println!("Band: {}", band);
    println!("Health Score: {}/100\n", assessment.health_score);

    if !assessment.liabilities.is_empty() {
        println!("Upcoming Liabilities:");
        println!("{:>4} {:<16} {:>12} {:>6} {:>8} {:>9}", "Due", "Title", "Amount", "Days", "Share%", "Urgency");
        for view in &assessment.liabilities {
            println!(
                "{:>4} {:<16} {:>12.2} {:>6} {:>7.1}% {:>9}",
                view.due_day_of_month,
                view.title,
                view.amount,
                view.days_until_next_occurrence,
                view.income_share_ratio,
                match view.urgency {
                    moneypulse::analysis::Urgency::Urgent => "URGENT",
                    moneypulse::analysis::Urgency::Upcoming => "upcoming",
                }
            );
        }
        println!();
    }

    if let Some(purchase) = &assessment.purchase {
        println!("Purchase '{}' @ {:.2} (delay {} days):", purchase.label, purchase.price, purchase.delay_days);
        match &purchase.verdict {
            PurchaseVerdict::SafeNow => println!("  Verdict: safe to buy now"),
            PurchaseVerdict::DeferUntil(window) => println!(
                "  Verdict: defer until day {} ({}) [{:?} window]",
                window.day, window.date, window.kind
            ),
            PurchaseVerdict::RequiresSavingsPlan => {
                println!("  Verdict: no affordability window found; requires a savings plan")
            }
        }
        match purchase.depletion_day {
            Some(day) => println!("  Post-purchase depletion: day {}", day),
            None => println!("  Post-purchase depletion: none within horizon"),
        }
        println!();
    }

    println!("Projection ({} of {} days):", table_days.min(assessment.chart.len() - 1), assessment.chart.len() - 1);
    println!("{:>5} {:>12} {:>14}", "Day", "Date", "Balance");
    println!("{}", "-".repeat(34));
    for point in assessment.chart.iter().take(table_days + 1) {
        println!("{:>5} {:>12} {:>14.2}", point.day_offset, point.date, point.balance);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let state = load_saved_state(&cli.state)
        .with_context(|| format!("loading saved state from {}", cli.state.display()))?;
    let profile = state.profile.normalize().context("normalizing profile")?;

    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let purchase = cli.price.map(|price| PurchaseQuery {
        price,
        label: cli.label.clone(),
        delay_days: cli.delay_days,
    });

    log::info!(
        "assessing profile from {} (today={}, horizon={} days)",
        cli.state.display(),
        today,
        cli.horizon_days
    );
    let assessment = assess(&profile, purchase.as_ref(), today, cli.horizon_days);

    if cli.json {
        let mut output = serde_json::to_value(&assessment)?;
        // Attach the advisory context so callers can forward it to the
        // external text service themselves.
        output["advisory_context"] =
            serde_json::to_value(AdvisoryContext::from_assessment(&profile, &assessment))?;
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&assessment, cli.table_days);
    }

    Ok(())
}
