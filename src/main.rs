use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{error, info, warn};

use cohort_housing::algorithm::{
    adjust_for_inflation, align_to_adult_years, downpayment_burdens, home_cost_index_by_cohort,
    homeownership_rate_by_cohort, inflation_factors, inner_join, long_rows_from_aligned,
    mean_income_by_cohort, pivot, rebase_to_first,
};
use cohort_housing::registry::{
    AsecRegister, CpiRegister, HomePriceRegister, HouseholdIncomeRegister, MortgageRateRegister,
};
use cohort_housing::utils::{write_combined_series, write_downpayment_table, write_wide_table};
use cohort_housing::{PipelineConfig, Result};

/// Name of the synthetic dense row-index column in aligned output tables
const ALIGNED_INDEX_NAME: &str = "total_gen_adult_yr";

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {path}");
            PipelineConfig::from_file(Path::new(&path))?
        }
        None => PipelineConfig::default(),
    };

    if !config.survey_dir.exists() {
        warn!("Survey extract directory not found: {}", config.survey_dir.display());
        return Ok(());
    }
    fs::create_dir_all(&config.output_dir)?;

    // Load the survey extract
    info!("Loading survey extract from: {}", config.survey_dir.display());
    let start = Instant::now();
    let records = AsecRegister::new().load(&config.survey_dir)?;
    info!("Loaded {} survey records in {:?}", records.len(), start.elapsed());

    // Homeownership rate by adult-year
    let rates = homeownership_rate_by_cohort(&records);
    let aligned_rates = align_to_adult_years(&rates);
    let rate_table = pivot(&long_rows_from_aligned(&aligned_rates), ALIGNED_INDEX_NAME);
    write_wide_table(&rate_table, &config.output_dir.join("homeownership_rate.csv"))?;
    info!("Wrote homeownership rates for {} aligned years", rate_table.rows.len());

    // Cohort income feeds both affordability outputs
    let income_by_cohort = mean_income_by_cohort(&records);
    let home_price = HomePriceRegister::new(config.home_price_skip_rows)
        .load(&config.home_price_path)?;
    let mortgage_rate = MortgageRateRegister::new().load(&config.mortgage_rate_path)?;

    // Home cost index by adult-year
    let index = home_cost_index_by_cohort(&income_by_cohort, &home_price, &mortgage_rate);
    let aligned_index = align_to_adult_years(&index);
    let index_table = pivot(&long_rows_from_aligned(&aligned_index), ALIGNED_INDEX_NAME);
    write_wide_table(&index_table, &config.output_dir.join("home_cost_index.csv"))?;
    info!("Wrote home cost index for {} aligned years", index_table.rows.len());

    // Downpayment burden snapshots
    let aligned_income = align_to_adult_years(&income_by_cohort);
    let burdens = downpayment_burdens(
        &config.downpayment_scenarios,
        config.downpayment_share,
        config.probe_adult_yr,
        &aligned_income,
        &home_price,
    );
    write_downpayment_table(&burdens, &config.output_dir.join("downpayment_burden.csv"))?;
    info!("Wrote {} downpayment burden scenarios", burdens.len());

    // Price-vs-income comparison needs the remote CPI series; a failed
    // fetch aborts only this branch.
    let household_income = HouseholdIncomeRegister::new().load(&config.household_income_path)?;
    match CpiRegister::from_config(&config).fetch() {
        Ok(cpi) => {
            let factors = inflation_factors(&cpi);
            let real_price = adjust_for_inflation(&home_price, &factors);
            let real_income = adjust_for_inflation(&household_income, &factors);
            let combined = inner_join(&[&real_price, &real_income]);
            let rebased = rebase_to_first(&combined);
            write_combined_series(&rebased, &config.output_dir.join("price_vs_income.csv"))?;
            info!("Wrote price-vs-income comparison for {} years", rebased.rows.len());
        }
        Err(e) => {
            error!("CPI fetch failed, skipping price-vs-income table: {e}");
        }
    }

    Ok(())
}
