//! Example: analyze a salary dataset and predict from the fitted line
//!
//! Run with:
//! ```bash
//! cargo run --example salary_analysis
//! ```

use wagefit_core::prelude::*;

const SALARY_CSV: &str = "\
YearsExperience,Salary
1.1,39343.0
2.0,43525.0
3.0,60150.0
4.0,55794.0
5.1,66029.0
6.8,91738.0
8.2,113812.0
9.5,116969.0
";

fn main() -> Result<()> {
    let obs = read_observations(SALARY_CSV.as_bytes())?;
    println!("Loaded {} observations\n", obs.len());

    let stats = summarize(&obs)?;
    println!("Mean experience:   {:.2} years", stats.mean_x);
    println!("Mean salary:       {:.2}", stats.mean_y);
    println!("Median experience: {:.2} years", stats.median_x);
    println!("Median salary:     {:.2}\n", stats.median_y);

    let fit = fit_least_squares(&obs)?;
    println!("Slope (beta_1):     {:.4}", fit.slope());
    println!("Intercept (beta_0): {:.4}", fit.intercept());
    println!("R-squared:          {:.4}\n", fit.r_squared());

    let years = 5.0;
    println!(
        "Predicted salary for {} years of experience: {:.2}",
        years,
        fit.predict(years)
    );

    Ok(())
}
