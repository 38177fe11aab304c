use finpulse_core::backend::types::AnalysisOutcome;
use finpulse_core::report::format;
use finpulse_core::sim::Projection;

pub fn print_analysis(outcome: &AnalysisOutcome) {
    let metrics = &outcome.metrics;
    let loss_marker = if metrics.has_loss() { "  [LOSS]" } else { "" };

    println!("Revenue:     {}", format::currency(metrics.revenue));
    println!("Expenses:    {}", format::currency(metrics.expenses));
    println!(
        "Net Profit:  {}{loss_marker}",
        format::currency(metrics.net_profit)
    );

    let Some(assessment) = &outcome.assessment else {
        println!();
        println!("(no AI assessment returned)");
        return;
    };

    println!();
    println!("Financial Health Score: {}/100", assessment.score);
    println!("{}", assessment.summary);

    let recommendations = assessment.recommendations.normalize();
    if !recommendations.is_empty() {
        println!();
        println!("Strategic Recommendations:");
        for (i, recommendation) in recommendations.iter().enumerate() {
            println!("  {:02}. {recommendation}", i + 1);
        }
    }
}

pub fn print_projection(projection: &Projection) {
    println!(
        "{:<12} {:>16} {:>16}",
        "Category", "Baseline", "Scenario"
    );
    for (label, baseline, scenario) in [
        (
            "Revenue",
            projection.original.revenue,
            projection.projected.revenue,
        ),
        (
            "Expenses",
            projection.original.expenses,
            projection.projected.expenses,
        ),
        (
            "Net Profit",
            projection.original.net_profit,
            projection.projected.net_profit,
        ),
    ] {
        println!(
            "{label:<12} {:>16} {:>16}",
            format::currency(baseline),
            format::currency(scenario)
        );
    }

    if projection.projected.has_loss() {
        println!("(projected plan runs at a loss)");
    }
}
