//! Shared result-page rendering for the terminal shell.

use console::style;

use crate::content::LabelCatalog;
use crate::recommend::Recommendation;

/// Prints a recommendation as a styled terminal summary.
pub fn render_recommendation(recommendation: &Recommendation, labels: &LabelCatalog) {
    println!();
    println!("{}", style(labels.get("results.title")).bold().underlined());
    println!(
        "  {} / {}",
        recommendation.scenario_title, recommendation.sub_scenario_text
    );
    println!();

    println!(
        "{} {} {}",
        style("★").cyan(),
        style(labels.get("results.primaryHeading")).bold(),
        style(labels.offering(recommendation.primary_offering)).cyan()
    );
    if !recommendation.primary_recommendation.is_empty() {
        println!("  {}", recommendation.primary_recommendation);
    }
    if !recommendation.primary_description.is_empty() {
        println!("  {}", style(&recommendation.primary_description).dim());
    }
    if let Some(supporting) = recommendation.supporting_offering {
        println!(
            "{} {} {}",
            style("+").green(),
            labels.get("results.supportingHeading"),
            labels.offering(supporting)
        );
    }
    if let Some(optional) = recommendation.optional_offering {
        println!(
            "{} {} {}",
            style("·").dim(),
            labels.get("results.optionalHeading"),
            labels.offering(optional)
        );
    }
    if !recommendation.supporting_capability.is_empty() {
        println!(
            "  {} {}",
            style(&recommendation.supporting_capability).italic(),
            style(format!("({})", recommendation.supporting_signal_path)).dim()
        );
    }
    println!(
        "  {}: {}%",
        labels.get("results.confidence"),
        recommendation.confidence
    );

    render_list(labels.get("results.challengesHeading"), &recommendation.challenges);
    render_list(labels.get("results.solutionsHeading"), &recommendation.solutions);
    render_list(labels.get("results.approachHeading"), &recommendation.approach);
    render_list(labels.get("results.capabilitiesHeading"), &recommendation.capabilities);
    render_list(labels.get("results.techStackHeading"), &recommendation.primary_tech_stack);

    if !recommendation.offers.is_empty() {
        println!();
        println!("{}", style(labels.get("results.offersHeading")).bold());
        for offer in &recommendation.offers {
            println!(
                "  {} {} {}",
                style("-").dim(),
                offer.title,
                style(&offer.reference_url).dim()
            );
        }
    }
    println!();
}

fn render_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", style(heading).bold());
    for item in items {
        println!("  {} {}", style("-").dim(), item);
    }
}
