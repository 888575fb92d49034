use crate::categories::EmissionCategory;
use crate::recommendations::{ActionPlan, Recommendation};
use crate::report::EmissionReport;
use crate::utils::{format_cost, format_emissions, format_payback};

/// Markdown formatter for footprint reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &EmissionReport) -> String {
        let mut md = String::with_capacity(2048);
        let results = &report.results;

        // Title and headline figure
        let name = if report.company.name.is_empty() {
            "Unnamed organization"
        } else {
            report.company.name.as_str()
        };
        md.push_str(&format!("# Carbon Footprint - {}\n\n", name));
        md.push_str(&format!(
            "**Total emissions:** {}\n\n",
            format_emissions(results.total_emissions)
        ));

        // Categories
        md.push_str("## Emissions by Category\n\n");
        md.push_str("| Category | Emissions | Share |\n");
        md.push_str("|----------|-----------|-------|\n");
        for (category, value) in results.emissions_by_category.iter() {
            md.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                category.display_name(),
                format_emissions(value),
                results
                    .emissions_by_category
                    .share(category, results.total_emissions)
            ));
        }
        md.push('\n');

        // Scopes
        let scopes = &results.emissions_by_scope;
        md.push_str("## Emissions by Scope\n\n");
        md.push_str(&format!("- **Scope 1** (direct): {}\n", format_emissions(scopes.scope1)));
        md.push_str(&format!(
            "- **Scope 2** (purchased energy): {}\n",
            format_emissions(scopes.scope2)
        ));
        md.push_str(&format!(
            "- **Scope 3** (value chain): {}\n\n",
            format_emissions(scopes.scope3)
        ));

        // Benchmark
        let benchmark = &results.benchmark_comparison;
        md.push_str("## Benchmark\n\n");
        md.push_str(&format!(
            "- **Sector:** {}\n",
            report.company.sector.display_name()
        ));
        md.push_str(&format!(
            "- **Per employee:** {:.2} t CO2e (benchmark {:.2} t CO2e)\n",
            benchmark.emissions_per_employee, benchmark.industry
        ));
        md.push_str(&format!(
            "- **Percentile:** {} ({})\n",
            benchmark.percentile,
            report.performance.display_name()
        ));
        md.push_str(&format!("- **Level:** {}\n\n", report.trend.display_name()));

        Self::format_action_plan(&mut md, &report.action_plan);

        md
    }

    fn format_action_plan(md: &mut String, plan: &ActionPlan) {
        md.push_str("## Action Plan\n\n");

        if plan.is_empty() {
            md.push_str("No category stands out enough to trigger a recommendation.\n");
            return;
        }

        md.push_str(&format!(
            "Potential reduction: **{}** ({:.0}% of total), {} easy action(s), average payback {}, total cost {}\n\n",
            format_emissions(plan.total_potential_reduction),
            plan.reduction_percentage,
            plan.easy_actions,
            format_payback(plan.average_payback_months),
            format_cost(plan.total_estimated_cost)
        ));

        for (rank, rec) in plan.recommendations.iter().enumerate() {
            Self::format_recommendation(md, rank + 1, rec);
        }
    }

    fn format_recommendation(md: &mut String, rank: usize, rec: &Recommendation) {
        md.push_str(&format!(
            "### {}. {} [{}]\n\n",
            rank,
            rec.title,
            category_tag(rec.category)
        ));
        md.push_str(&format!("{}\n\n", rec.description));
        md.push_str(&format!(
            "- Reduction: {}\n- Cost: {}\n- Payback: {}\n- {} / {}\n\n",
            format_emissions(rec.potential_reduction),
            format_cost(rec.estimated_cost),
            format_payback(rec.payback_period),
            rec.impact.display_name(),
            rec.difficulty.display_name()
        ));
    }
}

fn category_tag(category: EmissionCategory) -> &'static str {
    match category {
        EmissionCategory::Energy => "energy",
        EmissionCategory::Transport => "transport",
        EmissionCategory::Waste => "waste",
        EmissionCategory::Purchases => "purchases",
        EmissionCategory::It => "it",
        EmissionCategory::RealEstate => "realEstate",
    }
}
