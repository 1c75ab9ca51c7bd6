//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crane_core::calculations::{
    CalculationOutput, CraneSizeRecommendation, HireComparison, HireCostResult, ProjectCostResult,
    TransportSummary,
};
use crane_core::data::{CraneType, Region};
use crane_core::format::{format_cost, format_currency, format_multiplier_change};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", heading);
    for item in items {
        println!("  - {}", item);
    }
}

pub fn output_cranes(output_format: OutputFormat, cranes: &[CraneType]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(cranes);
    }

    println!("\nCrane Types");
    println!("===========");
    println!("{:<13} {:<22} {:>10}  Bands", "ID", "Name", "Capacity");
    for crane in cranes {
        println!(
            "{:<13} {:<22} {:>10}  {}",
            crane.id,
            crane.name,
            format!("{}-{}t", crane.min_tonnage(), crane.max_tonnage()),
            crane.tonnage_labels().collect::<Vec<_>>().join(", ")
        );
    }
    Ok(())
}

pub fn output_crane(output_format: OutputFormat, crane: &CraneType) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(crane);
    }

    println!("\n{} ({})", crane.name, crane.id);
    println!("{}", "=".repeat(crane.name.len() + crane.id.len() + 3));
    println!("{}", crane.description);
    println!("\nTonnage bands:");
    for band in &crane.tonnage_ranges {
        println!("  {:<10} {}/day", band.label, format_cost(band.daily_rate()));
    }
    print_list("Best for", &crane.best_for);
    print_list("Considerations", &crane.considerations);
    Ok(())
}

pub fn output_regions(output_format: OutputFormat, regions: &[Region]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(regions);
    }

    println!("\nPricing Regions");
    println!("===============");
    println!("{:<18} {:<26} {:>10}", "ID", "Name", "Pricing");
    for region in regions {
        println!(
            "{:<18} {:<26} {:>10}",
            region.id,
            region.name,
            format_multiplier_change(region.multiplier)
        );
    }
    Ok(())
}

pub fn output_hire(
    output_format: OutputFormat,
    title: &str,
    result: &HireCostResult,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }

    println!("\n{}", title);
    println!("{}", "=".repeat(title.chars().count()));
    println!("Base daily rate:   {}", format_cost(result.base_daily_rate));
    println!(
        "Region:            {} (x{:.2})",
        format_multiplier_change(result.region_multiplier),
        result.region_multiplier
    );
    println!("Regional rate:     {}", format_cost(result.regional_adjusted));
    if let Some(rate) = result.contract_lift_rate {
        println!("Contract lift:     {}", format_cost(rate));
    }
    println!("Pricing band:      {}", result.duration_band.display_name());
    println!("Total:             {}", format_cost(result.total_for_duration));
    println!("Per day:           {}", format_cost(result.per_day));
    println!(
        "\nWeekly booking saves about {}, monthly about {}",
        format_currency(result.savings.weekly),
        format_currency(result.savings.monthly)
    );
    Ok(())
}

pub fn output_transport(output_format: OutputFormat, summary: &TransportSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summary);
    }

    println!("\nTransport Estimate");
    println!("==================");
    println!("Crane:             {}t ({})", summary.tonnage, summary.category);
    println!("Distance:          {} miles one way", summary.distance_miles);
    println!("Base cost:         {}", format_cost(summary.one_way.base_cost));
    println!("Mileage:           {}", format_cost(summary.one_way.mileage_cost));
    if let Some(escort) = summary.one_way.escort_cost {
        println!("Escort:            {}", format_cost(escort));
    }
    println!("One way:           {}", format_cost(summary.one_way.total));
    if summary.include_return {
        println!("Return trip:       {}", format_cost(summary.total_return));
    }
    print_list("Notes", &summary.notes);
    Ok(())
}

pub fn output_size(output_format: OutputFormat, rec: &CraneSizeRecommendation) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(rec);
    }

    println!("\nCrane Size Recommendation");
    println!("=========================");
    println!("Required capacity: {:.1}t", rec.required_capacity);
    println!(
        "Factors:           radius x{:.2}, height x{:.2}",
        rec.radius_factor, rec.height_factor
    );
    println!(
        "Recommended:       {}-{}t",
        rec.recommended_tonnage.min, rec.recommended_tonnage.max
    );
    if rec.crane_types.is_empty() {
        println!("Crane types:       (none in catalog)");
    } else {
        println!("Crane types:       {}", rec.crane_types.join(", "));
    }
    print_list("Warnings", &rec.warnings);
    print_list("Notes", &rec.notes);
    Ok(())
}

pub fn output_comparison(output_format: OutputFormat, cmp: &HireComparison) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(cmp);
    }

    println!("\nCPA Hire vs Contract Lift");
    println!("=========================");
    println!(
        "{} {}, {} days, {}",
        cmp.crane_name, cmp.tonnage_label, cmp.duration_days, cmp.region_name
    );
    println!();
    println!("{:<22} {:>20} {:>20}", "", "CPA Hire", "Contract Lift");
    println!(
        "{:<22} {:>20} {:>20}",
        "Daily rate",
        format_cost(cmp.cpa_daily),
        format_cost(cmp.contract_daily)
    );
    println!(
        "{:<22} {:>20} {:>20}",
        "Hire total",
        format_cost(cmp.cpa_total_hire),
        format_cost(cmp.contract_total_hire)
    );
    println!(
        "{:<22} {:>20}",
        "CPA with extras",
        format_cost(cmp.cpa_with_extras)
    );
    println!("\nContract premium:  {}", format_cost(cmp.difference));
    println!("Recommendation:    {}", cmp.recommendation.display_name());
    print_list("Reasons", &cmp.reasons);
    Ok(())
}

pub fn output_project(output_format: OutputFormat, result: &ProjectCostResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }

    println!("\nTotal Project Cost");
    println!("==================");
    println!(
        "{} {}, {} days, {} ({})",
        result.crane_name,
        result.tonnage_label,
        result.duration_days,
        result.region_name,
        result.hire_type.display_name()
    );
    println!();
    println!("Crane hire:        {}", format_cost(result.hire_cost));
    println!("Transport:         {}", format_cost(result.transport_cost));
    if !result.crew_cost.is_zero() {
        println!("Crew:              {}", format_cost(result.crew_cost));
    }
    if !result.permits_cost.is_zero() {
        println!("Permits:           {}", format_cost(result.permits_cost));
    }
    if !result.insurance_cost.is_zero() {
        println!("Insurance:         {}", format_cost(result.insurance_cost));
    }
    println!("Subtotal:          {}", format_cost(result.subtotal));
    println!("Contingency:       {}", format_cost(result.contingency));
    println!("Grand total:       {}", format_cost(result.grand_total));
    println!("Per day:           {}", format_cost(result.per_day));

    if !result.breakdown.is_empty() {
        println!("\nExtras:");
        for line in &result.breakdown {
            println!("  {:<32} {}", line.label, format_cost(line.cost));
        }
    }
    Ok(())
}

pub fn output_batch(output_format: OutputFormat, outputs: &[CalculationOutput]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(outputs);
    }

    for output in outputs {
        match output {
            CalculationOutput::HireCost(result) => output_hire(output_format, "Hire Cost", result)?,
            CalculationOutput::Transport(summary) => output_transport(output_format, summary)?,
            CalculationOutput::CraneSize(rec) => output_size(output_format, rec)?,
            CalculationOutput::HireComparison(cmp) => output_comparison(output_format, cmp)?,
            CalculationOutput::ProjectCost(result) => output_project(output_format, result)?,
        }
    }
    Ok(())
}
