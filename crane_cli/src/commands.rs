//! Command handlers

use crate::cli::{Cli, Commands, ConfigAction, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{
    output_batch, output_comparison, output_crane, output_cranes, output_hire, output_project,
    output_regions, output_size, output_transport,
};
use crane_core::calculations::{
    crane_size, hire_comparison, hire_cost, project_cost, transport_cost, CraneSizeInput,
    HireComparisonInput, HireCostInput, ProjectCostInput, TransportInput,
};
use crane_core::data::{crane_types, get_crane_by_id, get_region_by_id, regions};
use crane_core::{parse_items, CalcError};
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load_or_default();
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Cranes { id } => cmd_cranes(id.as_deref(), output_format),

        Commands::Regions => output_regions(output_format, regions()),

        Commands::Hire {
            crane,
            tonnage,
            days,
            region,
            contract,
        } => {
            let input = HireCostInput {
                crane_type_id: crane,
                tonnage_label: tonnage,
                duration_days: days,
                region_id: region.unwrap_or_else(|| config.default_region.clone()),
                is_contract_lift: contract,
            };
            cmd_hire(&input, output_format)
        }

        Commands::Transport {
            tonnage,
            miles,
            return_trip,
        } => {
            let input = TransportInput {
                tonnage,
                distance_miles: miles,
                include_return: return_trip.unwrap_or(config.include_return_trip),
            };
            let summary = transport_cost::calculate(&input)?;
            output_transport(output_format, &summary)
        }

        Commands::Size {
            load,
            unit,
            radius,
            height,
            ground,
            access,
        } => {
            let input = CraneSizeInput {
                load_weight: load,
                weight_unit: unit.into(),
                radius_m: radius,
                height_m: height,
                ground_condition: ground.into(),
                site_access: access.into(),
            };
            let rec = crane_size::calculate(&input)?;
            output_size(output_format, &rec)
        }

        Commands::Compare {
            crane,
            tonnage,
            days,
            region,
            appointed_person,
            insurance,
            complexity,
        } => {
            let input = HireComparisonInput {
                crane_type_id: crane,
                tonnage_label: tonnage,
                duration_days: days,
                region_id: region.unwrap_or_else(|| config.default_region.clone()),
                has_appointed_person: appointed_person,
                has_insurance: insurance,
                lift_complexity: complexity.map(Into::into),
            };
            let cmp = hire_comparison::calculate(&input)?;
            output_comparison(output_format, &cmp)
        }

        Commands::Project {
            crane,
            tonnage,
            days,
            region,
            hire_type,
            miles,
            slingers,
            no_appointed_person,
            road_closure,
            airspace,
            contingency,
        } => {
            let input = ProjectCostInput {
                crane_type_id: crane,
                tonnage_label: tonnage,
                duration_days: days,
                region_id: region.unwrap_or_else(|| config.default_region.clone()),
                hire_type: hire_type.into(),
                transport_distance_miles: miles,
                num_slingers: slingers,
                needs_appointed_person: !no_appointed_person,
                needs_road_closure: road_closure,
                needs_airspace: airspace,
                contingency_percent: contingency.unwrap_or(config.contingency_percent),
            };
            let result = project_cost::calculate(&input)?;
            output_project(output_format, &result)
        }

        Commands::Run { file } => cmd_run(&file, output_format),

        Commands::Config { action } => cmd_config(action, &config),
    }
}

fn cmd_cranes(id: Option<&str>, output_format: OutputFormat) -> Result<()> {
    match id {
        Some(id) => {
            let crane = get_crane_by_id(id).ok_or_else(|| CalcError::crane_not_found(id))?;
            output_crane(output_format, crane)
        }
        None => output_cranes(output_format, crane_types()),
    }
}

fn cmd_hire(input: &HireCostInput, output_format: OutputFormat) -> Result<()> {
    let region = get_region_by_id(&input.region_id);
    if region.is_none() {
        tracing::warn!(region = %input.region_id, "unknown region, pricing at baseline");
    }

    let result = hire_cost::calculate(input)?;

    let crane_name = get_crane_by_id(&input.crane_type_id)
        .map(|c| c.name.as_str())
        .unwrap_or(input.crane_type_id.as_str());
    let title = format!(
        "{} {} - {} days, {}",
        crane_name,
        input.tonnage_label,
        input.duration_days,
        region.map(|r| r.name.as_str()).unwrap_or("baseline pricing")
    );
    output_hire(output_format, &title, &result)
}

fn cmd_run(file: &Path, output_format: OutputFormat) -> Result<()> {
    if !file.exists() {
        return Err(Error::FileNotFound(file.display().to_string()));
    }

    let content = std::fs::read_to_string(file)?;
    let items = parse_items(&content)?;
    tracing::info!(count = items.len(), file = %file.display(), "running calculations");

    let outputs = items
        .iter()
        .map(|item| item.run())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    output_batch(output_format, &outputs)
}

fn cmd_config(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", config);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let path = init_config(&Config::config_path()?, force)?;
            println!("Wrote default configuration to {}", path.display());
            Ok(())
        }
    }
}

fn init_config(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)?;
    Ok(path.to_path_buf())
}
