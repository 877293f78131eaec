use log4rs;
use std::error::Error;
use subnet_vlsm_calc::output::{print_resolved, print_vlsm, write_vlsm_csv};
use subnet_vlsm_calc::{config, plan, run_resolve_queries, run_vlsm_plan};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let plan_file = std::env::args().nth(1);
    let plan = plan::read_plan(plan_file.as_deref()).expect("Error reading plan file");

    let results = run_resolve_queries(&plan)?;
    if !results.is_empty() {
        print_resolved(&results);
    }

    if let Some((base, allocations)) = run_vlsm_plan(&plan)? {
        print_vlsm(&base, &allocations)?;

        if config::csv_export_enabled() {
            let csv_file = write_vlsm_csv(&allocations, None)?;
            log::info!("VLSM allocations exported to {csv_file}");
        }
    }

    Ok(())
}
