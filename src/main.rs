mod capture;
mod cli;
mod console_format;
mod report;
mod types;
mod ui;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(2);
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    // Load and validate the run capture
    let run = match capture::load_capture(&args.capture) {
        Ok(run) => run,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(2);
        }
    };

    // Build the view-models: one index, one report per device
    let index = report::build_index(&run);
    let reports: Vec<report::DeviceReport> = run
        .results
        .iter()
        .map(|(serial, result)| report::build_device_report(serial, result, &args.output))
        .collect();

    // Hand the renderer its template context
    if let Err(e) = report::write_report_context(&index, &reports, &args.output) {
        ui::print_error(&format!("Failed to write report context: {}", e));
        std::process::exit(2);
    }

    if args.json {
        match serde_json::to_string_pretty(&index) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ui::print_error(&format!("Failed to serialize index: {}", e));
                std::process::exit(2);
            }
        }
    }

    ui::status(&format!("{}: {}", index.title, index.subtitle_tests_and_devices));
    ui::status(&index.subtitle_duration);

    if let Err(e) = console_format::print_summary_table(&reports, !args.no_color) {
        ui::print_error(&format!("Failed to print summary: {}", e));
    }

    let crashed_devices = index.devices.iter().filter(|device| device.execution_failed).count();

    if index.failed > 0 || crashed_devices > 0 {
        if index.failed > 0 {
            ui::print_error(&format!(
                "{} of {} {} failed",
                index.failed,
                index.tests_run,
                report::pluralize(index.tests_run, "test", "tests")
            ));
        }
        if crashed_devices > 0 {
            ui::print_error(&format!(
                "{} {} crashed before running any test",
                crashed_devices,
                report::pluralize(crashed_devices, "device", "devices")
            ));
        }
        std::process::exit(1);
    }

    ui::success(&format!(
        "All {} {} passed, context written to {}",
        index.tests_run,
        report::pluralize(index.tests_run, "test", "tests"),
        args.output.display()
    ));
}
