//! Submit command

use clap::Args;
use colored::Colorize;

use checkin_core::SubmitStart;

use super::open_controller;
use crate::config::Config;
use crate::sink::HttpRecordSink;

/// Field overrides applied on top of the stored draft before submitting.
#[derive(Args)]
pub struct SubmitArgs {
    #[arg(long)]
    plate: Option<String>,
    #[arg(long)]
    vehicle: Option<String>,
    #[arg(long)]
    arrival: Option<String>,
    #[arg(long)]
    driver: Option<String>,
    #[arg(long)]
    passport_series: Option<String>,
    #[arg(long)]
    passport_number: Option<String>,
    #[arg(long)]
    issued_by: Option<String>,
    #[arg(long)]
    issue_date: Option<String>,
}

impl SubmitArgs {
    fn overrides(&self) -> impl Iterator<Item = (&'static str, &String)> {
        [
            ("plateNumber", self.plate.as_ref()),
            ("vehicle", self.vehicle.as_ref()),
            ("arrivalDate", self.arrival.as_ref()),
            ("driverName", self.driver.as_ref()),
            ("passportSeries", self.passport_series.as_ref()),
            ("passportNumber", self.passport_number.as_ref()),
            ("issuedBy", self.issued_by.as_ref()),
            ("issueDate", self.issue_date.as_ref()),
        ]
        .into_iter()
        .filter_map(|(identity, value)| value.map(|v| (identity, v)))
    }
}

pub async fn handle(config: &Config, api_url: &str, args: SubmitArgs) -> Result<(), String> {
    let mut controller = open_controller(config)?;
    for (identity, value) in args.overrides() {
        controller.input(identity, value);
    }

    let sink = HttpRecordSink::new(api_url);
    match controller.submit(&sink).await {
        SubmitStart::Invalid(errors) => {
            for error in &errors {
                eprintln!("{}", error.red());
            }
            Err(format!("{} validation error(s), nothing was sent", errors.len()))
        }
        SubmitStart::Ready { .. } => {
            if let Some(notice) = controller.notice() {
                println!("{}", notice.green());
                Ok(())
            } else {
                for error in controller.errors() {
                    eprintln!("{}", error.red());
                }
                Err("submission was not accepted, draft preserved".to_string())
            }
        }
        SubmitStart::InFlight => Err("a submission is already in flight".to_string()),
    }
}
